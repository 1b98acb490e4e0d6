use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{Level, event, instrument};

use handle_errors::Error;

use crate::store::Store;
use crate::types::category::categories_map;
use crate::types::pagination::{extract_pagination, paginate};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CategoriesResponse {
    success: bool,
    categories: HashMap<i32, String>,
    total_categories: usize,
}

#[instrument]
pub async fn get_categories(
    params: HashMap<String, String>,
    store: Store,
) -> Result<impl warp::Reply, warp::Rejection> {
    event!(target: "trivia_api", Level::INFO, "querying categories");
    let pagination = extract_pagination(params)?;

    let categories = match store.get_categories().await {
        Ok(categories) => categories,
        Err(e) => return Err(warp::reject::custom(e)),
    };

    // An empty page is "not found", also when the page is just beyond range.
    let current_categories = paginate(&categories, pagination.page);
    if current_categories.is_empty() {
        return Err(warp::reject::custom(Error::ResourceNotFound));
    }

    Ok(warp::reply::json(&CategoriesResponse {
        success: true,
        categories: categories_map(current_categories),
        total_categories: categories.len(),
    }))
}
