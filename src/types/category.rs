use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Deserialize, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Serialize, Debug, Clone, Eq, Hash, Deserialize, PartialEq)]
pub struct CategoryId(pub i32);

/// Collapses a category list into the id -> type mapping the API hands out.
pub fn categories_map(categories: &[Category]) -> HashMap<i32, String> {
    categories
        .iter()
        .map(|category| (category.id.0, category.kind.clone()))
        .collect()
}
