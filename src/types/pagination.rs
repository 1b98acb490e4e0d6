use std::collections::HashMap;

use handle_errors::Error;

/// How many items a single page carries, for questions and categories alike.
pub const PAGE_SIZE: usize = 10;

/// Pagination struct that is getting extracted from query parameters
#[derive(Debug, PartialEq)]
pub struct Pagination {
    /// 1-based page number requested by the client
    pub page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination { page: 1 }
    }
}

/// Extract query parameters from the `/questions` and `/categories` paths
/// # Example query
/// GET requests to these paths can have a pagination attached so we just
/// return the page we need
/// `/questions?page=2`
pub fn extract_pagination(params: HashMap<String, String>) -> Result<Pagination, Error> {
    if let Some(page) = params.get("page") {
        return Ok(Pagination {
            page: page.parse::<u32>().map_err(Error::ParseError)?,
        });
    }

    Ok(Pagination::default())
}

/// Cuts the requested window out of an already ordered result set.
/// Out-of-range pages come back empty; callers decide what that means.
pub fn paginate<T>(items: &[T], page: u32) -> &[T] {
    if page == 0 {
        return &[];
    }

    let start = (page as usize - 1) * PAGE_SIZE;
    if start >= items.len() {
        return &[];
    }

    let end = std::cmp::min(start + PAGE_SIZE, items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_page_parameter_defaults_to_first_page() {
        let params = HashMap::new();
        assert_eq!(extract_pagination(params).unwrap(), Pagination { page: 1 });
    }

    #[test]
    fn explicit_page_parameter_is_used() {
        let mut params = HashMap::new();
        params.insert("page".to_string(), "3".to_string());
        assert_eq!(extract_pagination(params).unwrap(), Pagination { page: 3 });
    }

    #[test]
    fn non_numeric_page_is_a_parse_error() {
        let mut params = HashMap::new();
        params.insert("page".to_string(), "NOT_A_NUMBER".to_string());
        assert!(matches!(
            extract_pagination(params),
            Err(Error::ParseError(_))
        ));
    }

    #[test]
    fn first_page_holds_at_most_page_size_items() {
        let items: Vec<u32> = (0..25).collect();
        let page = paginate(&items, 1);
        assert_eq!(page.len(), PAGE_SIZE);
        assert_eq!(page, &items[0..10]);
    }

    #[test]
    fn last_page_holds_the_remainder_in_order() {
        let items: Vec<u32> = (0..25).collect();
        let page = paginate(&items, 3);
        assert_eq!(page, &[20, 21, 22, 23, 24]);
    }

    #[test]
    fn pages_beyond_the_end_are_empty() {
        let items: Vec<u32> = (0..25).collect();
        assert!(paginate(&items, 4).is_empty());
        assert!(paginate(&items, 100).is_empty());
    }

    #[test]
    fn page_zero_is_treated_as_out_of_range() {
        let items: Vec<u32> = (0..5).collect();
        assert!(paginate(&items, 0).is_empty());
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let items: Vec<u32> = (0..20).collect();
        assert_eq!(paginate(&items, 2), &items[10..20]);
        assert!(paginate(&items, 3).is_empty());
    }
}
