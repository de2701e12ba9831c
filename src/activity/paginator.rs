use crate::entity::{ActivityError, PageWindow};

/// Compute the index window for one page of `total_count` items
pub fn paginate(
    total_count: i64,
    page_size: i64,
    page_number: i64,
) -> Result<PageWindow, ActivityError> {
    if page_size <= 0 {
        return Err(ActivityError::InvalidArgument(format!(
            "page size must be positive, got {}",
            page_size
        )));
    }
    if page_number < 1 {
        return Err(ActivityError::InvalidArgument(format!(
            "page number must be at least 1, got {}",
            page_number
        )));
    }
    if total_count < 0 {
        return Err(ActivityError::InvalidArgument(format!(
            "total count must not be negative, got {}",
            total_count
        )));
    }

    let total_count = total_count as usize;
    let page_size = page_size as usize;
    let page_number = page_number as usize;

    if total_count == 0 {
        return Ok(PageWindow {
            page_number,
            page_size,
            total_count,
            start_index: 0,
            end_index: 0,
            total_pages: 0,
        });
    }

    let total_pages = total_count.div_ceil(page_size);
    let start_index = (page_number - 1).saturating_mul(page_size);
    let end_index = start_index.saturating_add(page_size);

    Ok(PageWindow {
        page_number,
        page_size,
        total_count,
        start_index,
        end_index,
        total_pages,
    })
}

/// Link target for a pagination control
pub fn page_query(route: &str, page: usize) -> String {
    format!("{}?page={}", route, page)
}

/// Read the `page` parameter from a query string, defaulting to the first page
pub fn page_from_query(query: Option<&str>) -> i64 {
    query
        .map(|q| q.trim_start_matches('?'))
        .into_iter()
        .flat_map(|q| q.split('&'))
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "page")
        .and_then(|(_, value)| value.parse::<i64>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}
