//! Listing operations - paginated read of raw records

use serde::{Deserialize, Serialize};

use crate::core::primitives::{DEFAULT_PAGE, LISTING_URL};
use crate::core::{CoreError, CoreResult, OpContext};
use crate::motor::MotorRecord;

/// Query parameters for a listing request
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// One page of results with links to its neighbours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub page: i64,
    pub page_size: i64,
    pub next: Option<String>,
    pub prev: Option<String>,
    #[serde(rename = "Results")]
    pub results: Vec<T>,
}

fn page_link(page: i64, page_size: i64) -> String {
    format!("{LISTING_URL}?page={page}&page_size={page_size}")
}

/// Slice `items` into the requested page.
///
/// A page outside `1..=page_count` is `PageNotFound`, so an empty list has no
/// valid page at all. Any `page_size` of at least 1 is accepted.
pub fn paginate<T: Clone>(items: &[T], page: i64, page_size: i64) -> CoreResult<Page<T>> {
    if page_size < 1 {
        return Err(CoreError::InvalidPageSize(page_size));
    }

    let len = items.len() as i64;
    let page_count = (len as u64).div_ceil(page_size as u64) as i64;
    if page < 1 || page > page_count {
        return Err(CoreError::PageNotFound { page, page_count });
    }

    let start = (page - 1) * page_size;
    let end = start.saturating_add(page_size).min(len);

    Ok(Page {
        page,
        page_size,
        next: (page < page_count).then(|| page_link(page + 1, page_size)),
        prev: (page > 1).then(|| page_link(page - 1, page_size)),
        results: items[start as usize..end as usize].to_vec(),
    })
}

/// Fetch all records and return one page of them
pub async fn list_motors(ctx: &OpContext, params: ListParams) -> CoreResult<Page<MotorRecord>> {
    let records = ctx.records.fetch_all().await?;
    paginate(
        &records,
        params.page.unwrap_or(DEFAULT_PAGE),
        params.page_size.unwrap_or(ctx.default_page_size),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motor::MemoryMotorStore;
    use std::sync::Arc;

    fn numbers(n: i64) -> Vec<i64> {
        (1..=n).collect()
    }

    #[test]
    fn test_first_page() {
        let page = paginate(&numbers(25), 1, 10).unwrap();
        assert_eq!(page.results.len(), 10);
        assert_eq!(page.next.as_deref(), Some("motorsport/?page=2&page_size=10"));
        assert_eq!(page.prev, None);
    }

    #[test]
    fn test_middle_page() {
        let page = paginate(&numbers(25), 2, 10).unwrap();
        assert_eq!(page.results, (11..=20).collect::<Vec<_>>());
        assert_eq!(page.next.as_deref(), Some("motorsport/?page=3&page_size=10"));
        assert_eq!(page.prev.as_deref(), Some("motorsport/?page=1&page_size=10"));
    }

    #[test]
    fn test_last_partial_page() {
        let page = paginate(&numbers(25), 3, 10).unwrap();
        assert_eq!(page.results, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.next, None);
        assert_eq!(page.prev.as_deref(), Some("motorsport/?page=2&page_size=10"));
    }

    #[test]
    fn test_out_of_range_pages() {
        for page in [0, 4, -1] {
            match paginate(&numbers(25), page, 10) {
                Err(CoreError::PageNotFound { page: p, page_count }) => {
                    assert_eq!(p, page);
                    assert_eq!(page_count, 3);
                }
                other => panic!("expected PageNotFound for {page}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_empty_list_has_no_pages() {
        assert!(matches!(
            paginate::<i64>(&[], 1, 10),
            Err(CoreError::PageNotFound { page: 1, page_count: 0 })
        ));
    }

    #[test]
    fn test_invalid_page_size() {
        assert!(matches!(paginate(&numbers(5), 1, 0), Err(CoreError::InvalidPageSize(0))));
        assert!(matches!(paginate(&numbers(5), 1, -3), Err(CoreError::InvalidPageSize(-3))));
    }

    #[test]
    fn test_page_size_larger_than_list() {
        let page = paginate(&numbers(25), 1, 150).unwrap();
        assert_eq!(page.page_size, 150);
        assert_eq!(page.results, numbers(25));
        assert_eq!(page.next, None);
        assert_eq!(page.prev, None);

        let page = paginate(&numbers(25), 1, i64::MAX).unwrap();
        assert_eq!(page.results.len(), 25);
        assert!(matches!(
            paginate(&numbers(25), 2, 150),
            Err(CoreError::PageNotFound { page: 2, page_count: 1 })
        ));
    }

    #[test]
    fn test_page_serializes_results_key() {
        let page = paginate(&numbers(3), 1, 10).unwrap();
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["Results"], serde_json::json!([1, 2, 3]));
        assert!(json["next"].is_null());
        assert!(json["prev"].is_null());
    }

    #[tokio::test]
    async fn test_list_motors_uses_context_default_page_size() {
        let records: Vec<MotorRecord> = (1..=7)
            .map(|id| MotorRecord { id, cc: 100, harga: 1, speed: 1, berat: 1, kapasitas_tangkibensin: 1 })
            .collect();
        let ctx = OpContext::new(Arc::new(MemoryMotorStore::new(records))).with_default_page_size(3);

        let page = list_motors(&ctx, ListParams::default()).await.unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 3);
        assert_eq!(page.results.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(page.next.as_deref(), Some("motorsport/?page=2&page_size=3"));
    }
}
