//! Offset/limit pagination over in-memory slices.

/// A single page cut out of a larger sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

/// Return the items in `[(page-1)*limit, page*limit)`.
///
/// `page` is 1-based. A page past the end yields an empty slice rather than an
/// error; `page == 0` is treated like page 1.
pub fn paginate<T: Clone>(items: &[T], page: u32, limit: u32) -> Page<T> {
    let total = items.len();
    let start = (page.saturating_sub(1) as usize).saturating_mul(limit as usize);
    let end = start.saturating_add(limit as usize).min(total);
    let slice: &[T] = if start < total { &items[start..end] } else { &[] };

    Page {
        items: slice.to_vec(),
        total,
        page,
        limit,
        total_pages: total_pages(total, limit),
    }
}

/// `ceil(total / limit)`, zero when `limit` is zero
pub fn total_pages(total: usize, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit as usize).try_into().unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_second_page() {
        let items = vec![1, 2, 3, 4, 5];

        let first = paginate(&items, 1, 2);
        assert_eq!(first.items, vec![1, 2]);
        assert_eq!(first.total, 5);
        assert_eq!(first.total_pages, 3);

        let third = paginate(&items, 3, 2);
        assert_eq!(third.items, vec![5]);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items = vec!["a", "b"];
        let page = paginate(&items, 10, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 2);
        assert_eq!(page.page, 10);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let items = vec![1];
        let page = paginate(&items, u32::MAX, u32::MAX);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(3, 0), 0);
    }
}
