pub const MAX_PAGE_SIZE: i64 = 100;

/// Page, page size and row offset resolved from raw query values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub limit: i64,
    pub offset: i64,
}

impl PageWindow {
    /// `page` is floored at 1 and `limit` is kept within `1..=MAX_PAGE_SIZE`.
    /// The offset saturates instead of overflowing for very large pages.
    pub fn new(page: Option<i64>, limit: Option<i64>, default_limit: i64) -> Self {
        let page = page.unwrap_or(1).max(1);
        let limit = limit.unwrap_or(default_limit).clamp(1, MAX_PAGE_SIZE);
        let offset = (page - 1).saturating_mul(limit);
        Self {
            page,
            limit,
            offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_absent() {
        let window = PageWindow::new(None, None, 10);
        assert_eq!(
            window,
            PageWindow {
                page: 1,
                limit: 10,
                offset: 0
            }
        );
    }

    #[test]
    fn offset_skips_previous_pages() {
        let window = PageWindow::new(Some(3), Some(5), 10);
        assert_eq!(window.offset, 10);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let window = PageWindow::new(Some(-4), Some(0), 10);
        assert_eq!(window.page, 1);
        assert_eq!(window.limit, 1);

        let window = PageWindow::new(Some(2), Some(5_000), 10);
        assert_eq!(window.limit, MAX_PAGE_SIZE);
        assert_eq!(window.offset, MAX_PAGE_SIZE);
    }

    #[test]
    fn huge_page_saturates_offset() {
        let window = PageWindow::new(Some(i64::MAX), Some(100), 10);
        assert_eq!(window.page, i64::MAX);
        assert_eq!(window.offset, i64::MAX);
    }
}
