//! Fixed-size pages over a listing.

pub const DEFAULT_PAGE_SIZE: usize = 8;

/// One page of a listing. Page numbers are 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub per_page: usize,
}

impl<T> Page<T> {
    /// Slices `items` into page `number`, clamped into `[1, max(total_pages, 1)]`.
    pub fn paginate(items: Vec<T>, number: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total_items = items.len();
        let total_pages = total_items.div_ceil(per_page);
        let number = number.clamp(1, total_pages.max(1));
        let start = (number - 1) * per_page;

        Self {
            items: items.into_iter().skip(start).take(per_page).collect(),
            number,
            total_pages,
            total_items,
            per_page,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_and_last_page() {
        let items: Vec<u32> = (1..=20).collect();

        let page = Page::paginate(items.clone(), 2, 8);
        assert_eq!(page.items, (9..=16).collect::<Vec<_>>());
        assert_eq!(page.total_pages, 3);
        assert!(page.has_previous());
        assert!(page.has_next());

        let last = Page::paginate(items, 3, 8);
        assert_eq!(last.items, vec![17, 18, 19, 20]);
        assert!(!last.has_next());
    }

    #[test]
    fn test_out_of_range_numbers_are_clamped() {
        let items: Vec<u32> = (1..=10).collect();
        assert_eq!(Page::paginate(items.clone(), 0, 8).number, 1);
        assert_eq!(Page::paginate(items, 99, 8).number, 2);
    }

    #[test]
    fn test_empty_listing_has_one_empty_page() {
        let page = Page::<u32>::paginate(Vec::new(), 5, 8);
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let page = Page::paginate(vec!['a', 'b'], 2, 0);
        assert_eq!(page.per_page, 1);
        assert_eq!(page.items, vec!['b']);
    }
}
