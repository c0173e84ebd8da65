use serde::Serialize;

/// One fixed-size slice of a filtered list plus the page metadata.
///
/// An empty input has `total_pages == 0`; callers render a "no results"
/// state instead of pagination controls in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    /// Whether `number` is an existing page.
    pub fn is_valid(&self) -> bool {
        (1..=self.total_pages).contains(&self.number)
    }

    pub fn has_prev(&self) -> bool {
        self.is_valid() && self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.is_valid() && self.number < self.total_pages
    }

    pub fn prev(&self) -> Option<usize> {
        self.has_prev().then(|| self.number - 1)
    }

    pub fn next(&self) -> Option<usize> {
        self.has_next().then(|| self.number + 1)
    }

    /// Navigation metadata without the borrowed items.
    pub fn controls(&self) -> PageControls {
        PageControls {
            current: self.number,
            total_pages: self.total_pages,
            prev: self.prev(),
            next: self.next(),
            pages: (1..=self.total_pages).collect(),
        }
    }
}

/// Prev/Next targets and explicit page links, only ever pointing at valid
/// pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageControls {
    pub current: usize,
    pub total_pages: usize,
    pub prev: Option<usize>,
    pub next: Option<usize>,
    pub pages: Vec<usize>,
}

/// Number of pages needed for `len` items.
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Slice `items` into page `page_number` (1-based). Out-of-range pages are
/// empty rather than an error.
pub fn paginate<T>(items: &[T], page_size: usize, page_number: usize) -> Page<'_, T> {
    let size = page_size.max(1);
    let total_pages = page_count(items.len(), size);
    let slice = if (1..=total_pages).contains(&page_number) {
        let start = (page_number - 1) * size;
        let end = (start + size).min(items.len());
        &items[start..end]
    } else {
        &items[..0]
    };
    Page {
        items: slice,
        number: page_number,
        total_pages,
        total_items: items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_items_fit_one_page() {
        let items: Vec<u32> = (0..8).collect();
        let page = paginate(&items, 12, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items.len(), 8);
        assert!(!page.has_prev());
        assert!(!page.has_next());
        assert_eq!(page.controls().pages, vec![1]);
    }

    #[test]
    fn fourteen_items_make_two_pages() {
        let items: Vec<u32> = (0..14).collect();
        let first = paginate(&items, 12, 1);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.items.len(), 12);
        assert_eq!(first.next(), Some(2));
        assert_eq!(first.prev(), None);

        let second = paginate(&items, 12, 2);
        assert_eq!(second.items, &[12, 13]);
        assert_eq!(second.prev(), Some(1));
        assert_eq!(second.next(), None);
    }

    #[test]
    fn empty_input_has_zero_pages() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 12, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
        assert!(!page.is_valid());
        assert!(page.controls().pages.is_empty());
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<u32> = (0..5).collect();
        assert!(paginate(&items, 2, 0).items.is_empty());
        assert!(paginate(&items, 2, 4).items.is_empty());
        assert!(!paginate(&items, 2, 4).has_prev());
        assert_eq!(paginate(&items, 2, 3).items, &[4]);
    }

    #[test]
    fn zero_page_size_behaves_as_one() {
        let items: Vec<u32> = (0..3).collect();
        let page = paginate(&items, 0, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, &[1]);
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_page() {
        let items: Vec<u32> = (0..24).collect();
        assert_eq!(paginate(&items, 12, 1).total_pages, 2);
        assert_eq!(page_count(24, 12), 2);
        assert_eq!(page_count(25, 12), 3);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn pages_reconstruct_input(len in 0usize..200, size in 1usize..30) {
                let items: Vec<usize> = (0..len).collect();
                let total = paginate(&items, size, 1).total_pages;
                prop_assert_eq!(total, len.div_ceil(size));

                let mut rebuilt = Vec::with_capacity(len);
                for n in 1..=total {
                    let page = paginate(&items, size, n);
                    prop_assert!(!page.items.is_empty());
                    prop_assert!(page.items.len() <= size);
                    rebuilt.extend_from_slice(page.items);
                }
                prop_assert_eq!(rebuilt, items);
            }
        }
    }
}
