//! Page partitioning for book lists
//!
//! Pure functions that split a sequence into fixed-size pages. Pages are
//! 1-indexed; any page outside `1..=total_pages` is an empty slice rather than
//! an error, so a stale page number after filtering renders nothing.

/// Number of books shown per page
pub const BOOKS_PER_PAGE: usize = 4;

/// Number of pages needed for `total_items` items
///
/// `page_size` must be non-zero.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size)
}

/// Split `items` into consecutive chunks of `page_size`
///
/// Every chunk has `page_size` items except possibly the last one.
pub fn chunk<T>(items: &[T], page_size: usize) -> Vec<&[T]> {
    items.chunks(page_size).collect()
}

/// Items on a 1-indexed `page`, or an empty slice when out of range
pub fn page_items<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 {
        return &[];
    }

    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }

    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Labels of the pagination controls, `1..=total_pages`
pub fn page_numbers(total_pages: usize) -> Vec<usize> {
    (1..=total_pages).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_matches_chunk_count() {
        for n in 0..40usize {
            let items: Vec<usize> = (0..n).collect();
            assert_eq!(total_pages(n, BOOKS_PER_PAGE), chunk(&items, BOOKS_PER_PAGE).len());
            assert_eq!(total_pages(n, BOOKS_PER_PAGE), n.div_ceil(4));
        }
    }

    #[test]
    fn test_last_chunk_length() {
        for n in 1..40usize {
            let items: Vec<usize> = (0..n).collect();
            let chunks = chunk(&items, BOOKS_PER_PAGE);
            let count = chunks.len();
            let last = chunks.last().unwrap().len();

            assert_eq!(last, n - 4 * (count - 1));
            assert!((1..=4).contains(&last));
            if n % 4 == 0 {
                assert!(chunks.iter().all(|c| c.len() == 4));
            }
        }
    }

    #[test]
    fn test_chunk_empty() {
        let items: Vec<u8> = vec![];
        assert!(chunk(&items, BOOKS_PER_PAGE).is_empty());
        assert_eq!(total_pages(0, BOOKS_PER_PAGE), 0);
    }

    #[test]
    fn test_page_items_nine_books() {
        let items: Vec<u32> = (1..=9).collect();

        assert_eq!(page_items(&items, 1, 4), &[1, 2, 3, 4]);
        assert_eq!(page_items(&items, 2, 4), &[5, 6, 7, 8]);
        assert_eq!(page_items(&items, 3, 4), &[9]);
    }

    #[test]
    fn test_page_items_out_of_range() {
        let items: Vec<u32> = (1..=9).collect();

        assert!(page_items(&items, 4, 4).is_empty());
        assert!(page_items(&items, 0, 4).is_empty());
        assert!(page_items(&items, usize::MAX, 4).is_empty());
    }

    #[test]
    fn test_page_items_empty_list() {
        let items: Vec<u32> = vec![];
        assert!(page_items(&items, 1, 4).is_empty());
    }

    #[test]
    fn test_page_numbers() {
        assert_eq!(page_numbers(3), vec![1, 2, 3]);
        assert!(page_numbers(0).is_empty());
    }
}
