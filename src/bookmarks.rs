/// Insertion-ordered set of bookmarked page numbers.
///
/// The book displays two-page spreads, so bookmarking a page also bookmarks
/// its facing page when one exists. Bookmarks live only as long as the
/// session; a new document starts with an empty set.
#[derive(Debug, Clone, Default)]
pub struct BookmarkSet {
    pages: Vec<u16>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bookmark `page`, pairing in `page + 1` when that page exists.
    /// Re-adding an already bookmarked page is silently ignored.
    pub fn add(&mut self, page: u16, total_pages: u16) {
        self.insert(page);
        if page + 1 <= total_pages {
            self.insert(page + 1);
        }
    }

    fn insert(&mut self, page: u16) {
        if !self.pages.contains(&page) {
            self.pages.push(page);
        }
    }

    /// Remove the bookmark at ordinal position `index` in display order.
    /// Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) {
        if index < self.pages.len() {
            self.pages.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.pages.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.pages.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(set: &BookmarkSet) -> Vec<u16> {
        set.iter().collect()
    }

    #[test]
    fn add_pairs_in_the_facing_page() {
        let mut set = BookmarkSet::new();
        set.add(3, 10);
        assert_eq!(pages(&set), vec![3, 4]);
    }

    #[test]
    fn add_skips_pairing_past_the_last_page() {
        let mut set = BookmarkSet::new();
        set.add(10, 10);
        assert_eq!(pages(&set), vec![10]);
    }

    #[test]
    fn duplicates_collapse_and_order_is_preserved() {
        let mut set = BookmarkSet::new();
        set.add(5, 10);
        set.add(2, 10);
        set.add(5, 10);
        assert_eq!(pages(&set), vec![5, 6, 2, 3]);
    }

    #[test]
    fn last_spread_scenario() {
        let mut set = BookmarkSet::new();
        set.add(9, 10);
        assert_eq!(pages(&set), vec![9, 10]);
        set.add(10, 10);
        assert_eq!(pages(&set), vec![9, 10]);
        set.remove(0);
        assert_eq!(pages(&set), vec![10]);
    }

    #[test]
    fn remove_out_of_range_is_ignored() {
        let mut set = BookmarkSet::new();
        set.add(1, 1);
        set.remove(5);
        assert_eq!(pages(&set), vec![1]);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set = BookmarkSet::new();
        set.add(4, 10);
        set.clear();
        assert!(set.is_empty());
        assert!(pages(&set).is_empty());
    }
}
