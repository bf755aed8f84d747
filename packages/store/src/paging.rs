//! "Load more" windowing for the reviews list.

use crate::config::DEFAULT_REVIEW_PAGE_SIZE;

/// How many items of a list are revealed, growing one page at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReviewWindow {
    visible: usize,
    page_size: usize,
}

impl Default for ReviewWindow {
    fn default() -> Self {
        Self::new(DEFAULT_REVIEW_PAGE_SIZE)
    }
}

impl ReviewWindow {
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            visible: page_size,
            page_size,
        }
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible.min(items.len())]
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.visible < total
    }

    pub fn load_more(&mut self) {
        self.visible += self.page_size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_page_at_a_time() {
        let items: Vec<u32> = (1..=12).collect();
        let mut window = ReviewWindow::default();
        assert_eq!(window.slice(&items), &[1, 2, 3, 4, 5]);
        assert!(window.has_more(items.len()));

        window.load_more();
        assert_eq!(window.slice(&items).len(), 10);

        window.load_more();
        assert_eq!(window.slice(&items).len(), 12);
        assert!(!window.has_more(items.len()));
    }

    #[test]
    fn short_lists_show_everything() {
        let items = ["a", "b"];
        let window = ReviewWindow::new(5);
        assert_eq!(window.slice(&items), &["a", "b"]);
        assert!(!window.has_more(items.len()));
        assert!(ReviewWindow::new(0).slice(&items).len() == 1);
    }
}
