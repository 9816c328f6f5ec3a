use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 25, 50, 100];
const WINDOW: usize = 5;

/// Position of the visible page inside a server-side result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    /// 0-based
    pub index: usize,
    pub size: usize,
    pub total_elements: usize,
    pub total_pages: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::with_size(DEFAULT_PAGE_SIZE)
    }
}

impl PageWindow {
    pub fn with_size(size: usize) -> Self {
        Self {
            index: 0,
            size,
            total_elements: 0,
            total_pages: 0,
        }
    }

    pub fn can_go_to(&self, index: usize) -> bool {
        index < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.total_pages
    }

    /// 1-based `(start, end)` of the rows shown, `(0, 0)` when empty.
    pub fn display_range(&self) -> (usize, usize) {
        if self.total_elements == 0 {
            return (0, 0);
        }
        let start = self.index * self.size + 1;
        let end = ((self.index + 1) * self.size).min(self.total_elements);
        (start.min(end), end)
    }

    /// Last valid index for the current totals.
    pub fn last_index(&self) -> usize {
        self.total_pages.saturating_sub(1)
    }

    /// True when the index points past the last row of a non-empty result.
    pub fn is_past_end(&self) -> bool {
        self.total_elements > 0 && self.index * self.size >= self.total_elements
    }

    pub fn page_numbers(&self) -> Vec<usize> {
        page_numbers(self.total_pages, self.index)
    }
}

/// 1-based page buttons around `index`: all pages when there are at most
/// five, otherwise a five-wide window clamped to the ends.
pub fn page_numbers(total_pages: usize, index: usize) -> Vec<usize> {
    if total_pages <= WINDOW {
        return (1..=total_pages).collect();
    }
    let current = index + 1;
    let half = WINDOW / 2;
    let first = if current <= half + 1 {
        1
    } else if current + half >= total_pages {
        total_pages - WINDOW + 1
    } else {
        current - half
    };
    (first..first + WINDOW).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn few_pages_all_shown() {
        assert_eq!(page_numbers(0, 0), Vec::<usize>::new());
        assert_eq!(page_numbers(3, 1), vec![1, 2, 3]);
        assert_eq!(page_numbers(5, 4), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn window_centred_in_middle() {
        assert_eq!(page_numbers(10, 4), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_numbers(20, 10), vec![9, 10, 11, 12, 13]);
    }

    #[test]
    fn window_clamped_at_ends() {
        assert_eq!(page_numbers(10, 0), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_numbers(10, 2), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_numbers(10, 9), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_numbers(10, 7), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn display_range() {
        let w = PageWindow {
            index: 2,
            size: 10,
            total_elements: 23,
            total_pages: 3,
        };
        assert_eq!(w.display_range(), (21, 23));
        assert_eq!(PageWindow::default().display_range(), (0, 0));
    }

    #[test]
    fn navigation_bounds() {
        let w = PageWindow {
            index: 0,
            size: 10,
            total_elements: 15,
            total_pages: 2,
        };
        assert!(w.can_go_to(1));
        assert!(!w.can_go_to(2));
        assert!(!w.has_prev());
        assert!(w.has_next());
    }
}
