//! Grid cursor and pagination state.
//!
//! Tracks the selected cell and current page over the loaded record count.
//! Pure state; rendering lives in the app crate.

/// A cursor movement on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
}

/// Cursor/selection state for a paginated application grid.
#[derive(Debug, Clone)]
pub struct GridState {
    cols: usize,
    per_page: usize,
    count: usize,
    /// Current page index (0-based).
    page: usize,
    /// Selected cell index within the current page (0-based).
    selected: usize,
}

impl GridState {
    /// Create a grid with the given dimensions over `count` entries.
    pub fn new(cols: usize, rows: usize, count: usize) -> Self {
        Self {
            cols: cols.max(1),
            per_page: cols.max(1) * rows.max(1),
            count,
            page: 0,
            selected: 0,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Number of pages needed to show all entries (at least 1).
    pub fn page_count(&self) -> usize {
        if self.count == 0 {
            return 1;
        }
        self.count.div_ceil(self.per_page)
    }

    /// Index range of the entries visible on the current page.
    pub fn page_range(&self) -> std::ops::Range<usize> {
        let start = (self.page * self.per_page).min(self.count);
        let end = (start + self.per_page).min(self.count);
        start..end
    }

    /// Number of entries on the current page.
    pub fn page_len(&self) -> usize {
        self.page_range().len()
    }

    /// The absolute index of the selected entry, if any.
    pub fn selected_index(&self) -> Option<usize> {
        let range = self.page_range();
        let idx = range.start + self.selected;
        (idx < range.end).then_some(idx)
    }

    /// Move the cursor within the current page.
    ///
    /// Left/Right wrap around the page; Up/Down move by rows without
    /// wrapping.
    pub fn handle_move(&mut self, mv: Move) {
        let page_len = self.page_len();
        if page_len == 0 {
            return;
        }

        match mv {
            Move::Right => {
                self.selected = (self.selected + 1) % page_len;
            },
            Move::Left => {
                if self.selected == 0 {
                    self.selected = page_len - 1;
                } else {
                    self.selected -= 1;
                }
            },
            Move::Down => {
                let next = self.selected + self.cols;
                if next < page_len {
                    self.selected = next;
                }
            },
            Move::Up => {
                if self.selected >= self.cols {
                    self.selected -= self.cols;
                }
            },
        }
    }

    /// Switch to the next page (wraps around), clamping the selection.
    pub fn next_page(&mut self) {
        self.page = (self.page + 1) % self.page_count();
        self.clamp_selection();
    }

    /// Switch to the previous page (wraps around), clamping the selection.
    pub fn prev_page(&mut self) {
        if self.page == 0 {
            self.page = self.page_count() - 1;
        } else {
            self.page -= 1;
        }
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let page_len = self.page_len();
        if self.selected >= page_len && page_len > 0 {
            self.selected = page_len - 1;
        }
    }
}
