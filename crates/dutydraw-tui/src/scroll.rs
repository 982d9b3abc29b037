//! Scroll state for the results board.

/// Viewport over a growing list that follows the newest entry until the user
/// scrolls away from it.
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// First visible row while not following.
    pub offset: usize,
    /// Whether the viewport sticks to the bottom.
    pub follow: bool,
}

impl ScrollState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0,
            follow: true,
        }
    }

    /// First visible row for a list of `total` rows in a viewport of `height`.
    #[must_use]
    pub fn first_visible(&self, total: usize, height: usize) -> usize {
        let max_start = total.saturating_sub(height);
        if self.follow {
            max_start
        } else {
            self.offset.min(max_start)
        }
    }

    /// Scroll up by one row.
    pub fn scroll_up(&mut self, total: usize, height: usize) {
        self.page_up(1, total, height);
    }

    /// Scroll down by one row.
    pub fn scroll_down(&mut self, total: usize, height: usize) {
        self.page_down(1, total, height);
    }

    pub fn page_up(&mut self, page_size: usize, total: usize, height: usize) {
        let start = self.first_visible(total, height);
        self.follow = false;
        self.offset = start.saturating_sub(page_size);
    }

    pub fn page_down(&mut self, page_size: usize, total: usize, height: usize) {
        let max_start = total.saturating_sub(height);
        self.offset = (self.first_visible(total, height) + page_size).min(max_start);
        if self.offset >= max_start {
            self.follow = true;
        }
    }

    /// Jump to top.
    pub fn home(&mut self) {
        self.follow = false;
        self.offset = 0;
    }

    /// Jump to bottom and follow new rows again.
    pub fn end(&mut self) {
        self.follow = true;
    }

    /// Back to the initial state, used when the board is cleared.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}
