use crate::config::PageGeometry;

/// Vertical write position across pages.
///
/// `y` only grows within a page and resets to the top margin on a break.
/// A block that does not fit below the cursor moves to the next page, unless
/// the cursor is already at the page top; then it is placed anyway and overflows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageCursor {
    page_index: usize,
    y: f32,
    top: f32,
    usable_bottom: f32,
}

impl PageCursor {
    pub fn new(page_height: f32, margin_top: f32, margin_bottom: f32) -> Self {
        Self {
            page_index: 0,
            y: margin_top,
            top: margin_top,
            usable_bottom: page_height - margin_bottom,
        }
    }

    pub fn for_page(page: &PageGeometry) -> Self {
        Self::new(page.height, page.margin_top, page.margin_bottom)
    }

    /// Zero-based index of the page being written.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// One-based page number.
    pub fn page_number(&self) -> usize {
        self.page_index + 1
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn usable_bottom(&self) -> f32 {
        self.usable_bottom
    }

    /// Space left between the cursor and the bottom margin.
    pub fn remaining(&self) -> f32 {
        self.usable_bottom - self.y
    }

    pub fn at_page_top(&self) -> bool {
        (self.y - self.top).abs() < 0.01
    }

    /// Claim `block_height` units and return the y to draw the block at.
    pub fn reserve(&mut self, block_height: f32) -> f32 {
        if !self.at_page_top() && self.y + block_height > self.usable_bottom {
            self.force_break();
        }
        let at = self.y;
        self.y += block_height;
        at
    }

    /// Move down without a fit check.
    pub fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    /// Place the cursor at `y` on the current page without a fit check.
    pub fn move_to(&mut self, y: f32) {
        self.y = y;
    }

    pub fn force_break(&mut self) {
        self.page_index += 1;
        self.y = self.top;
        log::debug!("page break -> page {}", self.page_number());
    }
}
