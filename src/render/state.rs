use crate::config::PageGeometry;
use crate::model::{DrawOp, Page, RenderedDocument, SkippedCell};

use super::cursor::PageCursor;

/// Mutable surface of one build: the cursor plus the pages drawn so far.
/// Every renderer takes it by `&mut`; nothing about a render lives elsewhere.
pub struct PageState {
    cursor: PageCursor,
    geometry: PageGeometry,
    pages: Vec<Page>,
    skipped: Vec<SkippedCell>,
}

impl PageState {
    pub fn new(geometry: &PageGeometry) -> Self {
        Self {
            cursor: PageCursor::for_page(geometry),
            geometry: geometry.clone(),
            pages: vec![Page::new(geometry.size())],
            skipped: Vec::new(),
        }
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut PageCursor {
        &mut self.cursor
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Append `op` to the cursor's current page, opening pages as needed.
    pub fn draw(&mut self, op: DrawOp) {
        let index = self.cursor.page_index();
        self.open_pages_through(index);
        self.pages[index].ops.push(op);
    }

    pub fn record_skip(&mut self, skipped: SkippedCell) {
        self.skipped.push(skipped);
    }

    fn open_pages_through(&mut self, index: usize) {
        while self.pages.len() <= index {
            self.pages.push(Page::new(self.geometry.size()));
        }
    }

    /// Close the render. A page opened by a break stays in the output even if
    /// nothing was drawn on it.
    pub fn finish(mut self, title: String) -> RenderedDocument {
        self.open_pages_through(self.cursor.page_index());
        RenderedDocument::new(title, self.pages, self.skipped)
    }
}
