use std::io::Cursor;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Layout units are millimetres; font sizes stay in points.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

/// Axis-aligned box, origin at the top-left of the page, y growing downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    Bold,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    pub baseline: f32,
    /// Measured advance in layout units.
    pub width: f32,
    /// Points.
    pub font_size: f32,
    pub weight: FontWeight,
    pub color: [u8; 3],
}

/// Position of a cell inside the 2×2 block of one image page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

/// Center-cropped JPEG produced for one grid cell.
#[derive(Clone, Debug)]
pub struct CroppedImage {
    pub data: Arc<[u8]>,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

#[derive(Clone, Debug)]
pub struct PlacedImage {
    pub rect: Rect,
    pub cell: GridCell,
    pub source_index: usize,
    pub image: CroppedImage,
}

#[derive(Clone, Debug)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: [u8; 3],
    },
    StrokeRect {
        rect: Rect,
        color: [u8; 3],
        line_width: f32,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        color: [u8; 3],
        line_width: f32,
    },
    Text(TextRun),
    Image(PlacedImage),
}

#[derive(Clone, Debug)]
pub struct Page {
    pub size: PageSize,
    pub ops: Vec<DrawOp>,
}

impl Page {
    pub fn new(size: PageSize) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(run) => Some(run),
            _ => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = &PlacedImage> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Image(img) => Some(img),
            _ => None,
        })
    }

    pub fn contains_text(&self, text: &str) -> bool {
        self.texts().any(|t| t.text == text)
    }
}

/// A grid cell left blank because its source image could not be cropped.
#[derive(Clone, Debug, PartialEq)]
pub struct SkippedCell {
    pub source_index: usize,
    pub page_index: usize,
    pub cell: GridCell,
    pub reason: String,
}

/// Finished page sequence. Immutable once produced; serialized by [`crate::pdf`].
#[derive(Clone, Debug)]
pub struct RenderedDocument {
    title: String,
    pages: Vec<Page>,
    skipped_cells: Vec<SkippedCell>,
}

impl RenderedDocument {
    pub(crate) fn new(title: String, pages: Vec<Page>, skipped_cells: Vec<SkippedCell>) -> Self {
        Self {
            title,
            pages,
            skipped_cells,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn skipped_cells(&self) -> &[SkippedCell] {
        &self.skipped_cells
    }

    /// Index of the first page carrying `text`, if any.
    pub fn find_text(&self, text: &str) -> Option<usize> {
        self.pages.iter().position(|p| p.contains_text(text))
    }
}

/// Encoded source image plus its pixel dimensions. Bytes are shared so a crop
/// can run on a blocking worker without copying them.
#[derive(Clone, Debug)]
pub struct ImageAsset {
    bytes: Arc<[u8]>,
    pixel_width: u32,
    pixel_height: u32,
}

impl ImageAsset {
    pub fn new(bytes: impl Into<Arc<[u8]>>, pixel_width: u32, pixel_height: u32) -> Self {
        Self {
            bytes: bytes.into(),
            pixel_width,
            pixel_height,
        }
    }

    /// Probe the header for dimensions; the pixel data is decoded later by the cropper.
    pub fn from_encoded(bytes: Vec<u8>) -> Result<Self> {
        let (w, h) = image::ImageReader::new(Cursor::new(&bytes))
            .with_guessed_format()
            .map_err(|e| Error::ImageDecode {
                reason: e.to_string(),
            })?
            .into_dimensions()?;
        Ok(Self::new(bytes, w, h))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn shared_bytes(&self) -> Arc<[u8]> {
        Arc::clone(&self.bytes)
    }

    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }
}
