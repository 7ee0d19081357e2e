use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::PageSize;

/// Every layout constant of the instruction sheet. Units are millimetres except
/// font sizes (points). Defaults reproduce the A4 sheet exactly; a JSON file
/// may override any subset of fields.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    pub page: PageGeometry,
    pub title: String,
    pub title_font_size: f32,
    pub title_advance: f32,
    pub heading_font_size: f32,
    pub heading_advance: f32,
    pub details_heading: String,
    pub images_heading: String,
    pub separator_color: [u8; 3],
    pub separator_width: f32,
    pub separator_advance: f32,
    pub table: TableConfig,
    pub grid: GridConfig,
    pub crop: CropConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct TableConfig {
    pub label_col_width: f32,
    pub value_col_width: f32,
    pub row_height: f32,
    pub cell_padding: f32,
    /// Baseline of the first text line, measured from the row top.
    pub baseline_offset: f32,
    pub font_size: f32,
    /// Line pitch of wrapped values as a multiple of the font size.
    pub line_height_factor: f32,
    pub header_labels: (String, String),
    pub header_fill: [u8; 3],
    pub header_text_color: [u8; 3],
    pub border_color: [u8; 3],
    pub border_width: f32,
    pub text_color: [u8; 3],
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    /// Larger side of every grid image.
    pub max_image_dimension: f32,
    pub spacing: f32,
    /// Gap between the table and the image section separator.
    pub section_spacing: f32,
    /// Minimum room (above the bottom margin) the image section needs on the
    /// current page before its separator is drawn; otherwise it starts a new page.
    pub orphan_threshold: f32,
    /// Ratio used when the record leaves `aspect_ratio` empty.
    pub empty_aspect_ratio: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CropConfig {
    /// Output pixels per layout unit.
    pub oversample: f32,
    pub jpeg_quality: u8,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page: PageGeometry::default(),
            title: "SAC Instruction Sheet".to_string(),
            title_font_size: 24.0,
            title_advance: 15.0,
            heading_font_size: 16.0,
            heading_advance: 10.0,
            details_heading: "Details".to_string(),
            images_heading: "Reference Image".to_string(),
            separator_color: [200, 200, 200],
            separator_width: 0.2,
            separator_advance: 15.0,
            table: TableConfig::default(),
            grid: GridConfig::default(),
            crop: CropConfig::default(),
        }
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        // A4 portrait
        Self {
            width: 210.0,
            height: 297.0,
            margin_top: 20.0,
            margin_bottom: 20.0,
            margin_left: 20.0,
            margin_right: 20.0,
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            label_col_width: 60.0,
            value_col_width: 120.0,
            row_height: 10.0,
            cell_padding: 2.0,
            baseline_offset: 6.0,
            font_size: 10.0,
            line_height_factor: 1.15,
            header_labels: ("Field".to_string(), "Value".to_string()),
            header_fill: [66, 139, 202],
            header_text_color: [255, 255, 255],
            border_color: [200, 200, 200],
            border_width: 0.2,
            text_color: [0, 0, 0],
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_image_dimension: 80.0,
            spacing: 10.0,
            section_spacing: 15.0,
            orphan_threshold: 80.0,
            empty_aspect_ratio: "1:1".to_string(),
        }
    }
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            oversample: 10.0,
            jpeg_quality: 95,
        }
    }
}

impl PageGeometry {
    pub fn size(&self) -> PageSize {
        PageSize {
            width: self.width,
            height: self.height,
        }
    }
}

impl TableConfig {
    pub fn table_width(&self) -> f32 {
        self.label_col_width + self.value_col_width
    }

    /// Width available to value text once both paddings are removed.
    pub fn value_text_width(&self) -> f32 {
        (self.value_col_width - 2.0 * self.cell_padding).max(0.0)
    }
}

impl LayoutConfig {
    /// Load overrides from a JSON file; missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: LayoutConfig = serde_json::from_str(&text)
            .map_err(|e| Error::DocumentBuild(format!("layout config {}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject geometry that cannot produce a document.
    pub fn validate(&self) -> Result<()> {
        let p = &self.page;
        let t = &self.table;
        let checks: [(bool, &str); 8] = [
            (p.width > 0.0 && p.height > 0.0, "page dimensions must be positive"),
            (
                p.margin_top + p.margin_bottom < p.height,
                "vertical margins leave no usable page height",
            ),
            (
                p.margin_left + p.margin_right < p.width,
                "horizontal margins leave no usable page width",
            ),
            (t.row_height > 0.0, "table row height must be positive"),
            (t.font_size > 0.0, "table font size must be positive"),
            (
                self.grid.max_image_dimension > 0.0,
                "image dimension must be positive",
            ),
            (self.crop.oversample > 0.0, "crop oversampling must be positive"),
            (
                (1..=100).contains(&self.crop.jpeg_quality),
                "jpeg quality must be within 1..=100",
            ),
        ];
        match checks.iter().find(|(ok, _)| !ok) {
            Some((_, msg)) => Err(Error::DocumentBuild(msg.to_string())),
            None => Ok(()),
        }
    }
}
