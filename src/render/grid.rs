use crate::aspect::{self, Dimensions};
use crate::config::LayoutConfig;
use crate::crop;
use crate::error::{Error, Result};
use crate::model::{DrawOp, GridCell, ImageAsset, PlacedImage, Rect, SkippedCell};

use super::state::PageState;

pub const GRID_COLUMNS: usize = 2;
/// A new page starts at every positive multiple of this index, whatever room is left.
pub const IMAGES_PER_PAGE: usize = 4;

/// Left edge of the horizontally centered grid.
pub fn grid_start_x(page_width: f32, cell: Dimensions, spacing: f32) -> f32 {
    let total = GRID_COLUMNS as f32 * cell.width + (GRID_COLUMNS - 1) as f32 * spacing;
    (page_width - total) / 2.0
}

/// Cell and rectangle of image `index`. Depends only on the index, never on
/// which earlier images were actually placed.
pub fn cell_rect(
    index: usize,
    start_x: f32,
    section_top: f32,
    cell: Dimensions,
    spacing: f32,
) -> (GridCell, Rect) {
    let slot = index % IMAGES_PER_PAGE;
    let grid_cell = GridCell {
        row: slot / GRID_COLUMNS,
        col: slot % GRID_COLUMNS,
    };
    let rect = Rect::new(
        start_x + grid_cell.col as f32 * (cell.width + spacing),
        section_top + grid_cell.row as f32 * (cell.height + spacing),
        cell.width,
        cell.height,
    );
    (grid_cell, rect)
}

/// Resolve the record's ratio label: empty means the configured default,
/// unknown falls back to the catalog default.
pub fn cell_dimensions(aspect_label: &str, config: &LayoutConfig) -> Dimensions {
    let label = if aspect_label.trim().is_empty() {
        config.grid.empty_aspect_ratio.as_str()
    } else {
        aspect_label
    };
    aspect::dimensions_or_default(label, config.grid.max_image_dimension)
}

/// Tile `images` into the 2-column grid starting at the cursor.
///
/// Crops run one at a time in index order. An image that fails to decode
/// leaves its cell empty and is recorded as skipped; later images keep their
/// own cells. Only structural failures are returned.
pub async fn render_image_grid(
    state: &mut PageState,
    images: &[ImageAsset],
    aspect_label: &str,
    config: &LayoutConfig,
) -> Result<()> {
    if images.is_empty() {
        return Ok(());
    }
    let dims = cell_dimensions(aspect_label, config);
    let spacing = config.grid.spacing;
    let start_x = grid_start_x(state.geometry().width, dims, spacing);
    let mut section_top = state.cursor().y();

    for (index, image) in images.iter().enumerate() {
        if index > 0 && index % IMAGES_PER_PAGE == 0 {
            state.cursor_mut().force_break();
            section_top = state.cursor().y();
        }
        let (cell, rect) = cell_rect(index, start_x, section_top, dims, spacing);

        match crop::crop(image, dims.width, dims.height, &config.crop).await {
            Ok(cropped) => {
                log::debug!(
                    "GRID image={index} page={} cell=({},{}) at ({:.1},{:.1})",
                    state.cursor().page_number(),
                    cell.row,
                    cell.col,
                    rect.x,
                    rect.y
                );
                state.draw(DrawOp::Image(PlacedImage {
                    rect,
                    cell,
                    source_index: index,
                    image: cropped,
                }));
            }
            Err(Error::ImageDecode { reason }) => {
                log::warn!("Skipping image {index}: {reason}");
                let page_index = state.cursor().page_index();
                state.record_skip(SkippedCell {
                    source_index: index,
                    page_index,
                    cell,
                    reason,
                });
            }
            Err(e) => return Err(e),
        }
    }

    let last_slot = (images.len() - 1) % IMAGES_PER_PAGE;
    let rows_used = last_slot / GRID_COLUMNS + 1;
    state
        .cursor_mut()
        .move_to(section_top + rows_used as f32 * (dims.height + spacing) - spacing);
    Ok(())
}
