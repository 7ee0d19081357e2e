use crate::config::TableConfig;
use crate::model::{DrawOp, FontWeight, Rect};
use crate::record::{FieldKey, FieldRecord};

use super::state::PageState;
use super::text::{line_pitch, text_run, wrap_text};

/// Where one data row landed.
#[derive(Clone, Debug, PartialEq)]
pub struct RowPlacement {
    pub key: FieldKey,
    pub page_index: usize,
    pub top: f32,
    pub line_count: usize,
    /// Wrapped value taller than the fixed row; the extra lines spill below the box.
    pub overflows: bool,
}

/// Draw the two-column field/value table at the cursor.
///
/// The header is drawn once. Rows follow `fields` in order and may break onto a
/// new page, where they continue without a repeated header. Row height never
/// grows with wrapped values.
pub fn render_table(
    state: &mut PageState,
    record: &FieldRecord,
    fields: &[FieldKey],
    table: &TableConfig,
) -> Vec<RowPlacement> {
    let x = state.geometry().margin_left;
    let value_x = x + table.label_col_width;
    let pad = table.cell_padding;
    let row_h = table.row_height;
    let pitch = line_pitch(table.font_size, table.line_height_factor);

    let header_top = state.cursor_mut().reserve(row_h);
    state.draw(DrawOp::FillRect {
        rect: Rect::new(x, header_top, table.label_col_width, row_h),
        color: table.header_fill,
    });
    state.draw(DrawOp::FillRect {
        rect: Rect::new(value_x, header_top, table.value_col_width, row_h),
        color: table.header_fill,
    });
    let (field_header, value_header) = &table.header_labels;
    for (label, cell_x) in [(field_header, x), (value_header, value_x)] {
        state.draw(DrawOp::Text(text_run(
            label.as_str(),
            cell_x + pad,
            header_top + table.baseline_offset,
            FontWeight::Bold,
            table.font_size,
            table.header_text_color,
        )));
    }

    let mut placements = Vec::with_capacity(fields.len());
    for &key in fields {
        let top = state.cursor_mut().reserve(row_h);
        let page_index = state.cursor().page_index();

        for (cell_x, cell_w) in [
            (x, table.label_col_width),
            (value_x, table.value_col_width),
        ] {
            state.draw(DrawOp::StrokeRect {
                rect: Rect::new(cell_x, top, cell_w, row_h),
                color: table.border_color,
                line_width: table.border_width,
            });
        }

        let baseline = top + table.baseline_offset;
        state.draw(DrawOp::Text(text_run(
            key.label(),
            x + pad,
            baseline,
            FontWeight::Bold,
            table.font_size,
            table.text_color,
        )));

        let lines = wrap_text(
            record.get(key),
            FontWeight::Regular,
            table.font_size,
            table.value_text_width(),
        );
        for (i, line) in lines.iter().enumerate() {
            if line.text.is_empty() {
                continue;
            }
            state.draw(DrawOp::Text(text_run(
                line.text.as_str(),
                value_x + pad,
                baseline + i as f32 * pitch,
                FontWeight::Regular,
                table.font_size,
                table.text_color,
            )));
        }

        let last_baseline = baseline + lines.len().saturating_sub(1) as f32 * pitch;
        let overflows = last_baseline > top + row_h;
        if overflows {
            log::debug!(
                "TABLE row {} value wraps to {} lines and spills below its {row_h}mm row",
                key.key(),
                lines.len()
            );
        }
        log::debug!(
            "TABLE row={} page={} top={top:.2} lines={}",
            key.key(),
            page_index + 1,
            lines.len()
        );

        placements.push(RowPlacement {
            key,
            page_index,
            top,
            line_count: lines.len(),
            overflows,
        });
    }
    placements
}
