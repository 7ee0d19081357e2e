mod cursor;
mod grid;
mod state;
mod table;
pub mod text;

use std::time::Instant;

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::model::{DrawOp, FontWeight, ImageAsset, RenderedDocument};
use crate::record::{FIELD_ORDER, FieldRecord};
use crate::vocabulary;

pub use cursor::PageCursor;
pub use grid::{
    GRID_COLUMNS, IMAGES_PER_PAGE, cell_dimensions, cell_rect, grid_start_x, render_image_grid,
};
pub use state::PageState;
pub use table::{RowPlacement, render_table};

use text::text_run;

const HEADING_COLOR: [u8; 3] = [0, 0, 0];

/// Lays out the instruction sheet: title, details table, then the reference
/// image grid. Holds only configuration, so one builder can serve concurrent
/// builds; each build owns its own [`PageState`].
#[derive(Clone, Debug, Default)]
pub struct DocumentBuilder {
    config: LayoutConfig,
}

impl DocumentBuilder {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub async fn build(
        &self,
        record: &FieldRecord,
        images: &[ImageAsset],
        aspect_label: &str,
    ) -> Result<RenderedDocument> {
        let t0 = Instant::now();
        let cfg = &self.config;
        cfg.validate()?;

        for key in vocabulary::unrecognized_fields(record) {
            log::warn!(
                "Field '{}' has value '{}' outside its vocabulary",
                key.key(),
                record.get(key)
            );
        }

        let mut state = PageState::new(&cfg.page);

        self.draw_title(&mut state);
        self.draw_separator(&mut state);
        self.draw_heading(&mut state, &cfg.details_heading);

        let rows = render_table(&mut state, record, &FIELD_ORDER, &cfg.table);
        let overflowing = rows.iter().filter(|r| r.overflows).count();
        let t_table = t0.elapsed();

        if !images.is_empty() {
            state.cursor_mut().advance(cfg.grid.section_spacing);
            if state.cursor().remaining() < cfg.grid.orphan_threshold {
                state.cursor_mut().force_break();
            }
            self.draw_separator(&mut state);
            self.draw_heading(&mut state, &cfg.images_heading);
            render_image_grid(&mut state, images, aspect_label, cfg).await?;
        }
        let t_images = t0.elapsed();

        let doc = state.finish(cfg.title.clone());

        log::info!(
            "Build phases: table={:.1}ms ({} rows, {} overflowing), images={:.1}ms ({} placed, {} skipped), pages={}",
            t_table.as_secs_f64() * 1000.0,
            rows.len(),
            overflowing,
            (t_images - t_table).as_secs_f64() * 1000.0,
            doc.pages().iter().map(|p| p.images().count()).sum::<usize>(),
            doc.skipped_cells().len(),
            doc.page_count(),
        );

        Ok(doc)
    }

    fn draw_title(&self, state: &mut PageState) {
        let cfg = &self.config;
        let baseline = state.cursor().y();
        let mut run = text_run(
            cfg.title.as_str(),
            0.0,
            baseline,
            FontWeight::Bold,
            cfg.title_font_size,
            HEADING_COLOR,
        );
        run.x = (cfg.page.width - run.width) / 2.0;
        state.draw(DrawOp::Text(run));
        state.cursor_mut().advance(cfg.title_advance);
    }

    fn draw_separator(&self, state: &mut PageState) {
        let cfg = &self.config;
        let y = state.cursor().y();
        state.draw(DrawOp::Line {
            from: (cfg.page.margin_left, y),
            to: (cfg.page.width - cfg.page.margin_right, y),
            color: cfg.separator_color,
            line_width: cfg.separator_width,
        });
        state.cursor_mut().advance(cfg.separator_advance);
    }

    fn draw_heading(&self, state: &mut PageState, text: &str) {
        let cfg = &self.config;
        let baseline = state.cursor().y();
        state.draw(DrawOp::Text(text_run(
            text,
            cfg.page.margin_left,
            baseline,
            FontWeight::Bold,
            cfg.heading_font_size,
            HEADING_COLOR,
        )));
        state.cursor_mut().advance(cfg.heading_advance);
    }
}
