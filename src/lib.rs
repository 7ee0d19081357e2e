pub mod aspect;
pub mod config;
pub mod crop;
mod error;
mod fonts;
pub mod model;
pub mod pdf;
pub mod record;
pub mod render;
pub mod vocabulary;

pub use config::LayoutConfig;
pub use error::{Error, Result};
pub use model::{ImageAsset, RenderedDocument};
pub use record::{FIELD_ORDER, FieldKey, FieldRecord};
pub use render::DocumentBuilder;

use std::path::Path;
use std::time::Instant;

/// Default download name of the finished sheet.
pub const DEFAULT_OUTPUT_NAME: &str = "instruction.pdf";

/// Lay out the sheet with the record's own aspect ratio and serialize it to PDF.
pub async fn render_instruction_pdf(
    record: &FieldRecord,
    images: &[ImageAsset],
    config: LayoutConfig,
) -> Result<Vec<u8>> {
    let aspect = record.aspect_ratio().to_string();
    render_instruction_pdf_with_aspect(record, images, &aspect, config).await
}

pub async fn render_instruction_pdf_with_aspect(
    record: &FieldRecord,
    images: &[ImageAsset],
    aspect_label: &str,
    config: LayoutConfig,
) -> Result<Vec<u8>> {
    let t0 = Instant::now();

    let doc = DocumentBuilder::new(config)
        .build(record, images, aspect_label)
        .await?;
    let t_layout = t0.elapsed();

    let bytes = pdf::write_pdf(&doc)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: layout={:.1}ms, serialize={:.1}ms, total={:.1}ms (output {} bytes)",
        t_layout.as_secs_f64() * 1000.0,
        (t_total - t_layout).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
    );
    Ok(bytes)
}

/// Build the sheet and write it to `output`. Nothing is written if the build fails.
pub async fn write_instruction_pdf(
    record: &FieldRecord,
    images: &[ImageAsset],
    aspect_label: &str,
    config: LayoutConfig,
    output: &Path,
) -> Result<()> {
    let bytes = render_instruction_pdf_with_aspect(record, images, aspect_label, config).await?;
    std::fs::write(output, &bytes)?;
    log::info!("Wrote {} ({} bytes)", output.display(), bytes.len());
    Ok(())
}
