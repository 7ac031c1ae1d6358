//! PNG export of a materialized level, one colour per block kind

use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::level::blocks::BlockKind;
use crate::level::snapshot::Level;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Colour used for a block kind; void is transparent
pub const fn block_color(kind: BlockKind) -> [u8; 4] {
    match kind {
        BlockKind::Wall => [52, 56, 74, 255],
        BlockKind::Floor => [214, 206, 178, 255],
        BlockKind::Void => [0, 0, 0, 0],
    }
}

/// Render the level into an image with `scale` pixels per block
///
/// # Errors
///
/// Returns an error if:
/// - The level contains no tiles
/// - `scale` is zero
pub fn render_level(level: &Level, scale: u32) -> Result<RgbaImage> {
    if scale == 0 {
        return Err(invalid_parameter("scale", &scale, &"must be positive"));
    }
    let (blocks, _origin) = level.rasterize().ok_or(GenerationError::EmptyLevel)?;
    let (rows, cols) = blocks.dim();

    let mut img = ImageBuffer::new(cols as u32 * scale, rows as u32 * scale);
    for ((row, col), &kind) in blocks.indexed_iter() {
        let color = Rgba(block_color(kind));
        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel(col as u32 * scale + dx, row as u32 * scale + dy, color);
            }
        }
    }

    Ok(img)
}

/// Export the level as a PNG image with transparent void
///
/// # Errors
///
/// Returns an error if:
/// - The level contains no tiles or `scale` is zero
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_level_as_png(level: &Level, output_path: &Path, scale: u32) -> Result<()> {
    let img = render_level(level, scale)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    log::info!(
        "Exported {}x{} level image to {}",
        img.width(),
        img.height(),
        output_path.display()
    );
    Ok(())
}
