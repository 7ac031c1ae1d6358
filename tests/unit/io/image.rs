//! Tests for PNG rendering and export of materialized levels

#[cfg(test)]
mod tests {
    use arenagen::GenerationError;
    use arenagen::io::image::{block_color, export_level_as_png, render_level};
    use arenagen::level::Level;
    use arenagen::level::blocks::BlockKind;
    use arenagen::spatial::tiles::TileType;

    fn pair() -> Level {
        [([0, 0], TileType::Cross), ([1, 0], TileType::Void)]
            .into_iter()
            .collect()
    }

    // Tests each block kind maps to its colour and void is transparent
    // Verified by giving void an opaque colour
    #[test]
    fn test_block_colors() {
        assert_eq!(block_color(BlockKind::Void)[3], 0);
        assert_eq!(block_color(BlockKind::Wall)[3], 255);
        assert_ne!(block_color(BlockKind::Wall), block_color(BlockKind::Floor));
    }

    // Verifies pixels are scaled blocks in row-major order
    // Verified by swapping x and y in put_pixel
    #[test]
    fn test_render_level_pixels() {
        let image = render_level(&pair(), 2).expect("level renders");

        assert_eq!(image.dimensions(), (20, 10));
        assert_eq!(image.get_pixel(0, 0).0, block_color(BlockKind::Wall));
        assert_eq!(image.get_pixel(1, 1).0, block_color(BlockKind::Wall));
        assert_eq!(image.get_pixel(4, 0).0, block_color(BlockKind::Floor));
        assert_eq!(image.get_pixel(0, 4).0, block_color(BlockKind::Floor));
        assert_eq!(image.get_pixel(12, 4).0, block_color(BlockKind::Void));
    }

    // Tests empty levels and a zero scale are rejected
    // Verified by returning a blank image for empty levels
    #[test]
    fn test_render_level_errors() {
        assert!(matches!(
            render_level(&Level::new(), 1),
            Err(GenerationError::EmptyLevel)
        ));
        assert!(matches!(
            render_level(&pair(), 0),
            Err(GenerationError::InvalidParameter {
                parameter: "scale",
                ..
            })
        ));
    }

    // Tests PNG file creation inside a directory that does not exist yet
    // Verified by disabling parent directory creation
    #[test]
    fn test_export_level_as_png_creates_file() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let output = temp_dir.path().join("levels").join("pair.png");

        export_level_as_png(&pair(), &output, 1).expect("export succeeds");

        let saved = image::open(&output).expect("saved image opens");
        assert_eq!((saved.width(), saved.height()), (10, 5));
    }
}
