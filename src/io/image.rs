//! PNG export of generated boards

use image::{ImageBuffer, Rgba};

use crate::board::cell::Category;
use crate::board::grid::Board;
use crate::io::configuration::CELL_PIXEL_SIZE;
use crate::io::error::GenerationError;

/// RGBA color for a cell category
///
/// Hazards get their own color in exports; the PNG is a level map for
/// inspection, not the player's view.
const fn category_color(category: Category) -> Rgba<u8> {
    match category {
        Category::Empty => Rgba([24, 24, 24, 255]),
        Category::Wall => Rgba([120, 120, 120, 255]),
        Category::Hazard => Rgba([190, 42, 42, 255]),
        Category::Start => Rgba([52, 168, 83, 255]),
        Category::End => Rgba([66, 133, 244, 255]),
    }
}

/// Export a board as a PNG image with one scaled square per cell
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_board_as_png(board: &Board, output_path: &str) -> crate::io::error::Result<()> {
    let size = board.size() as u32;
    let edge = size * CELL_PIXEL_SIZE;
    let mut img = ImageBuffer::from_pixel(edge, edge, category_color(Category::Empty));

    for cell in board.cells() {
        let color = category_color(cell.category);
        let base_x = cell.coordinate.column as u32 * CELL_PIXEL_SIZE;
        let base_y = cell.coordinate.row as u32 * CELL_PIXEL_SIZE;

        for dy in 0..CELL_PIXEL_SIZE {
            for dx in 0..CELL_PIXEL_SIZE {
                img.put_pixel(base_x + dx, base_y + dy, color);
            }
        }
    }

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
