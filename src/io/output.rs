//! Tile-grid export for the external renderer
//!
//! The hand-off format is plain text: one row of whitespace-separated tile
//! indices per map row. Sprite lookup and image compositing belong to the
//! consuming renderer, not this crate.

use crate::io::error::{GenerationError, Result};
use ndarray::Array2;
use std::io::Write;
use std::path::Path;

/// Write a projected tile grid to any writer
///
/// # Errors
///
/// Returns an error if writing to the underlying stream fails
pub fn write_tile_grid<W: Write>(tiles: &Array2<u32>, writer: &mut W) -> Result<()> {
    for row in tiles.rows() {
        let line = row
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{line}").map_err(|e| GenerationError::FileSystem {
            path: "<writer>".into(),
            operation: "write tile row",
            source: e,
        })?;
    }
    Ok(())
}

/// Write a projected tile grid to a file, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be created or written
pub fn export_tile_grid(tiles: &Array2<u32>, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    let file = std::fs::File::create(output_path).map_err(|e| GenerationError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;

    let mut writer = std::io::BufWriter::new(file);
    write_tile_grid(tiles, &mut writer)?;
    writer.flush().map_err(|e| GenerationError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "flush file",
        source: e,
    })
}
