// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// Developing defaults
pub mod develop {
    /// Opacity applied to the light leaks overlay before blending
    pub const LEAKS_STRENGTH: f32 = 1.0;

    /// Maximum per-channel grain offset (0.0-1.0 scale)
    pub const GRAIN_STRENGTH: f32 = 0.06;

    /// Longest side of the preview rendered in the main view
    pub const PREVIEW_MAX_SIDE: u32 = 1600;

    /// Longest side of filter picker thumbnails
    pub const THUMBNAIL_MAX_SIDE: u32 = 160;
}

/// Export defaults
pub mod export {
    /// JPEG quality used when the config has none
    pub const DEFAULT_JPEG_QUALITY: u8 = 92;

    /// Folder under the pictures directory for exported photos
    pub const DEFAULT_SAVE_FOLDER: &str = "Kontax";

    /// File name prefix for exported photos
    pub const FILE_PREFIX: &str = "KONTAX";

    /// Extensions offered by the open dialog
    pub const OPEN_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "tif", "tiff"];
}

/// UI layout constants
pub mod ui {
    /// Spacing between cells in the filter and effect grids
    pub const GRID_SPACING: f32 = 6.0;

    /// Number of columns in the filter and effect grids
    pub const GRID_COLUMNS: usize = 3;

    /// Context drawer content width
    pub const DRAWER_CONTENT_WIDTH: f32 = 420.0;

    /// Cell edge: (drawer_width - (columns-1) * spacing) / columns
    pub const CELL_SIZE: f32 =
        (DRAWER_CONTENT_WIDTH - (GRID_COLUMNS as f32 - 1.0) * GRID_SPACING) / GRID_COLUMNS as f32;

    /// Cell corner radius
    pub const CELL_RADIUS: f32 = 10.0;

    /// Effect icon size inside a cell
    pub const CELL_ICON_SIZE: u16 = 24;

    /// ON/OFF indicator text size
    pub const INDICATOR_TEXT_SIZE: u16 = 11;

    /// Spacing between collection sections in the filter picker
    pub const SECTION_SPACING: f32 = 20.0;
}

/// Build and runtime information
pub mod app_info {
    use std::path::Path;

    /// Get the application version from build-time environment
    pub fn version() -> &'static str {
        env!("GIT_VERSION")
    }

    /// Check if the application is running inside a Flatpak sandbox
    pub fn is_flatpak() -> bool {
        Path::new("/.flatpak-info").exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_fill_drawer_width() {
        let used = ui::CELL_SIZE * ui::GRID_COLUMNS as f32
            + ui::GRID_SPACING * (ui::GRID_COLUMNS as f32 - 1.0);
        assert!((used - ui::DRAWER_CONTENT_WIDTH).abs() < 0.01);
    }

    #[test]
    fn test_thumbnails_smaller_than_preview() {
        assert!(develop::THUMBNAIL_MAX_SIDE < develop::PREVIEW_MAX_SIDE);
    }
}
