// SPDX-License-Identifier: GPL-3.0-only

//! Application state management

use crate::config::{AppTheme, Config};
use crate::filters::{FilterName, FxName, Photo};
use cosmic::cosmic_config;
use cosmic::widget::about::About;
use cosmic::widget::image::Handle;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Developed preview of the loaded photo
///
/// Every change to the filter or effects bumps `generation`; results from
/// older generations are dropped when they arrive. Thumbnails only depend on
/// the photo and are keyed by `photo_id`.
#[derive(Debug, Default)]
pub struct PreviewState {
    /// Loaded photo downscaled for the preview
    pub source: Option<Arc<Photo>>,
    /// Upright developed preview
    pub image: Option<Handle>,
    /// Filter picker thumbnails of the loaded photo
    pub thumbnails: HashMap<FilterName, Handle>,
    /// Generation of the most recent develop request
    pub generation: u64,
    /// Bumped whenever a new photo is loaded
    pub photo_id: u64,
    /// A develop request is in flight
    pub developing: bool,
}

impl PreviewState {
    /// Start a new develop request and return its generation
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.developing = true;
        self.generation
    }

    /// Whether a preview for `generation` is still wanted
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Forget everything tied to the previous photo and start over with `source`
    pub fn reset(&mut self, source: Option<Arc<Photo>>) {
        self.source = source;
        self.image = None;
        self.thumbnails.clear();
        self.developing = false;
        self.generation += 1;
        self.photo_id += 1;
    }
}

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    pub core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    pub context_page: ContextPage,
    /// The about page for this app.
    pub about: About,
    /// Configuration data that persists between application runs.
    pub config: Config,
    /// Configuration handler for saving settings
    pub config_handler: Option<cosmic_config::Config>,
    /// Photo being developed, as decoded
    pub photo: Option<Arc<Photo>>,
    /// Where the loaded photo came from
    pub photo_path: Option<PathBuf>,
    /// Developed preview and thumbnails
    pub preview: PreviewState,
    /// An export is running
    pub is_exporting: bool,
    /// Path of the last exported photo
    pub last_export_path: Option<PathBuf>,
    /// One-line status shown under the preview
    pub status: Option<String>,
}

#[cfg(test)]
impl AppModel {
    /// Model with no config handler and no photo, drawer open on `page`
    pub(crate) fn with_drawer_open(config: Config, page: ContextPage) -> Self {
        let mut core = cosmic::Core::default();
        core.window.show_context = true;
        Self {
            core,
            context_page: page,
            about: About::default(),
            config,
            config_handler: None,
            photo: None,
            photo_path: None,
            preview: PreviewState::default(),
            is_exporting: false,
            last_export_path: None,
            status: None,
        }
    }
}

/// The context page to display in the context drawer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    About,
    Filters,
    Effects,
    Appearance,
}

/// Messages emitted by the application and its widgets.
///
/// Messages are organized into logical groups:
/// - **UI Navigation**: context drawer pages, external URLs
/// - **Photo**: opening, developing and exporting
/// - **Filters & Effects**: catalog selection and effect toggles
/// - **Settings**: appearance and config updates
#[derive(Debug, Clone)]
pub enum Message {
    // ===== UI Navigation =====
    /// Open external URL (repository, etc.)
    LaunchUrl(String),
    /// Toggle context drawer page
    ToggleContextPage(ContextPage),

    // ===== Photo =====
    /// Show the open dialog
    OpenPhoto,
    /// Photo decoded (or the dialog was cancelled with `None`)
    PhotoLoaded(Option<Result<(PathBuf, Arc<Photo>), String>>),
    /// Developed preview for a generation
    PreviewReady(u64, Result<Handle, String>),
    /// Filter thumbnails for a generation
    ThumbnailsReady(u64, Vec<(FilterName, Handle)>),
    /// Develop the full photo and write it to the export folder
    ExportPhoto,
    /// Export finished
    PhotoExported(Result<PathBuf, String>),
    /// Open the export folder in the file manager
    OpenExports,

    // ===== Filters & Effects =====
    /// Filter cell tapped
    SelectFilter(FilterName),
    /// Effect cell tapped
    ToggleEffect(FxName),
    /// Switch every effect off
    ClearEffects,

    // ===== Settings =====
    /// Appearance row tapped
    SetAppTheme(AppTheme),
    /// Configuration updated
    UpdateConfig(Config),
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn test_stale_generation_is_not_current() {
        let mut preview = PreviewState::default();
        let first = preview.begin();
        let second = preview.begin();
        assert!(!preview.is_current(first));
        assert!(preview.is_current(second));
    }

    #[test]
    fn test_reset_invalidates_pending_requests() {
        let mut preview = PreviewState::default();
        let pending = preview.begin();
        let photo_id = preview.photo_id;

        preview.reset(Some(Arc::new(Photo::upright(RgbaImage::new(4, 4)))));

        assert!(!preview.is_current(pending));
        assert_ne!(preview.photo_id, photo_id);
        assert!(!preview.developing);
        assert!(preview.source.is_some());
    }
}
