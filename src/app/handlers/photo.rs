// SPDX-License-Identifier: GPL-3.0-only

//! Photo handlers
//!
//! Opening, developing and exporting. Decoding and developing run on the
//! blocking pool; results come back tagged so stale ones can be dropped.

use crate::app::state::{AppModel, Message};
use crate::constants::{develop, export};
use crate::errors::{AppError, AppResult};
use crate::filters::{self, FilterName, FxName, Photo};
use crate::fl;
use crate::storage;
use cosmic::Task;
use cosmic::widget::image::Handle;
use image::RgbaImage;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Upload-ready handle for upright RGBA pixels
fn rgba_handle(image: RgbaImage) -> Handle {
    let (width, height) = image.dimensions();
    Handle::from_rgba(width, height, image.into_raw())
}

/// Develop `photo` and return it upright as an image handle
fn develop_handle(photo: &Photo, filter: FilterName, effects: &[FxName]) -> AppResult<Handle> {
    let developed = filters::develop(photo, filter, effects)?;
    Ok(rgba_handle(developed.to_upright()))
}

/// Ask for a photo and decode it
async fn pick_and_load() -> Option<Result<(PathBuf, Arc<Photo>), String>> {
    let file = rfd::AsyncFileDialog::new()
        .set_title(fl!("open-photo"))
        .add_filter("Images", export::OPEN_EXTENSIONS)
        .pick_file()
        .await?;
    let path = file.path().to_path_buf();

    let result = tokio::task::spawn_blocking(move || {
        storage::load_photo(&path)
            .map(|photo| (path, Arc::new(photo)))
            .map_err(|e| e.to_string())
    })
    .await
    .unwrap_or_else(|e| Err(format!("Task join error: {}", e)));

    Some(result)
}

impl AppModel {
    // =========================================================================
    // Open Handlers
    // =========================================================================

    pub(crate) fn handle_open_photo(&self) -> Task<cosmic::Action<Message>> {
        Task::perform(pick_and_load(), |result| {
            cosmic::Action::App(Message::PhotoLoaded(result))
        })
    }

    pub(crate) fn handle_photo_loaded(
        &mut self,
        result: Option<Result<(PathBuf, Arc<Photo>), String>>,
    ) -> Task<cosmic::Action<Message>> {
        let Some(result) = result else {
            debug!("Open dialog cancelled");
            return Task::none();
        };

        match result {
            Ok((path, photo)) => {
                let (width, height) = photo.dimensions();
                info!(path = %path.display(), width, height, "Photo loaded");

                let source = Arc::new(photo.thumbnail(develop::PREVIEW_MAX_SIDE));
                self.preview.reset(Some(source));
                self.photo = Some(photo);
                self.photo_path = Some(path);
                self.status = None;

                Task::batch([self.develop_preview(), self.develop_thumbnails()])
            }
            Err(err) => {
                error!(error = %err, "Failed to open photo");
                self.status = Some(fl!("open-failed", error = err));
                Task::none()
            }
        }
    }

    // =========================================================================
    // Develop Handlers
    // =========================================================================

    /// Re-develop the preview with the current filter and effects
    pub(crate) fn develop_preview(&mut self) -> Task<cosmic::Action<Message>> {
        let Some(source) = self.preview.source.clone() else {
            return Task::none();
        };

        let generation = self.preview.begin();
        let filter = self.config.selected_filter;
        let effects = self.config.enabled_effects.clone();
        debug!(generation, %filter, ?effects, "Developing preview");

        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || {
                    develop_handle(&source, filter, &effects).map_err(|e| e.to_string())
                })
                .await
                .unwrap_or_else(|e| Err(format!("Task join error: {}", e)))
            },
            move |result| cosmic::Action::App(Message::PreviewReady(generation, result)),
        )
    }

    pub(crate) fn handle_preview_ready(
        &mut self,
        generation: u64,
        result: Result<Handle, String>,
    ) -> Task<cosmic::Action<Message>> {
        if !self.preview.is_current(generation) {
            debug!(generation, current = self.preview.generation, "Dropping stale preview");
            return Task::none();
        }

        self.preview.developing = false;
        match result {
            Ok(handle) => self.preview.image = Some(handle),
            Err(err) => error!(error = %err, "Failed to develop preview"),
        }
        Task::none()
    }

    /// Render one thumbnail per catalog filter for the picker
    pub(crate) fn develop_thumbnails(&self) -> Task<cosmic::Action<Message>> {
        let Some(source) = self.preview.source.clone() else {
            return Task::none();
        };
        let photo_id = self.preview.photo_id;

        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || {
                    let small = source.thumbnail(develop::THUMBNAIL_MAX_SIDE);
                    FilterName::ALL
                        .into_iter()
                        .filter_map(|filter| match develop_handle(&small, filter, &[]) {
                            Ok(handle) => Some((filter, handle)),
                            Err(err) => {
                                warn!(%filter, error = %err, "Failed to render thumbnail");
                                None
                            }
                        })
                        .collect::<Vec<_>>()
                })
                .await
                .unwrap_or_else(|e| {
                    error!(error = %e, "Thumbnail task failed");
                    Vec::new()
                })
            },
            move |thumbnails| cosmic::Action::App(Message::ThumbnailsReady(photo_id, thumbnails)),
        )
    }

    pub(crate) fn handle_thumbnails_ready(
        &mut self,
        photo_id: u64,
        thumbnails: Vec<(FilterName, Handle)>,
    ) -> Task<cosmic::Action<Message>> {
        if photo_id != self.preview.photo_id {
            debug!(photo_id, "Dropping thumbnails of a previous photo");
            return Task::none();
        }
        self.preview.thumbnails = thumbnails.into_iter().collect();
        Task::none()
    }

    // =========================================================================
    // Export Handlers
    // =========================================================================

    pub(crate) fn handle_export_photo(&mut self) -> Task<cosmic::Action<Message>> {
        let Some(photo) = self.photo.clone() else {
            warn!("Export requested without a photo");
            return Task::none();
        };
        if self.is_exporting {
            return Task::none();
        }

        self.is_exporting = true;
        let filter = self.config.selected_filter;
        let effects = self.config.enabled_effects.clone();
        let quality = self.config.export_quality();
        let folder = self.config.save_folder_name.clone();
        info!(%filter, ?effects, quality, "Exporting photo");

        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || -> AppResult<PathBuf> {
                    let dir = storage::photo_directory(&folder)?;
                    let developed = filters::develop(&photo, filter, &effects)?;
                    Ok(storage::export_photo(&developed, &dir, quality)?)
                })
                .await
                .unwrap_or_else(|e| Err(AppError::Other(format!("Task join error: {}", e))))
                .map_err(|e| e.to_string())
            },
            |result| cosmic::Action::App(Message::PhotoExported(result)),
        )
    }

    pub(crate) fn handle_photo_exported(
        &mut self,
        result: Result<PathBuf, String>,
    ) -> Task<cosmic::Action<Message>> {
        self.is_exporting = false;
        match result {
            Ok(path) => {
                info!(path = %path.display(), "Photo exported");
                self.status = Some(fl!("photo-exported", path = path.display().to_string()));
                self.last_export_path = Some(path);
            }
            Err(err) => {
                error!(error = %err, "Failed to export photo");
                self.status = Some(fl!("export-failed", error = err));
            }
        }
        Task::none()
    }

    pub(crate) fn handle_open_exports(&self) -> Task<cosmic::Action<Message>> {
        let dir = match storage::photo_directory(&self.config.save_folder_name) {
            Ok(dir) => dir,
            Err(err) => {
                error!(error = %err, "No export directory");
                return Task::none();
            }
        };

        if let Err(err) = std::fs::create_dir_all(&dir) {
            error!(path = %dir.display(), error = %err, "Failed to create export directory");
            return Task::none();
        }
        if let Err(err) = open::that_detached(&dir) {
            error!(path = %dir.display(), error = %err, "Failed to open export directory");
        }
        Task::none()
    }
}
