// SPDX-License-Identifier: GPL-3.0-only

//! Kontax - A film filter darkroom for the COSMIC desktop environment
//!
//! Loads a photo, develops it through a colour filter and optional effects,
//! and exports the result as JPEG.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`app`]: Main application logic and UI
//! - [`filters`]: Filter catalog, colour grades, effects and blending
//! - [`config`]: User configuration handling
//! - [`storage`]: Photo loading and export
//!
//! # Example
//!
//! ```ignore
//! // This is a GUI application, typically run via:
//! // kontax
//! ```

pub mod app;
pub mod config;
pub mod constants;
pub mod errors;
pub mod filters;
pub mod i18n;
pub mod storage;

// Re-export commonly used types
pub use app::{AppModel, Message};
pub use config::{AppTheme, Config};
pub use filters::{FilterCollection, FilterName, FxName, ImageFilter, Photo};
