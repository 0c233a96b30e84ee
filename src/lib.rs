// SPDX-License-Identifier: MPL-2.0
//! `image_finder` is an image search gallery built with the Iced GUI framework.
//!
//! It queries the Pixabay API, shows results as a thumbnail grid with
//! "load more" paging, and opens a full-size image in an overlay.
//!
//! # Layers
//!
//! - [`domain`]: search value types (query, page, image record, status)
//! - [`application`]: the `SearchProvider` port
//! - [`infrastructure`]: Pixabay and HTTP adapters
//! - [`ui`]: gallery controller, search bar, notifications, styling
//! - [`app`]: Iced application wiring
//! - [`config`], [`i18n`], [`error`]: ambient services

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
