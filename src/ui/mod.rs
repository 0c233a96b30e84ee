// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns a `State`, handles its `Message`, and returns an `Effect` that the
//! application turns into tasks.
//!
//! - [`gallery`] - Search results, paging and the full-size overlay
//! - [`search_bar`] - Query input
//! - [`notifications`] - Toast notifications
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod gallery;
pub mod notifications;
pub mod search_bar;
pub mod styles;
pub mod theming;
pub mod widgets;
