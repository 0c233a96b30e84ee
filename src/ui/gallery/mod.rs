// SPDX-License-Identifier: MPL-2.0
//! Image gallery: search results, paging and the full-size overlay.

pub mod component;
pub mod images;
pub mod overlay;
pub mod view;

pub use component::{empty_page_policy, Effect, FetchTag, Message, State};
pub use images::{DownloadResult, ImageCache, ImageSlot};
pub use view::{view, ViewContext, GALLERY_SCROLLABLE_ID};
