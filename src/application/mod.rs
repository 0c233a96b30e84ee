// SPDX-License-Identifier: MPL-2.0
//! Application layer.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use image_finder::application::port::SearchProvider;
//!
//! // Infrastructure implements the port trait
//! struct PixabayClient { /* ... */ }
//! impl SearchProvider for PixabayClient { /* ... */ }
//! ```

pub mod port;
