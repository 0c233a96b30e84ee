// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the UI components.

pub mod button;
pub mod container;
