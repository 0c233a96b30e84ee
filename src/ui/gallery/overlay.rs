// SPDX-License-Identifier: MPL-2.0
//! Full-size image overlay sub-component.

/// What the overlay shows and whether it is open.
///
/// `full_size_url` and `alt` are kept after closing so reopening the same
/// image does not need another lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    visible: bool,
    full_size_url: String,
    alt: String,
}

/// Messages for the overlay sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show the given image.
    Open { full_size_url: String, alt: String },
    /// Hide the overlay.
    Close,
}

/// Effects produced by overlay changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The overlay opened on this image.
    Opened { full_size_url: String },
}

impl State {
    /// Handle an overlay message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Open { full_size_url, alt } => {
                // Single assignment: the pair and visibility change together.
                *self = Self {
                    visible: true,
                    full_size_url: full_size_url.clone(),
                    alt,
                };
                Effect::Opened { full_size_url }
            }
            Message::Close => {
                self.visible = false;
                Effect::None
            }
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn full_size_url(&self) -> &str {
        &self.full_size_url
    }

    #[must_use]
    pub fn alt(&self) -> &str {
        &self.alt
    }
}
