// SPDX-License-Identifier: MPL-2.0
//! Search bar: owns the text input and produces validated queries.

use crate::domain::search::SearchQuery;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Container, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, Default)]
pub struct State {
    input: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A non-blank query was submitted.
    Search(SearchQuery),
    /// Submit was pressed with a blank input.
    EmptyQuery,
}

impl State {
    /// Starts with `initial` in the input box (e.g. a query given on the command line).
    #[must_use]
    pub fn with_input(initial: impl Into<String>) -> Self {
        Self {
            input: initial.into(),
        }
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::InputChanged(value) => {
                self.input = value;
                Effect::None
            }
            Message::Submit => match SearchQuery::parse(&self.input) {
                Some(query) => {
                    self.input = query.as_str().to_owned();
                    Effect::Search(query)
                }
                None => Effect::EmptyQuery,
            },
        }
    }

    pub fn view<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let input = text_input(&i18n.tr("search-placeholder"), &self.input)
            .on_input(Message::InputChanged)
            .on_submit(Message::Submit)
            .size(typography::BODY_LG)
            .padding(spacing::XS)
            .width(Length::Fill);

        let submit = button(
            Container::new(Text::new(i18n.tr("search-button")).size(typography::BODY))
                .height(Length::Fill)
                .align_y(alignment::Vertical::Center),
        )
        .height(Length::Fixed(sizing::INPUT_HEIGHT))
        .padding([0.0, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::Submit);

        let row = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(input)
            .push(submit);

        Container::new(Container::new(row).max_width(sizing::SEARCH_BAR_MAX_WIDTH))
            .width(Length::Fill)
            .padding(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .style(styles::container::panel)
            .into()
    }
}
