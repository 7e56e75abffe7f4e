//! Search bar widget

use iced::advanced::widget::operation::{Focusable, Operation, Outcome};
use iced::advanced::widget::{self, operate};
use iced::widget::{button, container, row, text, text_input};
use iced::{Background, Border, Color, Element, Length, Padding, Rectangle, Task};

use super::theme::DarkTheme;

/// Id used to focus the search box at startup
pub fn input_id() -> text_input::Id {
    text_input::Id::new("search-input")
}

/// Resolves to whether the search box currently has keyboard focus.
pub fn input_focused() -> Task<bool> {
    operate(InputFocus {
        target: widget::Id::from(input_id()),
        focused: false,
    })
}

struct InputFocus {
    target: widget::Id,
    focused: bool,
}

impl Operation<bool> for InputFocus {
    fn container(
        &mut self,
        _id: Option<&widget::Id>,
        _bounds: Rectangle,
        operate_on_children: &mut dyn FnMut(&mut dyn Operation<bool>),
    ) {
        operate_on_children(self)
    }

    fn focusable(&mut self, state: &mut dyn Focusable, id: Option<&widget::Id>) {
        if id == Some(&self.target) {
            self.focused = state.is_focused();
        }
    }

    fn finish(&self) -> Outcome<bool> {
        Outcome::Some(self.focused)
    }
}

/// Search box plus search button. The button is disabled while loading.
pub fn view<'a, Message: Clone + 'a>(
    placeholder: &str,
    value: &str,
    loading: bool,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    let input = text_input(placeholder, value)
        .id(input_id())
        .on_input(on_input)
        .on_submit(on_submit.clone())
        .padding(Padding::new(16.0))
        .size(20)
        .style(|_theme, _status| text_input::Style {
            background: Background::Color(Color::TRANSPARENT),
            border: Border::default(),
            icon: DarkTheme::TEXT_MUTED,
            placeholder: DarkTheme::TEXT_PLACEHOLDER,
            value: DarkTheme::TEXT,
            selection: DarkTheme::PRIMARY,
        });

    let label = if loading { "Searching..." } else { "Search" };
    let search_button = button(text(label).size(16))
        .padding(Padding::from([10.0, 18.0]))
        .on_press_maybe((!loading).then_some(on_submit));

    container(row![input, search_button].spacing(8).align_y(iced::Alignment::Center))
        .padding(Padding::from([8.0, 16.0]))
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(DarkTheme::SURFACE)),
            border: Border {
                color: DarkTheme::BORDER,
                width: 1.0,
                radius: 12.0.into(),
            },
            ..Default::default()
        })
        .into()
}
