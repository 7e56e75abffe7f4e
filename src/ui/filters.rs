//! Filter bar: fee ceiling, state, language, provider type, telehealth

use iced::widget::{checkbox, pick_list, Row};
use iced::{Element, Length};
use std::fmt;

use crate::query::FilterInputs;

/// One entry of a filter drop-down. An empty `value` means "no constraint".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub label: &'static str,
    pub value: &'static str,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

const fn choice(label: &'static str, value: &'static str) -> Choice {
    Choice { label, value }
}

pub const MAX_FEE_CHOICES: &[Choice] = &[
    choice("Any fee", ""),
    choice("Up to $100", "100"),
    choice("Up to $150", "150"),
    choice("Up to $200", "200"),
    choice("Up to $250", "250"),
];

pub const STATE_CHOICES: &[Choice] = &[
    choice("Any state", ""),
    choice("California", "CA"),
    choice("Colorado", "CO"),
    choice("Florida", "FL"),
    choice("Georgia", "GA"),
    choice("Illinois", "IL"),
    choice("Massachusetts", "MA"),
    choice("New Jersey", "NJ"),
    choice("New York", "NY"),
    choice("Pennsylvania", "PA"),
    choice("Texas", "TX"),
    choice("Washington", "WA"),
];

pub const LANGUAGE_CHOICES: &[Choice] = &[
    choice("Any language", ""),
    choice("English", "English"),
    choice("Spanish", "Spanish"),
    choice("Mandarin", "Mandarin"),
    choice("French", "French"),
    choice("Korean", "Korean"),
    choice("Vietnamese", "Vietnamese"),
    choice("Arabic", "Arabic"),
];

pub const PROVIDER_TYPE_CHOICES: &[Choice] = &[
    choice("All providers", ""),
    choice("Licensed Therapist", "therapist"),
    choice("Life Coach", "life_coach"),
    choice("Nutrition Coach", "nutrition_coach"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    MaxFee,
    State,
    Language,
    ProviderType,
}

impl FilterField {
    pub fn choices(&self) -> &'static [Choice] {
        match self {
            FilterField::MaxFee => MAX_FEE_CHOICES,
            FilterField::State => STATE_CHOICES,
            FilterField::Language => LANGUAGE_CHOICES,
            FilterField::ProviderType => PROVIDER_TYPE_CHOICES,
        }
    }

    /// Store a selection into the raw filter values
    pub fn apply(&self, filters: &mut FilterInputs, choice: Choice) {
        let slot = match self {
            FilterField::MaxFee => &mut filters.max_fee,
            FilterField::State => &mut filters.state,
            FilterField::Language => &mut filters.language,
            FilterField::ProviderType => &mut filters.provider_type,
        };
        *slot = choice.value.to_string();
    }

    fn current(&self, filters: &FilterInputs) -> Option<Choice> {
        let value = match self {
            FilterField::MaxFee => &filters.max_fee,
            FilterField::State => &filters.state,
            FilterField::Language => &filters.language,
            FilterField::ProviderType => &filters.provider_type,
        };
        self.choices().iter().copied().find(|c| c.value == value.as_str())
    }
}

pub fn view<'a, Message: Clone + 'a>(
    filters: &FilterInputs,
    on_select: impl Fn(FilterField, Choice) -> Message + Clone + 'a,
    on_telehealth: impl Fn(bool) -> Message + 'a,
) -> Element<'a, Message> {
    let fields = [
        FilterField::MaxFee,
        FilterField::State,
        FilterField::Language,
        FilterField::ProviderType,
    ];

    let mut bar = Row::new().spacing(8).align_y(iced::Alignment::Center);
    for field in fields {
        let on_select = on_select.clone();
        bar = bar.push(
            pick_list(field.choices(), field.current(filters), move |c| on_select(field, c))
                .placeholder(field.choices()[0].label)
                .text_size(14)
                .width(Length::Shrink),
        );
    }

    bar.push(
        checkbox("Telehealth only", filters.telehealth_only)
            .on_toggle(on_telehealth)
            .text_size(14),
    )
    .into()
}
