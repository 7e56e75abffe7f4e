//! Provider card widget

use iced::widget::{column, container, row, text, Row, Space};
use iced::{Background, Border, Element, Length, Padding};

use super::theme::{badge_color, DarkTheme};
use crate::render::ProviderCard;

pub fn view<'a, Message: 'a>(card: &'a ProviderCard) -> Element<'a, Message> {
    let header = row![
        column![
            text(&card.name).size(18).color(DarkTheme::TEXT),
            text(&card.job_title).size(13).color(DarkTheme::TEXT_MUTED),
            text(&card.location).size(13).color(DarkTheme::TEXT_MUTED),
        ]
        .spacing(2),
        Space::with_width(Length::Fill),
        text(format!("{}% match", card.similarity))
            .size(14)
            .color(DarkTheme::PRIMARY),
    ]
    .align_y(iced::Alignment::Start);

    let delivery = if card.telehealth {
        "Telehealth Available"
    } else {
        "In-Person Available"
    };
    let details = row![
        text(format!("{}/session", card.fee)).size(13).color(DarkTheme::TEXT),
        text(&card.languages).size(13).color(DarkTheme::TEXT),
        text(delivery).size(13).color(DarkTheme::TEXT),
    ]
    .spacing(16);

    let mut body = column![header, details].spacing(10);

    if !card.specialties.is_empty() {
        let tags = card.specialties.iter().map(|s| tag(s));
        body = body.push(
            column![
                text("Specialties:").size(13).color(DarkTheme::TEXT_MUTED),
                Row::with_children(tags).spacing(6),
            ]
            .spacing(4),
        );
    }

    body = body
        .push(text(&card.description).size(13).color(DarkTheme::TEXT))
        .push(text(&card.ranking_explanation).size(13).color(DarkTheme::TEXT_MUTED));

    let mut footer = Row::new().spacing(10).align_y(iced::Alignment::Center);
    if let Some(url) = &card.profile_url {
        footer = footer.push(
            text(format!("View Full Profile: {}", url))
                .size(12)
                .color(DarkTheme::PRIMARY),
        );
    }
    footer = footer.push(Space::with_width(Length::Fill)).push(
        text(format!("{} {}", card.badge.icon, card.badge.label))
            .size(12)
            .color(badge_color(card.badge.provider_type)),
    );
    if card.telehealth {
        footer = footer.push(text("Online Available").size(12).color(DarkTheme::SUCCESS));
    }
    body = body.push(footer);

    container(body)
        .padding(16)
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

fn tag<'a, Message: 'a>(label: &'a str) -> Element<'a, Message> {
    container(text(label).size(12).color(DarkTheme::TEXT))
        .padding(Padding::from([2.0, 8.0]))
        .style(|_theme| container::Style {
            background: Some(Background::Color(DarkTheme::SURFACE_HIGHLIGHT)),
            border: Border::default().rounded(8),
            ..Default::default()
        })
        .into()
}
