//! Theme configuration

use iced::Color;

use crate::backend::types::ProviderType;

/// Dark theme colors
pub struct DarkTheme;

impl DarkTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.09, 0.09, 0.11);
    pub const SURFACE: Color = Color::from_rgb(0.12, 0.12, 0.14);
    pub const SURFACE_HIGHLIGHT: Color = Color::from_rgb(0.18, 0.18, 0.22);
    pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.28);
    pub const PRIMARY: Color = Color::from_rgb(0.4, 0.55, 1.0);
    pub const TEXT: Color = Color::from_rgb(0.95, 0.95, 0.95);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.55, 0.55, 0.6);
    pub const TEXT_PLACEHOLDER: Color = Color::from_rgb(0.4, 0.4, 0.45);
    pub const SUCCESS: Color = Color::from_rgb(0.35, 0.78, 0.5);
    pub const ERROR: Color = Color::from_rgb(0.95, 0.4, 0.4);
}

/// Badge color per provider category
pub fn badge_color(provider_type: ProviderType) -> Color {
    match provider_type {
        ProviderType::Therapist => DarkTheme::PRIMARY,
        ProviderType::LifeCoach => Color::from_rgb(0.95, 0.7, 0.3),
        ProviderType::NutritionCoach => DarkTheme::SUCCESS,
    }
}
