//! iced widgets for the search window

pub mod card;
pub mod filters;
pub mod placeholder;
pub mod search_bar;
pub mod theme;
