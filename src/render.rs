//! Maps search responses onto display models
//!
//! Everything here is a pure function of its input: rendering the same
//! response twice yields equal models.

use std::fmt;

use crate::backend::types::{ProviderResult, ProviderType, SearchResponse};

/// Maximum number of specialty tags on a card
pub const MAX_SPECIALTY_TAGS: usize = 5;

/// Description length (in characters) before truncation
pub const DESCRIPTION_LIMIT: usize = 150;

pub const ELLIPSIS: &str = "...";

const DEFAULT_DESCRIPTION: &str =
    "Professional therapist committed to helping clients achieve their mental health goals.";

/// Badge shown for each provider category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderBadge {
    pub provider_type: ProviderType,
    pub label: &'static str,
    pub icon: &'static str,
}

impl ProviderBadge {
    pub fn for_type(provider_type: ProviderType) -> Self {
        let (label, icon) = match provider_type {
            ProviderType::Therapist => ("Licensed Therapist", "✚"),
            ProviderType::LifeCoach => ("Life Coach", "✦"),
            ProviderType::NutritionCoach => ("Nutrition Coach", "❀"),
        };
        Self {
            provider_type,
            label,
            icon,
        }
    }
}

/// Display model for one provider
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderCard {
    pub name: String,
    pub job_title: String,
    pub location: String,
    /// Percentage with one decimal, without the `%` sign
    pub similarity: String,
    pub fee: String,
    pub languages: String,
    pub telehealth: bool,
    pub specialties: Vec<String>,
    pub description: String,
    pub ranking_explanation: String,
    pub profile_url: Option<String>,
    pub badge: ProviderBadge,
}

/// Header and cards for a non-empty response
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsPage {
    pub title: String,
    pub stats_line: String,
    pub cards: Vec<ProviderCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayModel {
    Empty,
    Results(ResultsPage),
}

/// Render a whole response. No results is `Empty`, not an error.
pub fn render(response: &SearchResponse) -> DisplayModel {
    if response.is_empty() {
        return DisplayModel::Empty;
    }

    DisplayModel::Results(ResultsPage {
        title: format!("Search Results for \"{}\"", response.query),
        stats_line: format!("Found {} providers", response.total_found),
        cards: response.results().iter().map(render_card).collect(),
    })
}

pub fn render_card(result: &ProviderResult) -> ProviderCard {
    let similarity = format_similarity(result.similarity());

    let description = match result.description_preview.as_deref() {
        Some(d) if !d.is_empty() => truncate_description(d),
        _ => DEFAULT_DESCRIPTION.to_string(),
    };

    let ranking_explanation = match result.ranking_explanation.as_deref() {
        Some(why) if !why.is_empty() => format!("Why this match: {}", why),
        _ => format!(
            "Why this match: High similarity score ({}%) based on specialties and location match.",
            similarity
        ),
    };

    ProviderCard {
        name: non_empty_or(result.name.as_deref(), "Professional Therapist"),
        job_title: non_empty_or(result.job_title.as_deref(), "Licensed Therapist"),
        location: format!(
            "{}, {}",
            result.city.as_deref().unwrap_or_default(),
            result.state.as_deref().unwrap_or_default()
        ),
        similarity,
        fee: format_fee(result.fee().as_deref()),
        languages: result.languages().join(", "),
        telehealth: result.telehealth_available(),
        specialties: result
            .specialties()
            .into_iter()
            .take(MAX_SPECIALTY_TAGS)
            .collect(),
        description,
        ranking_explanation,
        profile_url: result.profile_url.clone().filter(|u| !u.is_empty()),
        badge: ProviderBadge::for_type(result.provider_type()),
    }
}

/// `score * 100` with exactly one decimal. Not clamped.
pub fn format_similarity(score: f64) -> String {
    format!("{:.1}", score * 100.0)
}

pub fn format_fee(fee: Option<&str>) -> String {
    match fee {
        Some(fee) => format!("${}", fee),
        None => "Contact for pricing".to_string(),
    }
}

/// Keep the first [`DESCRIPTION_LIMIT`] characters and mark the cut.
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() > DESCRIPTION_LIMIT {
        let mut cut: String = description.chars().take(DESCRIPTION_LIMIT).collect();
        cut.push_str(ELLIPSIS);
        cut
    } else {
        description.to_string()
    }
}

/// Thousands separators, e.g. `12345` -> `12,345`
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn non_empty_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

impl fmt::Display for ProviderCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}  ({}% match)", self.name, self.similarity)?;
        writeln!(f, "  {} | {} {}", self.job_title, self.badge.icon, self.badge.label)?;
        writeln!(f, "  {}", self.location)?;
        writeln!(f, "  {}/session | {}", self.fee, self.languages)?;
        if self.telehealth {
            writeln!(f, "  Telehealth Available")?;
        } else {
            writeln!(f, "  In-Person Available")?;
        }
        if !self.specialties.is_empty() {
            writeln!(f, "  Specialties: {}", self.specialties.join(" · "))?;
        }
        writeln!(f, "  {}", self.description)?;
        writeln!(f, "  {}", self.ranking_explanation)?;
        if let Some(url) = &self.profile_url {
            writeln!(f, "  View Full Profile: {}", url)?;
        }
        Ok(())
    }
}

impl fmt::Display for ResultsPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.stats_line)?;
        for card in &self.cards {
            writeln!(f)?;
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> SearchResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_similarity_one_decimal() {
        assert_eq!(format_similarity(0.8234), "82.3");
        assert_eq!(format_similarity(1.0), "100.0");
        assert_eq!(format_similarity(0.0), "0.0");
    }

    #[test]
    fn test_similarity_not_clamped() {
        assert_eq!(format_similarity(1.5), "150.0");
        assert_eq!(format_similarity(-0.1), "-10.0");
    }

    #[test]
    fn test_fee_formatting() {
        assert_eq!(format_fee(Some("150")), "$150");
        assert_eq!(format_fee(Some("120.50")), "$120.50");
        assert_eq!(format_fee(None), "Contact for pricing");
    }

    #[test]
    fn test_count_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(render(&response(json!({"results": []}))), DisplayModel::Empty);
        assert_eq!(render(&response(json!({"query": "x", "total_found": 0}))), DisplayModel::Empty);
    }

    #[test]
    fn test_header_lines() {
        let model = render(&response(json!({
            "query": "spanish speaking therapist for anxiety",
            "total_found": 2,
            "results": [{"name": "A", "similarity_score": 0.9}, {"name": "B", "similarity_score": 0.8}]
        })));
        let DisplayModel::Results(page) = model else {
            panic!("Expected results");
        };
        assert_eq!(page.title, "Search Results for \"spanish speaking therapist for anxiety\"");
        assert_eq!(page.stats_line, "Found 2 providers");
        assert_eq!(page.cards[0].name, "A");
        assert_eq!(page.cards[1].name, "B");
    }

    #[test]
    fn test_missing_languages_and_many_specialties() {
        let result: ProviderResult = serde_json::from_value(json!({
            "name": "Dr. Ruiz",
            "similarity_score": 0.7,
            "specialties": ["Anxiety", "Depression", "Trauma", "ADHD", "Grief", "Couples", "Stress"]
        }))
        .unwrap();
        let card = render_card(&result);
        assert_eq!(card.languages, "English");
        assert_eq!(card.specialties, vec!["Anxiety", "Depression", "Trauma", "ADHD", "Grief"]);
    }

    #[test]
    fn test_card_fallbacks() {
        let card = render_card(&ProviderResult::default());
        assert_eq!(card.name, "Professional Therapist");
        assert_eq!(card.job_title, "Licensed Therapist");
        assert_eq!(card.location, ", ");
        assert_eq!(card.fee, "Contact for pricing");
        assert_eq!(card.description, DEFAULT_DESCRIPTION);
        assert_eq!(
            card.ranking_explanation,
            "Why this match: High similarity score (0.0%) based on specialties and location match."
        );
        assert_eq!(card.badge.label, "Licensed Therapist");
        assert!(card.profile_url.is_none());
        assert!(!card.telehealth);
    }

    #[test]
    fn test_explicit_explanation_and_badge() {
        let result: ProviderResult = serde_json::from_value(json!({
            "ranking_explanation": "Speaks Spanish and treats anxiety",
            "provider_type": "life_coach",
            "languages": ["English", "Spanish"],
            "profile_url": "https://example.com/p/1"
        }))
        .unwrap();
        let card = render_card(&result);
        assert_eq!(card.ranking_explanation, "Why this match: Speaks Spanish and treats anxiety");
        assert_eq!(card.badge, ProviderBadge::for_type(ProviderType::LifeCoach));
        assert_eq!(card.languages, "English, Spanish");
        assert_eq!(card.profile_url.as_deref(), Some("https://example.com/p/1"));
    }

    #[test]
    fn test_long_description_truncated() {
        let long = "a".repeat(200);
        let shown = truncate_description(&long);
        assert_eq!(shown.chars().count(), 153);
        assert!(shown.ends_with(ELLIPSIS));
        assert_eq!(truncate_description("short"), "short");
    }

    #[test]
    fn test_card_keeps_string_fee_and_null_score() {
        let result: ProviderResult = serde_json::from_value(json!({
            "fee_individual": "120.50",
            "similarity_score": null
        }))
        .unwrap();
        let card = render_card(&result);
        assert_eq!(card.fee, "$120.50");
        assert_eq!(card.similarity, "0.0");
    }

    #[test]
    fn test_text_output_mentions_telehealth() {
        let result: ProviderResult =
            serde_json::from_value(json!({"name": "Sam", "telehealth_available": true})).unwrap();
        let text = render_card(&result).to_string();
        assert!(text.contains("Sam"));
        assert!(text.contains("Telehealth Available"));
    }

    #[test]
    fn test_page_text_lists_header_then_cards() {
        let DisplayModel::Results(page) = render(&response(json!({
            "query": "grief",
            "total_found": 1,
            "results": [{"name": "Lee"}]
        }))) else {
            panic!("Expected results");
        };
        let text = page.to_string();
        let title = text.find("Search Results for \"grief\"").unwrap();
        let stats = text.find("Found 1 providers").unwrap();
        let name = text.find("Lee").unwrap();
        assert!(title < stats && stats < name);
    }

    proptest! {
        #[test]
        fn prop_truncation_law(description in "\\PC{0,300}") {
            let shown = truncate_description(&description);
            prop_assert!(shown.chars().count() <= DESCRIPTION_LIMIT + ELLIPSIS.len());
            if shown != description {
                let kept = shown.strip_suffix(ELLIPSIS).unwrap();
                prop_assert!(description.starts_with(kept));
            }
        }

        #[test]
        fn prop_render_is_idempotent(
            scores in proptest::collection::vec(0.0f64..=1.0, 0..6),
            query in "[a-z ]{1,30}",
        ) {
            let results: Vec<serde_json::Value> = scores
                .iter()
                .enumerate()
                .map(|(i, s)| json!({"name": format!("Provider {i}"), "similarity_score": s}))
                .collect();
            let response = response(json!({"query": query, "total_found": results.len(), "results": results}));
            prop_assert_eq!(render(&response), render(&response));
        }
    }
}
