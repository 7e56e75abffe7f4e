//! Wire types for the search API

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of results requested for every search
pub const MAX_RESULTS: u32 = 3;

/// Category of professional
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderType {
    #[default]
    Therapist,
    LifeCoach,
    NutritionCoach,
}

impl ProviderType {
    pub const ALL: [ProviderType; 3] = [
        ProviderType::Therapist,
        ProviderType::LifeCoach,
        ProviderType::NutritionCoach,
    ];

    /// Wire name (`therapist`, `life_coach`, `nutrition_coach`)
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::Therapist => "therapist",
            ProviderType::LifeCoach => "life_coach",
            ProviderType::NutritionCoach => "nutrition_coach",
        }
    }

    /// Strict parse, used for filter input.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    /// Lenient parse for response data. Unknown or missing means therapist.
    pub fn from_wire(s: Option<&str>) -> Self {
        s.and_then(Self::parse).unwrap_or_default()
    }
}

/// POST /search body. Optional keys are omitted, never sent as null.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub max_results: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<ProviderType>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub total_found: u64,
    /// Server ranking order, never re-sorted
    #[serde(default)]
    pub results: Option<Vec<ProviderResult>>,
}

impl SearchResponse {
    pub fn results(&self) -> &[ProviderResult] {
        self.results.as_deref().unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.results().is_empty()
    }
}

/// One provider profile as returned by the API.
///
/// Several fields are loosely typed upstream (`languages` may be a list or a
/// bare string, `fee_individual` a number or a string), so they are kept as
/// JSON values and interpreted by the accessors below.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ProviderResult {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub fee_individual: Option<Value>,
    #[serde(default)]
    pub languages: Option<Value>,
    #[serde(default)]
    pub specialties: Option<Value>,
    #[serde(default)]
    pub similarity_score: Option<f64>,
    #[serde(default)]
    pub description_preview: Option<String>,
    #[serde(default)]
    pub telehealth_available: Option<bool>,
    #[serde(default)]
    pub glance_appointments: Option<Value>,
    #[serde(default)]
    pub provider_type: Option<String>,
    #[serde(default)]
    pub profile_url: Option<String>,
    #[serde(default)]
    pub ranking_explanation: Option<String>,
}

impl ProviderResult {
    /// Languages spoken. A list is taken as-is, a scalar becomes a single
    /// entry, anything else defaults to English.
    pub fn languages(&self) -> Vec<String> {
        match &self.languages {
            Some(Value::Array(items)) => items.iter().map(value_to_text).collect(),
            Some(Value::Null) | None => vec!["English".to_string()],
            Some(Value::String(s)) if s.is_empty() => vec!["English".to_string()],
            Some(other) => vec![value_to_text(other)],
        }
    }

    /// Specialties in server order; empty unless the field is a list.
    pub fn specialties(&self) -> Vec<String> {
        match &self.specialties {
            Some(Value::Array(items)) => items.iter().map(value_to_text).collect(),
            _ => Vec::new(),
        }
    }

    /// Match score in [0, 1] as sent. Missing or null counts as 0.
    pub fn similarity(&self) -> f64 {
        self.similarity_score.unwrap_or(0.0)
    }

    /// Per-session fee as display text, only when it is a positive amount.
    /// Numeric strings are kept verbatim so `"120.50"` stays `120.50`.
    pub fn fee(&self) -> Option<String> {
        match self.fee_individual.as_ref()? {
            Value::Number(n) => {
                let fee = n.as_f64()?;
                (fee.is_finite() && fee > 0.0).then(|| fee.to_string())
            }
            Value::String(s) => {
                let raw = s.trim();
                let fee = raw.parse::<f64>().ok()?;
                (fee.is_finite() && fee > 0.0).then(|| raw.to_string())
            }
            _ => None,
        }
    }

    /// Explicit flag, "online" inside the appointment summary text, or an
    /// `"online"` entry when the summary is a list.
    pub fn telehealth_available(&self) -> bool {
        if self.telehealth_available == Some(true) {
            return true;
        }
        match &self.glance_appointments {
            Some(Value::String(s)) => s.contains("online"),
            Some(Value::Array(items)) => items
                .iter()
                .any(|v| v.as_str() == Some("online")),
            _ => false,
        }
    }

    pub fn provider_type(&self) -> ProviderType {
        ProviderType::from_wire(self.provider_type.as_deref())
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// GET /health body. Only the profile count is used.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    pub total_profiles: u64,
}

/// Stats shown in the header when the health check succeeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileStats {
    pub total_profiles: u64,
}
