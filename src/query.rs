//! Turns the search box and filter controls into a [`SearchRequest`]

use crate::backend::types::{ProviderType, SearchRequest, MAX_RESULTS};
use crate::error::ValidationError;

/// Raw filter control values as the user left them. Empty string means
/// "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInputs {
    pub max_fee: String,
    pub state: String,
    pub language: String,
    pub provider_type: String,
    pub telehealth_only: bool,
}

/// Parsed filters for one search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub max_fee: Option<f64>,
    pub state: Option<String>,
    pub language: Option<String>,
    pub provider_type: Option<ProviderType>,
    pub telehealth_only: bool,
}

impl FilterInputs {
    pub fn parse(&self) -> Result<SearchFilters, ValidationError> {
        let max_fee = match non_empty(&self.max_fee) {
            Some(raw) => {
                let fee = raw
                    .parse::<f64>()
                    .map_err(|_| ValidationError::InvalidMaxFee(raw.to_string()))?;
                if !fee.is_finite() {
                    return Err(ValidationError::InvalidMaxFee(raw.to_string()));
                }
                Some(fee)
            }
            None => None,
        };

        let provider_type = match non_empty(&self.provider_type) {
            Some(raw) => Some(
                ProviderType::parse(raw)
                    .ok_or_else(|| ValidationError::UnknownProviderType(raw.to_string()))?,
            ),
            None => None,
        };

        Ok(SearchFilters {
            max_fee,
            state: non_empty(&self.state).map(str::to_string),
            language: non_empty(&self.language).map(str::to_string),
            provider_type,
            telehealth_only: self.telehealth_only,
        })
    }
}

impl SearchFilters {
    /// Project onto the request. Telehealth has no API key and is applied
    /// to the rendered results instead.
    pub fn into_request(self, query: String) -> SearchRequest {
        SearchRequest {
            query,
            max_results: MAX_RESULTS,
            max_fee: self.max_fee,
            state: self.state,
            languages: self.language.map(|l| vec![l]),
            provider_type: self.provider_type,
        }
    }
}

/// Build the request body for `query` with the given filters.
pub fn build_request(query: &str, filters: &FilterInputs) -> Result<SearchRequest, ValidationError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ValidationError::EmptyQuery);
    }
    Ok(filters.parse()?.into_request(query.to_string()))
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_query_only() {
        let request = build_request("spanish speaking therapist for anxiety", &FilterInputs::default()).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"query": "spanish speaking therapist for anxiety", "max_results": 3})
        );
    }

    #[test]
    fn test_all_filters() {
        let filters = FilterInputs {
            max_fee: "150".to_string(),
            state: "TX".to_string(),
            language: "Spanish".to_string(),
            provider_type: "life_coach".to_string(),
            telehealth_only: true,
        };
        let request = build_request("  stress  ", &filters).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "query": "stress",
                "max_results": 3,
                "max_fee": 150.0,
                "state": "TX",
                "languages": ["Spanish"],
                "provider_type": "life_coach"
            })
        );
    }

    #[test]
    fn test_empty_query_rejected() {
        assert_eq!(build_request("   ", &FilterInputs::default()), Err(ValidationError::EmptyQuery));
    }

    #[test]
    fn test_bad_fee_rejected() {
        let filters = FilterInputs {
            max_fee: "cheap".to_string(),
            ..Default::default()
        };
        assert_eq!(
            build_request("anxiety", &filters),
            Err(ValidationError::InvalidMaxFee("cheap".to_string()))
        );

        let filters = FilterInputs {
            max_fee: "NaN".to_string(),
            ..Default::default()
        };
        assert!(matches!(build_request("anxiety", &filters), Err(ValidationError::InvalidMaxFee(_))));
    }

    #[test]
    fn test_unknown_provider_type_rejected() {
        let filters = FilterInputs {
            provider_type: "wizard".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            build_request("anxiety", &filters),
            Err(ValidationError::UnknownProviderType(_))
        ));
    }

    fn optional(value: &'static str) -> impl Strategy<Value = String> {
        prop_oneof![Just(String::new()), Just(value.to_string())]
    }

    proptest! {
        #[test]
        fn prop_non_empty_query_always_builds(query in "[a-z]{1,12}( [a-z]{1,12}){0,4}", pad in " {0,3}") {
            let input = format!("{pad}{query}{pad}");
            let request = build_request(&input, &FilterInputs::default()).unwrap();
            prop_assert_eq!(request.query, query);
            prop_assert_eq!(request.max_results, 3);
        }

        #[test]
        fn prop_blank_query_never_builds(query in "[ \t\n]{0,8}") {
            prop_assert_eq!(build_request(&query, &FilterInputs::default()), Err(ValidationError::EmptyQuery));
        }

        #[test]
        fn prop_payload_keys_match_set_filters(
            max_fee in optional("200"),
            state in optional("NY"),
            language in optional("French"),
            provider_type in optional("nutrition_coach"),
            telehealth_only in any::<bool>(),
        ) {
            let filters = FilterInputs { max_fee, state, language, provider_type, telehealth_only };
            let request = build_request("therapist", &filters).unwrap();
            let body = serde_json::to_value(&request).unwrap();
            let object = body.as_object().unwrap();

            let expected = [
                ("max_fee", !filters.max_fee.is_empty()),
                ("state", !filters.state.is_empty()),
                ("languages", !filters.language.is_empty()),
                ("provider_type", !filters.provider_type.is_empty()),
            ];
            for (key, set) in expected {
                prop_assert_eq!(object.contains_key(key), set, "key {}", key);
            }
            prop_assert_eq!(object.len(), 2 + expected.iter().filter(|(_, set)| *set).count());
        }
    }
}
