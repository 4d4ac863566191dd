use serde::Deserialize;

/// A single recommendation request
///
/// Budget bounds are taken as given: a minimum above the maximum is not
/// rejected and simply matches nothing in the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GiftQuery {
    pub occasion: String,
    pub age: u32,
    pub gender: String,
    /// Free-form interests separated by `,`, `;` or `/`
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub budget_min: i64,
    #[serde(default = "default_budget_max")]
    pub budget_max: i64,
}

fn default_budget_max() -> i64 {
    1_000_000_000
}

/// Splits an interests string on `,`, `;` and `/` into lowercased, trimmed
/// keywords, dropping empty tokens.
pub fn split_interests(interests: &str) -> Vec<String> {
    interests
        .split([',', ';', '/'])
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}
