//! Food stations
//!
//! The fixed four-station registry, plus lenient resolution of stored
//! food-selection values. Older saved rows hold the selection in several
//! shapes (JSON array, comma-separated string, bare code, numeric code),
//! so parsing here degrades to best-effort labels and never errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;

/// Shown when a single stored value resolves to nothing.
pub const NO_FOOD_SELECTION: &str = "No food selection";

/// Shown when a whole stored selection resolves to nothing.
pub const NO_FOOD_SELECTIONS: &str = "No food selections";

/// One of the four food stations offered for takeaway tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodStation {
    /// Curry goat, rice & roti.
    Station1,

    /// Jerk pork & chicken with festival.
    Station2,

    /// Fish & vegetable pasta.
    Station3,

    /// Chinese - vegetable lo mein, sweet & sour chicken.
    Station4,
}

impl FoodStation {
    /// Every station, in menu order.
    pub const ALL: [FoodStation; 4] = [
        FoodStation::Station1,
        FoodStation::Station2,
        FoodStation::Station3,
        FoodStation::Station4,
    ];

    /// Coded value the backend stores, e.g. `station2`.
    pub fn value(self) -> &'static str {
        match self {
            Self::Station1 => "station1",
            Self::Station2 => "station2",
            Self::Station3 => "station3",
            Self::Station4 => "station4",
        }
    }

    /// Human menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Station1 => "Curry goat, rice & roti",
            Self::Station2 => "Jerk pork & chicken with festival",
            Self::Station3 => "Fish & vegetable pasta",
            Self::Station4 => "Chinese - vegetable lo mein, sweet & sour chicken",
        }
    }

    /// Case-insensitive match on the coded value, or on a bare station
    /// number 1-4 as some legacy rows stored it.
    pub fn from_code(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "station1" | "1" => Some(Self::Station1),
            "station2" | "2" => Some(Self::Station2),
            "station3" | "3" => Some(Self::Station3),
            "station4" | "4" => Some(Self::Station4),
            _ => None,
        }
    }
}

/// Resolves one stored food code to its menu label.
///
/// Empty input yields the [`NO_FOOD_SELECTION`] sentinel; a code that
/// matches no station passes through unchanged.
pub fn food_label(raw: &str) -> String {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return NO_FOOD_SELECTION.to_owned();
    }

    FoodStation::from_code(trimmed)
        .map_or_else(|| raw.to_owned(), |station| station.label().to_owned())
}

/// Resolves a stored food-selection value of unknown shape to a
/// semicolon-joined list of menu labels.
///
/// Arrays are taken element-wise; strings are tried as a JSON array first
/// and fall back to comma-separated tokens; numbers are single codes.
/// Tokens that resolve to nothing are dropped, and an empty result yields
/// [`NO_FOOD_SELECTIONS`].
pub fn parse_food_selection(stored: &Value) -> String {
    let labels: Vec<String> = raw_tokens(stored)
        .iter()
        .map(|token| food_label(token))
        .filter(|label| !label.is_empty() && label.as_str() != NO_FOOD_SELECTION)
        .collect();

    if labels.is_empty() {
        NO_FOOD_SELECTIONS.to_owned()
    } else {
        labels.join("; ")
    }
}

/// Same leniency as [`parse_food_selection`], keeping only tokens that
/// resolve to a registry station. Used when loading persisted tickets back
/// into editable drafts.
pub fn parse_stations(stored: &Value) -> SmallVec<[FoodStation; 4]> {
    let mut stations = SmallVec::new();

    for token in raw_tokens(stored) {
        if let Some(station) = FoodStation::from_code(&token) {
            if !stations.contains(&station) {
                stations.push(station);
            }
        }
    }

    stations
}

/// Splits a stored value into raw string tokens, before label resolution.
fn raw_tokens(stored: &Value) -> Vec<String> {
    match stored {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().map(token_text).collect(),
        Value::String(text) => string_tokens(text),
        other => vec![token_text(other)],
    }
}

fn string_tokens(text: &str) -> Vec<String> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => items.iter().map(token_text).collect(),
        Ok(Value::Null) => Vec::new(),
        Ok(other) => vec![token_text(&other)],
        Err(_) => text
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(ToOwned::to_owned)
            .collect(),
    }
}

fn token_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn label_matches_value_number_and_case_variants() {
        let expected = FoodStation::Station2.label();

        assert_eq!(food_label("station2"), expected);
        assert_eq!(food_label("2"), expected);
        assert_eq!(food_label("STATION2"), expected);
        assert_eq!(food_label(" station2 "), expected);
    }

    #[test]
    fn unmatched_code_passes_through_unchanged() {
        assert_eq!(food_label("station9"), "station9");
        assert_eq!(food_label("soup"), "soup");
    }

    #[test]
    fn empty_input_yields_the_sentinel() {
        assert_eq!(food_label(""), NO_FOOD_SELECTION);
        assert_eq!(food_label("   "), NO_FOOD_SELECTION);
    }

    #[test]
    fn selection_from_json_array_value() {
        let stored = json!(["station1", "station3"]);

        assert_eq!(
            parse_food_selection(&stored),
            "Curry goat, rice & roti; Fish & vegetable pasta"
        );
    }

    #[test]
    fn selection_from_json_encoded_string() {
        let stored = json!("[\"station2\",\"station4\"]");

        assert_eq!(
            parse_food_selection(&stored),
            format!(
                "{}; {}",
                FoodStation::Station2.label(),
                FoodStation::Station4.label()
            )
        );
    }

    #[test]
    fn selection_from_comma_separated_string() {
        let stored = json!("station1, station2");

        assert_eq!(
            parse_food_selection(&stored),
            format!(
                "{}; {}",
                FoodStation::Station1.label(),
                FoodStation::Station2.label()
            )
        );
    }

    #[test]
    fn selection_from_bare_numeric_code() {
        assert_eq!(
            parse_food_selection(&json!(3)),
            FoodStation::Station3.label()
        );
        assert_eq!(
            parse_food_selection(&json!("1")),
            FoodStation::Station1.label()
        );
    }

    #[test]
    fn unknown_tokens_pass_through_in_joined_output() {
        let stored = json!(["station1", "mystery"]);

        assert_eq!(
            parse_food_selection(&stored),
            format!("{}; mystery", FoodStation::Station1.label())
        );
    }

    #[test]
    fn empty_or_null_selection_yields_the_plural_sentinel() {
        assert_eq!(parse_food_selection(&Value::Null), NO_FOOD_SELECTIONS);
        assert_eq!(parse_food_selection(&json!("")), NO_FOOD_SELECTIONS);
        assert_eq!(parse_food_selection(&json!([])), NO_FOOD_SELECTIONS);
        assert_eq!(parse_food_selection(&json!("null")), NO_FOOD_SELECTIONS);
    }

    #[test]
    fn stations_keep_registry_matches_and_drop_the_rest() {
        let stored = json!(["station4", "nonsense", "2", "station4"]);
        let stations = parse_stations(&stored);

        assert_eq!(
            stations.as_slice(),
            [FoodStation::Station4, FoodStation::Station2]
        );
    }

    #[test]
    fn station_codes_round_trip_through_serde() {
        let encoded = serde_json::to_string(&FoodStation::Station3).unwrap_or_default();

        assert_eq!(encoded, "\"station3\"");
    }
}
