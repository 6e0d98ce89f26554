use serde::{Deserialize, Serialize};

use crate::routes::TripRoute;

/// Name of the optional page global the web shell reads its overrides from.
pub const CONFIG_GLOBAL_NAME: &str = "__TRIP_PLANNER_CONFIG__";

pub const DEFAULT_DELETE_TRIGGER_SELECTOR: &str = ".delete-trip";
pub const DEFAULT_TRIP_ID_ATTRIBUTE: &str = "data-trip-id";
pub const DEFAULT_TRIP_CARD_SELECTOR: &str = ".col-md-6";
pub const DEFAULT_GENERATE_FORM_ID: &str = "tripForm";
pub const DEFAULT_PLANNING_INDICATOR_ID: &str = "planning";
pub const DEFAULT_ITINERARY_CONTAINER_ID: &str = "itineraryContainer";
pub const DEFAULT_BOUND_MARKER_ATTRIBUTE: &str = "data-trip-planner-bound";
pub const DEFAULT_RELOAD_WHEN_REMAINING_CARDS: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(String),
    #[error("base url must use http:// or https:// with a host, or be a root-relative path")]
    InvalidBaseUrl,
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripPlannerConfig {
    /// Prefix for every request and navigation. Empty means same origin.
    pub base_url: String,
    pub delete_trigger_selector: String,
    pub trip_id_attribute: String,
    pub trip_card_selector: String,
    pub generate_form_id: String,
    pub planning_indicator_id: String,
    pub itinerary_container_id: String,
    pub bound_marker_attribute: String,
    /// After a successful delete, a remaining card count equal to this forces
    /// a full reload so the server renders the empty-state page.
    pub reload_when_remaining_cards: usize,
    pub messages: TripPlannerMessages,
}

impl Default for TripPlannerConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            delete_trigger_selector: DEFAULT_DELETE_TRIGGER_SELECTOR.to_string(),
            trip_id_attribute: DEFAULT_TRIP_ID_ATTRIBUTE.to_string(),
            trip_card_selector: DEFAULT_TRIP_CARD_SELECTOR.to_string(),
            generate_form_id: DEFAULT_GENERATE_FORM_ID.to_string(),
            planning_indicator_id: DEFAULT_PLANNING_INDICATOR_ID.to_string(),
            itinerary_container_id: DEFAULT_ITINERARY_CONTAINER_ID.to_string(),
            bound_marker_attribute: DEFAULT_BOUND_MARKER_ATTRIBUTE.to_string(),
            reload_when_remaining_cards: DEFAULT_RELOAD_WHEN_REMAINING_CARDS,
            messages: TripPlannerMessages::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripPlannerMessages {
    pub delete_confirm: String,
    pub delete_failed: String,
    pub generate_failed: String,
}

impl Default for TripPlannerMessages {
    fn default() -> Self {
        Self {
            delete_confirm: "Are you sure you want to delete this trip?".to_string(),
            delete_failed: "Error deleting trip.".to_string(),
            generate_failed: "An error occurred. Please try again.".to_string(),
        }
    }
}

impl TripPlannerConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|error| ConfigError::Parse(error.to_string()))?;
        config.validated()
    }

    /// Normalizes the base url and rejects empty selectors.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        self.base_url = normalize_base_url(&self.base_url)?;
        let required = [
            ("delete_trigger_selector", &self.delete_trigger_selector),
            ("trip_id_attribute", &self.trip_id_attribute),
            ("trip_card_selector", &self.trip_card_selector),
            ("generate_form_id", &self.generate_form_id),
            ("bound_marker_attribute", &self.bound_marker_attribute),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField { field });
            }
        }
        Ok(self)
    }

    #[must_use]
    pub fn url_for(&self, route: &TripRoute) -> String {
        format!("{}{}", self.base_url, route.to_path())
    }
}

pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() || trimmed.starts_with('/') {
        return Ok(trimmed.to_string());
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl);
    }
    let Some((_, remainder)) = trimmed.split_once("://") else {
        return Err(ConfigError::InvalidBaseUrl);
    };
    if remainder.trim().is_empty() || remainder.starts_with('/') {
        return Err(ConfigError::InvalidBaseUrl);
    }
    Ok(trimmed.to_string())
}
