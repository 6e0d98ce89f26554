use trip_planner_core::{ConfigError, TripPlannerConfig};

/// Resolves the page-supplied override, keeping defaults when it is absent or
/// unusable. The error is returned so the caller can surface it.
pub(crate) fn resolve_shell_config(raw: Option<&str>) -> (TripPlannerConfig, Option<ConfigError>) {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return (TripPlannerConfig::default(), None);
    };
    match TripPlannerConfig::from_json(raw) {
        Ok(config) => (config, None),
        Err(error) => (TripPlannerConfig::default(), Some(error)),
    }
}

/// Console message for a generate form id that names a non-form element.
pub(crate) fn generate_form_mismatch_message(form_id: &str) -> String {
    format!("#{form_id} is not a form element; trip generation is not bound")
}
