use serde::Serialize;

use crate::delete::DeleteOutcome;
use crate::generate::{GenerateOutcome, GeneratePhase};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellDiagnostics {
    pub phase: String,
    pub detail: String,
    pub route_path: String,
    pub delete_triggers_bound: usize,
    pub generate_form_bound: bool,
    pub generate_phase: GeneratePhase,
    pub delete_requests: u64,
    pub generate_submissions: u64,
    pub failures: u64,
    pub last_outcome: Option<String>,
    pub last_error: Option<String>,
}

impl Default for ShellDiagnostics {
    fn default() -> Self {
        Self {
            phase: "idle".to_string(),
            detail: "trip planner shell not started".to_string(),
            route_path: "/".to_string(),
            delete_triggers_bound: 0,
            generate_form_bound: false,
            generate_phase: GeneratePhase::Idle,
            delete_requests: 0,
            generate_submissions: 0,
            failures: 0,
            last_outcome: None,
            last_error: None,
        }
    }
}

impl ShellDiagnostics {
    pub fn set_phase(&mut self, phase: &str, detail: &str) {
        self.phase = phase.to_string();
        self.detail = detail.to_string();
        if phase != "error" {
            self.last_error = None;
        }
    }

    pub fn record_error(&mut self, message: &str) {
        self.failures += 1;
        self.last_error = Some(message.to_string());
    }

    pub fn record_delete(&mut self, outcome: &DeleteOutcome) {
        let label = match outcome {
            DeleteOutcome::MissingTripId => "delete:missing_trip_id",
            DeleteOutcome::Declined => "delete:declined",
            DeleteOutcome::CardRemoved { .. } => "delete:card_removed",
            DeleteOutcome::PageReloaded => "delete:page_reloaded",
            DeleteOutcome::Rejected => "delete:rejected",
            DeleteOutcome::Failed => "delete:failed",
        };
        if matches!(
            outcome,
            DeleteOutcome::CardRemoved { .. }
                | DeleteOutcome::PageReloaded
                | DeleteOutcome::Rejected
                | DeleteOutcome::Failed
        ) {
            self.delete_requests += 1;
        }
        self.last_outcome = Some(label.to_string());
    }

    pub fn record_generate(&mut self, outcome: &GenerateOutcome, phase: GeneratePhase) {
        let label = match outcome {
            GenerateOutcome::Navigated { .. } => "generate:navigated",
            GenerateOutcome::Rejected { .. } => "generate:rejected",
            GenerateOutcome::Failed => "generate:failed",
        };
        self.generate_submissions += 1;
        self.generate_phase = phase;
        self.last_outcome = Some(label.to_string());
    }

    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            "{\"phase\":\"error\",\"detail\":\"diagnostics serialization failed\"}".to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn declined_deletes_do_not_count_as_requests() {
        let mut diagnostics = ShellDiagnostics::default();
        diagnostics.record_delete(&DeleteOutcome::Declined);
        diagnostics.record_delete(&DeleteOutcome::CardRemoved { remaining_cards: 3 });
        assert_eq!(diagnostics.delete_requests, 1);
        assert_eq!(
            diagnostics.last_outcome.as_deref(),
            Some("delete:card_removed")
        );
    }

    #[test]
    fn phase_change_clears_last_error_unless_error() {
        let mut diagnostics = ShellDiagnostics::default();
        diagnostics.record_error("boom");
        diagnostics.set_phase("error", "startup failed");
        assert_eq!(diagnostics.last_error.as_deref(), Some("boom"));
        diagnostics.set_phase("ready", "handlers installed");
        assert_eq!(diagnostics.last_error, None);
        assert_eq!(diagnostics.failures, 1);
    }

    #[test]
    fn serializes_generate_phase_in_snake_case() {
        let mut diagnostics = ShellDiagnostics::default();
        diagnostics.record_generate(&GenerateOutcome::Failed, GeneratePhase::IdleWithError);
        let value: Value = serde_json::from_str(&diagnostics.to_json()).expect("valid json");
        assert_eq!(value["generate_phase"], json!("idle_with_error"));
        assert_eq!(value["generate_submissions"], json!(1));
        assert_eq!(value["last_outcome"], json!("generate:failed"));
    }
}
