use std::cell::Cell;

use serde::Serialize;

use crate::api::{GenerateTripResponse, TripApi};
use crate::config::TripPlannerConfig;
use crate::page::{GenerateForm, PageShell};
use crate::routes::TripRoute;
use crate::trip_id::TripId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratePhase {
    #[default]
    Idle,
    AwaitingResponse,
    Navigated,
    IdleWithError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    Navigated { trip_id: TripId, url: String },
    /// The backend rejected the input; its message was shown.
    Rejected { error: String },
    Failed,
}

pub struct GenerateFormController<S, F, A> {
    shell: S,
    form: F,
    api: A,
    config: TripPlannerConfig,
    phase: Cell<GeneratePhase>,
}

impl<S, F, A> GenerateFormController<S, F, A>
where
    S: PageShell,
    F: GenerateForm,
    A: TripApi<Payload = F::Payload>,
{
    pub fn new(shell: S, form: F, api: A, config: TripPlannerConfig) -> Self {
        Self {
            shell,
            form,
            api,
            config,
            phase: Cell::new(GeneratePhase::Idle),
        }
    }

    pub fn phase(&self) -> GeneratePhase {
        self.phase.get()
    }

    /// Runs one submission. The caller has already suppressed the native
    /// form submission.
    pub async fn handle_submit(&self) -> GenerateOutcome {
        self.form.set_planning_visible(true);
        self.form.set_itinerary_visible(false);

        let payload = match self.form.payload() {
            Ok(payload) => payload,
            Err(error) => {
                tracing::warn!(%error, "trip form could not be serialized");
                self.fail(&error.to_string());
                return GenerateOutcome::Failed;
            }
        };

        self.phase.set(GeneratePhase::AwaitingResponse);
        tracing::debug!("submitting trip generation form");
        match self.api.generate_trip(payload).await {
            Ok(GenerateTripResponse::Created { trip_id }) => {
                let url = self.config.url_for(&TripRoute::Dashboard {
                    trip_id: trip_id.clone(),
                });
                tracing::debug!(%trip_id, %url, "trip generated, opening dashboard");
                self.phase.set(GeneratePhase::Navigated);
                self.shell.navigate(&url);
                GenerateOutcome::Navigated { trip_id, url }
            }
            Ok(GenerateTripResponse::Rejected { error }) => {
                tracing::warn!(%error, "backend rejected trip generation");
                self.shell.alert(&error);
                self.form.set_planning_visible(false);
                self.phase.set(GeneratePhase::IdleWithError);
                GenerateOutcome::Rejected { error }
            }
            Err(error) => {
                tracing::warn!(%error, "trip generation request failed");
                self.fail(&error.to_string());
                GenerateOutcome::Failed
            }
        }
    }

    fn fail(&self, diagnostic: &str) {
        self.shell.log_error(diagnostic);
        self.shell.alert(&self.config.messages.generate_failed);
        self.form.set_planning_visible(false);
        self.phase.set(GeneratePhase::IdleWithError);
    }
}
