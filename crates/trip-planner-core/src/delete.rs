use crate::api::TripApi;
use crate::config::TripPlannerConfig;
use crate::page::{DeleteTrigger, PageShell, TripBoard};
use crate::trip_id::TripId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The trigger had no usable trip id; nothing was sent.
    MissingTripId,
    Declined,
    CardRemoved { remaining_cards: usize },
    PageReloaded,
    /// The backend answered `success: false`.
    Rejected,
    /// The request failed, or the deleted trip's card could not be found.
    Failed,
}

/// Binds `attach` to every trigger not already bound and marks it.
///
/// A trigger is marked only after `attach` succeeds; the first failure stops
/// the pass. Returns the number of newly bound triggers, so a second pass over
/// the same page binds nothing.
pub fn bind_delete_triggers<T, F, E>(
    triggers: impl IntoIterator<Item = T>,
    mut attach: F,
) -> Result<usize, E>
where
    T: DeleteTrigger,
    F: FnMut(&T) -> Result<(), E>,
{
    let mut bound = 0;
    for trigger in triggers {
        if trigger.is_bound() {
            continue;
        }
        attach(&trigger)?;
        trigger.mark_bound();
        bound += 1;
    }
    Ok(bound)
}

pub struct DeleteController<S, B, A> {
    shell: S,
    board: B,
    api: A,
    config: TripPlannerConfig,
}

impl<S, B, A> DeleteController<S, B, A>
where
    S: PageShell,
    B: TripBoard,
    A: TripApi,
{
    pub fn new(shell: S, board: B, api: A, config: TripPlannerConfig) -> Self {
        Self {
            shell,
            board,
            api,
            config,
        }
    }

    pub async fn handle_click<T: DeleteTrigger>(&self, trigger: &T) -> DeleteOutcome {
        let trip_id = match trigger.trip_id_attribute().as_deref().map(TripId::parse) {
            Some(Ok(trip_id)) => trip_id,
            Some(Err(error)) => {
                tracing::warn!(%error, "delete trigger carries an invalid trip id");
                self.fail(&format!("invalid trip id on delete trigger: {error}"));
                return DeleteOutcome::MissingTripId;
            }
            None => {
                tracing::warn!(
                    attribute = %self.config.trip_id_attribute,
                    "delete trigger is missing its trip id"
                );
                self.fail(&format!(
                    "delete trigger is missing {}",
                    self.config.trip_id_attribute
                ));
                return DeleteOutcome::MissingTripId;
            }
        };

        if !self.shell.confirm(&self.config.messages.delete_confirm) {
            tracing::debug!(%trip_id, "trip deletion declined");
            return DeleteOutcome::Declined;
        }

        tracing::debug!(%trip_id, "deleting trip");
        match self.api.delete_trip(&trip_id).await {
            Ok(response) if response.success => {
                if !trigger.remove_card() {
                    tracing::warn!(%trip_id, "deleted trip has no card to remove");
                    self.fail(&format!("deleted trip {trip_id} has no card to remove"));
                    return DeleteOutcome::Failed;
                }
                let remaining_cards = self.board.card_count();
                if remaining_cards == self.config.reload_when_remaining_cards {
                    tracing::debug!(%trip_id, remaining_cards, "reloading after last trip card");
                    self.shell.reload();
                    return DeleteOutcome::PageReloaded;
                }
                DeleteOutcome::CardRemoved { remaining_cards }
            }
            Ok(_) => {
                tracing::warn!(%trip_id, "backend refused trip deletion");
                self.shell.alert(&self.config.messages.delete_failed);
                DeleteOutcome::Rejected
            }
            Err(error) => {
                tracing::warn!(%trip_id, %error, "trip deletion request failed");
                self.fail(&error.to_string());
                DeleteOutcome::Failed
            }
        }
    }

    fn fail(&self, diagnostic: &str) {
        self.shell.log_error(diagnostic);
        self.shell.alert(&self.config.messages.delete_failed);
    }
}
