pub mod api;
pub mod config;
pub mod delete;
pub mod diagnostics;
pub mod generate;
pub mod page;
pub mod routes;
pub mod trip_id;

pub use api::{
    DeleteTripResponse, GenerateTripResponse, TripApi, TripApiError, TripApiErrorKind,
    decode_trip_response,
};
pub use config::{CONFIG_GLOBAL_NAME, ConfigError, TripPlannerConfig, TripPlannerMessages};
pub use delete::{DeleteController, DeleteOutcome, bind_delete_triggers};
pub use diagnostics::ShellDiagnostics;
pub use generate::{GenerateFormController, GenerateOutcome, GeneratePhase};
pub use page::{DeleteTrigger, GenerateForm, PageError, PageShell, TripBoard};
pub use routes::TripRoute;
pub use trip_id::{TripId, TripIdError};
