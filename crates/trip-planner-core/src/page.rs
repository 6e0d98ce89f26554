//! Seams through which the controllers reach the page.
//!
//! The web shell implements these over `web-sys`; tests substitute recording
//! fakes.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("{0} is unavailable")]
    Unavailable(&'static str),
    #[error("failed to serialize form: {0}")]
    FormSerialization(String),
}

/// Window-level side effects: dialogs, diagnostics, navigation.
pub trait PageShell {
    /// Blocking confirmation dialog. `false` when declined or unavailable.
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
    /// Writes one entry to the diagnostic console.
    fn log_error(&self, message: &str);
    fn reload(&self);
    /// Full-page navigation to `url`.
    fn navigate(&self, url: &str);
}

/// Region of the page holding the saved-trip cards.
pub trait TripBoard {
    fn card_count(&self) -> usize;
}

/// An element that deletes one saved trip when clicked.
pub trait DeleteTrigger {
    /// Raw value of the trip id attribute, if the element carries one.
    fn trip_id_attribute(&self) -> Option<String>;
    /// Removes the card enclosing this trigger. Returns whether one was found.
    fn remove_card(&self) -> bool;
    fn is_bound(&self) -> bool;
    fn mark_bound(&self);
}

/// The trip-generation form and the elements it toggles.
pub trait GenerateForm {
    type Payload;

    /// Best effort; a missing indicator is ignored.
    fn set_planning_visible(&self, visible: bool);
    /// Best effort; a missing container is ignored.
    fn set_itinerary_visible(&self, visible: bool);
    fn payload(&self) -> Result<Self::Payload, PageError>;
}
