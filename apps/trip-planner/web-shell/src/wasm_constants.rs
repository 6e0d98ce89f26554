pub(crate) const DOM_CONTENT_LOADED_EVENT: &str = "DOMContentLoaded";
pub(crate) const CLICK_EVENT: &str = "click";
pub(crate) const SUBMIT_EVENT: &str = "submit";
pub(crate) const DISPLAY_PROPERTY: &str = "display";
pub(crate) const DISPLAY_SHOWN: &str = "block";
pub(crate) const DISPLAY_HIDDEN: &str = "none";
pub(crate) const BOUND_MARKER_VALUE: &str = "1";
pub(crate) const DIAGNOSTIC_LOG_PREFIX: &str = "Error:";
pub(crate) const DIAGNOSTIC_WARNING_PREFIX: &str = "Warning:";
pub(crate) const JSON_CONTENT_TYPE: &str = "application/json";
