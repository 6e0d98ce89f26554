use super::*;

pub(super) fn schedule_install_on_dom_ready() -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
    let document = window
        .document()
        .ok_or_else(|| "document is unavailable".to_string())?;

    if !document_is_loading(&document) {
        run_install();
        return Ok(());
    }

    DOM_READY_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return Ok(());
        }
        let callback =
            Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event: web_sys::Event| {
                run_install();
            }));
        document
            .add_event_listener_with_callback(
                DOM_CONTENT_LOADED_EVENT,
                callback.as_ref().unchecked_ref(),
            )
            .map_err(|error| {
                format!(
                    "failed to listen for {DOM_CONTENT_LOADED_EVENT}: {}",
                    js_error_message(&error)
                )
            })?;
        *slot.borrow_mut() = Some(callback);
        Ok(())
    })
}

fn document_is_loading(document: &Document) -> bool {
    document.ready_state() == "loading"
}

fn run_install() {
    set_boot_phase("installing", "binding trip planner handlers");
    if let Err(error) = install_controllers() {
        set_boot_error(&error);
    }
}

pub(super) fn set_boot_phase(phase: &str, detail: &str) {
    DIAGNOSTICS.with(|state| state.borrow_mut().set_phase(phase, detail));
}

pub(super) fn set_boot_error(message: &str) {
    web_sys::console::error_2(
        &JsValue::from_str(DIAGNOSTIC_LOG_PREFIX),
        &JsValue::from_str(message),
    );
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.record_error(message);
        state.set_phase("error", "startup failed");
    });
}

/// Reads the optional config global, as a JSON string or a plain object.
pub(super) fn load_shell_config(window: &Window) -> TripPlannerConfig {
    let raw = config_global_json(window);
    let (config, error) = resolve_shell_config(raw.as_deref());
    if let Some(error) = error {
        let message = format!("ignoring {CONFIG_GLOBAL_NAME}: {error}");
        tracing::warn!(%error, "invalid trip planner config, using defaults");
        web_sys::console::error_2(
            &JsValue::from_str(DIAGNOSTIC_LOG_PREFIX),
            &JsValue::from_str(&message),
        );
        DIAGNOSTICS.with(|state| state.borrow_mut().record_error(&message));
    }
    config
}

fn config_global_json(window: &Window) -> Option<String> {
    let value = js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL_NAME)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    if let Some(raw) = value.as_string() {
        return Some(raw);
    }
    js_sys::JSON::stringify(&value).ok()?.as_string()
}

pub(super) fn update_route_path() {
    let route_path = current_pathname();
    DIAGNOSTICS.with(|state| state.borrow_mut().route_path = route_path);
}

pub(super) fn current_pathname() -> String {
    let Some(window) = web_sys::window() else {
        return "/".to_string();
    };
    let Ok(pathname) = window.location().pathname() else {
        return "/".to_string();
    };
    if pathname.trim().is_empty() {
        "/".to_string()
    } else {
        pathname
    }
}
