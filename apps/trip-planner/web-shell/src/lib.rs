#![allow(clippy::needless_pass_by_value)]

#[cfg(any(target_arch = "wasm32", test))]
mod shell_config;
#[cfg(target_arch = "wasm32")]
mod wasm_constants;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use async_trait::async_trait;
    use gloo_net::http::{Request, Response};
    use serde::de::DeserializeOwned;
    use trip_planner_core::{
        CONFIG_GLOBAL_NAME, DeleteController, DeleteTrigger, DeleteTripResponse, GenerateForm,
        GenerateFormController, GenerateTripResponse, PageError, PageShell, ShellDiagnostics,
        TripApi, TripApiError, TripBoard, TripId, TripPlannerConfig, TripRoute,
        bind_delete_triggers, decode_trip_response,
    };
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{Document, Element, FormData, HtmlElement, HtmlFormElement, Window};

    use crate::shell_config::{generate_form_mismatch_message, resolve_shell_config};
    use crate::wasm_constants::*;

    mod dom;
    mod lifecycle;
    mod network;

    use dom::*;
    use lifecycle::*;
    use network::*;

    type BrowserDeleteController = DeleteController<BrowserPage, BrowserTripBoard, BrowserTripApi>;
    type BrowserGenerateController =
        GenerateFormController<BrowserPage, BrowserGenerateForm, BrowserTripApi>;

    thread_local! {
        static DIAGNOSTICS: RefCell<ShellDiagnostics> = RefCell::new(ShellDiagnostics::default());
        static DOM_READY_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static DELETE_CLICK_HANDLERS: RefCell<Vec<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(Vec::new()) };
        static GENERATE_SUBMIT_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        set_boot_phase("booting", "waiting for document");
        if let Err(error) = schedule_install_on_dom_ready() {
            set_boot_error(&error);
        }
    }

    #[wasm_bindgen]
    pub fn boot_diagnostics_json() -> String {
        DIAGNOSTICS.with(|state| state.borrow().to_json())
    }

    fn install_controllers() -> Result<(), String> {
        let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
        let document = window
            .document()
            .ok_or_else(|| "document is unavailable".to_string())?;

        let config = load_shell_config(&window);
        update_route_path();

        let page = BrowserPage::new(window.clone());
        let api = BrowserTripApi::new(config.clone());

        let delete_controller = Rc::new(DeleteController::new(
            page.clone(),
            BrowserTripBoard::new(document.clone(), &config),
            api.clone(),
            config.clone(),
        ));
        let bound = install_delete_handlers(&document, &config, &delete_controller)?;

        let form_bound = match BrowserGenerateForm::find(&document, &config) {
            Some(form) => {
                let generate_controller = Rc::new(GenerateFormController::new(
                    page,
                    form.clone(),
                    api,
                    config.clone(),
                ));
                install_generate_handler(&form, &generate_controller)?
            }
            None => false,
        };

        DIAGNOSTICS.with(|state| {
            let mut state = state.borrow_mut();
            state.delete_triggers_bound += bound;
            state.generate_form_bound |= form_bound;
        });
        tracing::debug!(bound, form_bound, "trip planner handlers installed");
        set_boot_phase(
            "ready",
            &format!("{bound} delete triggers bound, generate form bound: {form_bound}"),
        );
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::boot_diagnostics_json;

#[cfg(not(target_arch = "wasm32"))]
pub fn boot_diagnostics_json() -> String {
    "{\"phase\":\"native\",\"detail\":\"trip planner diagnostics only available on wasm\"}"
        .to_string()
}
