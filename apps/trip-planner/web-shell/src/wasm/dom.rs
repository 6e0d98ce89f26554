use super::*;

#[derive(Clone)]
pub(super) struct BrowserPage {
    window: Window,
}

impl BrowserPage {
    pub(super) fn new(window: Window) -> Self {
        Self { window }
    }
}

impl PageShell for BrowserPage {
    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    fn log_error(&self, message: &str) {
        web_sys::console::error_2(
            &JsValue::from_str(DIAGNOSTIC_LOG_PREFIX),
            &JsValue::from_str(message),
        );
        DIAGNOSTICS.with(|state| state.borrow_mut().record_error(message));
    }

    fn reload(&self) {
        let _ = self.window.location().reload();
    }

    fn navigate(&self, url: &str) {
        let _ = self.window.location().set_href(url);
    }
}

pub(super) struct BrowserTripBoard {
    document: Document,
    card_selector: String,
}

impl BrowserTripBoard {
    pub(super) fn new(document: Document, config: &TripPlannerConfig) -> Self {
        Self {
            document,
            card_selector: config.trip_card_selector.clone(),
        }
    }
}

impl TripBoard for BrowserTripBoard {
    fn card_count(&self) -> usize {
        self.document
            .query_selector_all(&self.card_selector)
            .map(|cards| cards.length() as usize)
            .unwrap_or(0)
    }
}

#[derive(Clone)]
pub(super) struct BrowserDeleteTrigger {
    element: Element,
    trip_id_attribute: Rc<str>,
    card_selector: Rc<str>,
    bound_marker: Rc<str>,
}

impl DeleteTrigger for BrowserDeleteTrigger {
    fn trip_id_attribute(&self) -> Option<String> {
        self.element.get_attribute(&self.trip_id_attribute)
    }

    fn remove_card(&self) -> bool {
        match self.element.closest(&self.card_selector) {
            Ok(Some(card)) => {
                card.remove();
                true
            }
            _ => false,
        }
    }

    fn is_bound(&self) -> bool {
        self.element.has_attribute(&self.bound_marker)
    }

    fn mark_bound(&self) {
        let _ = self
            .element
            .set_attribute(&self.bound_marker, BOUND_MARKER_VALUE);
    }
}

pub(super) fn delete_triggers(
    document: &Document,
    config: &TripPlannerConfig,
) -> Result<Vec<BrowserDeleteTrigger>, String> {
    let nodes = document
        .query_selector_all(&config.delete_trigger_selector)
        .map_err(|error| {
            format!(
                "invalid delete trigger selector {:?}: {}",
                config.delete_trigger_selector,
                js_error_message(&error)
            )
        })?;

    let trip_id_attribute: Rc<str> = Rc::from(config.trip_id_attribute.as_str());
    let card_selector: Rc<str> = Rc::from(config.trip_card_selector.as_str());
    let bound_marker: Rc<str> = Rc::from(config.bound_marker_attribute.as_str());

    let mut triggers = Vec::new();
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<Element>() else {
            continue;
        };
        triggers.push(BrowserDeleteTrigger {
            element,
            trip_id_attribute: Rc::clone(&trip_id_attribute),
            card_selector: Rc::clone(&card_selector),
            bound_marker: Rc::clone(&bound_marker),
        });
    }
    Ok(triggers)
}

pub(super) fn install_delete_handlers(
    document: &Document,
    config: &TripPlannerConfig,
    controller: &Rc<BrowserDeleteController>,
) -> Result<usize, String> {
    let triggers = delete_triggers(document, config)?;
    bind_delete_triggers(triggers, |trigger| {
        let controller = Rc::clone(controller);
        let handler_trigger = trigger.clone();
        let callback =
            Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event: web_sys::Event| {
                let controller = Rc::clone(&controller);
                let trigger = handler_trigger.clone();
                spawn_local(async move {
                    let outcome = controller.handle_click(&trigger).await;
                    DIAGNOSTICS.with(|state| state.borrow_mut().record_delete(&outcome));
                });
            }));
        trigger
            .element
            .add_event_listener_with_callback(CLICK_EVENT, callback.as_ref().unchecked_ref())
            .map_err(|error| {
                format!(
                    "failed to listen for {CLICK_EVENT} on delete trigger: {}",
                    js_error_message(&error)
                )
            })?;
        DELETE_CLICK_HANDLERS.with(|slot| slot.borrow_mut().push(callback));
        Ok(())
    })
}

#[derive(Clone)]
pub(super) struct BrowserGenerateForm {
    form: HtmlFormElement,
    document: Document,
    planning_indicator_id: Rc<str>,
    itinerary_container_id: Rc<str>,
}

impl BrowserGenerateForm {
    pub(super) fn find(document: &Document, config: &TripPlannerConfig) -> Option<Self> {
        let element = document.get_element_by_id(&config.generate_form_id)?;
        let Ok(form) = element.dyn_into::<HtmlFormElement>() else {
            let message = generate_form_mismatch_message(&config.generate_form_id);
            tracing::warn!(id = %config.generate_form_id, "{message}");
            web_sys::console::warn_2(
                &JsValue::from_str(DIAGNOSTIC_WARNING_PREFIX),
                &JsValue::from_str(&message),
            );
            return None;
        };
        Some(Self {
            form,
            document: document.clone(),
            planning_indicator_id: Rc::from(config.planning_indicator_id.as_str()),
            itinerary_container_id: Rc::from(config.itinerary_container_id.as_str()),
        })
    }

    // Looked up on every toggle; templates may swap these blocks in after load.
    fn set_display(&self, id: &str, visible: bool) {
        if id.is_empty() {
            return;
        }
        let Some(element) = self.document.get_element_by_id(id) else {
            return;
        };
        let Ok(element) = element.dyn_into::<HtmlElement>() else {
            return;
        };
        let value = if visible {
            DISPLAY_SHOWN
        } else {
            DISPLAY_HIDDEN
        };
        let _ = element.style().set_property(DISPLAY_PROPERTY, value);
    }
}

impl GenerateForm for BrowserGenerateForm {
    type Payload = FormData;

    fn set_planning_visible(&self, visible: bool) {
        self.set_display(&self.planning_indicator_id, visible);
    }

    fn set_itinerary_visible(&self, visible: bool) {
        self.set_display(&self.itinerary_container_id, visible);
    }

    fn payload(&self) -> Result<FormData, PageError> {
        FormData::new_with_form(&self.form)
            .map_err(|error| PageError::FormSerialization(js_error_message(&error)))
    }
}

pub(super) fn install_generate_handler(
    form: &BrowserGenerateForm,
    controller: &Rc<BrowserGenerateController>,
) -> Result<bool, String> {
    GENERATE_SUBMIT_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return Ok(false);
        }
        let controller = Rc::clone(controller);
        let callback =
            Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |event: web_sys::Event| {
                event.prevent_default();
                let controller = Rc::clone(&controller);
                spawn_local(async move {
                    let outcome = controller.handle_submit().await;
                    let phase = controller.phase();
                    DIAGNOSTICS.with(|state| state.borrow_mut().record_generate(&outcome, phase));
                });
            }));
        form.form
            .add_event_listener_with_callback(SUBMIT_EVENT, callback.as_ref().unchecked_ref())
            .map_err(|error| {
                format!(
                    "failed to listen for {SUBMIT_EVENT} on trip form: {}",
                    js_error_message(&error)
                )
            })?;
        *slot.borrow_mut() = Some(callback);
        Ok(true)
    })
}

pub(super) fn js_error_message(error: &JsValue) -> String {
    if let Some(error) = error.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    error.as_string().unwrap_or_else(|| format!("{error:?}"))
}
