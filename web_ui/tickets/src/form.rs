//! Wires the character counter and the validity gate onto the ticket submission form.
//!
//! Every element here is optional. A page without a description field still gets the
//! submission gate, and a page without a form still gets the counter.

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use helpdesk_web_ui_shared::add_element_classes;
use helpdesk_web_ui_shared::utils::{find_element_by_id, find_element_by_selector};
use helpdesk_web_ui_shared::BindError;
use web_sys::{Element, HtmlFormElement, HtmlTextAreaElement};

use crate::counter::count_display;
use crate::gate::GateDecision;
use crate::TicketConfig;

const EXPECT_TEXTAREA: &str = "a <textarea> element";
const EXPECT_ELEMENT: &str = "an element";
const EXPECT_FORM: &str = "a <form> element";

pub struct TicketFormGuard {
    listeners: Vec<EventListener>,
}

impl TicketFormGuard {
    /// Attaches whatever parts of the behaviour the page has elements for. Only a broken
    /// selector in the config is an error.
    pub fn bind(config: &TicketConfig) -> Result<Self, BindError> {
        let mut listeners = Vec::with_capacity(2);

        let description: Option<HtmlTextAreaElement> =
            optional(find_element_by_id(&config.description_id, EXPECT_TEXTAREA))?;
        let count: Option<Element> =
            optional(find_element_by_id(&config.count_id, EXPECT_ELEMENT))?;

        match (description, count) {
            (Some(description), Some(count)) => {
                let max = config.max_chars;
                render_count(&description, &count, max);

                let field = description.clone();
                listeners.push(EventListener::new(&description, "input", move |_| {
                    render_count(&field, &count, max);
                }));
            }
            _ => {
                #[cfg(debug_assertions)]
                console::debug!("ticket_form::bind -> no description counter on this page");
            }
        }

        let form: Option<HtmlFormElement> =
            optional(find_element_by_selector(&config.form_selector, EXPECT_FORM))?;
        match form {
            Some(form) => {
                let target = form.clone();
                let validated_class = config.validated_class.clone();
                listeners.push(EventListener::new_with_options(
                    &form,
                    "submit",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        if GateDecision::for_validity(target.check_validity()).is_blocked() {
                            event.prevent_default();
                            event.stop_propagation();
                        }
                        add_element_classes!(target, [validated_class.as_str()]);
                    },
                ));
            }
            None => {
                #[cfg(debug_assertions)]
                console::debug!("ticket_form::bind -> no form on this page");
            }
        }

        Ok(TicketFormGuard { listeners })
    }

    /// How many listeners ended up attached, 0 to 2.
    pub fn bound_listeners(&self) -> usize {
        self.listeners.len()
    }

    /// Leaves the listeners attached for the rest of the page's life.
    pub fn forget(self) {
        self.listeners.into_iter().for_each(EventListener::forget);
    }
}

fn render_count(description: &HtmlTextAreaElement, count: &Element, max: usize) {
    count.set_text_content(Some(&count_display(&description.value(), max)));
}

/// An element of the wrong kind is treated the same as a missing one.
fn optional<T>(found: Result<Option<T>, BindError>) -> Result<Option<T>, BindError> {
    match found {
        Err(BindError::WrongElement { id, expected }) => {
            console::warn!(format!("skipping '{}', it is not {}", id, expected));
            Ok(None)
        }
        other => other,
    }
}
