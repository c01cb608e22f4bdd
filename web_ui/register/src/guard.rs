//! Wires the strength indicator and the confirmation check onto the registration form.

use gloo::console;
use gloo::dialogs::alert;
use gloo::events::{EventListener, EventListenerOptions};
use helpdesk_web_ui_shared::utils::{require_element_by_id, require_element_by_selector};
use helpdesk_web_ui_shared::BindError;
use web_sys::{HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::confirm::SubmitCheck;
use crate::strength::IndicatorView;
use crate::RegisterConfig;

const EXPECT_FORM: &str = "a <form> element";
const EXPECT_INPUT: &str = "an <input> element";
const EXPECT_HTML: &str = "an html element";

/// The listeners attached to the registration form. They stay attached for as long as this
/// lives, dropping it detaches them.
pub struct RegistrationGuard {
    listeners: Vec<EventListener>,
}

impl RegistrationGuard {
    /// Looks up every element named in `config` and attaches the listeners. Nothing is attached
    /// unless all the elements are present.
    pub fn bind(config: &RegisterConfig) -> Result<Self, BindError> {
        let form: HtmlFormElement =
            require_element_by_selector(&config.form_selector, EXPECT_FORM)?;
        let password: HtmlInputElement = require_element_by_id(&config.password_id, EXPECT_INPUT)?;
        let confirm: HtmlInputElement = require_element_by_id(&config.confirm_id, EXPECT_INPUT)?;
        let indicator: HtmlElement = require_element_by_id(&config.indicator_id, EXPECT_HTML)?;

        // Listeners are passive unless told otherwise, and a passive listener can't cancel the
        // submission.
        let on_submit = {
            let password = password.clone();
            EventListener::new_with_options(
                &form,
                "submit",
                EventListenerOptions::enable_prevent_default(),
                move |event| match SubmitCheck::for_pair(&password.value(), &confirm.value()) {
                    SubmitCheck::Proceed => {
                        #[cfg(debug_assertions)]
                        console::debug!("registration::submit -> passwords match");
                    }
                    SubmitCheck::Block { message } => {
                        event.prevent_default();
                        alert(message);
                    }
                },
            )
        };

        let on_input = {
            let field = password.clone();
            EventListener::new(&password, "input", move |_| {
                render_indicator(&indicator, IndicatorView::for_password(&field.value()));
            })
        };

        #[cfg(debug_assertions)]
        console::debug!("registration::bind -> attached");

        Ok(RegistrationGuard {
            listeners: vec![on_submit, on_input],
        })
    }

    /// Leaves the listeners attached for the rest of the page's life.
    pub fn forget(self) {
        self.listeners.into_iter().for_each(EventListener::forget);
    }
}

/// Writes `view` onto the indicator element.
pub fn render_indicator(indicator: &HtmlElement, view: IndicatorView) {
    indicator.set_text_content(Some(view.label()));
    let style = indicator.style();
    let res = match view {
        IndicatorView::Cleared => style.remove_property("color").map(|_| ()),
        IndicatorView::Rated { colour, .. } => style.set_property("color", colour),
    };
    if let Err(e) = res {
        console::warn!(format!("unable to set strength indicator colour -> {:?}", e));
    }
}
