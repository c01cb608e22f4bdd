//! Behaviour for the ticket pages:
//!
//! - `/submit`: a live character count under the description, and bootstrap style
//!   validation gating on the form
//! - `/`: clicking a row of the ticket table opens that ticket

#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unreachable)]
#![deny(clippy::trivially_copy_pass_by_ref)]

pub mod counter;
pub mod form;
pub mod gate;
pub mod rows;

use gloo::console;
use helpdesk_web_ui_shared::config::from_js;
use helpdesk_web_ui_shared::constants::{
    ATTR_ROW_HREF, CSS_WAS_VALIDATED, DESCRIPTION_MAX_CHARS, ID_DESCRIPTION, ID_DESCRIPTION_COUNT,
    SELECTOR_FORM, SELECTOR_ROW_LINK,
};
use helpdesk_web_ui_shared::utils::on_document_ready;
use serde::{Deserialize, Serialize};
#[allow(unused_imports)] // because it's needed to compile wasm things
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

pub use crate::form::TicketFormGuard;
pub use crate::rows::RowNavigation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketConfig {
    pub description_id: String,
    pub count_id: String,
    pub form_selector: String,
    pub validated_class: String,
    pub max_chars: usize,
}

impl Default for TicketConfig {
    fn default() -> Self {
        TicketConfig {
            description_id: ID_DESCRIPTION.to_string(),
            count_id: ID_DESCRIPTION_COUNT.to_string(),
            form_selector: SELECTOR_FORM.to_string(),
            validated_class: CSS_WAS_VALIDATED.to_string(),
            max_chars: DESCRIPTION_MAX_CHARS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowConfig {
    pub row_selector: String,
    pub href_attribute: String,
}

impl Default for RowConfig {
    fn default() -> Self {
        RowConfig {
            row_selector: SELECTOR_ROW_LINK.to_string(),
            href_attribute: ATTR_ROW_HREF.to_string(),
        }
    }
}

/// Entry point for the ticket submission page. Binding waits for `DOMContentLoaded` if the
/// page is still loading, so a bad config is the only error returned here; anything later is
/// logged to the console.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn run_submit_ticket(config: JsValue) -> Result<(), JsValue> {
    let config: TicketConfig = from_js(config)?;
    on_document_ready(move || match TicketFormGuard::bind(&config) {
        Ok(guard) => guard.forget(),
        Err(e) => console::error!(format!("failed to bind the ticket form -> {}", e)),
    });
    Ok(())
}

/// Entry point for the ticket listing page.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn run_row_navigation(config: JsValue) -> Result<(), JsValue> {
    let config: RowConfig = from_js(config)?;
    on_document_ready(move || match RowNavigation::bind(&config) {
        Ok(rows) => rows.forget(),
        Err(e) => console::error!(format!("failed to bind the ticket rows -> {}", e)),
    });
    Ok(())
}
