//! Behaviour for the account registration page:
//!
//! - a live strength rating under the password field
//! - refusing to submit while the password and its confirmation differ

#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unreachable)]
#![deny(clippy::trivially_copy_pass_by_ref)]

pub mod confirm;
pub mod guard;
pub mod strength;

use gloo::console;
use helpdesk_web_ui_shared::config::from_js;
use helpdesk_web_ui_shared::constants::{
    ID_CONFIRM_PASSWORD, ID_PASSWORD, ID_STRENGTH_INDICATOR, SELECTOR_FORM,
};
use serde::{Deserialize, Serialize};
#[allow(unused_imports)] // because it's needed to compile wasm things
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

pub use crate::guard::RegistrationGuard;

/// Where the registration page's elements live. Every field has a default matching the
/// stock template, so pages only need to pass what they've renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterConfig {
    pub form_selector: String,
    pub password_id: String,
    pub confirm_id: String,
    pub indicator_id: String,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        RegisterConfig {
            form_selector: SELECTOR_FORM.to_string(),
            password_id: ID_PASSWORD.to_string(),
            confirm_id: ID_CONFIRM_PASSWORD.to_string(),
            indicator_id: ID_STRENGTH_INDICATOR.to_string(),
        }
    }
}

/// Entry point for the registration page. Call it once the form is in the document, with
/// either nothing or a partial [`RegisterConfig`] object.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn run_register(config: JsValue) -> Result<(), JsValue> {
    let config: RegisterConfig = from_js(config)?;
    match RegistrationGuard::bind(&config) {
        Ok(guard) => {
            guard.forget();
            Ok(())
        }
        Err(e) => {
            console::error!(format!("failed to bind the registration form -> {}", e));
            Err(e.into())
        }
    }
}
