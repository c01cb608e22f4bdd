//! Browser tests for the registration form behaviour.
//!
//! ```shell
//! wasm-pack test --headless --firefox web_ui/register
//! ```
//!
//! The mismatch path raises a blocking `alert()`, which headless drivers don't cope with, so
//! those tests swap `window.alert` for a recorder while they run.
#![cfg(target_arch = "wasm32")]

use helpdesk_web_ui_register::{RegisterConfig, RegistrationGuard};
use std::cell::RefCell;
use std::rc::Rc;

use helpdesk_web_ui_shared::utils::{document, window};
use helpdesk_web_ui_shared::BindError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlElement, HtmlFormElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r#"
<form id="register" action="/register" method="post">
  <input type="password" id="password" name="password">
  <span id="strength-indicator"></span>
  <input type="password" id="confirm_password" name="confirm_password">
</form>
"#;

fn mount(markup: &str) {
    document()
        .body()
        .expect("no body in test document")
        .set_inner_html(markup);
}

fn by_id<T: JsCast>(id: &str) -> T {
    document()
        .get_element_by_id(id)
        .expect("element missing")
        .dyn_into::<T>()
        .expect("element has the wrong type")
}

fn fire(target: &web_sys::EventTarget, kind: &str) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict(kind, &init).expect("failed to build event");
    target.dispatch_event(&event).expect("dispatch failed");
    event
}

fn type_password(value: &str) {
    let input: HtmlInputElement = by_id("password");
    input.set_value(value);
    fire(&input, "input");
}

fn indicator() -> (String, String) {
    let el: HtmlElement = by_id("strength-indicator");
    let colour = el
        .style()
        .get_property_value("color")
        .expect("no color property");
    (el.text_content().unwrap_or_default(), colour)
}

#[wasm_bindgen_test]
fn strength_indicator_follows_input() {
    mount(PAGE);
    let _guard = RegistrationGuard::bind(&RegisterConfig::default()).expect("bind failed");

    type_password("abc");
    assert_eq!(indicator(), ("Weak".to_string(), "red".to_string()));

    type_password("Abcdefg1");
    assert_eq!(indicator(), ("Medium".to_string(), "orange".to_string()));

    type_password("Abc12345!");
    assert_eq!(indicator(), ("Strong".to_string(), "green".to_string()));

    type_password("");
    assert_eq!(indicator(), (String::new(), String::new()));
}

#[wasm_bindgen_test]
fn matching_passwords_submit() {
    mount(PAGE);
    let _guard = RegistrationGuard::bind(&RegisterConfig::default()).expect("bind failed");

    by_id::<HtmlInputElement>("password").set_value("Abc12345!");
    by_id::<HtmlInputElement>("confirm_password").set_value("Abc12345!");

    let form: HtmlFormElement = by_id("register");
    let event = fire(&form, "submit");
    assert!(!event.default_prevented());
}

/// Replaces `window.alert` with something that records the message, putting the real one
/// back on drop.
struct AlertRecorder {
    original: JsValue,
    messages: Rc<RefCell<Vec<String>>>,
    _hook: Closure<dyn Fn(String)>,
}

impl AlertRecorder {
    fn install() -> Self {
        let key = JsValue::from_str("alert");
        let original = js_sys::Reflect::get(&window(), &key).expect("no window.alert");
        let messages = Rc::new(RefCell::new(Vec::new()));
        let log = messages.clone();
        let hook = Closure::<dyn Fn(String)>::new(move |msg: String| log.borrow_mut().push(msg));
        js_sys::Reflect::set(&window(), &key, hook.as_ref()).expect("failed to replace alert");
        AlertRecorder {
            original,
            messages,
            _hook: hook,
        }
    }

    fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Drop for AlertRecorder {
    fn drop(&mut self) {
        let _ = js_sys::Reflect::set(&window(), &JsValue::from_str("alert"), &self.original);
    }
}

#[wasm_bindgen_test]
fn mismatched_passwords_are_blocked_with_alert() {
    mount(PAGE);
    let alerts = AlertRecorder::install();
    let _guard = RegistrationGuard::bind(&RegisterConfig::default()).expect("bind failed");

    by_id::<HtmlInputElement>("password").set_value("Abc12345!");
    by_id::<HtmlInputElement>("confirm_password").set_value("Abc12345");

    let form: HtmlFormElement = by_id("register");
    let event = fire(&form, "submit");
    assert!(event.default_prevented());
    assert_eq!(alerts.messages(), vec!["Passwords do not match.".to_string()]);
}

#[wasm_bindgen_test]
fn matching_passwords_raise_no_alert() {
    mount(PAGE);
    let alerts = AlertRecorder::install();
    let _guard = RegistrationGuard::bind(&RegisterConfig::default()).expect("bind failed");

    by_id::<HtmlInputElement>("password").set_value("abc");
    by_id::<HtmlInputElement>("confirm_password").set_value("abc");

    let form: HtmlFormElement = by_id("register");
    let event = fire(&form, "submit");
    assert!(!event.default_prevented());
    assert!(alerts.messages().is_empty());
}

#[wasm_bindgen_test]
fn dropping_the_guard_detaches() {
    mount(PAGE);
    let guard = RegistrationGuard::bind(&RegisterConfig::default()).expect("bind failed");
    drop(guard);

    type_password("Abc12345!");
    assert_eq!(indicator().0, "");
}

#[wasm_bindgen_test]
fn missing_indicator_fails_fast() {
    mount(
        r#"<form>
          <input type="password" id="password">
          <input type="password" id="confirm_password">
        </form>"#,
    );
    let res = RegistrationGuard::bind(&RegisterConfig::default());
    assert_eq!(
        res.err(),
        Some(BindError::MissingElement {
            id: "strength-indicator".to_string()
        })
    );
}

#[wasm_bindgen_test]
fn renamed_fields_through_config() {
    mount(
        r#"<form id="register">
          <input type="password" id="pw">
          <input type="password" id="pw2">
          <div id="meter"></div>
        </form>"#,
    );
    let config = RegisterConfig {
        password_id: "pw".to_string(),
        confirm_id: "pw2".to_string(),
        indicator_id: "meter".to_string(),
        ..Default::default()
    };
    let _guard = RegistrationGuard::bind(&config).expect("bind failed");

    let input: HtmlInputElement = by_id("pw");
    input.set_value("abcdefgh");
    fire(&input, "input");
    let meter: HtmlElement = by_id("meter");
    assert_eq!(meter.text_content().unwrap_or_default(), "Weak");
}
