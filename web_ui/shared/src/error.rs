use std::error::Error;
use std::fmt;

use wasm_bindgen::JsValue;

/// Why a behaviour couldn't be attached to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// A required element isn't in the document.
    MissingElement { id: String },
    /// The element exists but isn't the kind we need to drive it.
    WrongElement { id: String, expected: &'static str },
    /// The config object handed over from javascript didn't deserialize.
    Config(String),
    /// The browser threw while we were poking at the DOM.
    Dom(String),
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BindError::MissingElement { id } => {
                write!(f, "required element '{}' is not present in the page", id)
            }
            BindError::WrongElement { id, expected } => {
                write!(f, "element '{}' is not {}", id, expected)
            }
            BindError::Config(msg) => write!(f, "invalid configuration -> {}", msg),
            BindError::Dom(msg) => write!(f, "dom error -> {}", msg),
        }
    }
}

impl Error for BindError {}

impl From<JsValue> for BindError {
    fn from(value: JsValue) -> Self {
        BindError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<serde_wasm_bindgen::Error> for BindError {
    fn from(value: serde_wasm_bindgen::Error) -> Self {
        BindError::Config(value.to_string())
    }
}

impl From<BindError> for JsValue {
    fn from(value: BindError) -> Self {
        js_sys::Error::new(&value.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::BindError;

    #[test]
    fn display_names_the_element() {
        let e = BindError::MissingElement {
            id: "password".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "required element 'password' is not present in the page"
        );

        let e = BindError::WrongElement {
            id: "#confirm_password".to_string(),
            expected: "an <input> element",
        };
        assert_eq!(
            e.to_string(),
            "element '#confirm_password' is not an <input> element"
        );
    }

    #[test]
    fn display_config() {
        let e = BindError::Config("invalid type: string, expected usize".to_string());
        assert!(e.to_string().starts_with("invalid configuration -> "));
    }
}
