//! Loading the typed configuration each page hands to its entry point.

use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

use crate::error::BindError;

/// Deserializes a config object passed in from javascript. `undefined` and `null` both mean
/// "use the defaults", and because the config structs are `#[serde(default)]` a partial
/// object only overrides the fields it names.
pub fn from_js<T>(value: JsValue) -> Result<T, BindError>
where
    T: DeserializeOwned + Default,
{
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_wasm_bindgen::from_value(value)?)
}
