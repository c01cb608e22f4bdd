#[cfg(debug_assertions)]
use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::{Document, HtmlElement, Window};

use crate::error::BindError;

/// Gets the equivalent of `window()` in javascript
pub fn window() -> Window {
    web_sys::window().expect_throw("Unable to retrieve window")
}

/// Gets the equivalent of `window().document()` in javascript
pub fn document() -> Document {
    window()
        .document()
        .expect_throw("Unable to retrieve document")
}

/// Looks up an element by id and casts it, `Ok(None)` when there's no such element.
pub fn find_element_by_id<T: JsCast>(
    id: &str,
    expected: &'static str,
) -> Result<Option<T>, BindError> {
    match document().get_element_by_id(id) {
        None => Ok(None),
        Some(element) => element
            .dyn_into::<T>()
            .map(Some)
            .map_err(|_| BindError::WrongElement {
                id: id.to_string(),
                expected,
            }),
    }
}

pub fn require_element_by_id<T: JsCast>(id: &str, expected: &'static str) -> Result<T, BindError> {
    find_element_by_id(id, expected)?.ok_or_else(|| BindError::MissingElement {
        id: id.to_string(),
    })
}

/// The first element matching `selector`, cast to `T`.
pub fn find_element_by_selector<T: JsCast>(
    selector: &str,
    expected: &'static str,
) -> Result<Option<T>, BindError> {
    match document().query_selector(selector)? {
        None => Ok(None),
        Some(element) => element
            .dyn_into::<T>()
            .map(Some)
            .map_err(|_| BindError::WrongElement {
                id: selector.to_string(),
                expected,
            }),
    }
}

pub fn require_element_by_selector<T: JsCast>(
    selector: &str,
    expected: &'static str,
) -> Result<T, BindError> {
    find_element_by_selector(selector, expected)?.ok_or_else(|| BindError::MissingElement {
        id: selector.to_string(),
    })
}

/// Every html element matching `selector`, in document order. Non-html nodes (svg etc)
/// are skipped.
pub fn html_elements_by_selector(selector: &str) -> Result<Vec<HtmlElement>, BindError> {
    let nodes = document().query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|idx| nodes.get(idx))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Runs `f` once the document has been parsed. If that's already happened it runs
/// immediately, otherwise it waits for `DOMContentLoaded`.
pub fn on_document_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let doc = document();
    if doc.ready_state() == "loading" {
        #[cfg(debug_assertions)]
        console::debug!("document still loading, waiting for DOMContentLoaded");
        EventListener::once(&doc, "DOMContentLoaded", move |_| f()).forget();
    } else {
        f();
    }
}

/// Full page navigation, the same as assigning to `window.location`.
pub fn navigate_to(url: &str) -> Result<(), BindError> {
    window().location().set_href(url)?;
    Ok(())
}

/// The length of `s` as the browser reports it for an input's value, in UTF-16 code units.
pub fn js_length(s: &str) -> usize {
    s.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::js_length;

    #[test]
    fn js_length_counts_code_units() {
        assert_eq!(js_length(""), 0);
        assert_eq!(js_length("abc"), 3);
        // é is a single code unit even though it's two bytes of utf8
        assert_eq!(js_length("héllo"), 5);
        // astral plane characters are a surrogate pair
        assert_eq!(js_length("🦀"), 2);
    }
}
