//! Macros for the web UI

/// Adds a set of CSS classes to an element, logging rather than failing if the browser
/// refuses one of them.
#[macro_export]
macro_rules! add_element_classes {
    ($element:expr, $classes:expr) => {
        for x in $classes {
            if let Err(e) = $element.class_list().add_1(x) {
                gloo::console::error!(format!("class_list add error -> {:?}", e));
            };
        }
    };
}
