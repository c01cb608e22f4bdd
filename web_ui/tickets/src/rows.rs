//! Click-to-navigate on the ticket listing table.

use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use helpdesk_web_ui_shared::utils::{html_elements_by_selector, navigate_to};
use helpdesk_web_ui_shared::BindError;
use web_sys::HtmlElement;

use crate::RowConfig;

/// Where clicking a row should take us, given its navigation attribute. Rows without one,
/// or with an empty one, go nowhere.
pub fn navigation_target(href: Option<String>) -> Option<String> {
    href.filter(|h| !h.is_empty())
}

type Navigator = Rc<dyn Fn(&str)>;

/// One click listener per row that matched when this was bound. Rows added to the table
/// afterwards are left alone.
pub struct RowNavigation {
    listeners: Vec<EventListener>,
}

impl RowNavigation {
    pub fn bind(config: &RowConfig) -> Result<Self, BindError> {
        Self::bind_with(config, |url| {
            if let Err(e) = navigate_to(url) {
                console::error!(format!("failed to navigate to {} -> {}", url, e));
            }
        })
    }

    /// As [`RowNavigation::bind`], but `navigate` is called in place of a real page
    /// navigation.
    pub fn bind_with<F>(config: &RowConfig, navigate: F) -> Result<Self, BindError>
    where
        F: Fn(&str) + 'static,
    {
        let navigate: Navigator = Rc::new(navigate);
        let listeners: Vec<EventListener> = html_elements_by_selector(&config.row_selector)?
            .into_iter()
            .map(|row| bind_row(row, &config.href_attribute, navigate.clone()))
            .collect();

        #[cfg(debug_assertions)]
        console::debug!(format!("row_navigation::bind -> {} rows", listeners.len()));

        Ok(RowNavigation { listeners })
    }

    pub fn bound_rows(&self) -> usize {
        self.listeners.len()
    }

    /// Leaves the listeners attached for the rest of the page's life.
    pub fn forget(self) {
        self.listeners.into_iter().for_each(EventListener::forget);
    }
}

fn bind_row(row: HtmlElement, href_attribute: &str, navigate: Navigator) -> EventListener {
    if let Err(e) = row.style().set_property("cursor", "pointer") {
        console::warn!(format!("unable to set row cursor -> {:?}", e));
    }

    let href_attribute = href_attribute.to_string();
    let target = row.clone();
    EventListener::new(&row, "click", move |_| {
        if let Some(url) = navigation_target(target.get_attribute(&href_attribute)) {
            (*navigate)(&url);
        }
    })
}
