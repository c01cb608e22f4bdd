//! Constants

/// The alert shown when the registration passwords differ.
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match.";

// default element ids on the registration page
pub const ID_PASSWORD: &str = "password";
pub const ID_CONFIRM_PASSWORD: &str = "confirm_password";
pub const ID_STRENGTH_INDICATOR: &str = "strength-indicator";

// default element ids on the ticket submission page
pub const ID_DESCRIPTION: &str = "description";
pub const ID_DESCRIPTION_COUNT: &str = "desc-count";

/// Both pages only carry a single form, so the first one wins.
pub const SELECTOR_FORM: &str = "form";

/// Rows carrying this class get click-to-navigate behaviour.
pub const SELECTOR_ROW_LINK: &str = ".table-row-link";
pub const ATTR_ROW_HREF: &str = "data-href";

/// Added to a form once it's been through client side validation, bootstrap keys the
/// pass/fail field styling off it.
pub const CSS_WAS_VALIDATED: &str = "was-validated";

/// The description is displayed against this many characters.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

pub const CSS_COLOUR_WEAK: &str = "red";
pub const CSS_COLOUR_MEDIUM: &str = "orange";
pub const CSS_COLOUR_STRONG: &str = "green";
