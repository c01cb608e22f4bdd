//! Password strength rating for the registration form.
//!
//! This is deliberately a cheap heuristic to nudge people while they type. Each criterion
//! a password satisfies is worth one point, and the total is bucketed into three ratings.

use enum_iterator::{all, Sequence};
use helpdesk_web_ui_shared::constants::{CSS_COLOUR_MEDIUM, CSS_COLOUR_STRONG, CSS_COLOUR_WEAK};
use helpdesk_web_ui_shared::utils::js_length;

pub const PW_MIN_LENGTH: usize = 8;

/// The symbols that count towards [`Criterion::Symbol`]. Anything else is ignored.
pub const PW_SYMBOLS: &[char] = &['@', '$', '!', '%', '*', '?', '&'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Sequence)]
pub enum Criterion {
    MinLength,
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl Criterion {
    pub fn is_met(self, password: &str) -> bool {
        match self {
            Criterion::MinLength => js_length(password) >= PW_MIN_LENGTH,
            Criterion::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Criterion::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Criterion::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Criterion::Symbol => password.chars().any(|c| PW_SYMBOLS.contains(&c)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthRating {
    Weak,
    Medium,
    Strong,
}

impl StrengthRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthRating::Weak,
            3 | 4 => StrengthRating::Medium,
            _ => StrengthRating::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthRating::Weak => "Weak",
            StrengthRating::Medium => "Medium",
            StrengthRating::Strong => "Strong",
        }
    }

    pub fn colour(self) -> &'static str {
        match self {
            StrengthRating::Weak => CSS_COLOUR_WEAK,
            StrengthRating::Medium => CSS_COLOUR_MEDIUM,
            StrengthRating::Strong => CSS_COLOUR_STRONG,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    met: Vec<Criterion>,
    empty: bool,
}

impl StrengthReport {
    pub fn evaluate(password: &str) -> Self {
        StrengthReport {
            met: all::<Criterion>().filter(|c| c.is_met(password)).collect(),
            empty: password.is_empty(),
        }
    }

    /// Between 0 and 5, one point per satisfied criterion.
    pub fn score(&self) -> u8 {
        self.met.len() as u8
    }

    pub fn is_met(&self, criterion: Criterion) -> bool {
        self.met.contains(&criterion)
    }

    /// `None` when there's nothing typed yet, so the indicator stays blank.
    pub fn rating(&self) -> Option<StrengthRating> {
        if self.empty {
            None
        } else {
            Some(StrengthRating::from_score(self.score()))
        }
    }
}

/// What the strength indicator element should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorView {
    Cleared,
    Rated {
        label: &'static str,
        colour: &'static str,
    },
}

impl IndicatorView {
    pub fn for_password(password: &str) -> Self {
        match StrengthReport::evaluate(password).rating() {
            None => IndicatorView::Cleared,
            Some(rating) => IndicatorView::Rated {
                label: rating.label(),
                colour: rating.colour(),
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IndicatorView::Cleared => "",
            IndicatorView::Rated { label, .. } => label,
        }
    }
}
