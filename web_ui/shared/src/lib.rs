//! Pieces shared by the helpdesk page behaviours: DOM lookups, the error type every
//! binder returns, config loading and the element ids the templates use.

#![warn(unused_extern_crates)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unreachable)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::trivially_copy_pass_by_ref)]

pub mod config;
pub mod constants;
pub mod error;
#[macro_use]
pub mod macros;
pub mod utils;

pub use error::BindError;
