//! Formatting, parsing and checking helpers shared by the web application.
//!
//! Every function here is a pure transformation of its arguments. Nothing in
//! this crate touches a database, the network or the filesystem.

pub mod config;
pub mod diagnostics;
pub mod enum_display;
pub mod error;
pub mod formatting;
pub mod parsing;
pub mod predicates;
pub mod validation;

pub use enum_display::{display_name, display_name_raw, DisplayEnum, EnumCatalog, EnumMember};
pub use error::CoreError;
