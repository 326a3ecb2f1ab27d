//! View and page structs that bridge services with templates.

#[cfg(feature = "server")]
pub mod main;
pub mod table;
