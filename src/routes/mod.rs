//! HTTP handlers.

pub mod main;
