//! Request-scoped page loading for the demo server.

pub mod directory;
