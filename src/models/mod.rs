//! Configuration for the demo server.

pub mod config;
