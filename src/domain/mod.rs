//! Options and data handed to the renderer.

pub mod options;
pub mod presets;
pub mod table;
