//! Infrastructure layer - hardware and network bring-up
//!
//! Concrete pins, WiFi modes and the embassy tasks serving the panel.

pub mod drivers;
pub mod tasks;
pub mod types;
