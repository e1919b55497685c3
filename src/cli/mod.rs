//! Client side: HTTP access to the config service and the driver around the
//! container list model.

pub mod client;
pub mod commands;
pub mod console;
pub mod editor;
pub mod error;

pub use client::*;
pub use console::*;
pub use error::*;
