//! Wire types of the config service.

pub mod error;
pub mod record;

pub use error::*;
pub use record::*;
