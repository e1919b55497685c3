//! Client-side model of the container list.
//!
//! Data flows one way: the driver feeds [`Event`]s to
//! [`ContainerList::update`], performs the [`Effect`] it returns and feeds the
//! outcome back as the next event. [`render`] turns the model into a
//! [`ListView`] without touching it.

pub mod container;
pub mod draft;
pub mod event;
pub mod failure;
pub mod list;
pub mod view;

pub use container::*;
pub use event::*;
pub use failure::*;
pub use list::*;
pub use view::*;
