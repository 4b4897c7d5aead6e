//! Reveals a hidden table once the page structure is ready.
//!
//! The reveal looks up the table by id, sets its `display` style so it takes part in table
//! layout again, then adds a marker class to its first body section so that a stylesheet can
//! animate it in. Everything host specific sits behind the traits in [`dom`], so the same
//! operation drives a browser document or the in-memory one in [`memory`].
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod memory;
pub mod reveal;

pub use self::config::RevealConfig;
pub use self::controller::{PageRevealController, State, Trigger};
pub use self::dom::{Document, Element};
pub use self::error::{ConfigError, DomError, MissingElement, RevealError};
pub use self::reveal::{reveal, Revealed};
