//! # soonami-core
//!
//! Core types shared across all Soonami crates:
//! - [`Event`], the three-field earthquake record
//! - [`TsunamiAlert`], the tri-state alert flag carried by an event
//! - Cross-cutting error types

pub mod errors;
pub mod event;

pub use errors::CoreError;
pub use event::{Event, TsunamiAlert};
