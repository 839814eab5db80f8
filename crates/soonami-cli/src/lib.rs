//! # soonami-cli
//!
//! Single-screen earthquake viewer. One background fetch per launch feeds
//! one update of a three-region [`screen::Screen`].

pub mod cli;
pub mod launch;
pub mod output;
pub mod presenter;
pub mod progress;
pub mod screen;
pub mod ui;
