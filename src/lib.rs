//! Orrery - interactive solar-system explorer
//!
//! A library crate providing the orbit simulation, selection focus and
//! camera director as Bevy plugins, plus an in-process [`orrery::Orrery`]
//! facade for driving the same core without an `App`.

pub mod camera;
pub mod catalog;
pub mod error;
pub mod input;
pub mod orbit;
pub mod orrery;
pub mod render;
pub mod selection;
pub mod types;
pub mod ui;
