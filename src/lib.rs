//! Meteor Madness - Asteroid Impact Simulator
//!
//! A library crate providing the impact physics model and the application
//! components built around it, for testing and integration purposes.

pub mod history;
pub mod impact;
pub mod neo;
pub mod render;
pub mod scenarios;
pub mod types;
pub mod ui;
