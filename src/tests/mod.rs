#![warn(clippy::all, clippy::pedantic)]

pub mod particles_tests;
pub mod stats_tests;
pub mod systems_tests;
pub mod time_tests;
pub mod ui_tests;
