//! SecOC Keypad Library
//!
//! Terminal user interface for the SecOC key entry keypad. The entry state
//! machine and persistence live in secoc-core; this crate only renders and
//! routes taps.

pub mod app;
pub mod ui;

pub use app::App;
