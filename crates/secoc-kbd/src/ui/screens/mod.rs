//! Screen renderers

pub mod keypad;
