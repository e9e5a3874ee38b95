//! Harvest Almanac library crate — re-exports all modules for integration
//! testing.
//!
//! The binary crate (`main.rs`) is the actual demo entry point. This library
//! crate exposes the same modules so that `tests/` integration tests can
//! import types, systems, and resources without needing a window or GPU.

pub mod shared;
pub mod calendar;
pub mod almanac;
pub mod world;
pub mod data;
pub mod config;
pub mod ui;
