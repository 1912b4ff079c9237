//! DOM-free page logic. Everything here runs and tests on the native host.
pub mod config;
pub mod controller;
pub mod dismiss;
pub mod error;
pub mod ports;
pub mod theme;
