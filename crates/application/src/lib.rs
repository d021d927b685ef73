//! Zonecheck Application Layer
pub mod ports;
pub mod providers;
pub mod services;
pub mod use_cases;
