//! Cross-cutting support: configuration.

pub mod config;
