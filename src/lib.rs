//! hygge-feed: content taxonomy, sectioned feed model and interaction weights,
//! with a hexagonal shell for reading feeds at the boundary.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
