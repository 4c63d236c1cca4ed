//! Export adapters. Render extracted content for external tools.

pub mod csv_export;

pub use csv_export::articles_to_csv;
