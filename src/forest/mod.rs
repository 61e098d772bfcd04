//! Forest plot module
//!
//! Everything needed to draw the illustrative meta-analysis figure.
//!
//! Structure:
//! - `data.rs`: fixed study records and the pooled record
//! - `layout.rs`: row and annotation geometry
//! - `style.rs`: colors and marker sizing
//! - `render.rs`: plotters rendering to PNG
//! - `error.rs`: error types

// Module declarations
pub mod data;
pub mod error;
pub mod layout;
pub mod render;
pub mod style;

// Re-exports for convenience
pub use data::StudyRecord;
#[allow(unused_imports)]
pub use error::{PlotError, Result};
pub use render::render;
