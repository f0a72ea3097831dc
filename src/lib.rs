//! Renders incident-response mission data into paginated PDF reports.
//!
//! The library exposes one operation: [`compose`], which turns a
//! [`model::ReportRequest`] into a finished A4 document written to a caller
//! supplied path.  The layout is fixed; see [`styles`] for the style sheet
//! and [`compose`] for the section order.

pub mod builder;
pub mod compose;
pub mod elements;
pub mod fonts;
pub mod model;
pub mod styles;

pub use compose::compose;
pub use model::ReportRequest;
