//! PDF collaborators for the fuel specs checker.
//!
//! Two concerns: pulling raw text out of an uploaded bunker delivery note,
//! and rendering the finished compliance report back to PDF.

pub mod error;
pub mod extract;
pub mod naming;
pub mod render;

pub use error::PdfError;
pub use extract::extract_text;
pub use naming::report_filename;
pub use render::render_report;
