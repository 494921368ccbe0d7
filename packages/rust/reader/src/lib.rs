//! Document access for papertally.
//!
//! This crate provides:
//! - [`PaperReader`] / [`PaperDocument`]: the PDF reader seam
//! - [`PdfReader`]: `pdf_oxide`-backed implementation
//! - [`list_documents`]: corpus directory enumeration

pub mod corpus;
pub mod pdf;

pub use corpus::list_documents;
pub use pdf::{PaperDocument, PaperReader, PdfPaper, PdfReader};
