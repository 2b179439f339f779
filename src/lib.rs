// docsift - document classification and data extraction for mortgage loan files
//
// Pipeline: a raw file goes through text acquisition (plain text, PDF text
// layer, or OCR fallback), keyword-scored classification against a closed
// catalog of ~70 document types, type-specific regex field extraction, and
// finally reconciliation of the extracted fields against the borrower's
// self-reported application data.
pub mod acquisition;
pub mod classify;
pub mod config;
pub mod extract;
pub mod pipeline;
pub mod reconcile;
pub mod telemetry;
pub mod types;

pub use pipeline::{DocumentPipeline, PipelineOptions};
pub use reconcile::compare;
pub use types::{
    ApplicationSnapshot, Classification, ClassificationResult, Discrepancy, DocumentType,
    ExtractedData, PartialLoanApplication, RawDocument, Severity,
};
