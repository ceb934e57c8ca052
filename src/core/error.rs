use thiserror::Error;

/// Errors surfaced to callers of the extraction pipeline.
///
/// A missing anchor or malformed value is never an error — it degrades to
/// a null field on the record. The only failure with a variant here is the
/// caller-level one: the document text could not be obtained at all, in
/// which case the engine is not invoked and the caller builds a failure
/// record via [`crate::InvoiceRecord::failure`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractError {
    /// The upstream text source (PDF/OCR layer) failed before extraction.
    #[error("text acquisition failed: {0}")]
    Acquisition(String),
}
