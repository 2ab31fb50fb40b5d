//! Shared data types for the form-extraction pipeline.
//!
//! Three groups: the canonical OCR representation every stage consumes, the
//! strict extraction schema, and the validation/result shapes the pipeline
//! returns.

pub mod ocr;
pub mod record;
pub mod report;

pub use ocr::{
    BoundingRegion, CanonicalOcrResult, KeyValuePair, Line, Page, Paragraph, Point,
    SelectionMark, SelectionState, Table, TableCell, Word,
};
pub use record::{Address, DateParts, FieldRecord, MedicalInstitutionFields};
pub use report::{
    DocumentMetadata, ProcessingResult, ProcessingStatus, ValidationReport, ValidationSummary,
};
