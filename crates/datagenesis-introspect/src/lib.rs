//! Schema inference for uploaded tabular data.
//!
//! Uploads are decoded by a format adapter (CSV or JSON) into rows, then the
//! first row is sampled to assign a type to every field.

pub mod adapter;
pub mod csv;
pub mod file;
pub mod infer;
pub mod json;
pub mod options;

pub use adapter::{Adapter, DecodedUpload, UploadFormat, adapter_for};
pub use file::{InferredUpload, introspect_file, introspect_text};
pub use infer::{infer_field_type, infer_schema};
pub use options::InferOptions;

pub use datagenesis_core::Schema;
