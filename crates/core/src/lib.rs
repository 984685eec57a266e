//! matisse - layer visibility metadata extraction for PDF and Illustrator files.
//!
//! Recovers the Optional Content Group configuration, or Illustrator
//! private-data layer blocks, from a raw byte buffer. The buffer is not
//! assumed to be a well-formed object graph: discovery is defensive byte
//! scanning, with opportunistic decompression of candidate stream regions,
//! and every parsing irregularity degrades to an empty or partial result
//! rather than an error.

pub mod codec;
pub mod error;
pub mod extract;
pub mod model;
pub mod resolver;
pub mod scan;

pub use error::{LayerError, Result};
pub use extract::{
    extract_illustrator_layers, extract_layers, extract_optional_content, is_encrypted,
};
pub use model::{ExtractionResult, LayerRecord, ObjRef};
pub use resolver::ocg::OptionalContentConfig;
