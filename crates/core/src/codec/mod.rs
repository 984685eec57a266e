//! Codec support for compressed stream regions.
//!
//! Only one filter matters here: metadata streams in this document family
//! are either plain text or FlateDecode (zlib) compressed.

pub mod flate;

pub use flate::flate_decode;
