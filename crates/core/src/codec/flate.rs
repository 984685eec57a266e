//! FlateDecode (zlib) stream filter.

use std::io::Read;

use flate2::read::ZlibDecoder;

use crate::error::{LayerError, Result};

/// Attempt zlib decompression of a candidate byte region.
///
/// Truncated, corrupt, or not-actually-compressed input is a recoverable
/// failure: callers iterate candidate regions and move on to the next one.
pub fn flate_decode(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Err(LayerError::DecodeError("empty stream region".to_string()));
    }

    let mut decoder = ZlibDecoder::new(data);
    let mut out = Vec::new();
    match decoder.read_to_end(&mut out) {
        Ok(_) => Ok(out),
        Err(err) => Err(LayerError::DecodeError(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::ZlibEncoder;
    use std::io::Write;

    fn deflate(data: &[u8]) -> Vec<u8> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_roundtrip() {
        let text = b"/OCProperties << /OCGs [5 0 R] >>";
        let decoded = flate_decode(&deflate(text)).unwrap();
        assert_eq!(decoded, text);
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(flate_decode(b"").is_err());
    }

    #[test]
    fn test_garbage_fails() {
        assert!(flate_decode(b"this is not a zlib stream").is_err());
    }

    #[test]
    fn test_truncated_fails() {
        let compressed = deflate(b"some reasonably long piece of layer metadata text");
        assert!(flate_decode(&compressed[..compressed.len() / 2]).is_err());
    }
}
