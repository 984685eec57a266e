//! High-level extraction API.
//!
//! Free functions over a byte buffer. Each is a pure function of its
//! input: no shared state crosses invocations, so independent extractions
//! can run concurrently without coordination.

use crate::codec::flate_decode;
use crate::model::ExtractionResult;
use crate::resolver::{self, illustrator, ocg};
use crate::scan;

/// Extract Optional Content Group layers.
///
/// The raw buffer is scanned first; when it has no configuration, each
/// flate-decodable stream region is tried in scan order and the first one
/// containing a configuration wins. A buffer without any configuration
/// yields the empty result; "no layers" is a valid, common outcome.
pub fn extract_optional_content(data: &[u8]) -> ExtractionResult {
    optional_content(data).unwrap_or_default()
}

/// Extract Illustrator private-data layers.
///
/// The uncompressed location is tried first, then each flate-decodable
/// stream region in scan order, stopping at the first block found.
/// `None` means the document carries no private-data markers anywhere,
/// distinct from a present-but-empty block, which yields `Some` with an
/// empty result.
pub fn extract_illustrator_layers(data: &[u8]) -> Option<ExtractionResult> {
    if let Some(block) = illustrator::private_block(data) {
        return Some(ExtractionResult::new(illustrator::layers_in_block(
            &data[block],
        )));
    }
    for decoded in decodable_regions(data) {
        if let Some(block) = illustrator::private_block(&decoded) {
            return Some(ExtractionResult::new(illustrator::layers_in_block(
                &decoded[block],
            )));
        }
    }
    None
}

/// Extract layers from either scheme.
///
/// Runs the Optional Content path; only when no configuration dictionary
/// exists anywhere is the Illustrator path attempted, with "not
/// applicable" mapped to the empty result. The two resolvers are never
/// merged.
pub fn extract_layers(data: &[u8]) -> ExtractionResult {
    if let Some(result) = optional_content(data) {
        return result;
    }
    extract_illustrator_layers(data).unwrap_or_default()
}

/// Best-effort encryption flag: whether a `trailer` dictionary carries an
/// `/Encrypt` entry.
///
/// No decryption is attempted anywhere in this crate; extraction over an
/// encrypted buffer simply finds whatever plaintext structure remains.
/// Documents whose only `/Encrypt` lives in a cross-reference stream
/// dictionary are reported as unencrypted.
pub fn is_encrypted(data: &[u8]) -> bool {
    let mut pos = 0;
    while let Some(found) = scan::find_bytes(data, b"trailer", pos) {
        pos = found + b"trailer".len();
        let open = resolver::skip_ws(data, pos);
        if let Some(dict) = resolver::dict_extent(data, open)
            && resolver::find_key(data, dict, b"/Encrypt").is_some()
        {
            return true;
        }
    }
    false
}

/// `Some` when a configuration dictionary exists anywhere (raw or inside a
/// decodable stream region); `None` otherwise, so callers can tell
/// "no configuration" from "configuration with no resolvable layers".
fn optional_content(data: &[u8]) -> Option<ExtractionResult> {
    if let Some(config) = ocg::find_config(data) {
        return Some(ExtractionResult::new(ocg::resolve(&config, data, None)));
    }
    for decoded in decodable_regions(data) {
        if let Some(config) = ocg::find_config(&decoded) {
            return Some(ExtractionResult::new(ocg::resolve(
                &config,
                &decoded,
                Some(data),
            )));
        }
    }
    None
}

/// Decoded text of every flate-decodable stream region, in scan order.
/// Regions the filter rejects are skipped; the next candidate is tried.
fn decodable_regions(data: &[u8]) -> impl Iterator<Item = Vec<u8>> {
    scan::stream_regions(data).filter_map(move |region| {
        match flate_decode(&data[region.clone()]) {
            Ok(decoded) => Some(decoded),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    start = region.start,
                    error = %_err,
                    "skipping undecodable stream region"
                );
                None
            }
        }
    })
}
