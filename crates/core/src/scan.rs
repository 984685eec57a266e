//! Byte-range discovery for delimiter-bounded regions.
//!
//! The metadata of interest is always textual and bounded by literal
//! delimiters, even when most of the surrounding document is binary, so
//! discovery is naive substring search over raw bytes rather than a
//! full tokenizer. No decoding happens here.

use std::ops::Range;

/// Start token of a PDF stream object.
pub const STREAM_BEGIN: &[u8] = b"stream";
/// End token of a PDF stream object.
pub const STREAM_END: &[u8] = b"endstream";
/// Start marker of an Illustrator private-data block.
pub const AI_PRIVATE_BEGIN: &[u8] = b"%AIPrivateDataBegin";
/// End marker of an Illustrator private-data block.
pub const AI_PRIVATE_END: &[u8] = b"%AIPrivateDataEnd";

/// Find the first occurrence of `needle` at or after `from`.
pub fn find_bytes(data: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() || from > data.len() {
        return None;
    }
    data[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| from + pos)
}

/// Iterator over non-overlapping begin/end delimited byte ranges, in
/// left-to-right scan order.
pub struct DelimitedRegions<'a> {
    data: &'a [u8],
    begin: &'static [u8],
    end: &'static [u8],
    pos: usize,
}

/// Regions delimited by an arbitrary begin/end token pair.
pub fn regions<'a>(data: &'a [u8], begin: &'static [u8], end: &'static [u8]) -> DelimitedRegions<'a> {
    DelimitedRegions {
        data,
        begin,
        end,
        pos: 0,
    }
}

/// `stream`..`endstream` regions.
pub fn stream_regions(data: &[u8]) -> DelimitedRegions<'_> {
    regions(data, STREAM_BEGIN, STREAM_END)
}

/// Illustrator private-data regions.
pub fn private_data_regions(data: &[u8]) -> DelimitedRegions<'_> {
    regions(data, AI_PRIVATE_BEGIN, AI_PRIVATE_END)
}

impl DelimitedRegions<'_> {
    /// A begin match that is really the tail of an end token must be
    /// skipped: `endstream` contains `stream`.
    fn is_end_tail(&self, pos: usize) -> bool {
        if !self.end.ends_with(self.begin) || self.end.len() == self.begin.len() {
            return false;
        }
        let prefix_len = self.end.len() - self.begin.len();
        pos >= prefix_len && self.data[pos - prefix_len..pos] == self.end[..prefix_len]
    }
}

impl Iterator for DelimitedRegions<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        loop {
            let found = find_bytes(self.data, self.begin, self.pos)?;
            self.pos = found + self.begin.len();
            if self.is_end_tail(found) {
                continue;
            }
            let mut start = self.pos;
            // either line-ending convention directly after the begin token
            if self.data[start..].starts_with(b"\r\n") {
                start += 2;
            } else if self.data[start..].starts_with(b"\n") {
                start += 1;
            }
            // unmatched begin: discard it and keep scanning after the marker
            let Some(end) = find_bytes(self.data, self.end, start) else {
                continue;
            };
            self.pos = end + self.end.len();
            return Some(start..end);
        }
    }
}
