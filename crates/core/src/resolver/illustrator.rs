//! Illustrator private-data layer resolver.
//!
//! Illustrator-flavored files carry native layer metadata in a textual
//! private-data block the standard OCG machinery never sees. Layers appear
//! as parenthesized groups: `(Layer (Name "Sketch")(Visible false))`. The
//! name is required; the visibility token is optional and defaults to
//! visible.

use std::ops::Range;

use super::{is_ws, skip_ws};
use crate::model::LayerRecord;
use crate::scan::{self, find_bytes};

const LAYER_TAG: &[u8] = b"(Layer";

/// First private-data block in `text`, or `None` when the markers are
/// absent. Absence is a distinct outcome from a present-but-empty block.
pub fn private_block(text: &[u8]) -> Option<Range<usize>> {
    scan::private_data_regions(text).next()
}

/// Layer records within a block, in appearance order.
///
/// Groups without a resolvable name are skipped; nested groups are
/// discovered by the same forward scan.
pub fn layers_in_block(block: &[u8]) -> Vec<LayerRecord> {
    let mut layers = Vec::new();
    let mut pos = 0;
    while let Some(found) = find_bytes(block, LAYER_TAG, pos) {
        pos = found + 1;
        // the tag must end here: `(LayerInfo ...)` is some other group
        let after = found + LAYER_TAG.len();
        if block
            .get(after)
            .is_some_and(|&b| !is_ws(b) && b != b'(' && b != b')')
        {
            continue;
        }
        let Some(group) = paren_extent(block, found) else {
            continue;
        };
        if let Some(record) = layer_record(&block[group]) {
            layers.push(record);
        }
    }
    layers
}

/// Extent of the balanced parenthesized group starting at `open`. Parens
/// inside double-quoted strings do not count toward the balance.
fn paren_extent(data: &[u8], open: usize) -> Option<Range<usize>> {
    if data.get(open) != Some(&b'(') {
        return None;
    }
    let mut depth = 1usize;
    let mut in_string = false;
    let mut pos = open + 1;
    while pos < data.len() {
        let b = data[pos];
        if in_string {
            match b {
                b'\\' => pos += 1,
                b'"' => in_string = false,
                _ => {}
            }
        } else {
            match b {
                b'"' => in_string = true,
                b'(' => depth += 1,
                b')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(open + 1..pos);
                    }
                }
                _ => {}
            }
        }
        pos += 1;
    }
    None
}

/// Build a record from one group's interior. `None` when the required name
/// field is missing or empty.
fn layer_record(group: &[u8]) -> Option<LayerRecord> {
    let name = quoted_field(group, b"(Name")?;
    if name.is_empty() {
        return None;
    }
    let visible = match token_field(group, b"(Visible") {
        Some(token) => token != b"false",
        None => true,
    };
    Some(LayerRecord { name, visible })
}

/// Find `tag` where the token actually ends (`(Name` must not match
/// `(Names`).
fn find_field(group: &[u8], tag: &[u8]) -> Option<usize> {
    let mut pos = 0;
    while let Some(found) = find_bytes(group, tag, pos) {
        pos = found + 1;
        match group.get(found + tag.len()) {
            Some(&b) if b.is_ascii_alphanumeric() => continue,
            _ => return Some(found),
        }
    }
    None
}

/// Double-quoted value of `tag`, e.g. `(Name "Sketch")`.
fn quoted_field(group: &[u8], tag: &[u8]) -> Option<String> {
    let found = find_field(group, tag)?;
    let open = skip_ws(group, found + tag.len());
    quoted_string(group, open).map(|(value, _)| value)
}

/// Bare token value of `tag`, e.g. `(Visible false)`.
fn token_field<'a>(group: &'a [u8], tag: &[u8]) -> Option<&'a [u8]> {
    let found = find_field(group, tag)?;
    let start = skip_ws(group, found + tag.len());
    let mut end = start;
    while end < group.len() && !is_ws(group[end]) && group[end] != b'(' && group[end] != b')' {
        end += 1;
    }
    (end > start).then(|| &group[start..end])
}

/// Read a double-quoted string starting at `open`, honoring `\"` and `\\`
/// escapes. Bytes widen to chars one-for-one (Latin-1).
fn quoted_string(data: &[u8], open: usize) -> Option<(String, usize)> {
    if data.get(open) != Some(&b'"') {
        return None;
    }
    let mut out = String::new();
    let mut pos = open + 1;
    while pos < data.len() {
        match data[pos] {
            b'\\' => {
                let next = *data.get(pos + 1)?;
                out.push(next as char);
                pos += 2;
            }
            b'"' => return Some((out, pos + 1)),
            b => {
                out.push(b as char);
                pos += 1;
            }
        }
    }
    None
}
