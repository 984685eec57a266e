//! Optional Content Group resolver.
//!
//! Recovers the catalog's `/OCProperties` configuration from decoded text
//! and resolves each group reference to its display name by locating the
//! defining object body. No xref table is consulted: the documents of
//! interest routinely defeat full parsing, so discovery stays textual.

use std::collections::HashSet;
use std::ops::Range;

use super::{array_extent, dict_extent, find_key, is_regular, literal_string, parse_u32, skip_ws};
use crate::model::{LayerRecord, ObjRef};
use crate::scan::find_bytes;

/// Parsed `/OCProperties` configuration: the ordered group reference list
/// and the object ids the default configuration turns off.
///
/// The off-set is not required to be a subset of the group list; dangling
/// references on either side are tolerated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionalContentConfig {
    pub groups: Vec<ObjRef>,
    pub off: HashSet<u32>,
}

/// Locate and parse the configuration dictionary.
///
/// `None` when the text has no `/OCProperties` entry; "no layers" is the
/// common case, not an error. A present entry with a missing or empty
/// `/OCGs` array parses to an empty group list.
pub fn find_config(text: &[u8]) -> Option<OptionalContentConfig> {
    let key = find_key(text, 0..text.len(), b"/OCProperties")?;
    let config = dict_after(text, key + b"/OCProperties".len())?;
    let groups = refs_array(text, config.clone(), b"/OCGs").unwrap_or_default();
    let off = find_key(text, config, b"/D")
        .and_then(|d| dict_after(text, d + 2))
        .and_then(|d| refs_array(text, d, b"/OFF"))
        .unwrap_or_default()
        .iter()
        .map(|r| r.objid)
        .collect();
    Some(OptionalContentConfig { groups, off })
}

/// Resolve each group reference to a `LayerRecord`, in `/OCGs` order.
///
/// `fallback` is the raw buffer when the configuration came from a
/// decompressed stream region; object bodies commonly live outside that
/// region. References that resolve nowhere, and bodies without a usable
/// `/Name`, are skipped.
pub fn resolve(
    config: &OptionalContentConfig,
    text: &[u8],
    fallback: Option<&[u8]>,
) -> Vec<LayerRecord> {
    let mut layers = Vec::with_capacity(config.groups.len());
    for group in &config.groups {
        let body = object_body(text, group.objid)
            .map(|range| (text, range))
            .or_else(|| {
                fallback.and_then(|raw| object_body(raw, group.objid).map(|range| (raw, range)))
            });
        let Some((haystack, range)) = body else {
            #[cfg(feature = "tracing")]
            tracing::debug!(objid = group.objid, "group reference has no object body");
            continue;
        };
        let Some(name) = name_in_dict(haystack, range) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(objid = group.objid, "group body has no usable /Name");
            continue;
        };
        layers.push(LayerRecord {
            name,
            visible: !config.off.contains(&group.objid),
        });
    }
    layers
}

/// Balanced dict value at `pos`, following one level of `N G R`
/// indirection when the value is a reference instead of an inline dict.
fn dict_after(text: &[u8], pos: usize) -> Option<Range<usize>> {
    let start = skip_ws(text, pos);
    if text[start..].starts_with(b"<<") {
        return dict_extent(text, start);
    }
    let (r, _) = parse_ref(text, start)?;
    object_body(text, r.objid)
}

/// Object references inside the array value of `key` within `range`.
///
/// Inline arrays and one level of indirection are both accepted.
fn refs_array(text: &[u8], range: Range<usize>, key: &[u8]) -> Option<Vec<ObjRef>> {
    let key_pos = find_key(text, range, key)?;
    let start = skip_ws(text, key_pos + key.len());
    let interior = if text.get(start) == Some(&b'[') {
        array_extent(text, start)?
    } else {
        let (r, _) = parse_ref(text, start)?;
        let after_obj = object_start(text, r.objid)?;
        array_extent(text, skip_ws(text, after_obj))?
    };
    Some(parse_refs(&text[interior]))
}

/// Scan an array interior for `int int R` references; anything that does
/// not match the grammar is skipped, never guessed at.
fn parse_refs(data: &[u8]) -> Vec<ObjRef> {
    let mut refs = Vec::new();
    let mut pos = 0;
    while pos < data.len() {
        if !data[pos].is_ascii_digit() {
            pos += 1;
            continue;
        }
        match parse_ref(data, pos) {
            Some((r, next)) => {
                refs.push(r);
                pos = next;
            }
            None => {
                while pos < data.len() && data[pos].is_ascii_digit() {
                    pos += 1;
                }
            }
        }
    }
    refs
}

/// Parse an `N G R` reference starting at the first digit of `N`.
///
/// Returns the reference and the position after `R`.
pub(crate) fn parse_ref(data: &[u8], pos: usize) -> Option<(ObjRef, usize)> {
    let (objid, after_id) = parse_u32(data, pos)?;
    let g = skip_ws(data, after_id);
    if g == after_id {
        return None;
    }
    let (genno, after_gen) = parse_u32(data, g)?;
    let r = skip_ws(data, after_gen);
    if r == after_gen || data.get(r) != Some(&b'R') {
        return None;
    }
    let after_r = r + 1;
    if after_r < data.len() && is_regular(data[after_r]) {
        return None;
    }
    Some((ObjRef::new(objid, genno), after_r))
}

/// Position just after the `obj` keyword of the body defining `objid`.
///
/// Any generation number is accepted. The byte before the id must not be a
/// digit and the id's digits must end where the match ends, so a search
/// for object 5 can land in neither `15 0 obj` nor `51 0 obj`.
fn object_start(text: &[u8], objid: u32) -> Option<usize> {
    let needle = objid.to_string().into_bytes();
    let mut pos = 0;
    while let Some(found) = find_bytes(text, &needle, pos) {
        pos = found + 1;
        if found > 0 && text[found - 1].is_ascii_digit() {
            continue;
        }
        let after_id = found + needle.len();
        if after_id < text.len() && text[after_id].is_ascii_digit() {
            continue;
        }
        let g = skip_ws(text, after_id);
        if g == after_id {
            continue;
        }
        let Some((_genno, after_gen)) = parse_u32(text, g) else {
            continue;
        };
        let o = skip_ws(text, after_gen);
        if o == after_gen || !text[o..].starts_with(b"obj") {
            continue;
        }
        let after_obj = o + 3;
        if after_obj < text.len() && is_regular(text[after_obj]) {
            continue;
        }
        return Some(after_obj);
    }
    None
}

/// Dictionary interior of the body defining `objid`.
pub(crate) fn object_body(text: &[u8], objid: u32) -> Option<Range<usize>> {
    let after_obj = object_start(text, objid)?;
    dict_extent(text, skip_ws(text, after_obj))
}

/// `/Name (...)` value within a dict interior.
///
/// Empty names count as absent: placeholder records are never emitted.
fn name_in_dict(text: &[u8], dict: Range<usize>) -> Option<String> {
    let key = find_key(text, dict, b"/Name")?;
    let open = skip_ws(text, key + b"/Name".len());
    let (name, _) = literal_string(text, open)?;
    if name.is_empty() { None } else { Some(name) }
}
