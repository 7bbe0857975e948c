//! Nested-structure flattening.
//!
//! Translation JSON files nest freely (`{"home": {"title": "Welcome"}}`), but
//! the translation table is keyed by flat dotted paths (`home.title`). This
//! module collapses any nested JSON value into its leaf scalars.

use serde_json::{Map, Value};

use super::error::{ExtractError, MAX_DEPTH};

/// Default separator joining path segments.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Flattens an arbitrarily nested JSON value into dotted-path leaves.
///
/// Object keys are joined by `separator`; array elements are keyed by their
/// numeric position. A top-level scalar produces a single entry keyed by the
/// empty string. Deterministic: the output order follows the input order
/// (`serde_json` is built with `preserve_order`).
///
/// Recursion depth is bounded at [`MAX_DEPTH`]; deeper input fails with
/// [`ExtractError::StructureTooDeep`] rather than overflowing the stack.
pub fn flatten_value(
    value: &Value,
    separator: &str,
) -> Result<Map<String, Value>, ExtractError> {
    let mut flat = Map::new();
    flatten_into(value, String::new(), separator, 0, &mut flat)?;
    Ok(flat)
}

fn flatten_into(
    value: &Value,
    prefix: String,
    separator: &str,
    depth: usize,
    out: &mut Map<String, Value>,
) -> Result<(), ExtractError> {
    if depth > MAX_DEPTH {
        return Err(ExtractError::StructureTooDeep {
            max_depth: MAX_DEPTH,
        });
    }

    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let path = join_path(&prefix, key, separator);
                flatten_into(val, path, separator, depth + 1, out)?;
            }
        }
        Value::Array(items) => {
            for (index, val) in items.iter().enumerate() {
                let path = join_path(&prefix, &index.to_string(), separator);
                flatten_into(val, path, separator, depth + 1, out)?;
            }
        }
        _ => {
            out.insert(prefix, value.clone());
        }
    }

    Ok(())
}

fn join_path(prefix: &str, segment: &str, separator: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}{}{}", prefix, separator, segment)
    }
}
