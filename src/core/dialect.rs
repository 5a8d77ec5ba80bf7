//! core::dialect
//!
//! Canonical serialization of configuration values.
//!
//! # Overview
//!
//! A configuration value has two textual encodings, emitted by different
//! generations of the build toolchain:
//!
//! - [`Dialect::Json`] - compact JSON, as older toolchains leave it in the
//!   bundle text
//! - [`Dialect::JsLiteral`] - the minified JavaScript object-literal
//!   expression newer toolchains produce (`!0`/`!1` booleans, bare keys)
//!
//! Both encodings are used as exact-match search/replace keys against
//! compiled bundle text, never re-parsed structurally, so they must be
//! byte-stable: serializing equal values twice yields identical bytes.
//! Object keys are emitted in document order (serde_json `preserve_order`).
//!
//! # Invariants
//!
//! - `serialize(v, Json)` round-trips: parsing it yields a value equal to `v`
//! - `serialize` is deterministic for equal inputs in both dialects
//! - `JsLiteral` output is write-only; nothing in this crate parses it

use serde_json::Value;

/// A textual encoding of a configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Compact JSON (data-interchange form).
    Json,
    /// Minified JavaScript object-literal expression.
    JsLiteral,
}

/// Serialize a configuration value in the given dialect.
pub fn serialize(value: &Value, dialect: Dialect) -> String {
    match dialect {
        Dialect::Json => to_json(value),
        Dialect::JsLiteral => {
            let mut out = String::new();
            write_js_literal(value, &mut out);
            out
        }
    }
}

/// Compact JSON encoding of an in-memory value.
///
/// Serializing a `serde_json::Value` cannot fail: there is no I/O and all
/// object keys are strings.
fn to_json(value: &Value) -> String {
    serde_json::to_string(value).expect("serializing an in-memory JSON value is infallible")
}

/// Write the minified object-literal form of `value` into `out`.
///
/// Token choices are pinned to the bundler's minifier output: `!0`/`!1` for
/// booleans, bare object keys, JSON string literals for strings. The
/// minifier writes `void 0` for `undefined`; that token never arises here
/// because `Value` has no undefined variant.
fn write_js_literal(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("!0"),
        Value::Bool(false) => out.push_str("!1"),
        // Number and String reuse the JSON encoders so the two dialects
        // cannot drift on escaping or numeric formatting.
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => {
            out.push_str(
                &serde_json::to_string(s).expect("serializing a string is infallible"),
            );
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_js_literal(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(key);
                out.push(':');
                write_js_literal(item, out);
            }
            out.push('}');
        }
    }
}
