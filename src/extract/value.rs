//! Scalar coercion helpers shared by the extractors

use serde_json::Value;

/// Coerces a cell's text into a tagged scalar value
///
/// The rule is total and deliberately simple: text that parses as a
/// decimal number becomes a JSON number, anything else stays text.
/// Integers are tried first so `"24"` serializes as `24`, not `24.0`.
/// The empty string is text, not zero.
pub fn coerce(text: &str) -> Value {
    if let Ok(n) = text.parse::<i64>() {
        return Value::Number(n.into());
    }

    if let Ok(f) = text.parse::<f64>() {
        if let Some(n) = serde_json::Number::from_f64(f) {
            return Value::Number(n);
        }
    }

    Value::String(text.to_string())
}

/// Reads a pixel length out of an inline style attribute
///
/// `style_px("left:50px;top:120px", "left")` is `Some(50.0)`. Returns
/// `None` when the property is absent or its value does not parse.
pub fn style_px(style: &str, property: &str) -> Option<f64> {
    for declaration in style.split(';') {
        if let Some((key, value)) = declaration.split_once(':') {
            if key.trim() == property {
                return value.trim().trim_end_matches("px").trim().parse().ok();
            }
        }
    }
    None
}
