//! ColorLike resolution
//!
//! A ColorLike value is either a reference to a named theme color or a
//! literal color string. Resolution follows one ordered precedence rule,
//! stated here once and tested directly:
//!
//! 1. `themeColor` field (named theme token) - wins when both are present
//! 2. `color` field (literal color string)
//! 3. neither present - the fixed fallback token `primary-text`
//!
//! A bare JSON string is accepted as a literal color. Fields of the wrong
//! kind are ignored and resolution falls through to the next rule. The
//! function is pure and total: every input produces a string.

use serde_json::Value;

/// Token returned when no color information is present
pub const FALLBACK_COLOR_TOKEN: &str = "primary-text";

/// Resolve a ColorLike value to its single string form
pub fn resolve(value: Option<&Value>) -> String {
    let Some(value) = value else {
        return FALLBACK_COLOR_TOKEN.to_string();
    };

    match value {
        Value::String(literal) => literal.clone(),
        Value::Object(obj) => {
            if let Some(token) = obj.get("themeColor").and_then(Value::as_str) {
                return token.to_string();
            }
            if let Some(literal) = obj.get("color").and_then(Value::as_str) {
                return literal.to_string();
            }
            FALLBACK_COLOR_TOKEN.to_string()
        }
        _ => FALLBACK_COLOR_TOKEN.to_string(),
    }
}
