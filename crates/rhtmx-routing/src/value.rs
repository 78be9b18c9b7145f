/// Scalar parameter values and their canonical URL representation
///
/// Every value that ends up in a generated URL (path placeholder or query
/// string) goes through [`Value::to_url_component`].

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

/// Characters escaped by `encodeURIComponent`: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Scalar input value for a route parameter
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl Value {
    /// Converts the value into its URL-safe string form (pure function)
    ///
    /// - `true` → `"1"`, `false` → `"0"`
    /// - `Null` → `""`
    /// - anything else is rendered, trimmed and percent-encoded
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_routing::Value;
    ///
    /// assert_eq!(Value::from(true).to_url_component(), "1");
    /// assert_eq!(Value::Null.to_url_component(), "");
    /// assert_eq!(Value::from(117).to_url_component(), "117");
    /// assert_eq!(Value::from(" a b ").to_url_component(), "a%20b");
    /// ```
    pub fn to_url_component(&self) -> String {
        match self {
            Value::Bool(true) => "1".to_string(),
            Value::Bool(false) => "0".to_string(),
            Value::Null => String::new(),
            other => encode_component(trim_text(&other.to_string())),
        }
    }

    /// Builds a scalar from a JSON value; arrays and objects have no scalar form
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => Some(Value::Null),
            serde_json::Value::Bool(b) => Some(Value::Bool(*b)),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Value::Int)
                .or_else(|| n.as_f64().map(Value::Float)),
            serde_json::Value::String(s) => Some(Value::String(s.clone())),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
        }
    }
}

/// Free-function form of [`Value::to_url_component`]
pub fn cast_parameter_to_string(value: &Value) -> String {
    value.to_url_component()
}

/// Trims whitespace, including the byte order mark U+FEFF
fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Percent-encodes a component, leaving empty input untouched
pub fn encode_component(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) if n.is_nan() => f.write_str("NaN"),
            Value::Float(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // -0.0 renders as "0"; integral floats already print without ".0"
            Value::Float(n) if *n == 0.0 => f.write_str("0"),
            Value::Float(n) if n.abs() >= 1e21 || n.abs() < 1e-6 => write_exponent(f, *n),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
        }
    }
}

/// Exponent form with an explicit sign: `1e+21`, `1.5e-7`
fn write_exponent(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    let formatted = format!("{:e}", n);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => write!(f, "{}e+{}", mantissa, exponent),
        _ => f.write_str(&formatted),
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Int(n as i64)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        i64::try_from(n)
            .map(Value::Int)
            .unwrap_or(Value::Float(n as f64))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::from(n as u64)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_rendering() {
        assert_eq!(Value::from(117.0).to_string(), "117");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(-0.0).to_string(), "0");
        assert_eq!(Value::from(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Value::from(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::from(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn test_float_exponent_rendering() {
        assert_eq!(Value::from(1e21).to_string(), "1e+21");
        assert_eq!(Value::from(-1.5e300).to_string(), "-1.5e+300");
        assert_eq!(Value::from(1e-7).to_string(), "1e-7");
        assert_eq!(Value::from(1e20).to_string(), "100000000000000000000");
        assert_eq!(Value::from(0.000001).to_string(), "0.000001");
        assert_eq!(Value::from(1e21).to_url_component(), "1e%2B21");
    }

    #[test]
    fn test_encode_component_charset() {
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
        assert_eq!(encode_component("a/b?c=d&e#f"), "a%2Fb%3Fc%3Dd%26e%23f");
        assert_eq!(encode_component("héllo"), "h%C3%A9llo");
        assert_eq!(encode_component(""), "");
    }

    #[test]
    fn test_whitespace_only_string_is_empty() {
        assert_eq!(Value::from("   ").to_url_component(), "");
        assert_eq!(cast_parameter_to_string(&Value::from(" \t")), "");
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        assert_eq!(Value::from("\u{feff}x\u{feff}").to_url_component(), "x");
        assert_eq!(Value::from("\u{feff} ").to_url_component(), "");
    }

    #[test]
    fn test_from_json() {
        assert_eq!(Value::from_json(&serde_json::json!(117)), Some(Value::Int(117)));
        assert_eq!(Value::from_json(&serde_json::json!(2.5)), Some(Value::Float(2.5)));
        assert_eq!(Value::from_json(&serde_json::json!(null)), Some(Value::Null));
        assert_eq!(Value::from_json(&serde_json::json!([1, 2])), None);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::String("x".into()));
    }
}
