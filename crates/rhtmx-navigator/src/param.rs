// File: src/param.rs
// Purpose: Typed route parameter values and their wire form

use crate::error::{NavError, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::de::{self, Deserializer, Visitor};
use serde::ser;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A typed value attached to a route
///
/// On the wire every variant is a single scalar: strings, integers, floats
/// and booleans are written as themselves, `Object` is written as the
/// base64 text of its bytes.
///
/// # Decoding order
///
/// Integers win over floats, floats over booleans, booleans over strings.
/// A string is taken as an `Object` payload only when it is valid base64,
/// so a plain string whose text happens to be valid base64 (`"abcd"`, or
/// the empty string) comes back as an `Object`.
///
/// # Examples
///
/// ```
/// use rhtmx_navigator::ParamValue;
///
/// let value = ParamValue::from(42);
/// let wire = value.encode().unwrap();
/// assert_eq!(wire, serde_json::json!(42));
/// assert_eq!(ParamValue::decode(wire).unwrap(), value);
/// ```
#[derive(Debug, Clone)]
pub enum ParamValue {
    String(String),
    Int(i64),
    Double(f64),
    Bool(bool),
    /// Already-serialized payload (usually JSON) whose shape only the caller knows
    Object(Vec<u8>),
}

impl ParamValue {
    /// Serialize a caller value into an `Object` payload (JSON bytes)
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_navigator::ParamValue;
    /// use std::collections::HashMap;
    ///
    /// let payload = HashMap::from([("key", "value")]);
    /// let value = ParamValue::json(&payload).unwrap();
    /// assert_eq!(value.as_bytes(), Some(&br#"{"key":"value"}"#[..]));
    /// ```
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        serde_json::to_vec(value)
            .map(ParamValue::Object)
            .map_err(|e| NavError::Encoding(e.to_string()))
    }

    /// Encode into the single-value wire form
    ///
    /// Fails with [`NavError::Encoding`] for NaN and infinite doubles, which
    /// JSON cannot represent.
    pub fn encode(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| NavError::Encoding(e.to_string()))
    }

    /// Decode from the single-value wire form
    ///
    /// Fails with [`NavError::Decoding`] for `null`, arrays and maps.
    ///
    /// `decode(encode(v))` gives back `v` except for one case: a `String`
    /// whose text is valid standard base64 (`""`, `"test"`, `"name"`) comes
    /// back as the `Object` holding the decoded bytes. Non-finite doubles
    /// never get this far because `encode` rejects them.
    pub fn decode(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(NavError::from)
    }

    /// Human-readable projection of the scalar variants
    ///
    /// Returns `None` for `Object`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_navigator::ParamValue;
    ///
    /// assert_eq!(ParamValue::Int(5).as_string(), Some("5".to_string()));
    /// assert_eq!(ParamValue::Double(5.0).as_string(), Some("5.0".to_string()));
    /// assert_eq!(ParamValue::Bool(false).as_string(), Some("false".to_string()));
    /// assert_eq!(ParamValue::Object(vec![1, 2]).as_string(), None);
    /// ```
    pub fn as_string(&self) -> Option<String> {
        match self {
            ParamValue::Object(_) => None,
            scalar => Some(scalar.to_string()),
        }
    }

    /// Raw payload of an `Object` value
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ParamValue::Object(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Variant name, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            ParamValue::String(_) => "string",
            ParamValue::Int(_) => "int",
            ParamValue::Double(_) => "double",
            ParamValue::Bool(_) => "bool",
            ParamValue::Object(_) => "object",
        }
    }

    /// Classify wire text: base64 text is an object payload, anything else a string
    fn from_wire_text(text: &str) -> Self {
        match STANDARD.decode(text) {
            Ok(bytes) => ParamValue::Object(bytes),
            Err(_) => ParamValue::String(text.to_string()),
        }
    }
}

// Floats compare by bit pattern so that equality agrees with hashing.
impl PartialEq for ParamValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ParamValue::String(a), ParamValue::String(b)) => a == b,
            (ParamValue::Int(a), ParamValue::Int(b)) => a == b,
            (ParamValue::Double(a), ParamValue::Double(b)) => a.to_bits() == b.to_bits(),
            (ParamValue::Bool(a), ParamValue::Bool(b)) => a == b,
            (ParamValue::Object(a), ParamValue::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ParamValue {}

impl Hash for ParamValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            ParamValue::String(s) => s.hash(state),
            ParamValue::Int(i) => i.hash(state),
            ParamValue::Double(d) => d.to_bits().hash(state),
            ParamValue::Bool(b) => b.hash(state),
            ParamValue::Object(bytes) => bytes.hash(state),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::String(s) => f.write_str(s),
            ParamValue::Int(i) => write!(f, "{}", i),
            ParamValue::Double(d) => write!(f, "{:?}", d),
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Object(bytes) => f.write_str(&STANDARD.encode(bytes)),
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ParamValue::String(s) => serializer.serialize_str(s),
            ParamValue::Int(i) => serializer.serialize_i64(*i),
            ParamValue::Double(d) if !d.is_finite() => Err(ser::Error::custom(format!(
                "double {} has no JSON representation",
                d
            ))),
            ParamValue::Double(d) => serializer.serialize_f64(*d),
            ParamValue::Bool(b) => serializer.serialize_bool(*b),
            ParamValue::Object(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
        }
    }
}

struct ParamValueVisitor;

impl<'de> Visitor<'de> for ParamValueVisitor {
    type Value = ParamValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer, floating-point number, boolean, string or base64 object payload")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<ParamValue, E> {
        Ok(ParamValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<ParamValue, E> {
        Ok(ParamValue::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<ParamValue, E> {
        // Out of i64 range still reads as a number, just not an integer one
        Ok(i64::try_from(v)
            .map(ParamValue::Int)
            .unwrap_or(ParamValue::Double(v as f64)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<ParamValue, E> {
        Ok(ParamValue::Double(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<ParamValue, E> {
        Ok(ParamValue::from_wire_text(v))
    }
}

impl<'de> Deserialize<'de> for ParamValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ParamValueVisitor)
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::String(s)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::String(s.to_string())
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Int(n)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        ParamValue::Int(n as i64)
    }
}

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        ParamValue::Double(n)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<Vec<u8>> for ParamValue {
    fn from(bytes: Vec<u8>) -> Self {
        ParamValue::Object(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_encode_scalars_as_native_json() {
        assert_eq!(ParamValue::from("Bookify").encode().unwrap(), serde_json::json!("Bookify"));
        assert_eq!(ParamValue::Int(-7).encode().unwrap(), serde_json::json!(-7));
        assert_eq!(ParamValue::Double(3.14).encode().unwrap(), serde_json::json!(3.14));
        assert_eq!(ParamValue::Bool(true).encode().unwrap(), serde_json::json!(true));
    }

    #[test]
    fn test_encode_object_as_base64() {
        let value = ParamValue::Object(b"hello".to_vec());
        assert_eq!(value.encode().unwrap(), serde_json::json!("aGVsbG8="));
    }

    #[test]
    fn test_encode_rejects_non_finite_doubles() {
        for d in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(ParamValue::Double(d).encode(), Err(NavError::Encoding(_))));
            assert!(serde_json::to_string(&ParamValue::Double(d)).is_err());
        }
    }

    #[test]
    fn test_decode_rejects_unsupported_shapes() {
        for wire in [
            serde_json::Value::Null,
            serde_json::json!([1, 2]),
            serde_json::json!({"a": 1}),
        ] {
            assert!(matches!(ParamValue::decode(wire), Err(NavError::Decoding(_))));
        }
    }

    #[test]
    fn test_decode_large_unsigned_falls_back_to_double() {
        let decoded = ParamValue::decode(serde_json::json!(u64::MAX)).unwrap();
        assert_eq!(decoded, ParamValue::Double(u64::MAX as f64));
    }

    #[test]
    fn test_decode_base64_looking_string_is_object() {
        let decoded = ParamValue::decode(serde_json::json!("abcd")).unwrap();
        assert_eq!(decoded.kind(), "object");
    }

    #[test]
    fn test_double_equality_is_bitwise() {
        assert_eq!(ParamValue::Double(f64::NAN), ParamValue::Double(f64::NAN));
        assert_ne!(ParamValue::Double(0.0), ParamValue::Double(-0.0));
    }

    #[test]
    fn test_hash_distinguishes_variants() {
        let set: HashSet<ParamValue> = [
            ParamValue::Int(1),
            ParamValue::Bool(true),
            ParamValue::from("1"),
            ParamValue::Double(1.0),
            ParamValue::Int(1),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_display() {
        assert_eq!(ParamValue::Double(4.9).to_string(), "4.9");
        assert_eq!(ParamValue::Object(b"hello".to_vec()).to_string(), "aGVsbG8=");
    }
}
