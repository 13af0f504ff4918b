//! Attribute values and the ordered attribute table that nodes, edges and
//! graphs carry.

use indexmap::IndexMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Maps attribute names to values. Iteration follows insertion order, which is
/// the order the attributes are emitted in.
pub type AttributeTable = IndexMap<String, AttrValue>;

/// The value of a single attribute.
#[derive(Debug, Clone)]
pub enum AttrValue {
    /// Text exactly as it should appear in the DOT source, before quoting.
    /// Values that come from the parser keep their surrounding quotes.
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// An attribute that was listed without a value, as in `[decorate]`.
    Implicit,
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns false for empty text, zero, `false` and implicit values. Only
    /// truthy values are picked up from default blocks.
    pub fn is_truthy(&self) -> bool {
        match self {
            AttrValue::Text(s) => !s.is_empty(),
            AttrValue::Int(v) => *v != 0,
            AttrValue::Float(v) => *v != 0.0,
            AttrValue::Bool(v) => *v,
            AttrValue::Implicit => false,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(s) => write!(f, "{}", s),
            AttrValue::Int(v) => write!(f, "{}", v),
            // Whole numbers keep a fractional part, so `1.0` stays a float.
            AttrValue::Float(v) if v.is_finite() && v.fract() == 0.0 => {
                write!(f, "{:.1}", v)
            }
            AttrValue::Float(v) => write!(f, "{}", v),
            AttrValue::Bool(v) => write!(f, "{}", v),
            AttrValue::Implicit => Ok(()),
        }
    }
}

// Floats compare by their bit pattern so that values can be used in hashed
// keys (frozen subgraphs are part of edge keys).
impl PartialEq for AttrValue {
    fn eq(&self, other: &AttrValue) -> bool {
        match (self, other) {
            (AttrValue::Text(a), AttrValue::Text(b)) => a == b,
            (AttrValue::Int(a), AttrValue::Int(b)) => a == b,
            (AttrValue::Float(a), AttrValue::Float(b)) => {
                a.to_bits() == b.to_bits()
            }
            (AttrValue::Bool(a), AttrValue::Bool(b)) => a == b,
            (AttrValue::Implicit, AttrValue::Implicit) => true,
            _ => false,
        }
    }
}

impl Eq for AttrValue {}

impl Hash for AttrValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            AttrValue::Text(s) => s.hash(state),
            AttrValue::Int(v) => v.hash(state),
            AttrValue::Float(v) => v.to_bits().hash(state),
            AttrValue::Bool(v) => v.hash(state),
            AttrValue::Implicit => {}
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<&String> for AttrValue {
    fn from(s: &String) -> Self {
        AttrValue::Text(s.clone())
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        AttrValue::Int(v as i64)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<usize> for AttrValue {
    fn from(v: usize) -> Self {
        AttrValue::Int(v as i64)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

/// Builds an attribute table from key/value pairs, keeping their order.
pub fn attributes<K, V, I>(pairs: I) -> AttributeTable
where
    K: Into<String>,
    V: Into<AttrValue>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[test]
fn test_truthiness() {
    assert!(AttrValue::from("red").is_truthy());
    assert!(!AttrValue::from("").is_truthy());
    assert!(!AttrValue::from(0).is_truthy());
    assert!(AttrValue::from(0.5).is_truthy());
    assert!(!AttrValue::from(false).is_truthy());
    assert!(!AttrValue::Implicit.is_truthy());
}

#[test]
fn test_display() {
    assert_eq!(AttrValue::from(1.4).to_string(), "1.4");
    assert_eq!(AttrValue::from(1.0).to_string(), "1.0");
    assert_eq!(AttrValue::from(-3.0).to_string(), "-3.0");
    assert_eq!(AttrValue::from(12).to_string(), "12");
    assert_eq!(AttrValue::from(true).to_string(), "true");
    assert_eq!(AttrValue::Implicit.to_string(), "");
}

#[test]
fn test_table_order() {
    let mut table = attributes(vec![("shape", "box"), ("label", "mine")]);
    table.insert("shape".to_string(), AttrValue::from("circle"));
    let keys: Vec<&String> = table.keys().collect();
    assert_eq!(keys, vec!["shape", "label"]);
    assert_eq!(table["shape"], AttrValue::from("circle"));
}
