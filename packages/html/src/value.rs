use std::fmt::{self, Formatter};

/// A value written to, or read back from, a declared property.
///
/// Nothing checks that a value "fits" the property it is written to: attribute writes
/// simply stringify it through [`Display`](fmt::Display), and live properties hand it to
/// the host as-is.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(untagged))]
pub enum AttributeValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    None,
}

impl AttributeValue {
    /// JavaScript truthiness, which is what the DOM applies to boolean properties.
    pub fn is_truthy(&self) -> bool {
        match self {
            AttributeValue::Text(t) => !t.is_empty(),
            AttributeValue::Float(f) => *f != 0.0 && !f.is_nan(),
            AttributeValue::Int(i) => *i != 0,
            AttributeValue::Bool(b) => *b,
            AttributeValue::None => false,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, AttributeValue::None)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttributeValue::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(a) => write!(f, "{a}"),
            AttributeValue::Float(a) => write!(f, "{a}"),
            AttributeValue::Int(a) => write!(f, "{a}"),
            AttributeValue::Bool(a) => write!(f, "{a}"),
            AttributeValue::None => Ok(()),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<&String> for AttributeValue {
    fn from(value: &String) -> Self {
        AttributeValue::Text(value.clone())
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => AttributeValue::None,
        }
    }
}

macro_rules! int_values {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttributeValue {
                fn from(value: $ty) -> Self {
                    AttributeValue::Int(value as i64)
                }
            }
        )*
    };
}

int_values!(i8, i16, i32, i64, u8, u16, u32, isize, usize);

impl From<f32> for AttributeValue {
    fn from(value: f32) -> Self {
        AttributeValue::Float(value as f64)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::AttributeValue;

    #[test]
    fn truthiness_follows_javascript() {
        assert!(AttributeValue::from("false").is_truthy());
        assert!(AttributeValue::from(true).is_truthy());
        assert!(AttributeValue::from(3).is_truthy());
        assert!(!AttributeValue::from("").is_truthy());
        assert!(!AttributeValue::from(0).is_truthy());
        assert!(!AttributeValue::from(f64::NAN).is_truthy());
        assert!(!AttributeValue::None.is_truthy());
    }

    #[test]
    fn display_is_the_attribute_string() {
        assert_eq!(AttributeValue::from(12u16).to_string(), "12");
        assert_eq!(AttributeValue::from(1.5).to_string(), "1.5");
        assert_eq!(AttributeValue::from(false).to_string(), "false");
        assert_eq!(AttributeValue::None.to_string(), "");
    }

    #[test]
    fn options_map_to_none() {
        assert_eq!(AttributeValue::from(None::<&str>), AttributeValue::None);
        assert_eq!(
            AttributeValue::from(Some("x")),
            AttributeValue::Text("x".to_string())
        );
    }
}
