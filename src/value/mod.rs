//! A dynamically shaped value.
//!
//! [`Value`] is for data whose shape is only known at run time: mixed
//! element types, arbitrarily deep nesting, objects addressed by property
//! name. It implements every capability trait of the crate, so it can be
//! used with [`pluck`](crate::iteration::pluck),
//! [`every_truthy`](crate::iteration::every_truthy),
//! [`sort_by`](crate::array::sort_by), [`flatten`](crate::array::flatten)
//! and [`invoke`](crate::array::invoke).
//!
//! Equality is strict: values of different variants are never equal, so
//! `Value::from(5)` and `Value::from("5")` differ.
//!
//! # Examples
//!
//! ```rust
//! use underbar::array::flatten;
//! use underbar::value::Value;
//!
//! let nested = Value::from(vec![
//!     Value::from(1),
//!     Value::from(vec![Value::from("two"), Value::from(vec![Value::Null])]),
//! ]);
//! assert_eq!(
//!     nested.flatten().unwrap(),
//!     vec![Value::from(1), Value::from("two"), Value::Null]
//! );
//! ```

mod methods;

use std::collections::BTreeMap;
use std::fmt;

use crate::array::{Branch, Nestable, flatten};
use crate::error::{Result, UnderbarError};
use crate::iteration::{Record, Truthy};

/// A dynamically shaped value.
///
/// Variants are ordered `Null < Bool < Number < String < Array < Object`
/// when compared across kinds; within a kind the natural order applies.
#[derive(Debug, Clone, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// The absence of a value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// Values addressed by property name.
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Returns the name of this value's kind, as used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the number, if this is a [`Value::Number`].
    #[inline]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the text, if this is a [`Value::String`].
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Returns the items, if this is a [`Value::Array`].
    #[inline]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Returns the properties, if this is a [`Value::Object`].
    #[inline]
    pub const fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Object(properties) => Some(properties),
            _ => None,
        }
    }

    /// Returns every non-array value nested inside this array, depth first.
    ///
    /// # Errors
    ///
    /// Returns [`UnderbarError::InvalidArgument`] if this value is not an
    /// array.
    pub fn flatten(&self) -> Result<Vec<Self>> {
        self.as_array().map(flatten).ok_or_else(|| {
            UnderbarError::invalid_argument(
                "flatten",
                format!("expected an array, found {}", self.kind()),
            )
        })
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => number.is_truthy(),
            Self::String(text) => text.is_truthy(),
            Self::Array(_) | Self::Object(_) => true,
        }
    }
}

impl Record for Value {
    type Property = Self;

    fn property(&self, name: &str) -> Option<&Self> {
        self.as_object().and_then(|properties| properties.get(name))
    }
}

impl Nestable for Value {
    type Leaf = Self;

    fn branch(&self) -> Branch<'_, Self> {
        match self {
            Self::Array(items) => Branch::Sequence(items.as_slice()),
            other => Branch::Leaf(other),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn format_number(number: f64, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    if number.is_finite() && number.fract() == 0.0 && number.abs() < 1e15 {
        write!(formatter, "{}", number as i64)
    } else {
        write!(formatter, "{number}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Number(number) => format_number(*number, formatter),
            Self::String(text) => formatter.write_str(text),
            Self::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(",")?;
                    }
                    write!(formatter, "{item}")?;
                }
                Ok(())
            }
            Self::Object(properties) => {
                formatter.write_str("{")?;
                for (index, (name, value)) in properties.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{name}: {value}")?;
                }
                formatter.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

macro_rules! impl_from_lossless_number {
    ($($number:ty),* $(,)?) => {
        $(
            impl From<$number> for Value {
                fn from(number: $number) -> Self {
                    Self::Number(f64::from(number))
                }
            }
        )*
    };
}

impl_from_lossless_number!(i8, i16, i32, u8, u16, u32, f32);

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Self>> for Value {
    fn from(properties: BTreeMap<String, Self>) -> Self {
        Self::Object(properties)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<Self>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        Self::Object(
            entries
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

static_assertions::assert_impl_all!(Value: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Null, "null")]
    #[case(Value::from(true), "true")]
    #[case(Value::from(3), "3")]
    #[case(Value::from(2.5), "2.5")]
    #[case(Value::from("text"), "text")]
    #[case(Value::from(vec![1, 2]), "1,2")]
    fn display(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn object_display_lists_properties() {
        let object: Value = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(object.to_string(), "{a: 1, b: 2}");
    }

    #[rstest]
    fn strict_equality_across_kinds() {
        assert_ne!(Value::from(5), Value::from("5"));
        assert_ne!(Value::from(0), Value::from(false));
        assert_ne!(Value::Null, Value::from(0));
        assert_eq!(Value::from(5), Value::from(5.0));
    }

    #[rstest]
    #[case(Value::Null, false)]
    #[case(Value::from(0), false)]
    #[case(Value::from(f64::NAN), false)]
    #[case(Value::from(""), false)]
    #[case(Value::from(false), false)]
    #[case(Value::from(-1), true)]
    #[case(Value::from("0"), true)]
    #[case(Value::Array(Vec::new()), true)]
    #[case(Value::Object(BTreeMap::new()), true)]
    fn truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    fn property_lookup_only_on_objects() {
        let object: Value = [("age", 7)].into_iter().collect();
        assert_eq!(object.property("age"), Some(&Value::from(7)));
        assert_eq!(object.property("name"), None);
        assert_eq!(Value::from("age").property("age"), None);
    }

    #[rstest]
    fn flatten_rejects_non_arrays() {
        let error = Value::from(3).flatten().unwrap_err();
        assert_eq!(
            error,
            UnderbarError::invalid_argument("flatten", "expected an array, found number")
        );
    }

    #[rstest]
    fn option_conversion() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }
}
