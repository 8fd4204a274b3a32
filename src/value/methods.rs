//! Named methods available to [`invoke`](crate::array::invoke).
//!
//! Every receiver kind has its own closed table; `to_string` is shared by
//! all of them.

use std::collections::BTreeMap;

use super::Value;
use crate::array::Invocable;
use crate::error::{Result, UnderbarError};

const OPERATION: &str = "invoke";

static STRING_METHODS: &[(&str, fn(&str, &[Value]) -> Result<Value>)] = &[
    ("to_uppercase", |text, _| Ok(Value::from(text.to_uppercase()))),
    ("to_lowercase", |text, _| Ok(Value::from(text.to_lowercase()))),
    ("trim", |text, _| Ok(Value::from(text.trim()))),
    ("len", |text, _| Ok(length(text.chars().count()))),
    ("reverse", |text, _| Ok(Value::from(text.chars().rev().collect::<String>()))),
    ("repeat", |text, arguments| {
        let count = count_argument("repeat", arguments, 0)?;
        repeat(text, count).map(Value::from)
    }),
    ("concat", |text, arguments| {
        let joined = arguments.iter().fold(text.to_string(), |mut joined, argument| {
            joined.push_str(&argument.to_string());
            joined
        });
        Ok(Value::from(joined))
    }),
    ("starts_with", |text, arguments| {
        let prefix = string_argument("starts_with", arguments, 0)?;
        Ok(Value::from(text.starts_with(prefix)))
    }),
    ("ends_with", |text, arguments| {
        let suffix = string_argument("ends_with", arguments, 0)?;
        Ok(Value::from(text.ends_with(suffix)))
    }),
    ("contains", |text, arguments| {
        let needle = string_argument("contains", arguments, 0)?;
        Ok(Value::from(text.contains(needle)))
    }),
    ("split", |text, arguments| {
        let separator = string_argument("split", arguments, 0)?;
        Ok(Value::from(text.split(separator).collect::<Vec<_>>()))
    }),
];

static NUMBER_METHODS: &[(&str, fn(&f64, &[Value]) -> Result<Value>)] = &[
    ("abs", |number, _| Ok(Value::from(number.abs()))),
    ("floor", |number, _| Ok(Value::from(number.floor()))),
    ("ceil", |number, _| Ok(Value::from(number.ceil()))),
    ("round", |number, _| Ok(Value::from(number.round()))),
    ("sqrt", |number, _| Ok(Value::from(number.sqrt()))),
    ("pow", |number, arguments| {
        let exponent = number_argument("pow", arguments, 0)?;
        Ok(Value::from(number.powf(exponent)))
    }),
];

static ARRAY_METHODS: &[(&str, fn(&[Value], &[Value]) -> Result<Value>)] = &[
    ("len", |items, _| Ok(length(items.len()))),
    ("reverse", |items, _| Ok(Value::Array(items.iter().rev().cloned().collect()))),
    ("join", |items, arguments| {
        let separator = match arguments.first() {
            None => ",",
            Some(_) => string_argument("join", arguments, 0)?,
        };
        let parts: Vec<String> = items.iter().map(Value::to_string).collect();
        Ok(Value::from(parts.join(separator)))
    }),
    ("first", |items, _| Ok(items.first().cloned().unwrap_or_default())),
    ("last", |items, _| Ok(items.last().cloned().unwrap_or_default())),
];

static OBJECT_METHODS: &[(&str, fn(&BTreeMap<String, Value>, &[Value]) -> Result<Value>)] = &[
    ("len", |properties, _| Ok(length(properties.len()))),
    ("keys", |properties, _| {
        Ok(Value::Array(properties.keys().cloned().map(Value::String).collect()))
    }),
    ("values", |properties, _| Ok(Value::Array(properties.values().cloned().collect()))),
];

#[allow(clippy::cast_precision_loss)]
fn length(count: usize) -> Value {
    Value::Number(count as f64)
}

fn argument<'a>(method: &str, arguments: &'a [Value], index: usize) -> Result<&'a Value> {
    arguments.get(index).ok_or_else(|| {
        UnderbarError::invalid_argument(
            OPERATION,
            format!("`{method}` expects an argument at position {index}"),
        )
    })
}

fn string_argument<'a>(method: &str, arguments: &'a [Value], index: usize) -> Result<&'a str> {
    let value = argument(method, arguments, index)?;
    value.as_str().ok_or_else(|| {
        UnderbarError::invalid_argument(
            OPERATION,
            format!(
                "`{method}` expects a string at position {index}, found {}",
                value.kind()
            ),
        )
    })
}

fn number_argument(method: &str, arguments: &[Value], index: usize) -> Result<f64> {
    let value = argument(method, arguments, index)?;
    value.as_f64().ok_or_else(|| {
        UnderbarError::invalid_argument(
            OPERATION,
            format!(
                "`{method}` expects a number at position {index}, found {}",
                value.kind()
            ),
        )
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count_argument(method: &str, arguments: &[Value], index: usize) -> Result<usize> {
    let count = number_argument(method, arguments, index)?;
    if count.is_finite() && count >= 0.0 && count.fract() == 0.0 {
        Ok(count as usize)
    } else {
        Err(UnderbarError::invalid_argument(
            OPERATION,
            format!("`{method}` expects a non-negative whole number, found {count}"),
        ))
    }
}

/// Like [`str::repeat`], but reports an unallocatable result instead of
/// aborting.
fn repeat(text: &str, count: usize) -> Result<String> {
    if text.is_empty() {
        return Ok(String::new());
    }
    let too_long = || {
        UnderbarError::invalid_argument(
            OPERATION,
            format!("`repeat` cannot allocate {count} copies of a {} byte string", text.len()),
        )
    };
    let length = text.len().checked_mul(count).ok_or_else(too_long)?;
    let mut repeated = String::new();
    repeated.try_reserve_exact(length).map_err(|_| too_long())?;
    for _ in 0..count {
        repeated.push_str(text);
    }
    Ok(repeated)
}

fn dispatch<T: ?Sized>(
    table: &[(&str, fn(&T, &[Value]) -> Result<Value>)],
    receiver: &T,
    kind: &'static str,
    name: &str,
    arguments: &[Value],
) -> Result<Value> {
    table
        .iter()
        .find(|(method, _)| *method == name)
        .map_or_else(
            || Err(UnderbarError::unsupported_key(name, kind)),
            |(_, method)| method(receiver, arguments),
        )
}

impl Invocable for Value {
    type Argument = Self;
    type Output = Self;

    fn invoke_method(&self, name: &str, arguments: &[Self]) -> Result<Self> {
        if name == "to_string" {
            return Ok(Self::String(self.to_string()));
        }
        let kind = self.kind();
        match self {
            Self::String(text) => dispatch(STRING_METHODS, text.as_str(), kind, name, arguments),
            Self::Number(number) => dispatch(NUMBER_METHODS, number, kind, name, arguments),
            Self::Array(items) => dispatch(ARRAY_METHODS, items.as_slice(), kind, name, arguments),
            Self::Object(properties) => {
                dispatch(OBJECT_METHODS, properties, kind, name, arguments)
            }
            Self::Null | Self::Bool(_) => Err(UnderbarError::unsupported_key(name, kind)),
        }
    }
}

impl Invocable for String {
    type Argument = Value;
    type Output = Value;

    fn invoke_method(&self, name: &str, arguments: &[Value]) -> Result<Value> {
        if name == "to_string" {
            return Ok(Value::String(self.clone()));
        }
        dispatch(STRING_METHODS, self.as_str(), "string", name, arguments)
    }
}
