//! Calling a method on every element of a collection.
//!
//! Named methods are resolved through [`Invocable`], a closed lookup table
//! per receiver type. Nothing is ever evaluated from a string: an unknown
//! name is an [`UnderbarError::UnsupportedKey`].

use crate::error::{Result, UnderbarError};
use crate::iteration::{Collection, map};

/// A receiver that exposes a fixed set of named methods.
///
/// # Examples
///
/// ```rust
/// use underbar::array::Invocable;
/// use underbar::error::UnderbarError;
///
/// struct Counter(u32);
///
/// impl Invocable for Counter {
///     type Argument = u32;
///     type Output = u32;
///
///     fn invoke_method(&self, name: &str, arguments: &[u32]) -> Result<u32, UnderbarError> {
///         match name {
///             "get" => Ok(self.0),
///             "plus" => Ok(self.0 + arguments.iter().sum::<u32>()),
///             _ => Err(UnderbarError::unsupported_key(name, "counter")),
///         }
///     }
/// }
///
/// assert_eq!(Counter(2).invoke_method("plus", &[3, 4]), Ok(9));
/// assert!(Counter(2).invoke_method("reset", &[]).is_err());
/// ```
pub trait Invocable {
    /// The type of the method arguments.
    type Argument;
    /// The type of the method results.
    type Output;

    /// Calls the method called `name` with `arguments`.
    ///
    /// # Errors
    ///
    /// - [`UnderbarError::UnsupportedKey`] if the receiver has no such method
    /// - [`UnderbarError::InvalidArgument`] if the arguments do not fit it
    fn invoke_method(&self, name: &str, arguments: &[Self::Argument]) -> Result<Self::Output>;
}

/// Calls the method called `method` on every element, in traversal order.
///
/// Stops at the first element that rejects the call.
///
/// # Errors
///
/// Returns the first error reported by an element's
/// [`Invocable::invoke_method`].
///
/// # Examples
///
/// ```rust
/// use underbar::array::invoke;
/// use underbar::value::Value;
///
/// let words = vec![Value::from("dog"), Value::from("cat")];
/// let shouted = invoke(&words, "to_uppercase", &[]).unwrap();
/// assert_eq!(shouted, vec![Value::from("DOG"), Value::from("CAT")]);
/// ```
pub fn invoke<C>(
    collection: &C,
    method: &str,
    arguments: &[<C::Value as Invocable>::Argument],
) -> Result<Vec<<C::Value as Invocable>::Output>>
where
    C: Collection + ?Sized,
    C::Value: Invocable,
{
    let mut invoked = Vec::with_capacity(collection.size());
    let mut failure: Option<UnderbarError> = None;

    collection.each(|value, _, _| {
        if failure.is_some() {
            return;
        }
        match value.invoke_method(method, arguments) {
            Ok(output) => invoked.push(output),
            Err(error) => {
                tracing::debug!(method, %error, "invoke: element rejected method");
                failure = Some(error);
            }
        }
    });

    failure.map_or(Ok(invoked), Err)
}

/// Calls `function(element, arguments)` on every element, in traversal
/// order.
///
/// # Examples
///
/// ```rust
/// use underbar::array::invoke_with;
///
/// let padded = invoke_with(&vec!["a", "bb"], |text, widths: &[usize]| {
///     format!("{text:>width$}", width = widths[0])
/// }, &[3]);
/// assert_eq!(padded, vec!["  a", " bb"]);
/// ```
pub fn invoke_with<C, A, R, F>(collection: &C, mut function: F, arguments: &[A]) -> Vec<R>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Value, &[A]) -> R,
{
    map(collection, |value| function(value, arguments))
}
