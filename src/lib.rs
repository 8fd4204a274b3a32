//! # underbar
//!
//! Functional utilities for Rust collections.
//!
//! ## Overview
//!
//! Every operation in this crate is built on a single traversal primitive,
//! [`Collection::each`](iteration::Collection::each), which visits the
//! elements of a sequence or a mapping together with their position. On
//! top of it sit:
//!
//! - **Iteration**: `map`, `filter`, `reject`, `reduce`, `every`, `some`,
//!   `contains`, `pluck` and friends
//! - **Objects**: `extend` and `defaults` for merging mappings
//! - **Arrays**: `uniq`, `zip`, `flatten`, `sort_by`, `shuffle`, `invoke`,
//!   set operations and slicing
//! - **Decorators**: `once`, `memoize`, `delay` and `throttle`
//! - **Values**: a dynamically shaped [`Value`](value::Value) for data whose
//!   shape is only known at run time
//!
//! No operation mutates its input collection; the only writes are to the
//! explicit `target` of [`extend`](object::extend) and
//! [`defaults`](object::defaults).
//!
//! ## Feature Flags
//!
//! - `iteration`: the traversal core
//! - `object`: mapping composition
//! - `array`: array combinators
//! - `value`: the dynamic [`Value`](value::Value) type
//! - `decorator`: `once` and `memoize`
//! - `async`: `delay` and `throttle`, scheduled on tokio
//! - `serde`: `Serialize`/`Deserialize` for `Value`
//! - `fxhash` / `ahash`: faster hashers for the memoize cache
//! - `full`: everything except the alternative hashers
//!
//! ## Example
//!
//! ```rust
//! use underbar::prelude::*;
//!
//! let words = vec!["pear", "fig", "apple", "fig"];
//! let lengths = map(&words, |word| word.len());
//! assert_eq!(reduce(&lengths, |total, length| total + length, 0), 15);
//! assert_eq!(uniq(&words), vec!["apple", "fig", "pear"]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the operations and traits of every enabled module.
///
/// # Usage
///
/// ```rust
/// use underbar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::UnderbarError;

    #[cfg(feature = "iteration")]
    pub use crate::iteration::*;

    #[cfg(feature = "object")]
    pub use crate::object::*;

    #[cfg(feature = "array")]
    pub use crate::array::*;

    #[cfg(feature = "value")]
    pub use crate::value::Value;

    #[cfg(feature = "decorator")]
    pub use crate::decorator::*;
}

pub mod error;

pub use error::{Result, UnderbarError};

#[cfg(feature = "iteration")]
pub mod iteration;

#[cfg(feature = "object")]
pub mod object;

#[cfg(feature = "array")]
pub mod array;

#[cfg(feature = "value")]
pub mod value;

#[cfg(feature = "decorator")]
pub mod decorator;
