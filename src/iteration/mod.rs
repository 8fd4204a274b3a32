//! Collection iteration core.
//!
//! This module provides the traversal primitive and the higher-order
//! operations built on top of it:
//!
//! - [`Collection`]: sequences and mappings that can be visited with `each`
//! - [`map`], [`filter`], [`reject`], [`pluck`]: produce new sequences
//! - [`reduce`], [`reduce_first`]: left folds, seeded and unseeded
//! - [`index_of`], [`contains`], [`every`], [`some`]: queries
//! - [`Truthy`]: boolean coercion used by [`every_truthy`] and [`some_truthy`]
//! - [`Record`]: named property lookup used by [`pluck`]
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use underbar::iteration::{each, filter, map, reduce};
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! let squares = map(&numbers, |value| value * value);
//! let even_squares = filter(&squares, |value| value % 2 == 0);
//! let total = reduce(&even_squares, |sum, value| sum + value, 0);
//! assert_eq!(total, 20);
//!
//! let scores: BTreeMap<&str, u32> = [("ada", 3), ("bob", 5)].into_iter().collect();
//! let mut lines = Vec::new();
//! each(&scores, |score, name, _| lines.push(format!("{name}={score}")));
//! assert_eq!(lines, vec!["ada=3", "bob=5"]);
//! ```

mod collection;
mod operations;
mod record;
mod truthy;

pub use collection::Collection;
pub use operations::{
    contains, each, every, every_truthy, filter, identity, index_of, map, pluck, reduce,
    reduce_first, reject, some, some_truthy,
};
pub use record::Record;
pub use truthy::Truthy;
