//! Array combinators.
//!
//! Operations on sequences that go beyond a single traversal:
//!
//! - [`first`], [`first_n`], [`last`], [`last_n`]: leading and trailing elements
//! - [`uniq`], [`uniq_by`]: sorted, duplicate-free copies
//! - [`shuffle`], [`shuffle_with`]: uniformly random permutations
//! - [`invoke`], [`invoke_with`]: call a method on every element
//! - [`sort_by`], [`sort_with`]: stable sorting by property or comparator
//! - [`zip`], [`zip_pair`]: index-aligned rows with explicit absence
//! - [`flatten`]: leaves of arbitrarily nested sequences
//! - [`intersection`], [`difference`]: membership filters
//!
//! All of them are built on the iteration core and leave their inputs
//! untouched.
//!
//! # Examples
//!
//! ```rust
//! use underbar::array::{difference, intersection, uniq};
//!
//! let seen = uniq(&[4, 1, 4, 2, 1]);
//! assert_eq!(seen, vec![1, 2, 4]);
//! assert_eq!(intersection(&seen, &[2, 4, 8]), vec![2, 4]);
//! assert_eq!(difference(&seen, &[&[2][..]]), vec![1, 4]);
//! ```

mod invoke;
mod ordering;
mod sets;
mod slicing;
mod structure;

pub use invoke::{Invocable, invoke, invoke_with};
pub use ordering::{SortBy, shuffle, shuffle_with, sort_by, sort_with, uniq, uniq_by};
pub use sets::{difference, intersection};
pub use slicing::{first, first_n, last, last_n};
pub use structure::{Branch, Nestable, Nested, flatten, zip, zip_pair};
