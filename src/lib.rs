//! Weight-balanced binary search trees for Rust.
//!
//! This crate provides [`SortedSet`], an ordered set of unique values backed by a
//! weight-balanced tree. Every node tracks the size of its subtree, which keeps the
//! tree balanced and makes positional queries as cheap as lookups:
//!
//! - [`get`](SortedSet::get) - Get the value at a given sorted position
//! - [`bisect`](SortedSet::bisect) - Count the values that sort before a value
//! - [`rank_of`](SortedSet::rank_of) - Get the sorted position of a present value
//! - Indexing by [`Rank`] - e.g., `set[Rank(0)]` for the smallest value
//!
//! # Example
//!
//! ```
//! use wbtree::{Rank, SortedSet};
//!
//! let mut scores = SortedSet::new();
//! scores.insert(92);
//! scores.insert(100);
//! scores.insert(85);
//!
//! // Set operations
//! assert!(scores.contains(&100));
//! assert!(!scores.insert(85)); // already present
//! assert_eq!(scores.len(), 3);
//!
//! // Order-statistic operations (O(log n))
//! assert_eq!(scores.get(1), Some(&92)); // the median
//! assert_eq!(scores.bisect(&90), 1); // one score below 90
//! assert_eq!(scores[Rank(2)], 100);
//!
//! // Iteration is in sorted order
//! assert_eq!(scores.iter().copied().collect::<Vec<_>>(), [85, 92, 100]);
//! ```
//!
//! # Ordering
//!
//! A set orders its values with a [`Comparator`]. The default, [`Natural`], uses
//! [`Ord`]. [`Lexicographic`] compares the values' string renderings, and any
//! `Fn(&T, &T) -> Ordering` closure works as well:
//!
//! ```
//! use wbtree::SortedSet;
//!
//! let mut set: SortedSet<u32, _> = SortedSet::with_comparator(|a: &u32, b: &u32| b.cmp(a));
//! set.extend([1, 3, 2]);
//! assert_eq!(set.first(), Some(&3));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **No unsafe code** - Nodes live in an arena and link to each other by index
//! - **O(log n) rank operations** - Subtree sizes drive both balancing and positional access
//!
//! # Implementation
//!
//! The tree is a weight-balanced (bounded balance) binary search tree. A node's weight
//! is its subtree size plus one, and sibling weights are kept within a factor of
//! `1 + √2` of each other by single and double rotations after each insertion or removal.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod compare;
mod error;
mod order_statistic;
mod raw;

pub mod sorted_set;

pub use compare::{Comparator, Lexicographic, Natural};
pub use error::TreeError;
pub use order_statistic::{Rank, RankIndex};
pub use raw::NodeRef;
pub use sorted_set::SortedSet;
