// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library proposes generic operations on sequences: removing duplicates, filtering, grouping by key, multiset intersection, membership and index lookup, and the in-place reversal and mapping of a buffer. The operations work on slices and do not depend on any data-processing framework. A second part wraps `Vec` in a [Seq](sequence/struct.Seq.html) structure implementing the collection traits of `gcollections`.
//!
//! Operations never fail. An empty sequence is a valid input and yields an empty result. `reverse` and `map` are the only operations mutating their argument, all the others allocate a new result and leave the input untouched.
//!
//! # Examples
//!
//! ```rust
//! use sequtils::*;
//!
//! let words = ["pear", "fig", "plum", "fig", "kiwi"];
//! assert_eq!(unique(&words), vec!["pear", "fig", "plum", "kiwi"]);
//! assert_eq!(filter(&words, |w| w.len() > 3), vec!["pear", "plum", "kiwi"]);
//! assert_eq!(find_index(&"plum", &words), 2);
//! assert_eq!(find_index(&"apple", &words), NOT_FOUND);
//!
//! let by_initial = group_by(&words, |w| w.as_bytes()[0]);
//! assert_eq!(by_initial[&b'p'], vec!["pear", "plum"]);
//! ```
//!
//! For the `Seq` structure see the [sequence module](sequence/index.html).

pub mod slice_ops;
pub mod sequence;

pub use crate::slice_ops::{
  unique, filter, group_by, intersect, contains, find_index, reverse, map, NOT_FOUND
};
pub use crate::sequence::Seq;
