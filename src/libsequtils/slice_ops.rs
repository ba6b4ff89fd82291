// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Generic operations on slices.
//!
//! Every operation takes the sequence as its first argument. `unique`, `filter`, `group_by` and `intersect` only borrow their input and return a freshly allocated result, `reverse` and `map` mutate the caller's buffer in place. An empty slice is a valid input everywhere and never produces anything else than an empty result.
//!
//! # Examples
//!
//! ```rust
//! use sequtils::slice_ops::*;
//!
//! let mut s = vec![3, 1, 3, 2, 1];
//! assert_eq!(unique(&s), vec![3, 1, 2]);
//! assert_eq!(intersect(&[1, 2, 3], &s), vec![3, 1, 2]);
//! map(&mut s, |x| x * 10);
//! assert_eq!(reverse(&mut s), &[10, 20, 30, 10, 30]);
//! ```

use std::collections::{HashMap, HashSet};
use std::convert::TryFrom;
use std::hash::Hash;

/// Index returned by [`find_index`] when no element matches.
pub const NOT_FOUND: isize = -1;

/// Distinct values of `s` in the order of their first occurrence.
pub fn unique<T>(s: &[T]) -> Vec<T> where
  T: Eq + Hash + Clone
{
  let mut seen = HashSet::with_capacity(s.len());
  let mut unique = Vec::with_capacity(s.len() / 2);
  for x in s {
    if seen.insert(x) {
      unique.push(x.clone());
    }
  }
  unique
}

/// Elements of `s` satisfying `predicate`, in their original order.
///
/// The predicate is applied exactly once per element, from first to last.
pub fn filter<T, P>(s: &[T], mut predicate: P) -> Vec<T> where
  T: Clone,
  P: FnMut(&T) -> bool
{
  let mut passed = Vec::with_capacity(s.len() / 2);
  for x in s {
    if predicate(x) {
      passed.push(x.clone());
    }
  }
  passed
}

/// Partitions `s` by the key computed for each element.
///
/// Groups keep the relative order of `s` and only keys produced at least once are present in the map.
pub fn group_by<K, V, F>(s: &[V], mut key: F) -> HashMap<K, Vec<V>> where
  K: Eq + Hash,
  V: Clone,
  F: FnMut(&V) -> K
{
  let mut groups: HashMap<K, Vec<V>> = HashMap::new();
  for v in s {
    groups.entry(key(v)).or_default().push(v.clone());
  }
  groups
}

/// Multiset intersection of `x` and `y`.
///
/// A value occurring `n` times in `x` and `m` times in `y` occurs `min(n, m)` times in the result. The result follows the order of `y`, not `x`: the occurrences of `x` are tallied first, then `y` is scanned once and each element is kept while its tally is still positive.
pub fn intersect<T>(x: &[T], y: &[T]) -> Vec<T> where
  T: Eq + Hash + Clone
{
  let mut tally: HashMap<&T, usize> = HashMap::with_capacity(x.len());
  for v in x {
    *tally.entry(v).or_insert(0) += 1;
  }

  let mut intersection = Vec::new();
  for v in y {
    if let Some(count) = tally.get_mut(v) {
      if *count > 0 {
        *count -= 1;
        intersection.push(v.clone());
      }
    }
  }
  debug_assert!(intersection.len() <= x.len().min(y.len()));
  intersection
}

/// `true` if some element of `s` equals `value`.
pub fn contains<T: PartialEq>(value: &T, s: &[T]) -> bool {
  s.iter().any(|x| x == value)
}

/// Zero-based index of the first element of `s` equal to `value`, or [`NOT_FOUND`].
///
/// Only a slice of zero-sized elements can hold an index above `isize::MAX`; a match past that point is reported as [`NOT_FOUND`].
pub fn find_index<T: PartialEq>(value: &T, s: &[T]) -> isize {
  s.iter()
    .position(|x| x == value)
    .map_or(NOT_FOUND, |i| isize::try_from(i).unwrap_or(NOT_FOUND))
}

/// Reverses `s` in place and hands the same buffer back for chaining.
pub fn reverse<T>(s: &mut [T]) -> &mut [T] {
  if s.len() > 1 {
    let (mut i, mut j) = (0, s.len() - 1);
    while i < j {
      s.swap(i, j);
      i += 1;
      j -= 1;
    }
  }
  s
}

/// Overwrites every element of `s` with `transform` applied to it, in index order.
pub fn map<T, F>(s: &mut [T], mut transform: F) where
  F: FnMut(&T) -> T
{
  for x in s.iter_mut() {
    *x = transform(x);
  }
}
