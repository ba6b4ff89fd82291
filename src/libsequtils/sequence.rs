// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Owned sequence usable with the generic collection traits.
//!
//! `Seq` wraps a `Vec` and exposes the operations of [slice_ops](../slice_ops/index.html) as methods. It also implements the traits of `gcollections` so it can be passed to algorithms written against `Cardinality`, `Contains` or `Intersection`. Since the standard methods are reachable through `Deref`, some of them are shadowed: `contains` is the one of the `Contains` trait and `reverse` hands back the sequence for chaining.
//!
//! # Examples
//!
//! ```rust
//! use gcollections::ops::*;
//! use sequtils::Seq;
//!
//! fn common_count<S>(a: &S, b: &S) -> usize where
//!  S: Intersection<Output=S> + Cardinality<Size=usize>
//! {
//!   a.intersection(b).size()
//! }
//!
//! let a: Seq<i32> = vec![1, 2, 2, 3].into();
//! let b: Seq<i32> = vec![2, 2, 2, 4].into();
//! assert_eq!(common_count(&a, &b), 2);
//! ```

use crate::slice_ops;
use gcollections::kind::*;
use gcollections::ops::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;
use std::iter::FromIterator;
use std::ops::{Deref, DerefMut};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seq<T>
{
  items: Vec<T>
}

impl<T> Seq<T>
{
  pub fn wrap(items: Vec<T>) -> Seq<T> {
    Seq { items }
  }

  pub fn unwrap(self) -> Vec<T> {
    self.items
  }

  /// Reverses the sequence in place.
  pub fn reverse(&mut self) -> &mut Seq<T> {
    slice_ops::reverse(&mut self.items);
    self
  }

  /// Replaces every element by `transform` applied to it.
  pub fn map<F>(&mut self, transform: F) where
    F: FnMut(&T) -> T
  {
    slice_ops::map(&mut self.items, transform)
  }

  pub fn find_index(&self, value: &T) -> isize where
    T: PartialEq
  {
    slice_ops::find_index(value, &self.items)
  }
}

impl<T: Clone> Seq<T>
{
  pub fn filter<P>(&self, predicate: P) -> Seq<T> where
    P: FnMut(&T) -> bool
  {
    Seq::wrap(slice_ops::filter(&self.items, predicate))
  }

  pub fn group_by<K, F>(&self, key: F) -> HashMap<K, Seq<T>> where
    K: Eq + Hash,
    F: FnMut(&T) -> K
  {
    slice_ops::group_by(&self.items, key)
      .into_iter()
      .map(|(k, group)| (k, Seq::wrap(group)))
      .collect()
  }
}

impl<T: Eq + Hash + Clone> Seq<T>
{
  pub fn unique(&self) -> Seq<T> {
    Seq::wrap(slice_ops::unique(&self.items))
  }
}

impl<T> Deref for Seq<T>
{
  type Target = Vec<T>;

  fn deref(&self) -> &Vec<T> {
    &self.items
  }
}

impl<T> DerefMut for Seq<T>
{
  fn deref_mut(&mut self) -> &mut Vec<T> {
    &mut self.items
  }
}

impl<T> From<Vec<T>> for Seq<T>
{
  fn from(items: Vec<T>) -> Seq<T> {
    Seq::wrap(items)
  }
}

impl<T> FromIterator<T> for Seq<T>
{
  fn from_iter<I>(iter: I) -> Seq<T> where
    I: IntoIterator<Item=T>
  {
    Seq::wrap(iter.into_iter().collect())
  }
}

impl<T> Extend<T> for Seq<T>
{
  fn extend<I>(&mut self, iterable: I) where
    I: IntoIterator<Item=T>
  {
    self.items.extend(iterable)
  }
}

impl<T> IntoIterator for Seq<T>
{
  type Item = T;
  type IntoIter = ::std::vec::IntoIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    self.items.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a Seq<T>
{
  type Item = &'a T;
  type IntoIter = ::std::slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.items.iter()
  }
}

impl<T> Collection for Seq<T>
{
  type Item = T;
}

impl<T> Cardinality for Seq<T>
{
  type Size = usize;

  fn size(&self) -> usize {
    self.items.len()
  }
}

impl<T> Empty for Seq<T>
{
  fn empty() -> Seq<T> {
    Seq::wrap(vec![])
  }
}

impl<T: PartialEq> Contains for Seq<T>
{
  fn contains(&self, value: &T) -> bool {
    slice_ops::contains(value, &self.items)
  }
}

/// Multiset intersection ordered like `other`.
impl<T: Eq + Hash + Clone> Intersection for Seq<T>
{
  type Output = Seq<T>;

  fn intersection(&self, other: &Seq<T>) -> Seq<T> {
    Seq::wrap(slice_ops::intersect(&self.items, &other.items))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_test::{assert_tokens, Token};

  fn seq(items: &[i32]) -> Seq<i32> {
    items.iter().cloned().collect()
  }

  #[test]
  fn wrap_unwrap_test() {
    let s = Seq::wrap(vec![1, 2, 3]);
    assert_eq!(s.len(), 3);
    assert_eq!(s[1], 2);
    assert_eq!(s.unwrap(), vec![1, 2, 3]);
  }

  #[test]
  fn cardinality_test() {
    let empty: Seq<i32> = Seq::empty();
    assert_eq!(empty.size(), 0);
    assert!(empty.is_empty());
    assert_eq!(seq(&[4, 4, 4]).size(), 3);
  }

  #[test]
  fn contains_test() {
    let cases = vec![
      (seq(&[4, 5, 6]), 7, false),
      (seq(&[1, 2, 3]), 3, true),
      (Seq::empty(), 0, false)
    ];

    for (s, v, r) in cases.into_iter() {
      assert!(s.contains(&v) == r, "{:?} contains {:?} is not equal to {:?}", s, v, r);
      assert!((s.find_index(&v) != slice_ops::NOT_FOUND) == r,
        "find_index of {:?} in {:?} disagrees with contains", v, s);
    }
  }

  #[test]
  fn intersection_test() {
    let cases = vec![
      (seq(&[4, 5, 6]), seq(&[1, 1, 2, 3, 3]), seq(&[])),
      (seq(&[1, 2, 3]), seq(&[1, 1, 2, 3, 3]), seq(&[1, 2, 3])),
      (seq(&[1, 2, 3]), seq(&[3, 2, 1]), seq(&[3, 2, 1]))
    ];

    for (x, y, r) in cases.into_iter() {
      assert!(x.intersection(&y) == r, "{:?} intersection {:?} is not equal to {:?}", x, y, r);
    }
  }

  #[test]
  fn copy_operations_test() {
    let s = seq(&[1, 1, 2, 3, 4, 4]);
    assert_eq!(s.unique(), seq(&[1, 2, 3, 4]));
    assert_eq!(s.filter(|x| x % 2 == 0), seq(&[2, 4, 4]));
    let groups = s.group_by(|x| *x > 2);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[&false], seq(&[1, 1, 2]));
    assert_eq!(groups[&true], seq(&[3, 4, 4]));
    assert_eq!(groups[&true].size(), 3);
    assert_eq!(s, seq(&[1, 1, 2, 3, 4, 4]));
  }

  #[test]
  fn in_place_operations_test() {
    let mut s = seq(&[4, 5, 6]);
    s.reverse().map(|x| x - 1);
    assert_eq!(s, seq(&[5, 4, 3]));
    s.reverse();
    assert_eq!(s, seq(&[3, 4, 5]));
  }

  #[test]
  fn extend_and_iterate_test() {
    let mut s = seq(&[1]);
    s.extend(vec![2, 3]);
    let borrowed: Vec<&i32> = (&s).into_iter().collect();
    assert_eq!(borrowed, vec![&1, &2, &3]);
    let owned: Vec<i32> = s.into_iter().collect();
    assert_eq!(owned, vec![1, 2, 3]);
  }

  #[test]
  fn serde_test() {
    assert_tokens(&seq(&[1, 2]), &[
      Token::Seq { len: Some(2) },
      Token::I32(1),
      Token::I32(2),
      Token::SeqEnd,
    ]);
    assert_tokens(&Seq::<i32>::empty(), &[
      Token::Seq { len: Some(0) },
      Token::SeqEnd,
    ]);
  }
}
