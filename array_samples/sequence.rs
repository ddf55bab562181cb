//! Sequence with a fixed number of elements

use crate::display::tabs;
use std::{
    array,
    fmt::{self, Display},
    ops::{Index, IndexMut},
    slice,
};

/// Ordered collection of exactly `N` elements of type `T`.
///
/// Length is part of the type, so a sequence is never resized and a literal list of the
/// wrong length is rejected by the compiler. Indexing past the end panics, use
/// [`Sequence::get`] to probe an index instead.
///
/// ```
/// use array_samples::sequence::Sequence;
///
/// let mut numbers = Sequence::<i32, 5>::new();
/// numbers[1] = 10;
/// assert_eq!(numbers.into_inner(), [0, 10, 0, 0, 0]);
/// ```
///
/// ```compile_fail
/// use array_samples::sequence::Sequence;
///
/// let numbers: Sequence<i32, 3> = Sequence::from([1, 2]);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sequence<T, const N: usize>([T; N]);

impl<T, const N: usize> Sequence<T, N>
where
    T: Default,
{
    /// Create a sequence with every element set to its default value
    pub fn new() -> Self {
        Self(array::from_fn(|_| T::default()))
    }
}

impl<T, const N: usize> Default for Sequence<T, N>
where
    T: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Sequence<T, N> {
    /// Create a sequence from an explicit list of elements
    pub const fn from_array(elements: [T; N]) -> Self {
        Self(elements)
    }

    /// Number of elements, always `N`
    #[allow(clippy::unused_self)]
    pub const fn len(&self) -> usize {
        N
    }

    /// Check if the sequence has no elements
    #[allow(clippy::unused_self)]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Get element at `index`, or `None` if out of bounds
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Get mutable element at `index`, or `None` if out of bounds
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Replace element at `index`
    ///
    /// # Panics
    /// - `index` is not lower than [`Sequence::len`]
    pub fn set(&mut self, index: usize, value: T) {
        self.0[index] = value;
    }

    /// Iterate over elements from first to last
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Iterate mutably over elements from first to last
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    /// View elements as a slice
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Take the underlying array
    pub fn into_inner(self) -> [T; N] {
        self.0
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T, N> {
    fn from(elements: [T; N]) -> Self {
        Self(elements)
    }
}

impl<T, const N: usize> From<Sequence<T, N>> for [T; N] {
    fn from(sequence: Sequence<T, N>) -> Self {
        sequence.0
    }
}

impl<T, const N: usize> AsRef<[T]> for Sequence<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> Index<usize> for Sequence<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Sequence<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T, const N: usize> IntoIterator for Sequence<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Sequence<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Sequence<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const N: usize> Display for Sequence<T, N>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        tabs(f, self)
    }
}

#[cfg(feature = "serde")]
impl<T, const N: usize> serde::Serialize for Sequence<T, N>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(self.as_slice(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const N: usize> serde::Deserialize<'de> for Sequence<T, N>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        let found = elements.len();
        <[T; N]>::try_from(elements).map(Self).map_err(|_| {
            serde::de::Error::invalid_length(found, &format!("{} elements", N).as_str())
        })
    }
}

#[cfg(any(test, feature = "quickcheck"))]
impl<T, const N: usize> quickcheck::Arbitrary for Sequence<T, N>
where
    T: quickcheck::Arbitrary,
{
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self(array::from_fn(|_| T::arbitrary(g)))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let this = self.clone();
        Box::new((0..N).flat_map(move |idx| {
            let base = this.clone();
            this.0[idx].shrink().map(move |value| {
                let mut shrunk = base.clone();
                shrunk.0[idx] = value;
                shrunk
            })
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::QuickCheck;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn literal_values_read_back_in_order() {
        let mut qc = QuickCheck::new();
        let test = |a: i32, b: i32, c: i32, d: i32| {
            let literal = [a, b, c, d];
            let sequence = Sequence::from(literal);
            for (idx, expected) in literal.iter().enumerate() {
                assert_eq!(&sequence[idx], expected);
                assert_eq!(sequence.get(idx), Some(expected));
            }
            assert_eq!(sequence.len(), literal.len());
        };
        qc.quickcheck(test as fn(i32, i32, i32, i32));
    }

    #[test]
    fn default_initialized() {
        let numbers = Sequence::<i32, 5>::new();
        assert!(numbers.iter().all(|&x| x == 0));

        let words = Sequence::<String, 3>::default();
        assert!(words.iter().all(String::is_empty));

        let flags: Sequence<bool, 2> = Sequence::new();
        assert_eq!(flags.into_inner(), [false, false]);
    }

    #[test]
    fn assignment_leaves_other_indices() {
        let mut qc = QuickCheck::new();
        let test = |original: Sequence<u16, 8>, idx: usize, value: u16| {
            let idx = idx % original.len();
            let mut assigned = original;
            assigned[idx] = value;

            for (i, &x) in assigned.iter().enumerate() {
                if i == idx {
                    assert_eq!(x, value);
                } else {
                    assert_eq!(x, original[i]);
                }
            }
        };
        qc.quickcheck(test as fn(Sequence<u16, 8>, usize, u16));
    }

    #[test]
    fn set_and_get_mut() {
        let mut numbers = Sequence::from([1, 2, 3]);
        numbers.set(0, 5);
        *numbers.get_mut(2).unwrap() += 10;
        assert_eq!(numbers.as_slice(), &[5, 2, 13]);
        assert_eq!(numbers.get_mut(3), None);
    }

    #[test]
    fn iteration() {
        let mut numbers = Sequence::from([1, 2, 3, 4]);
        for x in &mut numbers {
            *x *= 2;
        }
        assert_eq!((&numbers).into_iter().sum::<i32>(), 20);
        assert_eq!(numbers.into_iter().collect::<Vec<_>>(), vec![2, 4, 6, 8]);
    }

    #[test]
    fn empty_sequence() {
        let empty = Sequence::<u8, 0>::new();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert_eq!(empty.get(0), None);
        assert_eq!(empty.to_string(), "");
    }

    #[test]
    fn display_is_tab_delimited() {
        assert_eq!(Sequence::from([1, 2, 3]).to_string(), "1\t2\t3\t");
        assert_eq!(Sequence::from(["x", "y"]).to_string(), "x\ty\t");
    }

    #[should_panic]
    #[test]
    fn index_at_length_panics() {
        let numbers = Sequence::from([1, 2, 3]);
        let idx = numbers.len();
        let _value = numbers[idx];
    }

    #[should_panic]
    #[test]
    fn set_out_of_bounds_panics() {
        let mut numbers = Sequence::<i32, 2>::new();
        numbers.set(2, 1);
    }

    #[test]
    fn out_of_bounds_performs_no_write() {
        let numbers = Sequence::from([1, 2, 3]);
        let mut out = Vec::new();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let idx = numbers.len() + 1;
            crate::display::write_sequence(&mut out, [numbers[idx]]).unwrap();
        }));
        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn get_out_of_bounds() {
        let mut qc = QuickCheck::new();
        let test = |sequence: Sequence<i8, 4>, extra: u8| {
            assert_eq!(sequence.get(sequence.len() + extra as usize), None);
        };
        qc.quickcheck(test as fn(Sequence<i8, 4>, u8));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_keeps_length() {
        let numbers = Sequence::from([1, 2, 3]);
        let json = serde_json::to_string(&numbers).unwrap();
        assert_eq!(json, "[1,2,3]");
        assert_eq!(
            serde_json::from_str::<Sequence<i32, 3>>(&json).unwrap(),
            numbers
        );
        assert!(serde_json::from_str::<Sequence<i32, 4>>(&json).is_err());
    }
}
