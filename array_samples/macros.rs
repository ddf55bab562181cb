//! Construction macros

/// Build a [`Sequence`](crate::sequence::Sequence) from a literal list of values.
///
/// Length is taken from the number of values, or from the repeat count in the
/// `sequence![value; count]` form.
///
/// ```
/// use array_samples::{sequence, sequence::Sequence};
///
/// let numbers: Sequence<i32, 3> = sequence![1, 2, 3];
/// assert_eq!(numbers[2], 3);
///
/// let zeros = sequence![0u8; 4];
/// assert_eq!(zeros.len(), 4);
/// ```
///
/// Declared length has to agree with the number of values:
///
/// ```compile_fail
/// use array_samples::{sequence, sequence::Sequence};
///
/// let numbers: Sequence<i32, 3> = sequence![1, 2];
/// ```
#[macro_export]
macro_rules! sequence {
    ($value:expr; $count:expr) => {
        $crate::sequence::Sequence::from_array([$value; $count])
    };

    ($($value:expr),* $(,)?) => {
        $crate::sequence::Sequence::from_array([$($value),*])
    };
}

#[test]
fn sequence_macro_forms() {
    let listed = sequence![1, 2, 3,];
    assert_eq!(listed.into_inner(), [1, 2, 3]);

    let repeated = sequence![7; 3];
    assert_eq!(repeated.into_inner(), [7, 7, 7]);

    let empty: crate::sequence::Sequence<i32, 0> = sequence![];
    assert!(empty.is_empty());
}
