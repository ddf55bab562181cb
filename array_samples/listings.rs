//! Numbered listings demonstrating fixed-size sequences.
//!
//! Every listing writes to an arbitrary [`io::Write`] sink, so the same routine backs the
//! command line runner and the tests.

use crate::{display::write_sequence, sequence, sequence::Sequence};
use std::{
    fmt::{self, Display},
    io,
};

/// One of the demonstration routines
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Listing {
    /// Default initialization, assignment and indexed iteration
    One,

    /// Initialization from literal values, printing and length
    Two,
}

impl Listing {
    /// All listings in the order they are run
    pub const ALL: [Listing; 2] = [Listing::One, Listing::Two];

    /// Number shown in the listing header
    pub const fn number(self) -> u8 {
        match self {
            Listing::One => 1,
            Listing::Two => 2,
        }
    }

    /// Write output of the listing to `w`
    ///
    /// # Errors
    /// - Writing to `w` failed
    pub fn run<W>(self, w: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        match self {
            Listing::One => listing_1(w),
            Listing::Two => listing_2(w),
        }
    }
}

impl Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listing {}", self.number())
    }
}

/// Create a default-initialized sequence, assign one element, then list every
/// index with its value.
///
/// # Errors
/// - Writing to `w` failed
pub fn listing_1<W>(w: &mut W) -> io::Result<()>
where
    W: io::Write,
{
    writeln!(w, "{}.", Listing::One)?;

    let mut numbers = Sequence::<i32, 5>::new();
    numbers[1] = 10;

    for (idx, value) in numbers.iter().enumerate() {
        writeln!(w, "Index: {} - Value: {}", idx, value)?;
    }

    writeln!(w)
}

/// Create sequences from literal values, with declared and with inferred length, and
/// print each one followed by its size.
///
/// Declaring a length that disagrees with the literal does not compile:
///
/// ```compile_fail
/// use array_samples::sequence::Sequence;
///
/// let numbers3: Sequence<i32, 3> = Sequence::from_array([1, 2]);
/// ```
///
/// # Errors
/// - Writing to `w` failed
pub fn listing_2<W>(w: &mut W) -> io::Result<()>
where
    W: io::Write,
{
    writeln!(w, "{}.", Listing::Two)?;

    let numbers: Sequence<i32, 3> = sequence![1, 2, 3];
    write_sequence(w, &numbers)?;
    writeln!(w, "Size: {}", numbers.len())?;

    let numbers2 = sequence![1, 2, 3, 4];
    write_sequence(w, &numbers2)?;
    writeln!(w, "Size: {}", numbers2.len())
}

/// Run every listing from [`Listing::ALL`] in order
///
/// # Errors
/// - Writing to `w` failed
pub fn run_all<W>(w: &mut W) -> io::Result<()>
where
    W: io::Write,
{
    Listing::ALL
        .into_iter()
        .try_for_each(|listing| listing.run(w))
}
