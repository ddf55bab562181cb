//! Display utilities

use std::{
    fmt::{self, Display},
    io,
};

/// Written after every element of a printed sequence
pub const DELIMITER: char = '\t';

/// Write each element followed by [`DELIMITER`], without a line terminator.
///
/// Used by `Display` implementations, so the rendering matches [`write_sequence`].
pub fn tabs<W, I>(w: &mut W, xs: I) -> fmt::Result
where
    W: fmt::Write,
    I: IntoIterator,
    I::Item: Display,
{
    for x in xs {
        write!(w, "{}{}", x, DELIMITER)?;
    }
    Ok(())
}

/// Write each element followed by [`DELIMITER`], then a single line terminator.
///
/// An empty sequence produces only the line terminator.
///
/// ```
/// use array_samples::display::write_sequence;
///
/// let mut out = Vec::new();
/// write_sequence(&mut out, [1, 2, 3]).unwrap();
/// assert_eq!(out, b"1\t2\t3\t\n");
/// ```
pub fn write_sequence<W, I>(w: &mut W, xs: I) -> io::Result<()>
where
    W: io::Write,
    I: IntoIterator,
    I::Item: Display,
{
    let mut adapter = IoAdapter {
        inner: w,
        error: None,
    };
    if tabs(&mut adapter, xs).is_err() {
        return Err(adapter
            .error
            .unwrap_or_else(|| io::Error::other("formatter error")));
    }
    writeln!(adapter.inner)
}

/// Print a sequence to standard output in the [`write_sequence`] format.
///
/// Like [`print!`], panics if standard output cannot be written.
pub fn print_sequence<I>(xs: I)
where
    I: IntoIterator,
    I::Item: Display,
{
    print_to(&mut io::stdout().lock(), xs);
}

fn print_to<W, I>(w: &mut W, xs: I)
where
    W: io::Write,
    I: IntoIterator,
    I::Item: Display,
{
    if let Err(err) = write_sequence(w, xs) {
        panic!("failed printing to stdout: {}", err);
    }
}

/// Forwards `fmt::Write` to an `io::Write`, keeping the first I/O error
struct IoAdapter<'a, W> {
    inner: &'a mut W,
    error: Option<io::Error>,
}

impl<W> fmt::Write for IoAdapter<'_, W>
where
    W: io::Write,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}
