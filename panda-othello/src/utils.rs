//! Miscellaneous project utilities.

use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Format `size * size` characters into a pretty grid with lettered columns
/// and numbered rows. `piece_iter` must yield exactly `size * size` items.
pub fn format_grid<T: Iterator<Item = char>>(
    mut piece_iter: T,
    size: usize,
    f: &mut Formatter,
) -> fmt::Result {
    write!(f, "   ")?;
    for label in "ABCDEFGHIJKLMNOPQRSTUVWXYZ".chars().take(size) {
        write!(f, " {}", label)?;
    }

    for row in 0..size {
        write!(f, "\n{:>3} ", row + 1)?;
        for _ in 0..size {
            write!(f, "{} ", piece_iter.next().ok_or(fmt::Error)?)?;
        }
    }

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
