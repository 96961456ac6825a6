//! Splitting strings on a separator a bounded number of times.

use std::iter::FusedIterator;

use crate::limit::{InvalidArgument, SplitLimit};

/// Which end of the text a bounded split consumes separators from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// Split at the leftmost separators first.
    #[default]
    FromLeft,

    /// Split at the rightmost separators first.
    FromRight,
}

/// Convert a "from right" flag into a direction.
impl From<bool> for Direction {
    fn from(from_right: bool) -> Self {
        if from_right {
            Direction::FromRight
        } else {
            Direction::FromLeft
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum State {
    /// Still producing pieces. `cursor` is the start of the unconsumed text
    /// for left scans and the end of it for right scans.
    Scanning { cursor: usize },

    /// The final piece has been produced.
    Done,
}

fn check_separator(separator: &str) -> Result<(), InvalidArgument> {
    if separator.is_empty() {
        return Err(InvalidArgument::EmptySeparator);
    }
    Ok(())
}

/// Iterator over pieces of a string produced by consuming separators from
/// left to right.
///
/// Created by [`SplitFromLeft::new`] or [`SplitNExt::split_n_left`].
#[derive(Clone, Debug)]
pub struct SplitFromLeft<'a, 's> {
    text: &'a str,
    separator: &'s str,
    limit: SplitLimit,
    state: State,
}

impl<'a, 's> SplitFromLeft<'a, 's> {
    pub fn new(
        text: &'a str,
        separator: &'s str,
        limit: SplitLimit,
    ) -> Result<Self, InvalidArgument> {
        check_separator(separator)?;
        Ok(SplitFromLeft {
            text,
            separator,
            limit,
            state: State::Scanning { cursor: 0 },
        })
    }

    /// Return the part of the text which has not been returned as a piece
    /// yet, or `None` if the iterator is exhausted.
    pub fn remainder(&self) -> Option<&'a str> {
        match self.state {
            State::Scanning { cursor } => Some(&self.text[cursor..]),
            State::Done => None,
        }
    }
}

impl<'a> Iterator for SplitFromLeft<'a, '_> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let State::Scanning { cursor: start } = self.state else {
            return None;
        };

        let sep_start = if self.limit.take() {
            self.text[start..].find(self.separator).map(|pos| start + pos)
        } else {
            None
        };

        match sep_start {
            Some(sep_start) => {
                self.state = State::Scanning {
                    cursor: sep_start + self.separator.len(),
                };
                Some(&self.text[start..sep_start])
            }
            None => {
                self.state = State::Done;
                Some(&self.text[start..])
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            State::Scanning { .. } => (1, self.limit.max_pieces()),
            State::Done => (0, Some(0)),
        }
    }
}

impl FusedIterator for SplitFromLeft<'_, '_> {}

/// Iterator over pieces of a string produced by consuming separators from
/// right to left.
///
/// Pieces are yielded in reverse textual order, ie. the last piece of the
/// text comes first. Created by [`SplitFromRight::new`] or
/// [`SplitNExt::split_n_right`].
#[derive(Clone, Debug)]
pub struct SplitFromRight<'a, 's> {
    text: &'a str,
    separator: &'s str,
    limit: SplitLimit,
    state: State,
}

impl<'a, 's> SplitFromRight<'a, 's> {
    pub fn new(
        text: &'a str,
        separator: &'s str,
        limit: SplitLimit,
    ) -> Result<Self, InvalidArgument> {
        check_separator(separator)?;
        Ok(SplitFromRight {
            text,
            separator,
            limit,
            state: State::Scanning { cursor: text.len() },
        })
    }

    /// Return the part of the text which has not been returned as a piece
    /// yet, or `None` if the iterator is exhausted.
    pub fn remainder(&self) -> Option<&'a str> {
        match self.state {
            State::Scanning { cursor } => Some(&self.text[..cursor]),
            State::Done => None,
        }
    }
}

/// Find the start of the rightmost occurrence of `needle` which ends at or
/// before `end`.
///
/// Occurrences that start before `end` but extend past it overlap text which
/// has already been consumed and are skipped in favor of ones further left.
fn rfind_ending_before(haystack: &str, needle: &str, end: usize) -> Option<usize> {
    haystack[..end].rfind(needle)
}

impl<'a> Iterator for SplitFromRight<'a, '_> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let State::Scanning { cursor: end } = self.state else {
            return None;
        };

        let sep_start = if self.limit.take() && end > 0 {
            rfind_ending_before(self.text, self.separator, end)
        } else {
            None
        };

        match sep_start {
            Some(sep_start) => {
                let sep_end = sep_start + self.separator.len();
                debug_assert!(sep_end <= end);
                self.state = State::Scanning { cursor: sep_start };
                Some(&self.text[sep_end..end])
            }
            None => {
                self.state = State::Done;
                Some(&self.text[..end])
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            State::Scanning { .. } => (1, self.limit.max_pieces()),
            State::Done => (0, Some(0)),
        }
    }
}

impl FusedIterator for SplitFromRight<'_, '_> {}

/// Iterator returned by [`split_n_iter`].
///
/// This yields pieces in the order they are discovered. For
/// [`Direction::FromRight`] that is right-to-left.
#[derive(Clone, Debug)]
pub enum SplitN<'a, 's> {
    FromLeft(SplitFromLeft<'a, 's>),
    FromRight(SplitFromRight<'a, 's>),
}

impl SplitN<'_, '_> {
    /// Return the direction in which this iterator scans.
    pub fn direction(&self) -> Direction {
        match self {
            Self::FromLeft(_) => Direction::FromLeft,
            Self::FromRight(_) => Direction::FromRight,
        }
    }
}

impl<'a> Iterator for SplitN<'a, '_> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        match self {
            Self::FromLeft(iter) => iter.next(),
            Self::FromRight(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::FromLeft(iter) => iter.size_hint(),
            Self::FromRight(iter) => iter.size_hint(),
        }
    }
}

impl FusedIterator for SplitN<'_, '_> {}

/// Lazily split `text` on `separator` at most `max_times` times.
///
/// `max_times` can be a [`SplitLimit`], an integer (`-1` means unlimited),
/// an integral `f64` or an `Option<i64>` (`None` means unlimited). Returns an
/// error if `max_times` is out of range or `separator` is empty.
pub fn split_n_iter<'a, 's, L>(
    text: &'a str,
    separator: &'s str,
    max_times: L,
    direction: Direction,
) -> Result<SplitN<'a, 's>, InvalidArgument>
where
    L: TryInto<SplitLimit>,
    L::Error: Into<InvalidArgument>,
{
    let limit = max_times.try_into().map_err(Into::into)?;
    let iter = match direction {
        Direction::FromLeft => SplitN::FromLeft(SplitFromLeft::new(text, separator, limit)?),
        Direction::FromRight => SplitN::FromRight(SplitFromRight::new(text, separator, limit)?),
    };
    Ok(iter)
}

/// Split `text` on `separator` at most `max_times` times.
///
/// When `direction` is [`Direction::FromRight`], the limit applies to the
/// rightmost separators. Pieces are returned in textual order in both cases,
/// and joining them with `separator` reproduces `text`.
///
/// ```
/// use textsplit::{split_n, Direction};
///
/// assert_eq!(
///     split_n("a,b,c,d", ",", 1, Direction::FromLeft).unwrap(),
///     ["a", "b,c,d"]
/// );
/// assert_eq!(
///     split_n("a,b,c,d", ",", -1, Direction::FromRight).unwrap(),
///     ["a", "b", "c", "d"]
/// );
/// ```
pub fn split_n<'a, L>(
    text: &'a str,
    separator: &str,
    max_times: L,
    direction: Direction,
) -> Result<Vec<&'a str>, InvalidArgument>
where
    L: TryInto<SplitLimit>,
    L::Error: Into<InvalidArgument>,
{
    let iter = split_n_iter(text, separator, max_times, direction)?;
    let mut pieces: Vec<&str> = iter.collect();
    if direction == Direction::FromRight {
        pieces.reverse();
    }
    Ok(pieces)
}

/// Extension methods for bounded splitting of strings.
pub trait SplitNExt {
    /// Split at the leftmost `limit` occurrences of `separator`.
    ///
    /// ```
    /// use textsplit::{SplitLimit, SplitNExt};
    ///
    /// let pieces: Vec<_> = "k=v=w".split_n_left("=", SplitLimit::Remaining(1)).unwrap().collect();
    /// assert_eq!(pieces, ["k", "v=w"]);
    /// ```
    fn split_n_left<'s>(
        &self,
        separator: &'s str,
        limit: SplitLimit,
    ) -> Result<SplitFromLeft<'_, 's>, InvalidArgument>;

    /// Split at the rightmost `limit` occurrences of `separator`, yielding
    /// pieces from right to left.
    ///
    /// ```
    /// use textsplit::{SplitLimit, SplitNExt};
    ///
    /// let pieces: Vec<_> = "a/b/c".split_n_right("/", SplitLimit::Remaining(1)).unwrap().collect();
    /// assert_eq!(pieces, ["c", "a/b"]);
    /// ```
    fn split_n_right<'s>(
        &self,
        separator: &'s str,
        limit: SplitLimit,
    ) -> Result<SplitFromRight<'_, 's>, InvalidArgument>;
}

impl SplitNExt for str {
    fn split_n_left<'s>(
        &self,
        separator: &'s str,
        limit: SplitLimit,
    ) -> Result<SplitFromLeft<'_, 's>, InvalidArgument> {
        SplitFromLeft::new(self, separator, limit)
    }

    fn split_n_right<'s>(
        &self,
        separator: &'s str,
        limit: SplitLimit,
    ) -> Result<SplitFromRight<'_, 's>, InvalidArgument> {
        SplitFromRight::new(self, separator, limit)
    }
}
