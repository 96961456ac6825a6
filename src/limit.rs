//! Limits on the number of times a split is applied.

use std::convert::Infallible;
use std::error::Error;
use std::fmt;

/// Errors returned when validating arguments to a split.
#[derive(Clone, Debug, PartialEq)]
pub enum InvalidArgument {
    /// The separator was an empty string.
    EmptySeparator,

    /// The split count was not `-1` or a non-negative integer. Holds the
    /// rejected value.
    InvalidLimit(String),
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySeparator => write!(f, "separator cannot be an empty string"),
            Self::InvalidLimit(val) => {
                write!(f, "split limit must be an integer >= -1, got {}", val)
            }
        }
    }
}

impl Error for InvalidArgument {}

impl From<Infallible> for InvalidArgument {
    fn from(val: Infallible) -> Self {
        match val {}
    }
}

/// Number of splits that may still be performed.
///
/// This is consulted once before each split decision. [`take`](Self::take)
/// returns `true` while splits remain and `false` forever afterwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SplitLimit {
    /// Split at every separator.
    #[default]
    Unlimited,

    /// Split at most this many more times.
    Remaining(usize),
}

impl SplitLimit {
    /// Create a limit from an optional count, where `None` or `-1` mean
    /// unlimited.
    pub fn from_option(n: Option<i64>) -> Result<SplitLimit, InvalidArgument> {
        n.map_or(Ok(SplitLimit::Unlimited), SplitLimit::try_from)
    }

    /// Consume one split from the limit.
    ///
    /// Returns `true` if the caller may split again or `false` if it should
    /// stop and return the rest of the text as a single piece.
    pub fn take(&mut self) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Remaining(0) => false,
            Self::Remaining(n) => {
                *n -= 1;
                true
            }
        }
    }

    /// Return true if no more splits are allowed.
    pub fn is_exhausted(&self) -> bool {
        *self == Self::Remaining(0)
    }

    /// Return the maximum number of pieces a split with this limit can
    /// produce, or `None` if unbounded.
    pub fn max_pieces(&self) -> Option<usize> {
        match self {
            Self::Unlimited => None,
            Self::Remaining(n) => Some(n.saturating_add(1)),
        }
    }
}

impl From<usize> for SplitLimit {
    fn from(n: usize) -> Self {
        SplitLimit::Remaining(n)
    }
}

impl TryFrom<i64> for SplitLimit {
    type Error = InvalidArgument;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        match n {
            -1 => Ok(SplitLimit::Unlimited),
            n if n >= 0 => usize::try_from(n)
                .map(SplitLimit::Remaining)
                .map_err(|_| InvalidArgument::InvalidLimit(n.to_string())),
            n => Err(InvalidArgument::InvalidLimit(n.to_string())),
        }
    }
}

impl TryFrom<i32> for SplitLimit {
    type Error = InvalidArgument;

    fn try_from(n: i32) -> Result<Self, Self::Error> {
        SplitLimit::try_from(n as i64)
    }
}

/// Convert a count which may have a fractional part, such as a value read
/// from JSON. Only integral values are accepted.
impl TryFrom<f64> for SplitLimit {
    type Error = InvalidArgument;

    fn try_from(n: f64) -> Result<Self, Self::Error> {
        if !n.is_finite() || n.fract() != 0.0 || n < -1.0 || n > i64::MAX as f64 {
            return Err(InvalidArgument::InvalidLimit(n.to_string()));
        }
        SplitLimit::try_from(n as i64)
    }
}

impl TryFrom<Option<i64>> for SplitLimit {
    type Error = InvalidArgument;

    fn try_from(n: Option<i64>) -> Result<Self, Self::Error> {
        SplitLimit::from_option(n)
    }
}

/// Generator which yields one value a bounded or unbounded number of times,
/// then another value forever.
///
/// ```
/// use textsplit::RepeatSignal;
///
/// let mut signal = RepeatSignal::new(Some(2), "go", "stop").unwrap();
/// assert_eq!(signal.next_value(), "go");
/// assert_eq!(signal.next_value(), "go");
/// assert_eq!(signal.next_value(), "stop");
/// assert_eq!(signal.next_value(), "stop");
/// ```
#[derive(Clone, Debug)]
pub struct RepeatSignal<T> {
    limit: SplitLimit,
    active_value: T,
    final_value: T,
}

impl<T: Clone> RepeatSignal<T> {
    /// Create a generator that yields `active_value` `n` times and then
    /// `final_value`. If `n` is `None` or `-1`, `active_value` is repeated
    /// forever.
    ///
    /// Fails if `n` is less than `-1`.
    pub fn new(n: Option<i64>, active_value: T, final_value: T) -> Result<Self, InvalidArgument> {
        let limit = SplitLimit::from_option(n)?;
        Ok(Self::with_limit(limit, active_value, final_value))
    }

    /// Create a generator from an already-validated limit.
    pub fn with_limit(limit: SplitLimit, active_value: T, final_value: T) -> Self {
        RepeatSignal {
            limit,
            active_value,
            final_value,
        }
    }

    /// Return the next value.
    pub fn next_value(&mut self) -> T {
        if self.limit.take() {
            self.active_value.clone()
        } else {
            self.final_value.clone()
        }
    }
}

impl<T: Clone> Iterator for RepeatSignal<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.next_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
