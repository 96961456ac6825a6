//! This crate provides a bounded, direction-aware string splitter and a
//! helper for quoting strings as literals.
//!
//! [`split_n`] splits text on a separator at most a given number of times.
//! The limit can apply to the leftmost separators (like [`str::splitn`]) or
//! the rightmost ones (like [`str::rsplitn`]), but in both cases the pieces
//! are returned in the order they appear in the text.
//!
//! ```
//! use textsplit::{split_n, Direction};
//!
//! let pieces = split_n("a,b,c,d", ",", 1, Direction::FromRight).unwrap();
//! assert_eq!(pieces, ["a,b,c", "d"]);
//! ```
//!
//! [`quote_string`] wraps a value in double or single quotes, picking
//! whichever needs the least escaping.
//!
//! ```
//! use textsplit::quote_string;
//!
//! assert_eq!(quote_string(r#"say "hi""#, None), r#"'say "hi"'"#);
//! ```
//!
//! Positions are byte offsets into UTF-8 text. Separators are matched as
//! whole strings, so every piece boundary is a char boundary.

pub mod limit;
pub mod quote;
pub mod split;

pub use limit::{InvalidArgument, RepeatSignal, SplitLimit};
pub use quote::{quote_string, QuoteStyle};
pub use split::{
    split_n, split_n_iter, Direction, SplitFromLeft, SplitFromRight, SplitN, SplitNExt,
};
