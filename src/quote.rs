//! Quoting strings as literals.

/// Escape sequence which replaces `"` in a double-quoted literal whose value
/// also contains `'`, unless the caller supplies another.
pub const DEFAULT_DQUOTE_REPLACEMENT: &str = "\\\"";

/// How [`quote_string`] delimits a value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum QuoteStyle {
    /// Wrap in `"` without escaping.
    Double,

    /// Wrap in `'` without escaping. Used when the value contains `"` but
    /// not `'`.
    Single,

    /// Wrap in `"` and escape each `"` in the value. Used when the value
    /// contains both kinds of quote.
    DoubleEscaped,
}

impl QuoteStyle {
    /// Choose the style which requires the least escaping for `value`.
    pub fn for_value(value: &str) -> QuoteStyle {
        match (value.contains('\''), value.contains('"')) {
            (false, true) => QuoteStyle::Single,
            (true, true) => QuoteStyle::DoubleEscaped,
            _ => QuoteStyle::Double,
        }
    }

    /// Return the delimiter character for this style.
    pub fn delimiter(self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double | QuoteStyle::DoubleEscaped => '"',
        }
    }
}

/// Wrap `value` in quotes, preferring double quotes.
///
/// Single quotes are used if `value` contains a double quote but no single
/// quote, in which case no escaping is needed. If it contains both, double
/// quotes are used and each `"` in `value` is replaced by
/// `dquote_replacement`. A replacement of `None` or `Some("")` means the
/// default, `\"`. Single quotes are never escaped.
///
/// ```
/// use textsplit::quote_string;
///
/// assert_eq!(quote_string("it's", None), r#""it's""#);
/// assert_eq!(quote_string(r#"it's "x""#, Some("&quot;")), r#""it's &quot;x&quot;""#);
/// ```
pub fn quote_string(value: &str, dquote_replacement: Option<&str>) -> String {
    let style = QuoteStyle::for_value(value);
    let delim = style.delimiter();

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push(delim);
    match style {
        QuoteStyle::Double | QuoteStyle::Single => quoted.push_str(value),
        QuoteStyle::DoubleEscaped => {
            let replacement = dquote_replacement
                .filter(|r| !r.is_empty())
                .unwrap_or(DEFAULT_DQUOTE_REPLACEMENT);
            for (i, part) in value.split('"').enumerate() {
                if i > 0 {
                    quoted.push_str(replacement);
                }
                quoted.push_str(part);
            }
        }
    }
    quoted.push(delim);
    quoted
}
