//! Checks properties of bounded splits over randomly generated inputs.

use textsplit::{split_n, split_n_iter, Direction, SplitLimit};

/// Characters that random texts and separators are drawn from. The small
/// alphabet makes adjacent and overlapping separator matches common.
const ALPHABET: &[char] = &['a', 'b', ',', 'é'];

const SEPARATORS: &[&str] = &[",", "a", "aa", "ab", "a,a", "é", "éé", ",,"];

fn random_text(rng: &mut fastrand::Rng, max_len: usize) -> String {
    let len = rng.usize(0..=max_len);
    (0..len)
        .map(|_| ALPHABET[rng.usize(0..ALPHABET.len())])
        .collect()
}

/// Run `check` against a reproducible set of random `(text, separator)`
/// pairs.
fn for_each_input(mut check: impl FnMut(&str, &str)) {
    let mut rng = fastrand::Rng::with_seed(1234);
    for _ in 0..500 {
        let text = random_text(&mut rng, 16);
        let sep = SEPARATORS[rng.usize(0..SEPARATORS.len())];
        check(&text, sep);
    }
}

#[test]
fn test_unlimited_left_split_matches_str_split() {
    for_each_input(|text, sep| {
        let pieces = split_n(text, sep, -1, Direction::FromLeft).unwrap();
        let expected: Vec<_> = text.split(sep).collect();
        assert_eq!(pieces, expected, "text {:?} sep {:?}", text, sep);
    });
}

#[test]
fn test_bounded_splits_match_std_splitn() {
    for_each_input(|text, sep| {
        for max_times in 0..4usize {
            let left = split_n(text, sep, max_times, Direction::FromLeft).unwrap();
            let expected: Vec<_> = text.splitn(max_times + 1, sep).collect();
            assert_eq!(left, expected, "text {:?} sep {:?}", text, sep);

            let right = split_n(text, sep, max_times, Direction::FromRight).unwrap();
            let mut expected: Vec<_> = text.rsplitn(max_times + 1, sep).collect();
            expected.reverse();
            assert_eq!(right, expected, "text {:?} sep {:?}", text, sep);
        }
    });
}

#[test]
fn test_zero_limit_returns_whole_text() {
    for_each_input(|text, sep| {
        for direction in [Direction::FromLeft, Direction::FromRight] {
            let pieces = split_n(text, sep, 0, direction).unwrap();
            assert_eq!(pieces, [text]);
        }
    });
}

#[test]
fn test_piece_count_is_bounded() {
    for_each_input(|text, sep| {
        for max_times in 0..5i64 {
            for direction in [Direction::FromLeft, Direction::FromRight] {
                let pieces = split_n(text, sep, max_times, direction).unwrap();
                assert!(!pieces.is_empty());
                assert!(pieces.len() <= max_times as usize + 1);
            }
        }
    });
}

#[test]
fn test_joining_pieces_restores_text() {
    for_each_input(|text, sep| {
        for max_times in [-1, 0, 1, 2, 7] {
            for direction in [Direction::FromLeft, Direction::FromRight] {
                let pieces = split_n(text, sep, max_times, direction).unwrap();
                assert_eq!(
                    pieces.join(sep),
                    text,
                    "max_times {} direction {:?}",
                    max_times,
                    direction
                );
            }
        }
    });
}

/// Return the byte offset of `piece` within `text`. `piece` must be a
/// sub-slice of `text`.
fn offset_in(text: &str, piece: &str) -> usize {
    let offset = (piece.as_ptr() as usize)
        .checked_sub(text.as_ptr() as usize)
        .expect("piece should start within text");
    assert!(offset + piece.len() <= text.len());
    offset
}

#[test]
fn test_right_split_uses_non_overlapping_matches() {
    // `rsplit` takes each match from the end of the unconsumed prefix and
    // never reuses bytes of a separator already consumed. Comparing the start
    // offset of every piece catches a right scan that picks an overlapping
    // match, even when the pieces themselves compare equal as strings.
    for_each_input(|text, sep| {
        let pieces = split_n(text, sep, -1, Direction::FromRight).unwrap();
        let offsets: Vec<_> = pieces.iter().map(|piece| offset_in(text, piece)).collect();

        let mut expected: Vec<_> = text.rsplit(sep).map(|piece| offset_in(text, piece)).collect();
        expected.reverse();

        assert_eq!(offsets, expected, "text {:?} sep {:?}", text, sep);

        for pair in pieces.windows(2) {
            let sep_start = offset_in(text, pair[0]) + pair[0].len();
            assert_eq!(sep_start + sep.len(), offset_in(text, pair[1]));
            assert_eq!(&text[sep_start..sep_start + sep.len()], sep);
        }
    });
}

#[test]
fn test_right_split_overlap_offsets() {
    // In "aaa" the rightmost "aa" starts at 1. The match at 0 overlaps it and
    // must not be used, so the first piece is "a" starting at 0 and the empty
    // last piece starts at the end of the text.
    let text = "aaa";
    let pieces = split_n(text, "aa", -1, Direction::FromRight).unwrap();
    let offsets: Vec<_> = pieces.iter().map(|piece| offset_in(text, piece)).collect();
    assert_eq!(pieces, ["a", ""]);
    assert_eq!(offsets, [0, 3]);
}

#[test]
fn test_iterators_are_fused() {
    for_each_input(|text, sep| {
        for direction in [Direction::FromLeft, Direction::FromRight] {
            let mut iter = split_n_iter(text, sep, SplitLimit::Unlimited, direction).unwrap();
            while iter.next().is_some() {}
            for _ in 0..3 {
                assert_eq!(iter.next(), None);
            }
        }
    });
}
