//! Pattern 2: String Methods
//! Character access, slicing, splitting, case conversion, and replacement.
//!
//! Strings are immutable here: every function borrows its input and
//! returns a fresh `String` (or a borrowed sub-slice). Position arguments
//! index extended grapheme clusters, so no operation can land inside a
//! user-perceived character.

use itertools::Itertools;
use unicode_segmentation::UnicodeSegmentation;

/// Returns the single character at `index`, or `""` out of range.
pub fn find_the_character_at_index(text: &str, index: usize) -> &str {
    text.graphemes(true).nth(index).unwrap_or("")
}

/// Returns the characters in `[start, end)`.
///
/// Negative positions count back from the end; positions past either
/// bound clamp to it. `start >= end` yields an empty string.
pub fn slice_the_string(text: &str, start: isize, end: isize) -> String {
    let total = text.graphemes(true).count();
    let clamp = |position: isize| -> usize {
        if position < 0 {
            total.saturating_sub(position.unsigned_abs())
        } else {
            (position as usize).min(total)
        }
    };
    let (from, to) = (clamp(start), clamp(end));
    if from >= to {
        return String::new();
    }
    text.graphemes(true).skip(from).take(to - from).collect()
}

/// Splits on every occurrence of `separator`.
///
/// An empty separator splits into individual characters, so
/// `split_the_string("", "")` is `[]` while a non-empty separator on an
/// empty input yields `[""]`.
pub fn split_the_string(text: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        text.graphemes(true).map(str::to_owned).collect()
    } else {
        text.split(separator).map(str::to_owned).collect()
    }
}

/// Upper-cases the whole string.
pub fn make_all_upper_case(text: &str) -> String {
    text.to_uppercase()
}

/// Lower-cases the whole string.
pub fn make_all_lower_case(text: &str) -> String {
    text.to_lowercase()
}

/// Upper-cases the first character and lower-cases the remainder.
pub fn make_word_title_case(word: &str) -> String {
    match word.graphemes(true).next() {
        Some(first) => format!(
            "{}{}",
            first.to_uppercase(),
            word[first.len()..].to_lowercase()
        ),
        None => String::new(),
    }
}

/// Replaces every non-overlapping occurrence of `old` with `new`.
///
/// Implemented as split-then-join, so an empty `old` inherits the
/// split-on-empty rule: `new` lands between every character, with no
/// leading or trailing copy.
pub fn replace_the_string(text: &str, old: &str, new: &str) -> String {
    split_the_string(text, old).join(new)
}

/// Title-cases every space-separated token and re-joins with spaces.
///
/// Runs of spaces produce empty tokens that title-case to empty, so the
/// original spacing survives unchanged.
pub fn make_sentence_title_case(sentence: &str) -> String {
    sentence.split(' ').map(make_word_title_case).join(" ")
}






#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn split_then_join_restores_input(text in "[a-z,;]{0,24}") {
            prop_assert_eq!(split_the_string(&text, ",").join(","), text);
        }

        #[test]
        fn replacing_a_token_with_itself_is_identity(text in "[a-z ]{0,24}") {
            prop_assert_eq!(replace_the_string(&text, " ", " "), text);
        }

        #[test]
        fn full_slice_restores_input(text in "\\PC{0,16}") {
            let total = text.graphemes(true).count() as isize;
            prop_assert_eq!(slice_the_string(&text, 0, total), text);
        }

        #[test]
        fn character_count_matches_split_on_empty(text in "\\PC{0,16}") {
            let characters = split_the_string(&text, "");
            prop_assert_eq!(characters.len(), text.graphemes(true).count());
        }

        #[test]
        fn sentence_title_case_preserves_token_count(text in "[a-zA-Z ]{0,24}") {
            let before = text.split(' ').count();
            let after = make_sentence_title_case(&text).split(' ').count();
            prop_assert_eq!(before, after);
        }
    }
}
