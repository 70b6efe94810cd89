//! Tests for text sanitizing.

use proptest::prelude::*;
use tessera_core::sanitize;
use tessera_core::text::{COMMON_PUNCTUATION, is_common_punctuation, is_recognized_char};

#[test]
fn test_sanitize_replaces_non_ascii_letters_and_symbols() {
    assert_eq!(sanitize("Row 1: Jöhn & Søn™"), "Row 1: J?hn & S?n?");
}

#[test]
fn test_sanitize_keeps_every_listed_punctuation_mark() {
    let all: String = COMMON_PUNCTUATION.iter().collect();
    assert_eq!(sanitize(&all), all);
    let mixed = r#"a.b,c!d?e;f:g-h_i(j)k[l]m{n}o'p"q/r\s"#;
    assert_eq!(sanitize(mixed), mixed);
    assert_eq!(sanitize("@#$%^&*+=<>|~`"), "@#$%^&*+=<>|~`");
}

#[test]
fn test_sanitize_keeps_ascii_whitespace() {
    assert_eq!(sanitize("a b\tc\nd\re\x0Cf"), "a b\tc\nd\re\x0Cf");
}

#[test]
fn test_sanitize_replaces_control_and_unicode_whitespace() {
    assert_eq!(sanitize("a\0b\x07c"), "a?b?c");
    assert_eq!(sanitize("1\u{A0}000"), "1?000");
    assert_eq!(sanitize("\u{2003}"), "?");
}

#[test]
fn test_sanitize_replaces_non_ascii_punctuation() {
    // The closed list covers all printable ASCII punctuation, so only
    // non-ASCII lookalikes are replaced.
    assert_eq!(sanitize("\u{2013}\u{201C}x\u{201D}"), "??x?");
    assert_eq!(sanitize("€5"), "?5");
}

#[test]
fn test_sanitize_counts_chars_not_bytes() {
    let input = "日本語 text";
    let output = sanitize(input);
    assert_eq!(output, "??? text");
    assert_eq!(output.chars().count(), input.chars().count());
    assert!(output.len() < input.len());
}

#[test]
fn test_sanitize_empty() {
    assert_eq!(sanitize(""), "");
}

#[test]
fn test_classification_helpers() {
    assert!(is_common_punctuation('~'));
    assert!(!is_common_punctuation('a'));
    assert!(!is_common_punctuation('§'));
    assert!(is_recognized_char('Z'));
    assert!(is_recognized_char('7'));
    assert!(!is_recognized_char('é'));
    assert!(!is_recognized_char('٣'));
}

fn safe_string() -> impl Strategy<Value = String> {
    let alphabet: Vec<char> = ('a'..='z')
        .chain('A'..='Z')
        .chain('0'..='9')
        .chain([' ', '\t', '\n', '\r'])
        .chain(COMMON_PUNCTUATION)
        .collect();
    prop::collection::vec(prop::sample::select(alphabet), 0..64)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_sanitize_preserves_char_count(s in any::<String>()) {
        prop_assert_eq!(sanitize(&s).chars().count(), s.chars().count());
    }

    #[test]
    fn prop_safe_strings_are_fixed_points(s in safe_string()) {
        prop_assert_eq!(sanitize(&s), s);
    }

    #[test]
    fn prop_unrecognized_chars_become_question_marks(
        s in safe_string(),
        c in any::<char>().prop_filter("unrecognized", |c| !is_recognized_char(*c)),
        at in any::<prop::sample::Index>(),
    ) {
        let mut chars: Vec<char> = s.chars().collect();
        let pos = at.index(chars.len() + 1);
        chars.insert(pos, c);
        chars.push(c);
        let input: String = chars.iter().collect();

        let expected: String = chars
            .iter()
            .map(|&x| if x == c { '?' } else { x })
            .collect();
        prop_assert_eq!(sanitize(&input), expected);
    }

    #[test]
    fn prop_sanitize_is_idempotent(s in any::<String>()) {
        let once = sanitize(&s);
        prop_assert_eq!(sanitize(&once), once.clone());
    }
}
