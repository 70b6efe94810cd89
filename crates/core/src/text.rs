//! Text capability and text sanitizing.

/// Capability for objects that can produce their text.
///
/// Both methods are required: every element kind picks its own join policy,
/// so there is no default that could silently return empty text.
pub trait HasText {
    fn text(&self) -> String;

    /// Returns the text, separating visual lines with line returns when
    /// `use_line_returns` is set. Kinds without lines may ignore the flag.
    fn text_with_line_returns(&self, use_line_returns: bool) -> String;
}

/// Punctuation kept by [`sanitize`]. Closed list.
pub const COMMON_PUNCTUATION: [char; 32] = [
    '.', ',', '!', '?', ';', ':', '-', '_', '(', ')', '[', ']', '{', '}', '\'', '"', '/', '\\',
    '@', '#', '$', '%', '^', '&', '*', '+', '=', '<', '>', '|', '~', '`',
];

/// Replacement emitted for every unrecognized character.
pub const REPLACEMENT_CHAR: char = '?';

/// Returns true for members of [`COMMON_PUNCTUATION`].
#[inline]
pub fn is_common_punctuation(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | '!'
            | '?'
            | ';'
            | ':'
            | '-'
            | '_'
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '\''
            | '"'
            | '/'
            | '\\'
            | '@'
            | '#'
            | '$'
            | '%'
            | '^'
            | '&'
            | '*'
            | '+'
            | '='
            | '<'
            | '>'
            | '|'
            | '~'
            | '`'
    )
}

/// Returns true if [`sanitize`] keeps `c` unchanged.
///
/// Letters and digits are ASCII only. Whitespace is the ASCII subset of
/// Unicode `White_Space`: space, tab, LF, VT, FF and CR.
#[inline]
pub fn is_recognized_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || (c.is_ascii() && c.is_whitespace()) || is_common_punctuation(c)
}

/// Maps every unrecognized character to `?`, one output char per input char.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| {
            if is_recognized_char(c) {
                c
            } else {
                REPLACEMENT_CHAR
            }
        })
        .collect()
}
