//! Full-width digit conversion.

/// Offset from an ASCII digit to its full-width form (`'0'` → `'０'`).
const FULL_WIDTH_OFFSET: u32 = '０' as u32 - '0' as u32;

/// Maps one character: ASCII `0`-`9` become `U+FF10`-`U+FF19`, anything else
/// passes through.
pub fn full_width_digit(c: char) -> char {
    if c.is_ascii_digit() {
        char::from_u32(c as u32 + FULL_WIDTH_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

/// Replaces every ASCII digit in `text` with its full-width counterpart.
///
/// Already full-width digits are not ASCII digits and are left alone, so the
/// conversion is idempotent.
///
/// # Examples
///
/// ```
/// use wareki_format::to_full_width;
///
/// assert_eq!(to_full_width("令和2年3月3日"), "令和２年３月３日");
/// assert_eq!(to_full_width("令和２年"), "令和２年");
/// ```
pub fn to_full_width(text: &str) -> String {
    text.chars().map(full_width_digit).collect()
}
