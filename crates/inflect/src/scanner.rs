//! String scanning helpers for locating lookup window boundaries.
//!
//! All indices are byte offsets into the input and always sit on `char`
//! boundaries, so the helpers are safe to use for slicing non-ASCII text.

/// Find the first delimiter at or after `from`.
///
/// Returns the byte index of the first character in `input[from..]` that is
/// one of `delimiters`. With `trim_whitespace_backward`, the returned index is
/// moved back over any whitespace immediately preceding the delimiter (never
/// past `from`), so it marks the end of the last non-whitespace run.
///
/// # Example
///
/// ```
/// use inflect::scanner::find_first_of;
///
/// assert_eq!(find_first_of("fox (1)", &['(', '['], 0, false), Some(4));
/// assert_eq!(find_first_of("fox (1)", &['(', '['], 0, true), Some(3));
/// assert_eq!(find_first_of("fox", &['(', '['], 0, true), None);
/// ```
pub fn find_first_of(
    input: &str,
    delimiters: &[char],
    from: usize,
    trim_whitespace_backward: bool,
) -> Option<usize> {
    let tail = input.get(from..)?;
    let offset = tail.find(|c: char| delimiters.contains(&c))?;
    let mut index = from + offset;

    if trim_whitespace_backward {
        while index > from {
            match input[..index].chars().next_back() {
                Some(c) if c.is_whitespace() => index -= c.len_utf8(),
                _ => break,
            }
        }
    }

    Some(index)
}

/// Walk `index` backward to the nearest word boundary.
///
/// Steps back one character at a time and stops as soon as the character
/// immediately before `index` is whitespace (when `want_whitespace`) or
/// non-whitespace (otherwise). Returns false, leaving `index` wherever the
/// walk ended, if it reaches `stop` or the start of the string first.
///
/// # Example
///
/// ```
/// use inflect::scanner::find_word_boundary_backward;
///
/// let text = "the big fox";
/// let mut index = text.len();
///
/// // Back to the start of "fox".
/// assert!(find_word_boundary_backward(text, &mut index, 0, true));
/// assert_eq!(index, 8);
///
/// // Then past the space, to the end of "big".
/// assert!(find_word_boundary_backward(text, &mut index, 0, false));
/// assert_eq!(&text[..index], "the big");
/// ```
pub fn find_word_boundary_backward(
    input: &str,
    index: &mut usize,
    stop: usize,
    want_whitespace: bool,
) -> bool {
    while *index > stop && *index > 0 {
        let Some(current) = input[..*index].chars().next_back() else {
            return false;
        };
        *index -= current.len_utf8();
        if *index <= stop {
            return false;
        }
        match input[..*index].chars().next_back() {
            Some(before) if before.is_whitespace() == want_whitespace => return true,
            Some(_) => {}
            None => return false,
        }
    }
    false
}
