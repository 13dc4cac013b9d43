//! Small text position helpers.

/// Returns the 0-based line number containing the given byte offset.
///
/// Counts newlines strictly before `offset`. Offsets past the end of the
/// text land on the last line.
///
/// # Example
/// ```
/// use texicon::base::line_of_offset;
///
/// let text = "one\ntwo\nthree";
/// assert_eq!(line_of_offset(text, 0), 0);
/// assert_eq!(line_of_offset(text, 5), 1);
/// assert_eq!(line_of_offset(text, 9), 2);
/// ```
pub fn line_of_offset(text: &str, offset: usize) -> u32 {
    let end = offset.min(text.len());
    text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() as u32
}
