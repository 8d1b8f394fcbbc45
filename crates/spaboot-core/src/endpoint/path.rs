//! Path segment rewriting.

/// Returns the byte offset of the first occurrence of `segment` in `s` that
/// forms a whole path segment, i.e. is followed by end of input, `/`, `?` or `#`.
///
/// `segment` is expected to start with `/`. `/apiv2` does not match `/api`.
pub fn find_path_segment(s: &str, segment: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(rel) = s[from..].find(segment) {
        let at = from + rel;
        let end = at + segment.len();
        match s[end..].chars().next() {
            None | Some('/') | Some('?') | Some('#') => return Some(at),
            Some(_) => from = at + 1,
        }
    }
    None
}

/// Replaces the first whole-segment occurrence of `segment` with `replacement`.
/// Returns `s` unchanged when there is none.
pub fn replace_path_segment(s: &str, segment: &str, replacement: &str) -> String {
    match find_path_segment(s, segment) {
        Some(at) => {
            let mut out = String::with_capacity(s.len() + replacement.len());
            out.push_str(&s[..at]);
            out.push_str(replacement);
            out.push_str(&s[at + segment.len()..]);
            out
        }
        None => s.to_string(),
    }
}
