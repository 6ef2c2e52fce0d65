//! String utility functions for common string operations.

/// Longest initial character sequence shared by every name.
///
/// Comparison is per `char`, so the result is always valid UTF-8 even when
/// names diverge inside a multi-byte sequence. An empty input yields an
/// empty prefix.
///
/// # Example
///
/// ```
/// use smarttree::string_utils::common_prefix;
///
/// assert_eq!(common_prefix(["exp_004", "exp_010", "exp_014"]), "exp_0");
/// assert_eq!(common_prefix(["alpha", "beta"]), "");
/// ```
pub fn common_prefix<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names = names.into_iter();
    let Some(first) = names.next() else {
        return String::new();
    };
    let mut prefix: String = first.as_ref().to_string();

    for name in names {
        let shared: usize = prefix
            .chars()
            .zip(name.as_ref().chars())
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| a.len_utf8())
            .sum();
        prefix.truncate(shared);
        if prefix.is_empty() {
            break;
        }
    }

    prefix
}
