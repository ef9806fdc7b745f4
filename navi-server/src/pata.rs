//! Character interleaving demo.
//!
//! Takes two words and zips their characters together: "パトカー" and
//! "タクシー" give "パタトクカシーー". Unrelated to routing; it shares the
//! web front end and nothing else.

/// Alternate the characters of `a` and `b`, then append whatever is left
/// of the longer one.
///
/// Returns an empty string if either input is empty.
///
/// # Examples
///
/// ```
/// use navi_server::pata::interleave;
///
/// assert_eq!(interleave("cat", "dog"), "cdaotg");
/// assert_eq!(interleave("hamster", "lobster"), "hlaombsstteerr");
/// assert_eq!(interleave("", "dog"), "");
/// ```
pub fn interleave(a: &str, b: &str) -> String {
    if a.is_empty() || b.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(a.len() + b.len());
    let (mut xs, mut ys) = (a.chars(), b.chars());
    loop {
        match (xs.next(), ys.next()) {
            (None, None) => break,
            (x, y) => out.extend(x.into_iter().chain(y)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn japanese() {
        assert_eq!(interleave("パトカー", "タクシー"), "パタトクカシーー");
    }

    #[test]
    fn latin() {
        assert_eq!(interleave("hamster", "lobster"), "hlaombsstteerr");
        assert_eq!(interleave("cat", "dog"), "cdaotg");
    }

    #[test]
    fn uneven_lengths() {
        assert_eq!(interleave("ab", "wxyz"), "awbxyz");
        assert_eq!(interleave("abcd", "z"), "azbcd");
    }

    #[test]
    fn empty_input() {
        assert_eq!(interleave("", ""), "");
        assert_eq!(interleave("abc", ""), "");
        assert_eq!(interleave("", "abc"), "");
    }
}
