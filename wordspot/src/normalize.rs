//! ASCII-only case folding for comparison.
//!
//! Only `A-Z` are folded. Non-ASCII characters are copied untouched, so
//! "ÉCOLE" normalizes to "École" rather than "école".

use crate::interface::SearchResult;

/// Lowercase copy of `word`. The buffer is reserved fallibly so exhaustion
/// surfaces as `AllocationFailure` instead of aborting.
pub fn normalize(word: &str) -> SearchResult<String> {
    let mut out = String::new();
    normalize_into(word, &mut out)?;
    Ok(out)
}

/// Normalize into a caller-owned buffer, replacing its contents.
pub fn normalize_into(word: &str, out: &mut String) -> SearchResult<()> {
    out.clear();
    out.try_reserve_exact(word.len())?;
    out.push_str(word);
    out.make_ascii_lowercase();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_ascii() {
        assert_eq!(normalize("NuRsEs").unwrap(), "nurses");
    }

    #[test]
    fn test_leaves_digits_and_punctuation() {
        assert_eq!(normalize("ICD-9_X").unwrap(), "icd-9_x");
    }

    #[test]
    fn test_non_ascii_untouched() {
        assert_eq!(normalize("ÉCOLE").unwrap(), "École");
        assert_eq!(normalize("ÄRZTIN").unwrap(), "Ärztin");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize("").unwrap(), "");
    }

    #[test]
    fn test_normalize_into_reuses_buffer() {
        let mut buf = String::from("previous contents");
        normalize_into("RN", &mut buf).unwrap();
        assert_eq!(buf, "rn");
        normalize_into("", &mut buf).unwrap();
        assert!(buf.is_empty());
    }
}
