//! Text analysis shared by indexing and query parsing.
//!
//! Records and queries go through the same pipeline so that a query term
//! can only ever hit an index key produced the same way:
//!
//! 1. split on runs of whitespace (leading and trailing runs are ignored)
//! 2. lowercase every resulting token

/// Split `text` into lowercase whitespace-delimited tokens.
///
/// Repeated tokens are yielded as many times as they occur.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(str::to_lowercase)
}

/// Lowercase a whole record for case-insensitive substring checks.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        let tokens: Vec<String> = tokenize("Ann Smith ann@X.com").collect();
        assert_eq!(tokens, vec!["ann", "smith", "ann@x.com"]);
    }

    #[test]
    fn test_tokenize_whitespace_runs() {
        let tokens: Vec<String> = tokenize("  Bob \t\tAnn   Jones \r\n").collect();
        assert_eq!(tokens, vec!["bob", "ann", "jones"]);
    }

    #[test]
    fn test_tokenize_empty_and_blank() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize(" \t ").count(), 0);
    }

    #[test]
    fn test_tokenize_keeps_repeats() {
        let tokens: Vec<String> = tokenize("ann ANN Ann").collect();
        assert_eq!(tokens, vec!["ann", "ann", "ann"]);
    }

    #[test]
    fn test_tokenize_splits_on_unicode_whitespace() {
        let tokens: Vec<String> = tokenize("Ann\u{a0}Smith\u{3000}ann@x.com").collect();
        assert_eq!(tokens, vec!["ann", "smith", "ann@x.com"]);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Carol WHITE"), "carol white");
    }
}
