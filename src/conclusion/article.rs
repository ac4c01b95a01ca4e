//! Article references.
//!
//! Articles come as compound strings such as `3+13`, `p1-1+3` or `5-1+5-4`,
//! where `+` joins several articles and `-` introduces a paragraph (or, for
//! protocol articles `pN-M`, the article number within protocol `N`).
use itertools::Itertools;

/// Removes a single leading non-word character (`;3` -> `3`).
fn strip_leading_non_word(article: &str) -> &str {
    let mut chars = article.chars();
    match chars.next() {
        Some(c) if !(c.is_alphanumeric() || c == '_') => chars.as_str(),
        _ => article,
    }
}

/// Splits a compound article string into article tokens.
///
/// The last part always comes first. Earlier parts are kept only when the part
/// that follows them does not start with them, so that `3+3-1` (article 3,
/// paragraph 1) only yields `3-1`.
///
/// ```
/// use echr_cases::conclusion::tokenize;
/// assert_eq!(tokenize("3+13"), vec!["13", "3"]);
/// assert_eq!(tokenize("3+3-1"), vec!["3-1"]);
/// ```
pub fn tokenize(article: &str) -> Vec<String> {
    let parts: Vec<&str> = article.split('+').collect();

    // split always yields at least one part
    let (last, previous) = match parts.split_last() {
        Some(split) => split,
        None => return vec![String::new()],
    };

    let mut articles = vec![strip_leading_non_word(last).to_string()];
    for (k, part) in previous.iter().enumerate() {
        if !parts[k + 1].starts_with(part) {
            articles.push(strip_leading_non_word(part).to_string());
        }
    }
    articles
}

/// Reduces an article token to its base article.
///
/// Tokens without a `p` lose everything after the first `-` (`6-1` -> `6`),
/// tokens with a `p` keep two segments (`p1-1-2` -> `p1-1`).
///
/// Note that any `p`, wherever it is, marks the token as a protocol article.
pub fn base_article(article: &str) -> String {
    let article = article.split('+').next().unwrap_or_default();
    if !article.to_lowercase().contains('p') {
        article.split('-').next().unwrap_or_default().to_string()
    } else {
        article.split('-').take(2).join("-")
    }
}

/// [base_article] over a list of tokens.
pub fn base_articles<S: AsRef<str>>(articles: &[S]) -> Vec<String> {
    articles.iter().map(|a| base_article(a.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_single() {
        assert_eq!(tokenize("3"), vec!["3"]);
        assert_eq!(tokenize("6-1"), vec!["6-1"]);
    }

    #[test]
    fn tokenize_empty() {
        assert_eq!(tokenize(""), vec![""]);
    }

    #[test]
    fn tokenize_collapses_prefixes() {
        assert_eq!(tokenize("3+3-1"), vec!["3-1"]);
        assert_eq!(tokenize("5-1+5-4"), vec!["5-4", "5-1"]);
        // prefix check is a plain string check
        assert_eq!(tokenize("1+13"), vec!["13"]);
    }

    #[test]
    fn tokenize_conjunctions() {
        assert_eq!(tokenize("3+13"), vec!["13", "3"]);
        assert_eq!(tokenize("p1-1+3"), vec!["3", "p1-1"]);
        assert_eq!(tokenize("6-1+6-3-c+13"), vec!["13", "6-1", "6-3-c"]);
    }

    #[test]
    fn tokenize_strips_punctuation() {
        assert_eq!(tokenize(";3"), vec!["3"]);
        assert_eq!(tokenize("(13+,3"), vec!["3", "13"]);
        // only one character is removed
        assert_eq!(tokenize("..3"), vec![".3"]);
    }

    #[test]
    fn base() {
        assert_eq!(base_article("3-1"), "3");
        assert_eq!(base_article("p1-1"), "p1-1");
        assert_eq!(base_article("P1-1-2"), "P1-1");
        assert_eq!(base_article("10"), "10");
        assert_eq!(base_article("6-3-c"), "6");
        assert_eq!(base_article("3+13"), "3");
        assert_eq!(base_article(""), "");
    }

    #[test]
    fn base_stray_p() {
        // any p is taken as a protocol marker
        assert_eq!(base_article("3-1-sup"), "3-1");
    }

    #[test]
    fn bases() {
        assert_eq!(base_articles(&["13", "3-1", "p4-2-1"]), vec!["13", "3", "p4-2"]);
    }
}
