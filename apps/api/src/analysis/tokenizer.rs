//! Word tokenization shared by the matcher and the ATS keyword term.

use std::collections::BTreeSet;

/// Tokens at or below this many chars are ignored everywhere.
const MIN_TOKEN_CHARS: usize = 3;

const STOPWORDS: &[&str] = &[
    "and", "are", "but", "can", "for", "from", "has", "have", "into", "its", "not", "our", "per",
    "than", "that", "the", "their", "them", "then", "there", "these", "this", "those", "was",
    "were", "will", "with", "within", "you", "your", "who", "whom", "which", "while", "all",
    "any", "both", "each", "etc", "also", "must", "should", "would", "able", "using", "via",
];

fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || c == '+' || c == '#'
}

/// Lowercased words longer than two chars, in order of appearance.
/// `+` and `#` stay inside words so "c++" and "c#"-style names survive.
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !is_token_char(c))
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_lowercase)
}

/// Distinct tokens across all fragments.
pub fn token_set<'a, I>(fragments: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    fragments.into_iter().flat_map(tokens).collect()
}

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Tokens that carry meaning on their own: long enough and not a stopword.
pub fn significant_tokens(text: &str) -> BTreeSet<String> {
    tokens(text).filter(|t| !is_stopword(t)).collect()
}

/// Lowercased and trimmed form used for containment checks.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
