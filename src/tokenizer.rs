use regex::Regex;
use std::sync::LazyLock;

// maximal run of anything that isn't a separator
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^ \t]+").unwrap());

fn is_separator(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Count the words in `line`. Runs of separators never add a word.
pub fn count_words(line: &str) -> usize {
    WORD.find_iter(line).count()
}

/// The line starting at its first non-separator character.
pub fn next_word(line: &str) -> &str {
    line.trim_start_matches(is_separator)
}

/// Every word of `line`, in order.
pub fn words(line: &str) -> impl Iterator<Item = &str> {
    WORD.find_iter(line).map(|m| m.as_str())
}
