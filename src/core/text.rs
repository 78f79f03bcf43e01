/// Lowercase and trim a query string
#[inline]
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Lowercase and split on whitespace, discarding empty tokens
#[inline]
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
