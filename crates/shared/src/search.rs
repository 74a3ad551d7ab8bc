//! Helpers for name search.

/// Escape character used in `LIKE ... ESCAPE` clauses.
pub const LIKE_ESCAPE: char = '\\';

/// Escapes `LIKE` metacharacters so the term matches as a literal substring.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Builds the `ILIKE` pattern for a case-insensitive substring match.
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}
