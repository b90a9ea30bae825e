/// Folds a word or query to the canonical (lowercase) form the tries store.
/// Applied before every comparison, so storage and lookup are case-insensitive.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
}
