//! Ownership policy - only the original creator may mutate an entity.

/// Returns true when `actor` is the recorded creator.
///
/// Exact string equality, no normalization or case folding. The same
/// predicate gates post and comment mutation alike.
pub fn owned_by(actor: &str, created_by: &str) -> bool {
    actor == created_by
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_exact_creator_only() {
        assert!(owned_by("alice", "alice"));
        assert!(!owned_by("bob", "alice"));
        assert!(!owned_by("Alice", "alice"));
        assert!(!owned_by("alice ", "alice"));
        assert!(!owned_by("", "alice"));
    }
}
