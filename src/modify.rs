/// Modifier outcomes for the retroactive editor.

/// What a caller-supplied modifier decided about one scanned entry.
///
/// Returned by the closures passed to
/// [`modify_around_current`](crate::manager::UndoRedoManager::modify_around_current).
/// `Skip` keeps the scan going; the other two variants are terminal for
/// their side of the cursor.
///
/// A tagged enum is used instead of `Option<Option<T>>`-style sentinels so
/// that entry types which are themselves optional cannot collide with the
/// "delete" case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModifyOutcome<T> {
    /// This entry does not match; keep scanning.
    Skip,
    /// Remove this entry from the buffer and stop scanning this side.
    Delete,
    /// Substitute this entry with the given value and stop scanning this side.
    Replace(T),
}

impl<T> ModifyOutcome<T> {
    /// Whether this outcome leaves the entry untouched and continues the scan.
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip)
    }

    /// Whether this outcome removes the entry.
    pub fn is_delete(&self) -> bool {
        matches!(self, Self::Delete)
    }

    /// Whether this outcome replaces the entry.
    pub fn is_replace(&self) -> bool {
        matches!(self, Self::Replace(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_predicates() {
        assert!(ModifyOutcome::<u32>::Skip.is_skip());
        assert!(ModifyOutcome::<u32>::Delete.is_delete());
        assert!(ModifyOutcome::Replace(5).is_replace());
        assert!(!ModifyOutcome::Replace(5).is_skip());
        assert!(!ModifyOutcome::<u32>::Delete.is_replace());
    }
}
