/// Conventional entry type for the forward/inverse delta contract.
use serde::{Deserialize, Serialize};

/// A forward state delta paired with its inverse.
///
/// The usual shape of an [`UndoRedoManager`] entry: the upstream delta
/// producer computes both directions when a transition is recorded, the
/// caller applies `inverse` when the entry comes back from `undo` and
/// `forward` when it comes back from `redo`. The manager itself never looks
/// inside; any other entry type works just as well.
///
/// [`UndoRedoManager`]: crate::manager::UndoRedoManager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchPair<D> {
    /// Delta that replays the transition.
    pub forward: D,
    /// Delta that rolls the transition back.
    pub inverse: D,
}

impl<D> PatchPair<D> {
    /// Pairs a forward delta with its inverse.
    pub fn new(forward: D, inverse: D) -> Self {
        Self { forward, inverse }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_pair_fields() {
        let pair = PatchPair::new("+1", "-1");
        assert_eq!(pair.forward, "+1");
        assert_eq!(pair.inverse, "-1");
    }
}
