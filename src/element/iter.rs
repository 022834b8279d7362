//! Traversal of one refinement level in SFC order.

use super::SfcElement;

/// Iterator over consecutive same-level elements, stepping with
/// [`SfcElement::successor`]. `successor` is never called on the last
/// element yielded.
#[derive(Clone, Debug)]
pub struct LevelIter<E: SfcElement> {
    next: Option<E>,
    remaining: u64,
}

impl<E: SfcElement> LevelIter<E> {
    /// All `NUM_CHILDREN^level` elements of `level`.
    pub fn new(level: u8) -> Self {
        debug_assert!(level <= E::MAX_LEVEL);
        Self::from_element(E::from_linear_id(level, 0), E::count_at_level(level))
    }

    /// `count` elements starting at `start`, clamped to the end of the level.
    pub fn from_element(start: E, count: u64) -> Self {
        let level = start.level();
        let available = E::count_at_level(level) - start.linear_id(level);
        let remaining = count.min(available);
        log::trace!(
            "level traversal: {:?} level {level} from id {} ({remaining} elements)",
            E::CLASS,
            start.linear_id(level)
        );
        Self {
            next: (remaining > 0).then_some(start),
            remaining,
        }
    }

    /// Elements of `level` that descend from `ancestor`, in SFC order.
    pub fn descendants(ancestor: E, level: u8) -> Self {
        let first = ancestor.first_descendant(level);
        let last = ancestor.last_descendant(level);
        Self::from_element(first, last.linear_id(level) - first.linear_id(level) + 1)
    }
}

impl<E: SfcElement> Iterator for LevelIter<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        let current = self.next?;
        self.remaining -= 1;
        self.next = if self.remaining > 0 {
            Some(current.successor(current.level()))
        } else {
            log::trace!("level traversal finished at {current:?}");
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, usize::try_from(self.remaining).ok())
    }
}

impl<E: SfcElement> ExactSizeIterator for LevelIter<E> {}

impl<E: SfcElement> std::iter::FusedIterator for LevelIter<E> {}
