/// Core undo/redo manager over a position-indexed history buffer.
///
/// One `Vec` holds the entire history, oldest entry first. An integer cursor
/// splits it into a past region below the cursor (reachable via `undo`) and
/// a future region at and above it (reachable via `redo`). `undo` and `redo`
/// only move the cursor; entries stay where they are until a new `add`
/// diverges over them or the retroactive editor removes them.
use anyhow::Result;

use crate::config::HistoryConfig;
use crate::modify::ModifyOutcome;
use crate::signal::{Signal, SubscriptionId};

/// Manages a bounded undo/redo history of opaque entries.
///
/// Entries are never inspected by the manager except through the modifier
/// closures handed to [`modify_around_current`]. Only the past region is
/// capacity-bounded; see [`HistoryConfig`].
///
/// Single-threaded by design: all operations are expected to be driven from
/// the one sequencing point that owns the manager.
///
/// [`modify_around_current`]: UndoRedoManager::modify_around_current
pub struct UndoRedoManager<T> {
    /// History entries, oldest first.
    buffer: Vec<T>,
    /// Number of already-applied entries; the cursor between past and future.
    current: usize,
    /// Capacity bound for the past region.
    config: HistoryConfig,
    /// Change-only availability signal for `undo`.
    can_undo: Signal<bool>,
    /// Change-only availability signal for `redo`.
    can_redo: Signal<bool>,
}

impl<T> std::fmt::Debug for UndoRedoManager<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UndoRedoManager")
            .field("buffer_len", &self.buffer.len())
            .field("current", &self.current)
            .field("max_size", &self.config.max_size)
            .finish()
    }
}

impl<T> Default for UndoRedoManager<T> {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}

impl<T> UndoRedoManager<T> {
    /// Creates an empty manager with the given configuration.
    ///
    /// The configuration is sanitized first, so a zero `max_size` becomes 1.
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            buffer: Vec::new(),
            current: 0,
            config: config.sanitized(),
            can_undo: Signal::new(false),
            can_redo: Signal::new(false),
        }
    }

    /// Convenience constructor bounding the past region at `max_size`.
    pub fn with_max_size(max_size: usize) -> Self {
        Self::new(HistoryConfig { max_size })
    }

    /// Total number of entries, past and future together.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether no entries are recorded at all.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Cursor position: the number of already-applied entries.
    pub fn position(&self) -> usize {
        self.current
    }

    /// The configured bound on the past region.
    pub fn max_size(&self) -> usize {
        self.config.max_size
    }

    /// Whether `undo` would return an entry right now.
    pub fn can_undo(&self) -> bool {
        !self.buffer.is_empty() && self.current > 0
    }

    /// Whether `redo` would return an entry right now.
    pub fn can_redo(&self) -> bool {
        self.buffer.len() > self.current
    }

    /// Records a new entry at the cursor.
    ///
    /// Any future entries are discarded first: recording after one or more
    /// undos permanently destroys the old redo branch. If the past region
    /// then exceeds `max_size`, the oldest entries are evicted from the
    /// front and the cursor is pulled back by the same amount.
    pub fn add(&mut self, entry: T) {
        self.buffer.truncate(self.current);
        self.buffer.push(entry);
        self.current += 1;
        self.enforce_capacity();
        tracing::trace!("recorded entry, position {}", self.current);
        self.publish_availability();
    }

    /// Steps the cursor back and returns the entry that was just un-applied.
    ///
    /// Returns `None` when the past region is empty. The entry stays in the
    /// buffer so a later `redo` can replay it; the caller is expected to
    /// apply its inverse half to the observed state.
    pub fn undo(&mut self) -> Option<&T> {
        if self.current == 0 {
            return None;
        }
        self.current -= 1;
        tracing::trace!("undo, position {}", self.current);
        self.publish_availability();
        Some(&self.buffer[self.current])
    }

    /// Returns the next future entry and steps the cursor forward over it.
    ///
    /// Returns `None` when the future region is empty. The caller is
    /// expected to apply the entry's forward half to the observed state.
    pub fn redo(&mut self) -> Option<&T> {
        if self.current >= self.buffer.len() {
            return None;
        }
        self.current += 1;
        tracing::trace!("redo, position {}", self.current);
        self.publish_availability();
        Some(&self.buffer[self.current - 1])
    }

    /// Drops all entries and resets the cursor.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.current = 0;
        self.publish_availability();
    }

    /// Finds and alters at most one entry on each side of the cursor.
    ///
    /// The history side is scanned backward starting at the entry just below
    /// the cursor, the future side forward starting at the cursor. On each
    /// side the first non-[`Skip`] outcome is applied and ends that side's
    /// scan, so at most one entry per side is replaced or deleted; entries
    /// further out are untouched even if they would also match. Deleting an
    /// already-applied entry pulls the cursor back by one so the past count
    /// stays accurate.
    ///
    /// The history scan runs before the future scan, and the future scan
    /// starts from the cursor position left behind by the history scan.
    ///
    /// [`Skip`]: ModifyOutcome::Skip
    pub fn modify_around_current<H, F>(&mut self, mut history_modifier: H, mut future_modifier: F)
    where
        H: FnMut(&T) -> ModifyOutcome<T>,
        F: FnMut(&T) -> ModifyOutcome<T>,
    {
        self.modify_first_history(&mut history_modifier);
        self.modify_first_future(&mut future_modifier);
        self.publish_availability();
    }

    /// Fallible form of [`modify_around_current`].
    ///
    /// The history scan runs first; if its modifier returns an error the
    /// future scan never starts. An error from the future modifier leaves an
    /// already-applied history modification in place. The erroring side
    /// itself never applies anything, because an outcome is only applied
    /// once a modifier returns a terminal match. Availability signals are
    /// republished before the error propagates.
    ///
    /// [`modify_around_current`]: UndoRedoManager::modify_around_current
    pub fn try_modify_around_current<H, F>(
        &mut self,
        mut history_modifier: H,
        mut future_modifier: F,
    ) -> Result<()>
    where
        H: FnMut(&T) -> Result<ModifyOutcome<T>>,
        F: FnMut(&T) -> Result<ModifyOutcome<T>>,
    {
        let result = match self.try_modify_first_history(&mut history_modifier) {
            Ok(()) => self.try_modify_first_future(&mut future_modifier),
            Err(e) => Err(e),
        };
        self.publish_availability();
        result
    }

    /// Subscribes to the can-undo signal.
    ///
    /// The callback immediately receives the current value, then fires on
    /// every change until [`unsubscribe_can_undo`] is called with the
    /// returned id.
    ///
    /// [`unsubscribe_can_undo`]: UndoRedoManager::unsubscribe_can_undo
    pub fn subscribe_can_undo(&mut self, callback: impl FnMut(bool) + 'static) -> SubscriptionId {
        self.can_undo.subscribe(callback)
    }

    /// Detaches a can-undo listener. Returns `false` for an unknown id.
    pub fn unsubscribe_can_undo(&mut self, id: SubscriptionId) -> bool {
        self.can_undo.unsubscribe(id)
    }

    /// Subscribes to the can-redo signal; same contract as
    /// [`subscribe_can_undo`](UndoRedoManager::subscribe_can_undo).
    pub fn subscribe_can_redo(&mut self, callback: impl FnMut(bool) + 'static) -> SubscriptionId {
        self.can_redo.subscribe(callback)
    }

    /// Detaches a can-redo listener. Returns `false` for an unknown id.
    pub fn unsubscribe_can_redo(&mut self, id: SubscriptionId) -> bool {
        self.can_redo.unsubscribe(id)
    }

    /// Evicts the oldest past entries once the past region exceeds the cap.
    ///
    /// Keyed off the cursor, not the total length: future entries are never
    /// evicted here.
    fn enforce_capacity(&mut self) {
        if self.current <= self.config.max_size {
            return;
        }
        let excess = self.current - self.config.max_size;
        self.buffer.drain(..excess);
        self.current -= excess;
        tracing::debug!("evicted {excess} oldest history entries");
    }

    fn publish_availability(&mut self) {
        let undo = !self.buffer.is_empty() && self.current > 0;
        let redo = self.buffer.len() > self.current;
        self.can_undo.publish(undo);
        self.can_redo.publish(redo);
    }

    fn modify_first_history<H: FnMut(&T) -> ModifyOutcome<T>>(&mut self, modifier: &mut H) {
        for index in (0..self.current).rev() {
            match modifier(&self.buffer[index]) {
                ModifyOutcome::Skip => continue,
                outcome => {
                    self.apply_outcome(index, outcome);
                    return;
                }
            }
        }
    }

    fn modify_first_future<F: FnMut(&T) -> ModifyOutcome<T>>(&mut self, modifier: &mut F) {
        for index in self.current..self.buffer.len() {
            match modifier(&self.buffer[index]) {
                ModifyOutcome::Skip => continue,
                outcome => {
                    self.apply_outcome(index, outcome);
                    return;
                }
            }
        }
    }

    fn try_modify_first_history<H: FnMut(&T) -> Result<ModifyOutcome<T>>>(
        &mut self,
        modifier: &mut H,
    ) -> Result<()> {
        for index in (0..self.current).rev() {
            match modifier(&self.buffer[index])? {
                ModifyOutcome::Skip => continue,
                outcome => {
                    self.apply_outcome(index, outcome);
                    return Ok(());
                }
            }
        }
        Ok(())
    }

    fn try_modify_first_future<F: FnMut(&T) -> Result<ModifyOutcome<T>>>(
        &mut self,
        modifier: &mut F,
    ) -> Result<()> {
        for index in self.current..self.buffer.len() {
            match modifier(&self.buffer[index])? {
                ModifyOutcome::Skip => continue,
                outcome => {
                    self.apply_outcome(index, outcome);
                    return Ok(());
                }
            }
        }
        Ok(())
    }

    /// Applies a terminal modifier outcome at `index`.
    fn apply_outcome(&mut self, index: usize, outcome: ModifyOutcome<T>) {
        match outcome {
            ModifyOutcome::Skip => {}
            ModifyOutcome::Delete => {
                self.buffer.remove(index);
                // An already-applied entry vanished; it no longer counts
                // toward the past.
                if index < self.current {
                    self.current -= 1;
                }
                tracing::debug!("retroactively deleted entry at index {index}");
            }
            ModifyOutcome::Replace(value) => {
                self.buffer[index] = value;
                tracing::debug!("retroactively replaced entry at index {index}");
            }
        }
    }
}
