use std::collections::BTreeMap;

use serde::Serialize;

use crate::errors::SessionError;

/// The user's in-progress picks: `count` draw positions, freely editable.
/// Distinctness is checked only by [`SelectionSession::confirm`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionSession {
    deck_size: usize,
    positions: Vec<usize>,
}

/// Immutable snapshot of a selection whose positions are pairwise distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmedSelection {
    positions: Vec<usize>,
}

impl ConfirmedSelection {
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl SelectionSession {
    /// A single-card selection at position 0.
    pub fn new(deck_size: usize) -> Self {
        Self {
            deck_size,
            positions: vec![0],
        }
    }

    pub fn count(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    /// Resize to `n` slots, all at position 0.
    pub fn set_card_count(&mut self, n: i64) -> Result<(), SessionError> {
        let count = usize::try_from(n)
            .ok()
            .filter(|&c| (1..=self.deck_size).contains(&c))
            .ok_or(SessionError::InvalidRange {
                count: n,
                max: self.deck_size,
            })?;
        self.positions = vec![0; count];
        Ok(())
    }

    pub fn set_position(&mut self, slot: usize, value: usize) -> Result<(), SessionError> {
        if value >= self.deck_size {
            return Err(SessionError::PositionOutOfRange {
                value,
                deck_size: self.deck_size,
            });
        }
        let count = self.count();
        let target = self
            .positions
            .get_mut(slot)
            .ok_or(SessionError::SlotOutOfRange { slot, count })?;
        *target = value;
        Ok(())
    }

    /// Set every slot at once. All values are checked before any is written.
    pub fn set_all(&mut self, values: &[usize]) -> Result<(), SessionError> {
        if values.len() != self.count() {
            return Err(SessionError::CountMismatch {
                expected: self.count(),
                actual: values.len(),
            });
        }
        if let Some(&value) = values.iter().find(|&&v| v >= self.deck_size) {
            return Err(SessionError::PositionOutOfRange {
                value,
                deck_size: self.deck_size,
            });
        }
        self.positions.copy_from_slice(values);
        Ok(())
    }

    /// Zero every slot, keeping the count.
    pub fn reset_positions(&mut self) {
        self.positions.iter_mut().for_each(|p| *p = 0);
    }

    /// Snapshot the selection if all positions are distinct.
    ///
    /// ```
    /// use tarot_engine::errors::SessionError;
    /// use tarot_engine::selection::SelectionSession;
    ///
    /// let mut sel = SelectionSession::new(78);
    /// sel.set_card_count(2).unwrap();
    /// sel.set_all(&[3, 3]).unwrap();
    /// assert_eq!(
    ///     sel.confirm(),
    ///     Err(SessionError::DuplicateSelection { positions: vec![3] })
    /// );
    /// assert_eq!(sel.positions(), &[3, 3]);
    /// ```
    pub fn confirm(&self) -> Result<ConfirmedSelection, SessionError> {
        let mut seen: BTreeMap<usize, usize> = BTreeMap::new();
        for &p in &self.positions {
            *seen.entry(p).or_default() += 1;
        }
        if seen.len() != self.positions.len() {
            let positions = seen
                .into_iter()
                .filter(|&(_, n)| n > 1)
                .map(|(p, _)| p)
                .collect();
            return Err(SessionError::DuplicateSelection { positions });
        }
        Ok(ConfirmedSelection {
            positions: self.positions.clone(),
        })
    }
}
