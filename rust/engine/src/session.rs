use serde::Serialize;
use tracing::{debug, info};

use crate::artwork::{ArtworkLoader, ArtworkSource};
use crate::cards::Locale;
use crate::deck::Deck;
use crate::errors::SessionError;
use crate::lifecycle::ResourceLifecycle;
use crate::reveal::{reveal, RevealedCard};
use crate::rng::SessionRng;
use crate::selection::SelectionSession;
use crate::shuffle::ShuffleState;

/// What the display surface should show next to the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SessionStatus {
    /// Picking positions; nothing revealed
    Editing,
    /// Last confirmation was rejected because these positions repeat
    Duplicate { positions: Vec<usize> },
    /// The current generation of revealed cards is on display
    Revealed,
}

/// A single user's drawing session: deck, draw order, picks and the
/// revealed cards with their artwork.
///
/// Every operation either completes or returns an error with the session
/// untouched. Artwork of the live generation is released before any new
/// artwork is loaded, and again when the session is dropped.
///
/// # Examples
///
/// ```
/// use tarot_engine::artwork::{ArtworkSource, MemoryLoader};
/// use tarot_engine::cards::Locale;
/// use tarot_engine::session::Session;
///
/// let mut session = Session::new(
///     Locale::En,
///     Some(42),
///     MemoryLoader::serving_all(300, 520),
///     ArtworkSource::default(),
/// );
/// session.set_card_count(3).unwrap();
/// session.set_all(&[0, 1, 2]).unwrap();
/// let cards = session.confirm().unwrap();
/// assert_eq!(cards.len(), 3);
///
/// session.reshuffle();
/// assert!(session.revealed().is_empty());
/// assert_eq!(session.loader().live(), 0);
/// ```
#[derive(Debug)]
pub struct Session<L: ArtworkLoader> {
    deck: Deck,
    rng: SessionRng,
    shuffle: ShuffleState,
    selection: SelectionSession,
    status: SessionStatus,
    lifecycle: ResourceLifecycle,
    loader: L,
    source: ArtworkSource,
}

impl<L: ArtworkLoader> Session<L> {
    pub fn new(locale: Locale, seed: Option<u64>, loader: L, source: ArtworkSource) -> Self {
        let deck = Deck::build(locale);
        let mut rng = SessionRng::from_option(seed);
        let shuffle = ShuffleState::initialize(deck.len(), &mut rng);
        let selection = SelectionSession::new(deck.len());
        info!(
            locale = locale.as_str(),
            seed = rng.seed(),
            deck_size = deck.len(),
            "session started"
        );
        Self {
            deck,
            rng,
            shuffle,
            selection,
            status: SessionStatus::Editing,
            lifecycle: ResourceLifecycle::new(),
            loader,
            source,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn draw_order(&self) -> &[usize] {
        self.shuffle.draw_order()
    }

    pub fn selection(&self) -> &SelectionSession {
        &self.selection
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn revealed(&self) -> &[RevealedCard] {
        self.lifecycle.cards()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn generation(&self) -> u64 {
        self.lifecycle.generation()
    }

    pub fn artwork_source(&self) -> &ArtworkSource {
        &self.source
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Change how many cards to draw. Resets every pick to position 0 and
    /// releases any revealed artwork.
    pub fn set_card_count(&mut self, n: i64) -> Result<(), SessionError> {
        self.selection.set_card_count(n)?;
        self.clear_revealed();
        debug!(count = n, "card count changed");
        Ok(())
    }

    pub fn set_position(&mut self, slot: usize, value: usize) -> Result<(), SessionError> {
        self.selection.set_position(slot, value)
    }

    pub fn set_all(&mut self, values: &[usize]) -> Result<(), SessionError> {
        self.selection.set_all(values)
    }

    /// Validate the picks and reveal them as a new generation.
    ///
    /// On duplicates the picks and any revealed cards are kept; only the
    /// status switches to [`SessionStatus::Duplicate`] so it can be shown.
    pub fn confirm(&mut self) -> Result<&[RevealedCard], SessionError> {
        let confirmed = match self.selection.confirm() {
            Ok(c) => c,
            Err(e) => {
                if let SessionError::DuplicateSelection { positions } = &e {
                    debug!(?positions, "confirmation rejected");
                    self.status = SessionStatus::Duplicate {
                        positions: positions.clone(),
                    };
                }
                return Err(e);
            }
        };
        self.lifecycle.release_all(&mut self.loader);
        let cards = reveal(
            &confirmed,
            &self.shuffle,
            &self.deck,
            &mut self.rng,
            &mut self.loader,
            &self.source,
        );
        self.lifecycle.adopt(cards);
        self.status = SessionStatus::Revealed;
        Ok(self.lifecycle.cards())
    }

    /// Finish the reading: release artwork, draw a new order and zero the
    /// picks. The card count is kept.
    pub fn reshuffle(&mut self) -> &[usize] {
        self.clear_revealed();
        self.selection.reset_positions();
        self.shuffle.reshuffle(&mut self.rng)
    }

    /// Release the live generation. Returns how many handles were released.
    pub fn release_artwork(&mut self) -> usize {
        self.lifecycle.release_all(&mut self.loader)
    }

    fn clear_revealed(&mut self) {
        self.lifecycle.release_all(&mut self.loader);
        self.status = SessionStatus::Editing;
    }

    /// Read-only view for the display surface.
    pub fn snapshot(&self) -> SessionView<'_> {
        SessionView {
            locale: self.deck.locale(),
            seed: self.rng.seed(),
            generation: self.lifecycle.generation(),
            draw_order: self.shuffle.draw_order(),
            positions: self.selection.positions(),
            status: &self.status,
            revealed: self.lifecycle.cards(),
        }
    }
}

impl<L: ArtworkLoader> Drop for Session<L> {
    fn drop(&mut self) {
        self.lifecycle.release_all(&mut self.loader);
    }
}

/// Borrowed per-frame snapshot of a [`Session`].
#[derive(Debug, Serialize)]
pub struct SessionView<'a> {
    pub locale: Locale,
    pub seed: u64,
    pub generation: u64,
    pub draw_order: &'a [usize],
    pub positions: &'a [usize],
    pub status: &'a SessionStatus,
    pub revealed: &'a [RevealedCard],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artwork::MemoryLoader;

    fn session() -> Session<MemoryLoader> {
        Session::new(
            Locale::En,
            Some(2024),
            MemoryLoader::serving_all(10, 10),
            ArtworkSource::default(),
        )
    }

    #[test]
    fn starts_editing_one_card() {
        let s = session();
        assert_eq!(s.status(), &SessionStatus::Editing);
        assert_eq!(s.selection().positions(), &[0]);
        assert!(s.revealed().is_empty());
    }

    #[test]
    fn duplicate_keeps_previous_reveal() {
        let mut s = session();
        s.set_card_count(2).unwrap();
        s.set_all(&[5, 6]).unwrap();
        s.confirm().unwrap();
        s.set_position(1, 5).unwrap();
        assert!(s.confirm().is_err());
        assert_eq!(
            s.status(),
            &SessionStatus::Duplicate { positions: vec![5] }
        );
        assert_eq!(s.revealed().len(), 2);
        assert_eq!(s.loader().live(), 2);
    }

    #[test]
    fn invalid_count_leaves_reveal_in_place() {
        let mut s = session();
        s.confirm().unwrap();
        assert_eq!(
            s.set_card_count(0),
            Err(SessionError::InvalidRange { count: 0, max: 78 })
        );
        assert_eq!(s.status(), &SessionStatus::Revealed);
        assert_eq!(s.revealed().len(), 1);
    }

    #[test]
    fn reconfirm_releases_before_loading() {
        let mut s = session();
        s.set_card_count(3).unwrap();
        s.set_all(&[0, 1, 2]).unwrap();
        s.confirm().unwrap();
        s.confirm().unwrap();
        assert_eq!(s.loader().loads(), 6);
        assert_eq!(s.loader().releases(), &[1, 2, 3]);
        assert_eq!(s.loader().live(), 3);
        assert_eq!(s.generation(), 2);
    }

    #[test]
    fn snapshot_serializes_status_tag() {
        let mut s = session();
        s.confirm().unwrap();
        let json = serde_json::to_value(s.snapshot()).unwrap();
        assert_eq!(json["status"]["state"], "revealed");
        assert_eq!(json["revealed"].as_array().unwrap().len(), 1);
        assert_eq!(json["draw_order"].as_array().unwrap().len(), 78);
    }
}
