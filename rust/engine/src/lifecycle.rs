use tracing::debug;

use crate::artwork::ArtworkLoader;
use crate::reveal::RevealedCard;

/// Owns the revealed cards of the current generation and, through them,
/// every live artwork handle.
///
/// At most one generation is live. [`ResourceLifecycle::release_all`] hands
/// each handle back to the loader by value and leaves the lifecycle empty,
/// so a second call releases nothing.
#[derive(Debug, Default)]
pub struct ResourceLifecycle {
    generation: u64,
    cards: Vec<RevealedCard>,
    released: usize,
}

impl ResourceLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly revealed set as the next generation.
    ///
    /// The previous generation must already have been released.
    pub fn adopt(&mut self, cards: Vec<RevealedCard>) -> u64 {
        debug_assert!(
            self.cards.is_empty(),
            "previous generation was not released"
        );
        self.generation += 1;
        self.cards = cards;
        self.generation
    }

    /// Release every handle of the live generation. Returns how many were released.
    pub fn release_all<L>(&mut self, loader: &mut L) -> usize
    where
        L: ArtworkLoader + ?Sized,
    {
        let mut count = 0;
        for card in self.cards.drain(..) {
            if let Some(art) = card.artwork {
                loader.release(art.handle);
                count += 1;
            }
        }
        if count > 0 {
            debug!(
                generation = self.generation,
                released = count,
                "artwork released"
            );
        }
        self.released += count;
        count
    }

    pub fn cards(&self) -> &[RevealedCard] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Id of the most recently adopted generation (0 before the first reveal).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Handles currently owned.
    pub fn live_handles(&self) -> usize {
        self.cards.iter().filter(|c| c.artwork.is_some()).count()
    }

    /// Handles released over the lifetime of this lifecycle.
    pub fn released_total(&self) -> usize {
        self.released
    }
}
