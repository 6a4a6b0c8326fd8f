use serde::Serialize;
use tracing::{info, warn};

use crate::artwork::{Artwork, ArtworkLoader, ArtworkSource};
use crate::deck::{CardIdentity, Deck};
use crate::rng::SessionRng;
use crate::selection::ConfirmedSelection;
use crate::shuffle::ShuffleState;

/// Which way up a revealed card lies.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Upright,
    Reversed,
}

impl Orientation {
    pub fn random(rng: &mut SessionRng) -> Self {
        if rng.flip() {
            Orientation::Reversed
        } else {
            Orientation::Upright
        }
    }

    pub fn is_reversed(&self) -> bool {
        matches!(self, Orientation::Reversed)
    }

    /// Texture corners `(uv0, uv1)` for drawing the artwork; reversed cards
    /// swap the corners so the image is drawn rotated by 180 degrees.
    pub fn uv_corners(&self) -> ([f32; 2], [f32; 2]) {
        match self {
            Orientation::Upright => ([0.0, 0.0], [1.0, 1.0]),
            Orientation::Reversed => ([1.0, 1.0], [0.0, 0.0]),
        }
    }
}

/// One resolved slot of a confirmed selection.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct RevealedCard {
    /// Slot in the selection (0-based)
    pub slot: usize,
    /// Draw position the user picked
    pub position: usize,
    pub identity: CardIdentity,
    pub orientation: Orientation,
    /// `None` when the artwork could not be loaded
    pub artwork: Option<Artwork>,
}

/// Resolve every slot of `confirmed`, in slot order.
///
/// Orientation is drawn per card on every call. Artwork failures are logged
/// and leave that slot without artwork; the remaining slots still load.
pub fn reveal<L>(
    confirmed: &ConfirmedSelection,
    shuffle: &ShuffleState,
    deck: &Deck,
    rng: &mut SessionRng,
    loader: &mut L,
    source: &ArtworkSource,
) -> Vec<RevealedCard>
where
    L: ArtworkLoader + ?Sized,
{
    let mut cards = Vec::with_capacity(confirmed.len());
    for (slot, &position) in confirmed.positions().iter().enumerate() {
        let Some(identity) = shuffle.deck_index(position).and_then(|i| deck.get(i)) else {
            warn!(slot, position, "position has no card in the current draw order");
            continue;
        };
        let orientation = Orientation::random(rng);
        let path = source.path_for(identity);
        let artwork = match loader.load(&path) {
            Ok(art) => Some(art),
            Err(e) => {
                warn!(slot, path = %path.display(), error = %e, "artwork unavailable");
                None
            }
        };
        cards.push(RevealedCard {
            slot,
            position,
            identity: identity.clone(),
            orientation,
            artwork,
        });
    }
    info!(
        count = cards.len(),
        with_artwork = cards.iter().filter(|c| c.artwork.is_some()).count(),
        "cards revealed"
    );
    cards
}
