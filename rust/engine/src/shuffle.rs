use tracing::debug;

use crate::rng::SessionRng;

/// Current draw order: `draw_order[p]` is the deck index shown at position `p`.
///
/// The order is replaced wholesale on every reshuffle and is always a
/// permutation of `0..deck_size`.
#[derive(Debug, Clone)]
pub struct ShuffleState {
    draw_order: Vec<usize>,
    shuffles: u64,
}

impl ShuffleState {
    pub fn initialize(deck_size: usize, rng: &mut SessionRng) -> Self {
        let mut state = Self {
            draw_order: Vec::new(),
            shuffles: 0,
        };
        state.draw_order = state.fresh_order(deck_size, rng);
        state
    }

    /// Replace the draw order with a new permutation of the same size.
    pub fn reshuffle(&mut self, rng: &mut SessionRng) -> &[usize] {
        self.draw_order = self.fresh_order(self.draw_order.len(), rng);
        &self.draw_order
    }

    fn fresh_order(&mut self, deck_size: usize, rng: &mut SessionRng) -> Vec<usize> {
        let mut order: Vec<usize> = (0..deck_size).collect();
        rng.shuffle(&mut order);
        self.shuffles += 1;
        debug!(
            seed = rng.seed(),
            shuffle = self.shuffles,
            deck_size,
            "draw order shuffled"
        );
        order
    }

    pub fn draw_order(&self) -> &[usize] {
        &self.draw_order
    }

    /// Deck index at draw position `position`.
    pub fn deck_index(&self, position: usize) -> Option<usize> {
        self.draw_order.get(position).copied()
    }

    pub fn len(&self) -> usize {
        self.draw_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw_order.is_empty()
    }

    /// Number of permutations drawn so far, including the initial one.
    pub fn shuffles(&self) -> u64 {
        self.shuffles
    }
}

/// True when `order` contains every value of `0..order.len()` exactly once.
pub fn is_permutation(order: &[usize]) -> bool {
    let mut seen = vec![false; order.len()];
    for &i in order {
        match seen.get_mut(i) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}
