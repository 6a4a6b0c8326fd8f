//! Draw order preview.
//!
//! Prints the permutation a session with the same seed starts from, so a
//! seed can be checked before an interactive draw.

use std::io::Write;

use tarot_engine::cards::DECK_SIZE;
use tarot_engine::rng::SessionRng;
use tarot_engine::shuffle::ShuffleState;

use super::resolve_settings;
use crate::error::CliError;

pub fn handle_shuffle_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let settings = resolve_settings(None, seed, None)?;
    let mut rng = SessionRng::new_with_seed(settings.seed);
    let state = ShuffleState::initialize(DECK_SIZE, &mut rng);
    writeln!(out, "seed: {}", settings.seed)?;
    writeln!(out, "draw order: {:?}", state.draw_order())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_order() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        handle_shuffle_command(Some(77), &mut a).unwrap();
        handle_shuffle_command(Some(77), &mut b).unwrap();
        assert_eq!(a, b);
        assert!(String::from_utf8(a).unwrap().starts_with("seed: 77\n"));
    }
}
