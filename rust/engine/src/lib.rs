//! # tarot-engine: Card Drawing Session Core
//!
//! State engine for an interactive tarot reading: a 78-card bilingual
//! catalog, a seedable draw order, validated picks, randomized orientation
//! and generation-scoped ownership of card artwork.
//!
//! ## Core Modules
//!
//! - [`cards`] - Locales, suits, ranks and card naming
//! - [`deck`] - The 78-card catalog (`CardIdentity`, `Deck`)
//! - [`rng`] - Seedable ChaCha20 random source
//! - [`shuffle`] - Draw order permutation and reshuffling
//! - [`selection`] - Card count, picks and duplicate detection
//! - [`reveal`] - Orientation draws and artwork resolution
//! - [`artwork`] - Artwork loader seam and resource handles
//! - [`lifecycle`] - Release of artwork per reveal generation
//! - [`session`] - The session that ties the above together
//! - [`errors`] - Error types for session operations
//!
//! ## Quick Start
//!
//! ```rust
//! use tarot_engine::artwork::{ArtworkSource, MemoryLoader};
//! use tarot_engine::cards::Locale;
//! use tarot_engine::session::Session;
//!
//! let mut session = Session::new(
//!     Locale::En,
//!     Some(7),
//!     MemoryLoader::new(),
//!     ArtworkSource::default(),
//! );
//! session.set_card_count(2).unwrap();
//! session.set_all(&[10, 20]).unwrap();
//! for card in session.confirm().unwrap() {
//!     println!("{} {:?}", card.identity.name_en, card.orientation);
//! }
//! ```
//!
//! ## Deterministic Sessions
//!
//! The same seed yields the same draw order and the same orientations:
//!
//! ```rust
//! use tarot_engine::artwork::{ArtworkSource, MemoryLoader};
//! use tarot_engine::cards::Locale;
//! use tarot_engine::session::Session;
//!
//! let a = Session::new(Locale::En, Some(42), MemoryLoader::new(), ArtworkSource::default());
//! let b = Session::new(Locale::Zh, Some(42), MemoryLoader::new(), ArtworkSource::default());
//! assert_eq!(a.draw_order(), b.draw_order());
//! ```

pub mod artwork;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod lifecycle;
pub mod reveal;
pub mod rng;
pub mod selection;
pub mod session;
pub mod shuffle;
