//! Combo identification and resolution.
//!
//! A combo is a same-rank subset of a hand whose suit multiset matches a
//! [`ComboPattern`](crate::rules::ComboPattern). [`detect`] classifies a
//! played subset (or enumerates every playable subset of a hand, for
//! clients); [`resolve`] applies a combo's payout to the game state.

mod detect;
mod resolve;

pub use detect::{find_combos, identify_combo, ComboCandidate};
pub use resolve::ComboResult;
pub(crate) use resolve::resolve_combo;
