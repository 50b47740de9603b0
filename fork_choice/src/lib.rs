//! Canonical head selection for competing chains.
//!
//! The block import pipeline calls [`ForkChoice::reorg_needed`] every time a fully
//! validated header competes with the current canonical head. The answer is a pure
//! yes/no decision over externally supplied snapshots; retrieving headers, validating
//! them and actually moving the head are the caller's concern.
//!
//! Both supported policies share the same prefix (heavier chain wins, then the shorter
//! chain wins at equal weight) and differ only in how they resolve full ties, so the
//! tie-break is a strategy injected at construction:
//! - [`RandomizedTieBreaker`] keeps a locally preferred head and otherwise flips an
//!   unbiased coin, for chains ordered by accumulated weight alone;
//! - [`SignerTurnTieBreaker`] prefers the signer whose scheduled turn was less recently
//!   due, then the lower header hash, for proof-of-authority chains.
//!
//! Decisions are deterministic apart from the coin flip, which only runs when two
//! chains are genuinely indistinguishable by weight and height.

pub use crate::{
    choice::{ForkChoice, SignerTurnForkChoice, WeightForkChoice},
    error::Error,
    misc::ChainReader,
    tie_breaker::{PreservePredicate, RandomizedTieBreaker, SignerTurnTieBreaker, TieBreaker},
};

mod choice;
mod error;
mod misc;
mod tie_breaker;
