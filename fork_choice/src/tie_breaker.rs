use core::{cmp::Ordering, num::NonZeroU64};

use log::warn;
use rand::{thread_rng, Rng as _};
use types::{
    config::Config as ChainConfig,
    containers::Header,
    primitives::{U256, Weight},
};

pub type PreservePredicate = Box<dyn Fn(&Header) -> bool + Send + Sync>;

/// Resolves a tie between two chains of equal accumulated weight and equal height.
///
/// Injected into [`ForkChoice`](crate::ForkChoice) at construction. The shared
/// weight-then-height prefix lives in `ForkChoice`; implementations only see headers
/// that are indistinguishable by both.
pub trait TieBreaker {
    /// Whether a candidate whose accumulated weight has reached the configured trusted
    /// finality threshold is adopted before any comparison. Policies for externally
    /// finalized chains set this; pure local policies do not.
    const HONORS_TRUSTED_FINALITY: bool;

    /// Returns whether `external` should replace `current` as the canonical head.
    ///
    /// `weight` is the accumulated weight both headers are tied at, passed through for
    /// diagnostics only.
    fn break_tie(
        &self,
        config: &ChainConfig,
        current: &Header,
        external: &Header,
        weight: Weight,
    ) -> bool;
}

/// Tie-break for chains ordered by accumulated weight alone.
///
/// A head matched by the preserve predicate (typically a block the node produced
/// itself) is never replaced; a matched candidate is always adopted. Between two
/// unremarkable headers the tie is settled by an unbiased coin flip so that
/// independent nodes do not systematically pile onto the same side.
///
/// Each flip is drawn from the calling thread's entropy-seeded generator. There is no
/// generator state in the strategy itself, so concurrent callers cannot race on a
/// shared cursor.
#[derive(Default)]
pub struct RandomizedTieBreaker {
    preserve: Option<PreservePredicate>,
}

impl RandomizedTieBreaker {
    /// A missing predicate treats every header as unremarkable.
    /// Light clients pass `None`.
    #[must_use]
    pub fn new(preserve: Option<PreservePredicate>) -> Self {
        Self { preserve }
    }

    fn preserves(&self, header: &Header) -> bool {
        self.preserve
            .as_ref()
            .is_some_and(|preserve| preserve(header))
    }
}

impl TieBreaker for RandomizedTieBreaker {
    const HONORS_TRUSTED_FINALITY: bool = true;

    fn break_tie(
        &self,
        _config: &ChainConfig,
        current: &Header,
        external: &Header,
        _weight: Weight,
    ) -> bool {
        // A header compared against itself must lose deterministically.
        // The draw below would adopt it half the time.
        if current.hash == external.hash {
            return false;
        }

        !self.preserves(current) && (self.preserves(external) || thread_rng().gen_bool(0.5))
    }
}

/// Tie-break for proof-of-authority chains.
///
/// Prefers the header signed by the validator whose scheduled slot at that height was
/// less recently due, discouraging signers from monopolizing block production. Falls
/// back to the lower header hash, which leaves exact identity collisions as the only
/// unresolvable case. Fully deterministic; no preference predicate and no randomness.
pub struct SignerTurnTieBreaker;

impl TieBreaker for SignerTurnTieBreaker {
    const HONORS_TRUSTED_FINALITY: bool = false;

    fn break_tie(
        &self,
        config: &ChainConfig,
        current: &Header,
        external: &Header,
        weight: Weight,
    ) -> bool {
        let validator_set_size = config.validator_set_size;

        let current_in_turn = in_turn_recency(current, validator_set_size);
        let external_in_turn = in_turn_recency(external, validator_set_size);

        match external_in_turn.cmp(&current_in_turn) {
            Ordering::Less => true,
            Ordering::Greater => false,
            // Headers are compared as unsigned big-endian integers. `H256` orders bytes
            // lexicographically, which is the same thing.
            Ordering::Equal => match external.hash.cmp(&current.hash) {
                Ordering::Less => true,
                Ordering::Greater => false,
                Ordering::Equal => {
                    warn!(
                        "all fork choice rules tied, keeping current head \
                         (weight: {weight}, number: {number}, \
                          current_in_turn: {current_in_turn}, \
                          external_in_turn: {external_in_turn}, \
                          current_hash: {current_hash:?}, external_hash: {external_hash:?})",
                        number = current.number,
                        current_hash = current.hash,
                        external_hash = external.hash,
                    );
                    false
                }
            },
        }
    }
}

/// How long ago the signer's scheduled slot was due at the header's height.
/// `(number - signer mod size) mod size`, with zero meaning the signer was exactly
/// in turn.
fn in_turn_recency(header: &Header, validator_set_size: NonZeroU64) -> u64 {
    let modulus = U256::from(validator_set_size.get());

    // The full 160-bit address magnitude participates in the modulo.
    // A narrowing cast would silently corrupt the index for large addresses.
    let validator_index = U256::from_big_endian(header.signer.as_bytes()) % modulus;

    // True modular subtraction. Heights below the validator index must not wrap,
    // which unsigned machine subtraction would only get right for power-of-two moduli.
    ((U256::from(header.number) % modulus + modulus - validator_index) % modulus).low_u64()
}
