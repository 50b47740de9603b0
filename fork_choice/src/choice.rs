use core::cmp::Ordering;
use std::sync::Arc;

use anyhow::Result;
use derive_more::Constructor;
use types::{containers::Header, primitives::Weight};

use crate::{
    error::Error,
    misc::ChainReader,
    tie_breaker::{RandomizedTieBreaker, SignerTurnTieBreaker, TieBreaker},
};

/// Fork chooser for chains ordered by accumulated weight, with an escape hatch for
/// chains that transition to externally attested finality.
pub type WeightForkChoice<R> = ForkChoice<R, RandomizedTieBreaker>;

/// Fork chooser for proof-of-authority chains. Fully deterministic.
pub type SignerTurnForkChoice<R> = ForkChoice<R, SignerTurnTieBreaker>;

/// Decides whether a competing header should replace the canonical head.
///
/// Constructed once per node run and shared by all importers. Holds no mutable state,
/// so concurrent calls need no synchronization regardless of the strategy.
#[derive(Constructor)]
pub struct ForkChoice<R, T> {
    chain: Arc<R>,
    tie_breaker: T,
}

impl<R: ChainReader, T: TieBreaker> ForkChoice<R, T> {
    /// Returns whether the canonical head should move from `current` to `external`.
    ///
    /// Fails with [`Error::MissingAccumulatedWeight`] if the chain reader does not know
    /// the weight of either header. The caller must leave the head untouched on error.
    pub fn reorg_needed(&self, current: &Header, external: &Header) -> Result<bool> {
        let current_weight = self.accumulated_weight(current)?;
        let external_weight = self.accumulated_weight(external)?;

        let config = self.chain.config();

        // Headers at or past the threshold come from a trusted source and win outright.
        if T::HONORS_TRUSTED_FINALITY {
            if let Some(threshold) = config.trusted_finality_weight {
                if external_weight >= threshold {
                    return Ok(true);
                }
            }
        }

        let decision = match external_weight.cmp(&current_weight) {
            Ordering::Greater => true,
            Ordering::Less => false,
            // At equal weight the shorter chain wins. A selfish producer gains nothing
            // from claiming height without weight behind it.
            // See <http://www.cs.cornell.edu/~ie53/publications/btcProcFC.pdf>.
            Ordering::Equal => match external.number.cmp(&current.number) {
                Ordering::Less => true,
                Ordering::Greater => false,
                Ordering::Equal => {
                    self.tie_breaker
                        .break_tie(config, current, external, current_weight)
                }
            },
        };

        Ok(decision)
    }

    fn accumulated_weight(&self, header: &Header) -> Result<Weight> {
        self.chain
            .accumulated_weight(header.hash, header.number)
            .ok_or_else(|| {
                Error::MissingAccumulatedWeight {
                    hash: header.hash,
                    number: header.number,
                }
                .into()
            })
    }
}
