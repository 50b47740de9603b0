use core::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use crate::primitives::Weight;

/// Configuration variables of the chain being extended.
///
/// Treated as an immutable snapshot for the duration of a single fork choice decision.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Weight past which external headers are treated as attested by a trusted source
    /// and adopted unconditionally. `None` if the chain has no such transition.
    pub trusted_finality_weight: Option<Weight>,
    /// Size of the validator set on chains whose fork choice is signer-turn aware.
    /// The turn computation uses this as a modulus, so zero must be unrepresentable.
    pub validator_set_size: NonZeroU64,
}
