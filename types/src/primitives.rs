pub use ethereum_types::{H160, H256, U256};

pub type BlockNumber = u64;
pub type ExecutionAddress = H160;

/// Accumulated weight of a chain up to a header, inclusive.
///
/// Total difficulty in proof-of-work deployments. 256 bits wide because mainnet-scale
/// networks overflow `u128` over their lifetime.
pub type Weight = ethereum_types::U256;
