use derive_more::Constructor;
use serde::{Deserialize, Serialize};

use crate::primitives::{BlockNumber, ExecutionAddress, H256};

/// Reference to a fully validated block header.
///
/// This is the entire view of a header that fork choice needs: its identity, its height
/// and the address credited for producing it. The signer doubles as validator identity
/// on proof-of-authority chains. Parent linkage is intentionally absent because fork
/// choice never walks the chain.
#[derive(Constructor, Clone, Copy, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Header {
    pub hash: H256,
    pub number: BlockNumber,
    pub signer: ExecutionAddress,
}
