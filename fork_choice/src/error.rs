use static_assertions::assert_eq_size;
use thiserror::Error;
use types::primitives::{BlockNumber, H256};

#[derive(Debug, Error)]
pub enum Error {
    #[error("accumulated weight unknown for header (hash: {hash:?}, number: {number})")]
    MissingAccumulatedWeight { hash: H256, number: BlockNumber },
}

assert_eq_size!(Error, [usize; 5]);
