// The `unused_crate_dependencies` lint checks every crate in a package separately.
// See <https://github.com/rust-lang/rust/issues/57274>.
#![allow(unused_crate_dependencies)]

use std::{collections::HashMap, sync::Arc};

use fork_choice::{ChainReader, ForkChoice, SignerTurnTieBreaker};
use log::Level;
use nonzero_ext::nonzero;
use types::{
    config::Config as ChainConfig,
    containers::Header,
    primitives::{BlockNumber, ExecutionAddress, Weight, H256},
};

struct TestChain {
    config: ChainConfig,
    weights: HashMap<(H256, BlockNumber), Weight>,
}

impl ChainReader for TestChain {
    fn config(&self) -> &ChainConfig {
        &self.config
    }

    fn accumulated_weight(&self, hash: H256, number: BlockNumber) -> Option<Weight> {
        self.weights.get(&(hash, number)).copied()
    }
}

// Weight, height, turn recency and identity all tied between two distinct header
// instances. Identity uniqueness makes this all but impossible outside a test, so it
// must resolve to "keep the current head" with a diagnostic rather than an error.
#[test]
fn degenerate_four_way_tie_keeps_current_head_and_warns() {
    testing_logger::setup();

    let colliding_hash = H256::repeat_byte(7);

    // Signers one and four share a validator index modulo three.
    let current = Header::new(colliding_hash, 9, ExecutionAddress::from_low_u64_be(1));
    let external = Header::new(colliding_hash, 9, ExecutionAddress::from_low_u64_be(4));

    let config = ChainConfig {
        trusted_finality_weight: None,
        validator_set_size: nonzero!(3_u64),
    };

    let mut weights = HashMap::new();
    weights.insert((colliding_hash, 9), Weight::from(100_u64));

    let chain = TestChain { config, weights };
    let fork_choice = ForkChoice::new(Arc::new(chain), SignerTurnTieBreaker);

    let reorg = fork_choice
        .reorg_needed(&current, &external)
        .expect("the weight is known");

    assert!(!reorg);

    testing_logger::validate(|logs| {
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].level, Level::Warn);
        assert!(logs[0].body.contains("all fork choice rules tied"));
        assert!(logs[0].body.contains("weight: 100"));
        assert!(logs[0].body.contains("number: 9"));
    });
}
