use types::{
    config::Config as ChainConfig,
    primitives::{BlockNumber, Weight, H256},
};

/// Read-only view of the local chain needed to decide a reorg.
///
/// Implemented by the surrounding node for both full and light chains. Lookup latency
/// and blocking behavior are the implementor's responsibility; no lock is held across
/// a call into the reader.
pub trait ChainReader {
    /// Returns the active chain configuration.
    /// Assumed stable for the duration of a single decision.
    fn config(&self) -> &ChainConfig;

    /// Returns the accumulated weight of a previously processed header.
    ///
    /// `None` means the reader has not processed the header. Callers must treat that
    /// as "unknown", never as zero.
    fn accumulated_weight(&self, hash: H256, number: BlockNumber) -> Option<Weight>;
}
