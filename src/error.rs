use thiserror::Error;

/// Failures detected before any deal or evaluation takes place.
///
/// Nothing here is retried internally; re-prompting on bad input belongs to
/// the caller's input layer. A run either completes a deal fully or fails
/// before evaluating anything.
#[derive(Debug, Error)]
pub enum Error {
    /// Game, player, or trial counts outside their documented bounds.
    #[error("invalid configuration: {0}")]
    Configuration(String),
    /// A deal that would need more cards than the deck holds.
    #[error("deal requires {need} cards but the deck holds {have}")]
    ExhaustedDeck { need: usize, have: usize },
    /// A report destination failed mid-write.
    #[error("report failed: {0}")]
    Report(#[from] std::io::Error),
}
