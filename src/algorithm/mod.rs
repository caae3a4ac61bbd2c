/// Breadth-first reachability verification with parameterised blocking
pub mod reachability;
/// Deterministic board synthesis with rejection-retry
pub mod synthesis;

pub use synthesis::{SynthesisReport, Synthesizer};
