use serde::Serialize;

/// Coarse quality signal on a transcript: `High` when the primary
/// recognition call produced it, `Low` when it came from the ranked-candidate
/// fallback and downstream consumers should treat it with suspicion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfidenceTier {
    High,
    Low,
}

impl ConfidenceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "High",
            ConfidenceTier::Low => "Low",
        }
    }
}
