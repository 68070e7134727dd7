//! mindcare-triage
//!
//! Screening instrument definitions and the risk triage decision. Pure data
//! and pure functions — no AWS dependency, no I/O. Defines the structure and
//! answer-validation rules for each supported instrument and maps a completed
//! assessment to a [`RiskLevel`](mindcare_core::models::risk::RiskLevel).

pub mod error;
pub mod instruments;
pub mod scoring;

use error::TriageError;
use scoring::Item;

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "phq9", "gad7").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9", "GAD-7").
    fn name(&self) -> &str;

    /// The ordered items of this instrument. Order matters: item position is
    /// how the triage rule locates the PHQ-9 self-harm item.
    fn items(&self) -> &[Item];

    /// Highest possible severity per item. Every supported instrument scores
    /// its items 0–3.
    fn max_item_severity(&self) -> u8 {
        3
    }

    /// Highest possible total score.
    fn max_score(&self) -> u32 {
        self.items().len() as u32 * self.max_item_severity() as u32
    }

    /// Validate an ordered answer sequence against this instrument.
    ///
    /// A sequence of the wrong length is rejected rather than padded: a
    /// missing self-harm answer silently defaulting to zero would be unsafe.
    fn validate_answers(&self, answers: &[u8]) -> Result<(), TriageError> {
        if answers.len() != self.items().len() {
            return Err(TriageError::WrongItemCount {
                instrument_id: self.id().to_string(),
                expected: self.items().len(),
                actual: answers.len(),
            });
        }
        for (index, &value) in answers.iter().enumerate() {
            if value > self.max_item_severity() {
                return Err(TriageError::ItemOutOfRange {
                    instrument_id: self.id().to_string(),
                    item_index: index,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
