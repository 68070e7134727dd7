use thiserror::Error;

/// Contract violations on assessment input. Every variant is an invalid-input
/// condition the caller must surface to the user for re-entry — there is no
/// local recovery, and the decision function never fails for any other reason.
#[derive(Debug, Clone, Error)]
pub enum TriageError {
    #[error("{instrument_id}: expected {expected} answers, got {actual}")]
    WrongItemCount {
        instrument_id: String,
        expected: usize,
        actual: usize,
    },

    #[error("{instrument_id}: item {item_index} has severity {value}, outside 0-3")]
    ItemOutOfRange {
        instrument_id: String,
        item_index: usize,
        value: u8,
    },
}
