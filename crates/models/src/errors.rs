use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// A stored row could not be turned back into a record.
    #[error("decode error: {0}")]
    Decode(String),
}
