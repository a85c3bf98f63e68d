use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Envelope returned by successful create endpoints: `{message, data}`.
#[derive(Serialize, Debug)]
pub struct Saved<T> {
    pub message: &'static str,
    pub data: T,
}
