use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The stream ran out before a variable-width value was complete.
    /// `payload_read` counts the value bits recovered before the end.
    #[error("bit stream ended after {payload_read} of at most {max_payload} payload bits")]
    PrematureEnd { payload_read: u8, max_payload: u8 },
}
