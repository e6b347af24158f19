/// Errors produced at the generation service boundary.
///
/// All transport, HTTP and decoding failures are folded into these three
/// variants before they reach the wizard session; nothing else crosses
/// the client boundary.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The network call itself could not complete (offline, DNS failure,
    /// connection reset, timeout). Not retried automatically.
    #[error("network error: {0}")]
    Transport(String),

    /// The service responded but signaled failure via status code.
    #[error("generation service returned status {status}")]
    Http { status: u16 },

    /// The response body was not parseable as JSON.
    #[error("invalid response from generation service: {0}")]
    Protocol(String),
}

/// Custom result type for calls into the generation service
pub type GenerationResult<T> = Result<T, GenerationError>;
