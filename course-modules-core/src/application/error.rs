use crate::traits::HostError;

/// Errors that can occur while rendering the block
#[derive(Debug, thiserror::Error)]
pub enum BlockError {
    #[error("Host error: {0}")]
    Host(#[from] HostError),

    #[error("Rendering failed: {0}")]
    Render(#[from] askama::Error),

    #[error("Invalid creation time for module {id}: {added}")]
    InvalidTimestamp { id: u64, added: i64 },
}
