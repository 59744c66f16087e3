use thiserror::Error;

/// Rejected tool selections. The tool state is left untouched when one of
/// these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("Thickness {0} is outside 1..={max}", max = crate::tool_state::MAX_THICKNESS)]
    ThicknessOutOfRange(u32),

    #[error("Unknown colour name: {0:?}")]
    UnknownColour(String),

    #[error("No menu entry with id {0}")]
    UnknownMenuId(u32),
}

/// Errors raised while exchanging stroke data with an outside collaborator
#[derive(Error, Debug)]
pub enum InterchangeError {
    #[error("Malformed stroke data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid stroke record: {0}")]
    Tool(#[from] ToolError),
}

/// Failure reported by a tool listener. Logged, never propagated.
#[derive(Error, Debug)]
#[error("Listener failed: {0}")]
pub struct ListenerError(pub String);
