//! Plan pipeline error types.

use thiserror::Error;

use crate::renderer::RendererError;

/// Errors surfaced by the plan rendering pipeline.
///
/// None of these are retried internally; a failure while processing any
/// request aborts the whole batch and is reported to the caller, who decides
/// whether to retry with adjusted parameters.
#[derive(Error, Debug)]
pub enum PlanError {
    /// A rendering prerequisite is missing; nothing was processed.
    #[error("render prerequisite missing: {0}")]
    Configuration(String),
    /// The projected content has (near-)zero extent and cannot be framed.
    #[error("degenerate bounds: projected extent {width} x {height} cannot be framed")]
    DegenerateBounds { width: f32, height: f32 },
    /// A cyclic modifier was configured with a period of zero.
    #[error("cyclic modifier requires a period of at least 1")]
    InvalidModifierConfiguration,
    /// The scene renderer collaborator failed.
    #[error(transparent)]
    Renderer(#[from] RendererError),
}

pub type PlanResult<T> = Result<T, PlanError>;
