// Controller construction errors

/// Errors raised while building a controller
///
/// Stepping a built controller never fails; everything here is a
/// construction-time precondition.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ControllerError {
    #[error("Player controller requires a physics body")]
    MissingPhysics,

    #[error("Player controller requires an animator")]
    MissingAnimator,

    #[error("Invalid controller config: {0}")]
    InvalidConfig(String),
}
