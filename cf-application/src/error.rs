use crate::api::ApiError;
use crate::requirement::{RequirementError, ResourceKind};

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum CommandError {
    #[error("Incorrect Usage for {command}")]
    Usage { command: &'static str },

    #[error(transparent)]
    Requirement(#[from] RequirementError),

    #[error("{message}")]
    BindingFailed { message: String },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("{kind} was not resolved before the command ran")]
    Unresolved { kind: ResourceKind },

    #[error("'{0}' is not a registered command. See 'cf help'")]
    CommandNotFound(String),

    #[error("command already registered: {0}")]
    AlreadyRegistered(&'static str),
}
