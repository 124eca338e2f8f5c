use crate::target::TargetError;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendBufferError {
    #[error("send buffer overflow: {requested} bytes requested, {available} available")]
    Overflow { requested: usize, available: usize },
}

/// Why a bot command did not produce a status line.
#[derive(thiserror::Error, Debug)]
pub enum ActionError {
    #[error("no current item")]
    NoActiveItem,
    #[error("missing argument")]
    MissingArgument,
    #[error("cannot parse locator {0:?}")]
    InvalidLocator(String),
    #[error(transparent)]
    Target(#[from] TargetError),
}
