#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown drag behaviour: {value} (expected \"move\" or \"copy\")")]
    UnknownBehaviour { value: String },

    #[error("unknown orientation: {value} (expected \"vertical\" or \"horizontal\")")]
    UnknownOrientation { value: String },

    #[error("group name must not be empty")]
    EmptyGroupName,

    #[error("accepted group at position {index} is empty")]
    EmptyAcceptedGroup { index: usize },

    #[error("invalid container options: {0}")]
    Options(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
