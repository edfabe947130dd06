/// Errors raised while configuring a mining run or querying its index.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An argument or configuration value was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// An item was not found in the posting index.
    #[error("item {0} is not present in the transaction index")]
    MissingKey(String),
}

pub type Result<T> = std::result::Result<T, Error>;
