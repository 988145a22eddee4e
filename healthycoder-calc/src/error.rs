#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("division by zero")]
    DivisionByZero,
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
