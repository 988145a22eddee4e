#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("failed to read table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid row {content:?} at line {line}: {reason}")]
    InvalidRow {
        line: usize,
        content: String,
        reason: String,
    },
    #[error("calculation failed: {0}")]
    Calc(#[from] healthycoder_calc::Error),
}
