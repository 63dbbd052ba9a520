#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("storage error: {0}")]
    Store(#[from] crate::io::store::StoreError),
    #[error("terminal i/o error: {0}")]
    Io(#[from] std::io::Error),
}
