use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("'{}' does not exist", .path.display())]
    BookNotFound { path: std::path::PathBuf },

    #[error("'{}' must be a path to a .txt file", .path.display())]
    NotPlainText { path: std::path::PathBuf },

    #[error("Failed to read file '{}': {source}", .path.display())]
    FileRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
