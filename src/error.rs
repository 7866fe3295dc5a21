use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for favemoji operations
#[derive(Error, Diagnostic, Debug)]
pub enum FavemojiError {
    #[error("Unknown emoji \"{id}\"")]
    #[diagnostic(
        code(favemoji::emoji),
        help("Run with --list to browse the available aliases")
    )]
    UnknownEmoji { id: String },

    #[error("Render error: {message}")]
    #[diagnostic(code(favemoji::render))]
    Render { message: String },

    #[error("IO error with {}: {message}", .path.display())]
    #[diagnostic(code(favemoji::io))]
    Io { path: PathBuf, message: String },

    #[error("Encode error: {message}")]
    #[diagnostic(code(favemoji::encode))]
    Encode { message: String },

    #[error("Browser error: {message}")]
    #[diagnostic(code(favemoji::browser))]
    Browser { message: String },
}

pub type Result<T> = std::result::Result<T, FavemojiError>;
