#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// A required argument (path, method, operation data) is missing.
    /// We ignore this for `From<String>` to avoid conflict with General.
    #[from(ignore)]
    #[display("Invalid input: {_0}")]
    InvalidInput(String),

    /// The specification yielded zero operations after transformation.
    #[display("No endpoints detected")]
    EmptyCatalog,

    /// A schema fragment could not be resolved within the nesting bound.
    #[from(ignore)]
    #[display("Cyclic schema: {_0}")]
    CyclicSchema(String),

    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Wrapper for document parse errors.
    #[display("Parse Error: {_0}")]
    Parse(serde_yaml::Error),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
