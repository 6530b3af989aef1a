//! The module contains the errors the engine can return.
//!
//! The settlement core itself never fails: these errors come from the
//! supporting types that turn user input into participants.
//!
//! - [`InvalidName`] a participant name is empty after trimming.
//! - [`InvalidAmount`] a contribution cannot be parsed or is negative.
//! - [`KeyNotFound`] a participant id is not in the roster.
//!
//!  [`InvalidName`]: EngineError::InvalidName
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`KeyNotFound`]: EngineError::KeyNotFound
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
}
