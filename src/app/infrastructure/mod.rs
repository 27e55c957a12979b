//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains the error types shared by every layer.

pub mod error;
