//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, DisplayFont, Settings, Messages)
//! - `controllers/` - Orchestration (EditorController)
//! - `services/` - Business operations (file I/O, file picker capability, text helpers)
//! - `infrastructure/` - Error types
//! - `state.rs` - Main application coordinator bound to the FLTK widgets

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::editor::{EditorController, Outcome};
pub use domain::{
    AppSettings, DecodePolicy, DisplayFont, Document, DocumentEvent, FontFamily, Message,
};
pub use infrastructure::error::{AppError, LoadError};
pub use services::file_picker::FilePicker;
