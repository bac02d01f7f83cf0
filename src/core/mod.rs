//! Core file type resolution
//!
//! Foundational types for mapping file names to syntax styles and icons.
//! It follows a modular architecture for testability and extensibility.
//!
//! # Architecture
//!
//! - `style`: The closed SyntaxStyle enumeration and its string tokens
//! - `error`: Error types using thiserror
//! - `pattern`: Wildcard filter translation and cached compilation
//! - `filters`: Per-style filter lists with string persistence
//! - `resolver`: File name (and first line) to style resolution
//! - `icons`: Theme-aware file type icon cache

pub mod error;
pub mod filters;
pub mod icons;
pub mod pattern;
pub mod resolver;
pub mod style;

// Re-export commonly used types
pub use error::{FilterError, Result};
pub use filters::SyntaxFilterSet;
pub use icons::{FileIconCache, IconError, IconImage, IconLoader, ICON_SIZE};
pub use pattern::{
    filter_to_regex, is_valid_filter_string, CompiledFilter, FilterCompiler, PatternError,
    MAX_CACHED_FILTERS,
};
pub use resolver::{
    guess_from_first_line, strip_backup_extension, StyleResolver, BACKUP_EXTENSIONS,
};
pub use style::SyntaxStyle;
