//! syntax_filters - File type resolution for a programmer's editor
//!
//! This library decides which syntax highlighting style a file gets, from
//! its name and optionally its first line, using per-style wildcard filter
//! lists that users edit and plugins extend. It is designed to be consumed
//! by:
//! - The editor shell (tab icons, highlighter selection on open)
//! - Settings UIs (filter strings, validation, bulk edits)
//! - Language plugins (registering filters and icons for new styles)
//!
//! # Architecture
//!
//! - **core/style**: the closed [`SyntaxStyle`] enumeration
//! - **core/pattern**: wildcard to regex translation with cached compilation
//! - **core/filters**: the two-tier [`SyntaxFilterSet`] and its string form
//! - **core/resolver**: [`StyleResolver`] plus first-line content sniffing
//! - **core/icons**: [`FileIconCache`] over an injected [`IconLoader`]
//! - **prefs**: the persisted [`EditorPrefs`] slice tying it together
//!
//! # Example
//!
//! ```
//! use syntax_filters::{StyleResolver, SyntaxFilterSet, SyntaxStyle};
//!
//! let filters = SyntaxFilterSet::new();
//! let resolver = StyleResolver::new();
//! assert_eq!(
//!     resolver.resolve("src/Main.java", true, &filters),
//!     SyntaxStyle::Java
//! );
//! ```

pub mod core;
pub mod prefs;

pub use crate::core::{
    guess_from_first_line, is_valid_filter_string, strip_backup_extension, CompiledFilter,
    FileIconCache, FilterCompiler, FilterError, IconError, IconImage, IconLoader, PatternError,
    Result, StyleResolver, SyntaxFilterSet, SyntaxStyle, ICON_SIZE,
};
pub use crate::prefs::EditorPrefs;
