//! Wildcard filter compilation
//!
//! Converts wildcard file filters (`*.java`, `Makefile`, `*.?sh`) into
//! anchored regular expressions and caches the compiled form, so that
//! resolving many file names against the same filter set does not recompile
//! patterns on every check.
//!
//! # Design Goals
//!
//! 1. **Whole-name matching**: translated patterns are anchored at both ends
//! 2. **Performance**: lazy compilation with caching for repeated filters
//! 3. **Safety**: compilation failures are reported with the offending filter
//! 4. **Thread-Safe**: the compiler is Send + Sync behind an RwLock cache

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use regex::{Regex, RegexBuilder};

/// Upper bound on cached compiled filters. Filter sets are small; the bound
/// only matters when callers compile arbitrary user-typed strings.
pub const MAX_CACHED_FILTERS: usize = 512;

// =============================================================================
// Error Types
// =============================================================================

/// Error raised when a wildcard filter cannot be compiled.
#[derive(Debug, Clone)]
pub struct PatternError {
    /// The wildcard filter as the user wrote it
    pub filter: String,
    /// The regular expression derived from the filter
    pub pattern: String,
    /// Human-readable error description
    pub message: String,
}

impl PatternError {
    pub fn new(
        filter: impl Into<String>,
        pattern: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            filter: filter.into(),
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cannot compile filter '{}' (expression '{}'): {}",
            self.filter, self.pattern, self.message
        )
    }
}

impl std::error::Error for PatternError {}

// =============================================================================
// Core Types
// =============================================================================

/// A compiled wildcard filter.
///
/// Wraps the derived `regex::Regex` in an Arc so cache hits are cheap clones.
/// A filter containing neither `*` nor `?` is "exact" and wins outright over
/// wildcard matches during resolution.
#[derive(Clone)]
pub struct CompiledFilter {
    inner: Arc<Regex>,
    filter: String,
    exact: bool,
}

impl CompiledFilter {
    /// The original wildcard filter string.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// The anchored regular expression the filter compiled to.
    pub fn pattern(&self) -> &str {
        self.inner.as_str()
    }

    /// Whether the filter contains no wildcard characters.
    pub fn is_exact(&self) -> bool {
        self.exact
    }

    /// Check whether the whole file name matches this filter.
    pub fn matches(&self, file_name: &str) -> bool {
        self.inner.is_match(file_name)
    }
}

impl std::fmt::Debug for CompiledFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledFilter")
            .field("filter", &self.filter)
            .field("exact", &self.exact)
            .finish()
    }
}

// =============================================================================
// Translation
// =============================================================================

/// Translate a wildcard filter into an anchored regular expression.
///
/// `*` becomes "any sequence", `?` becomes "any single character", and every
/// other regex metacharacter is escaped so it matches itself as a literal
/// file name character.
pub fn filter_to_regex(filter: &str) -> String {
    let mut pattern = String::with_capacity(filter.len() + 8);
    pattern.push('^');
    for ch in filter.chars() {
        match ch {
            '.' => pattern.push_str("\\."),
            '*' => pattern.push_str(".*"),
            '?' => pattern.push('.'),
            '\\' | '+' | '(' | ')' | '[' | ']' | '{' | '}' | '|' | '^' | '$' => {
                pattern.push('\\');
                pattern.push(ch);
            }
            _ => pattern.push(ch),
        }
    }
    pattern.push('$');
    pattern
}

/// Whether a filter string contains only characters allowed in wildcard file
/// filters: letters, digits, `*`, `?`, `.`, `-`, `_`, `$` and space.
///
/// Filter-editing UIs use this to reject input before it ever reaches the
/// compiler.
pub fn is_valid_filter_string(filter: &str) -> bool {
    filter
        .chars()
        .all(|c| matches!(c, '*' | '?' | '.' | '-' | '_' | '$' | ' ') || c.is_alphanumeric())
}

fn contains_wildcard(filter: &str) -> bool {
    filter.contains(['*', '?'])
}

/// Casing rule of the host platform's file system.
fn platform_case_insensitive() -> bool {
    cfg!(any(target_os = "windows", target_os = "macos"))
}

// =============================================================================
// Filter Compiler
// =============================================================================

/// Thread-safe wildcard filter compiler with a compilation cache.
///
/// Repeated compilation of the same filter string is a cache hit returning a
/// clone of the previously compiled filter.
pub struct FilterCompiler {
    cache: RwLock<BTreeMap<String, CompiledFilter>>,
    case_insensitive: bool,
}

impl Default for FilterCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterCompiler {
    /// Create a compiler with the host platform's casing rule: filters
    /// compile case-insensitively (with Unicode case folding) on Windows and
    /// macOS, case-sensitively elsewhere.
    pub fn new() -> Self {
        Self::with_case_insensitive(platform_case_insensitive())
    }

    /// Create a compiler with an explicit casing rule.
    pub fn with_case_insensitive(case_insensitive: bool) -> Self {
        Self {
            cache: RwLock::new(BTreeMap::new()),
            case_insensitive,
        }
    }

    /// Whether this compiler folds case when matching.
    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Compile a wildcard filter.
    ///
    /// The restricted wildcard alphabet makes failure practically
    /// unreachable, but a failure still surfaces as an error carrying the
    /// offending filter so UIs can report it.
    pub fn compile(&self, filter: &str) -> Result<CompiledFilter, PatternError> {
        // Check cache first (read lock)
        {
            let cache = self.cache.read().unwrap();
            if let Some(compiled) = cache.get(filter) {
                return Ok(compiled.clone());
            }
        }

        let pattern = filter_to_regex(filter);
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(self.case_insensitive)
            .build()
            .map_err(|e| PatternError::new(filter, &pattern, e.to_string()))?;

        let compiled = CompiledFilter {
            inner: Arc::new(regex),
            filter: filter.to_string(),
            exact: !contains_wildcard(filter),
        };

        // Insert into cache (write lock)
        {
            let mut cache = self.cache.write().unwrap();

            // Evict if at capacity
            if cache.len() >= MAX_CACHED_FILTERS {
                if let Some(key) = cache.keys().next().cloned() {
                    cache.remove(&key);
                }
            }

            cache.insert(filter.to_string(), compiled.clone());
        }

        Ok(compiled)
    }

    /// Clear the compilation cache.
    pub fn clear_cache(&self) {
        let mut cache = self.cache.write().unwrap();
        cache.clear();
    }

    /// Get current cache size.
    pub fn cache_size(&self) -> usize {
        let cache = self.cache.read().unwrap();
        cache.len()
    }
}

// =============================================================================
// Tests
// =============================================================================
