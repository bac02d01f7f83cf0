//! File name to syntax style resolution
//!
//! Answers "which style highlights this file?" for a given file name and
//! [`SyntaxFilterSet`], with optional backup-extension stripping and a
//! content-sniffing fallback for extensionless scripts (`#!` lines) and XML
//! declarations.

use std::collections::BTreeMap;

use log::warn;

use crate::core::filters::SyntaxFilterSet;
use crate::core::pattern::FilterCompiler;
use crate::core::style::SyntaxStyle;

/// Backup suffixes hidden from matching when `ignore_backup_extensions` is
/// set, so `Foo.java.bak` still opens highlighted as Java.
pub const BACKUP_EXTENSIONS: &[&str] = &[".bak", ".old", ".orig"];

/// Strip at most one trailing backup suffix from a file name.
pub fn strip_backup_extension(file_name: &str) -> &str {
    for suffix in BACKUP_EXTENSIONS {
        if let Some(stripped) = file_name.strip_suffix(suffix) {
            return stripped;
        }
    }
    file_name
}

// =============================================================================
// Resolver
// =============================================================================

/// Resolves file names to syntax styles.
///
/// Owns a [`FilterCompiler`] so repeated resolutions against a stable filter
/// set reuse compiled patterns instead of recompiling them per lookup.
pub struct StyleResolver {
    compiler: FilterCompiler,
}

impl Default for StyleResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleResolver {
    /// Create a resolver whose pattern casing follows the host platform.
    pub fn new() -> Self {
        Self::with_compiler(FilterCompiler::new())
    }

    /// Create a resolver around an explicitly configured compiler.
    pub fn with_compiler(compiler: FilterCompiler) -> Self {
        Self { compiler }
    }

    /// Resolve a file name to its syntax style.
    ///
    /// The directory prefix is stripped, the base name is lowercased (file
    /// extensions are user-visible and compared case-insensitively on every
    /// platform), and when `ignore_backup_extensions` is set a trailing
    /// backup suffix is removed before matching. The primary map is searched
    /// first and the added map only when nothing in the primary map matched.
    ///
    /// Within a map, an exact filter match returns its style immediately;
    /// among wildcard-only matches the first matching style in map order
    /// wins, so the winner is stable no matter how the set was built up.
    ///
    /// Returns [`SyntaxStyle::None`] when no filter matches.
    pub fn resolve(
        &self,
        file_name: &str,
        ignore_backup_extensions: bool,
        filters: &SyntaxFilterSet,
    ) -> SyntaxStyle {
        let base = match file_name.rfind(['/', '\\']) {
            Some(sep) => &file_name[sep + 1..],
            None => file_name,
        };
        let lowered = base.to_lowercase();
        let name: &str = if ignore_backup_extensions {
            strip_backup_extension(&lowered)
        } else {
            &lowered
        };

        if let Some(style) = self.match_in_map(name, filters.primary_map()) {
            return style;
        }
        if let Some(style) = self.match_in_map(name, filters.added_map()) {
            return style;
        }
        SyntaxStyle::None
    }

    /// Resolve by file name, falling back to first-line sniffing only when
    /// the name resolved to nothing.
    pub fn resolve_with_contents(
        &self,
        file_name: &str,
        first_line: &str,
        ignore_backup_extensions: bool,
        filters: &SyntaxFilterSet,
    ) -> SyntaxStyle {
        let style = self.resolve(file_name, ignore_backup_extensions, filters);
        if style != SyntaxStyle::None {
            return style;
        }
        guess_from_first_line(first_line)
    }

    fn match_in_map(
        &self,
        file_name: &str,
        map: &BTreeMap<SyntaxStyle, Vec<String>>,
    ) -> Option<SyntaxStyle> {
        let mut wildcard_match = None;
        for (style, filters) in map {
            for filter in filters {
                if filter.is_empty() {
                    continue;
                }
                let compiled = match self.compiler.compile(filter) {
                    Ok(compiled) => compiled,
                    Err(e) => {
                        warn!("Skipping unusable file filter: {}", e);
                        continue;
                    }
                };
                if compiled.matches(file_name) {
                    if compiled.is_exact() {
                        return Some(*style);
                    }
                    if wildcard_match.is_none() {
                        wildcard_match = Some(*style);
                    }
                }
            }
        }
        wildcard_match
    }
}

// =============================================================================
// Content Sniffing
// =============================================================================

/// Interpreter name suffixes recognized in `#!` lines, checked in order.
static SHEBANG_STYLES: &[(&str, SyntaxStyle)] = &[
    ("sh", SyntaxStyle::UnixShell),
    ("perl", SyntaxStyle::Perl),
    ("php", SyntaxStyle::Php),
    ("python", SyntaxStyle::Python),
    ("lua", SyntaxStyle::Lua),
    ("ruby", SyntaxStyle::Ruby),
];

/// Guess a style from the first line of a file's contents.
///
/// A `#!` line is matched on the trailing characters of its interpreter, so
/// `#!/bin/bash`, `#!/usr/bin/env zsh` and plain `#!sh` all land on the Unix
/// shell style. A line that starts `<?xml` and ends `?>` is XML. Anything
/// else, including interpreters this table does not recognize, yields
/// [`SyntaxStyle::None`].
pub fn guess_from_first_line(first_line: &str) -> SyntaxStyle {
    if first_line.starts_with("#!") {
        let interpreter = shebang_interpreter(first_line);
        for (suffix, style) in SHEBANG_STYLES {
            if interpreter.ends_with(suffix) {
                return *style;
            }
        }
    } else if first_line.starts_with("<?xml") && first_line.ends_with("?>") {
        return SyntaxStyle::Xml;
    }
    SyntaxStyle::None
}

/// The interpreter portion of a `#!` line.
///
/// `#!/usr/bin/env prog ...` yields the token after `env`; otherwise the text
/// between `#!` and the first space. A line without any space is returned
/// whole, which still ends with the interpreter name.
fn shebang_interpreter(line: &str) -> &str {
    let space = match line[2..].find(' ') {
        Some(idx) => idx + 2,
        None => return line,
    };
    if line.starts_with("#!/usr/bin/env") {
        let rest = &line[space + 1..];
        match rest.find(' ') {
            Some(next) => &rest[..next],
            None => rest,
        }
    } else {
        &line[2..space]
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn case_sensitive_resolver() -> StyleResolver {
        StyleResolver::with_compiler(FilterCompiler::with_case_insensitive(false))
    }

    // ============================================================
    // Backup extensions
    // ============================================================

    #[test]
    fn test_strip_backup_extension() {
        assert_eq!(strip_backup_extension("foo.java.bak"), "foo.java");
        assert_eq!(strip_backup_extension("foo.java.old"), "foo.java");
        assert_eq!(strip_backup_extension("foo.java.orig"), "foo.java");
        assert_eq!(strip_backup_extension("foo.java"), "foo.java");
    }

    #[test]
    fn test_strip_backup_extension_removes_one_suffix_only() {
        assert_eq!(strip_backup_extension("foo.java.bak.old"), "foo.java.bak");
    }

    // ============================================================
    // Resolution
    // ============================================================

    #[test]
    fn test_resolve_by_extension() {
        let resolver = case_sensitive_resolver();
        let filters = SyntaxFilterSet::new();

        assert_eq!(
            resolver.resolve("Foo.java", false, &filters),
            SyntaxStyle::Java
        );
        assert_eq!(
            resolver.resolve("app.py", false, &filters),
            SyntaxStyle::Python
        );
        assert_eq!(
            resolver.resolve("notes.txt", false, &filters),
            SyntaxStyle::None
        );
    }

    #[test]
    fn test_resolve_lowercases_base_name() {
        let resolver = case_sensitive_resolver();
        let filters = SyntaxFilterSet::new();
        assert_eq!(
            resolver.resolve("FOO.JAVA", false, &filters),
            SyntaxStyle::Java
        );
    }

    #[test]
    fn test_resolve_strips_directory_prefix() {
        let resolver = case_sensitive_resolver();
        let filters = SyntaxFilterSet::new();

        assert_eq!(
            resolver.resolve("/deep/path/app.py", false, &filters),
            SyntaxStyle::Python
        );
        assert_eq!(
            resolver.resolve("C:\\src\\Foo.java", false, &filters),
            SyntaxStyle::Java
        );
        // A name that is all directory yields nothing to match.
        assert_eq!(resolver.resolve("src/", false, &filters), SyntaxStyle::None);
    }

    #[test]
    fn test_resolve_empty_name() {
        let resolver = case_sensitive_resolver();
        let filters = SyntaxFilterSet::new();
        assert_eq!(resolver.resolve("", false, &filters), SyntaxStyle::None);
    }

    #[test]
    fn test_resolve_backup_extension_flag() {
        let resolver = case_sensitive_resolver();
        let filters = SyntaxFilterSet::new();

        assert_eq!(
            resolver.resolve("Foo.java.bak", true, &filters),
            SyntaxStyle::Java
        );
        assert_eq!(
            resolver.resolve("Foo.java.bak", false, &filters),
            SyntaxStyle::None
        );
        // The suffix comparison happens after lowercasing.
        assert_eq!(
            resolver.resolve("Foo.java.BAK", true, &filters),
            SyntaxStyle::Java
        );
    }

    #[test]
    fn test_exact_filter_beats_wildcard() {
        let resolver = case_sensitive_resolver();

        // Wildcard registered under an earlier style than the exact filter.
        let mut filters = SyntaxFilterSet::new();
        filters.add_filter(SyntaxStyle::C, "hosts*");
        assert_eq!(
            resolver.resolve("hosts", false, &filters),
            SyntaxStyle::Hosts
        );

        // Exact filter registered under an earlier style than the wildcard.
        let mut filters = SyntaxFilterSet::new();
        filters.add_filter(SyntaxStyle::Yaml, "make*");
        assert_eq!(
            resolver.resolve("makefile", false, &filters),
            SyntaxStyle::Makefile
        );
    }

    #[test]
    fn test_wildcard_tie_goes_to_first_style_in_order() {
        let resolver = case_sensitive_resolver();
        let mut filters = SyntaxFilterSet::new();
        filters.add_filter(SyntaxStyle::C, "*.zz");
        filters.add_filter(SyntaxStyle::D, "*.zz");

        assert_eq!(resolver.resolve("file.zz", false, &filters), SyntaxStyle::C);
    }

    #[test]
    fn test_added_map_consulted_after_primary() {
        let resolver = case_sensitive_resolver();
        let mut filters = SyntaxFilterSet::new();
        filters.add_filter(SyntaxStyle::Clojure, "*.clj");

        assert_eq!(
            resolver.resolve("core.clj", false, &filters),
            SyntaxStyle::Clojure
        );

        // A primary-map match shadows any added-map match.
        filters.add_filter(SyntaxStyle::Markdown, "*.java");
        assert_eq!(
            resolver.resolve("Foo.java", false, &filters),
            SyntaxStyle::Java
        );
    }

    #[test]
    fn test_resolution_reflects_current_filters() {
        let resolver = case_sensitive_resolver();
        let mut filters = SyntaxFilterSet::new();

        assert_eq!(
            resolver.resolve("query.zz", false, &filters),
            SyntaxStyle::None
        );
        filters.add_filter(SyntaxStyle::Sql, "*.zz");
        assert_eq!(
            resolver.resolve("query.zz", false, &filters),
            SyntaxStyle::Sql
        );
    }

    #[test]
    fn test_empty_filter_is_skipped() {
        let resolver = case_sensitive_resolver();
        let mut filters = SyntaxFilterSet::new();
        filters.add_filter(SyntaxStyle::C, "");

        assert_eq!(resolver.resolve("", false, &filters), SyntaxStyle::None);
    }

    // ============================================================
    // Content sniffing
    // ============================================================

    #[test]
    fn test_guess_shebang_interpreters() {
        assert_eq!(guess_from_first_line("#!/bin/sh"), SyntaxStyle::UnixShell);
        assert_eq!(guess_from_first_line("#!/bin/bash"), SyntaxStyle::UnixShell);
        assert_eq!(guess_from_first_line("#!/usr/bin/perl"), SyntaxStyle::Perl);
        assert_eq!(guess_from_first_line("#!/usr/bin/php"), SyntaxStyle::Php);
        assert_eq!(
            guess_from_first_line("#!/usr/bin/python"),
            SyntaxStyle::Python
        );
        assert_eq!(guess_from_first_line("#!/usr/bin/lua"), SyntaxStyle::Lua);
        assert_eq!(guess_from_first_line("#!/usr/bin/ruby"), SyntaxStyle::Ruby);
    }

    #[test]
    fn test_guess_shebang_with_arguments() {
        assert_eq!(
            guess_from_first_line("#!/bin/bash -e"),
            SyntaxStyle::UnixShell
        );
        assert_eq!(
            guess_from_first_line("#!/usr/bin/perl -w"),
            SyntaxStyle::Perl
        );
    }

    #[test]
    fn test_guess_shebang_env_form() {
        assert_eq!(
            guess_from_first_line("#!/usr/bin/env python"),
            SyntaxStyle::Python
        );
        assert_eq!(
            guess_from_first_line("#!/usr/bin/env zsh"),
            SyntaxStyle::UnixShell
        );
        assert_eq!(
            guess_from_first_line("#!/usr/bin/env ruby -w"),
            SyntaxStyle::Ruby
        );
    }

    #[test]
    fn test_guess_versioned_interpreter_is_not_recognized() {
        // "python3" does not end with "python"; the suffix table is literal.
        assert_eq!(
            guess_from_first_line("#!/usr/bin/env python3"),
            SyntaxStyle::None
        );
    }

    #[test]
    fn test_guess_xml_declaration() {
        assert_eq!(
            guess_from_first_line("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"),
            SyntaxStyle::Xml
        );
        assert_eq!(guess_from_first_line("<?xml version=\"1.0\""), SyntaxStyle::None);
    }

    #[test]
    fn test_guess_plain_text() {
        assert_eq!(guess_from_first_line(""), SyntaxStyle::None);
        assert_eq!(guess_from_first_line("hello world"), SyntaxStyle::None);
        assert_eq!(guess_from_first_line("# a comment"), SyntaxStyle::None);
    }

    #[test]
    fn test_resolve_with_contents_prefers_file_name() {
        let resolver = case_sensitive_resolver();
        let filters = SyntaxFilterSet::new();

        // The extension wins even when the first line says otherwise.
        assert_eq!(
            resolver.resolve_with_contents("run.py", "#!/bin/sh", false, &filters),
            SyntaxStyle::Python
        );
        // Sniffing kicks in only for unrecognized names.
        assert_eq!(
            resolver.resolve_with_contents("run", "#!/bin/sh", false, &filters),
            SyntaxStyle::UnixShell
        );
        assert_eq!(
            resolver.resolve_with_contents("run", "plain text", false, &filters),
            SyntaxStyle::None
        );
    }
}
