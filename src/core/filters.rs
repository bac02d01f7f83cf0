//! Style to file filter associations
//!
//! A [`SyntaxFilterSet`] maps each syntax style to the wildcard filters that
//! claim its files, and round-trips through the single-string form persisted
//! in the preferences store (`style:filter1 filter2 ,style:...`).
//!
//! Two maps exist side by side: the primary map holds the user-editable,
//! serialized associations; the added map holds filters registered at
//! runtime by plugins for styles the primary map does not cover. The added
//! map is never serialized and survives both `restore_defaults` and bulk
//! replacement of the primary map.

use std::collections::BTreeMap;
use std::fmt;

use lazy_static::lazy_static;
use log::warn;

use crate::core::error::{FilterError, Result};
use crate::core::style::SyntaxStyle;

lazy_static! {
    /// Built-in defaults: one entry per shipped style. Styles added to the
    /// editor after this table was fixed (and plugin languages) have no
    /// entry and acquire filters through `add_filter`.
    static ref DEFAULT_FILTERS: BTreeMap<SyntaxStyle, Vec<String>> = {
        let mut m = BTreeMap::new();
        let mut put = |style: SyntaxStyle, filters: &[&str]| {
            m.insert(style, filters.iter().map(|f| f.to_string()).collect());
        };
        put(SyntaxStyle::C, &["*.c"]);
        put(SyntaxStyle::Cplusplus, &["*.cpp", "*.cxx", "*.h", "*.hpp"]);
        put(SyntaxStyle::Csharp, &["*.cs"]);
        put(SyntaxStyle::Css, &["*.css"]);
        put(SyntaxStyle::Csv, &["*.csv"]);
        put(SyntaxStyle::D, &["*.d"]);
        put(SyntaxStyle::Dart, &["*.dart"]);
        put(SyntaxStyle::Delphi, &["*.pas"]);
        put(SyntaxStyle::Dtd, &["*.dtd"]);
        put(SyntaxStyle::Fortran, &["*.f", "*.for", "*.fort", "*.f77", "*.f90"]);
        put(SyntaxStyle::Go, &["*.go"]);
        put(SyntaxStyle::Groovy, &["*.groovy", "*.grv"]);
        put(SyntaxStyle::Hosts, &["hosts"]);
        put(SyntaxStyle::Htaccess, &[".htaccess"]);
        put(SyntaxStyle::Html, &["*.htm", "*.html"]);
        put(SyntaxStyle::Ini, &["*.ini", ".editorconfig"]);
        put(SyntaxStyle::Java, &["*.java"]);
        put(SyntaxStyle::JavaScript, &["*.js", "*.jsx", "*.mjs"]);
        put(SyntaxStyle::Json, &["*.json"]);
        put(SyntaxStyle::JsonWithComments, &["*.jsonc", ".jshintrc"]);
        put(SyntaxStyle::Jsp, &["*.jsp"]);
        put(SyntaxStyle::Kotlin, &["*.kt", "*.kts"]);
        put(SyntaxStyle::Latex, &["*.tex", "*.ltx", "*.latex"]);
        put(SyntaxStyle::Less, &["*.less"]);
        put(SyntaxStyle::Lisp, &["*.cl", "*.clisp", "*.el", "*.l", "*.lisp", "*.lsp", "*.ml"]);
        put(SyntaxStyle::Lua, &["*.lua"]);
        put(SyntaxStyle::Makefile, &["Makefile", "makefile", "GNUmakefile"]);
        put(SyntaxStyle::Mxml, &["*.mxml"]);
        put(SyntaxStyle::Nsis, &["*.nsi"]);
        put(SyntaxStyle::Perl, &["*.perl", "*.pl", "*.pm"]);
        put(SyntaxStyle::Php, &["*.php"]);
        put(SyntaxStyle::Properties, &["*.properties"]);
        put(SyntaxStyle::Python, &["*.py"]);
        put(SyntaxStyle::Ruby, &["*.rb", "Vagrantfile"]);
        put(SyntaxStyle::Sas, &["*.sas"]);
        put(SyntaxStyle::Scala, &["*.scala"]);
        put(SyntaxStyle::Sql, &["*.sql"]);
        put(SyntaxStyle::Tcl, &["*.tcl", "*.tk"]);
        put(SyntaxStyle::TypeScript, &["*.ts", "*.tsx"]);
        put(SyntaxStyle::UnixShell, &["*.sh", "*.?sh"]);
        put(SyntaxStyle::VisualBasic, &["*.vb"]);
        put(SyntaxStyle::WindowsBatch, &["*.bat", "*.cmd"]);
        put(SyntaxStyle::Xml, &["*.xml", "*.xsl", "*.xsd", "*.wsdl", "*.macro", "*.manifest"]);
        put(SyntaxStyle::Yaml, &["*.yml", "*.yaml"]);
        m
    };
}

/// Wildcard file filters per syntax style, with string persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxFilterSet {
    /// User-editable associations, persisted via `to_string`.
    filters: BTreeMap<SyntaxStyle, Vec<String>>,
    /// Filters added by plugins for styles the primary map does not cover.
    added_filters: BTreeMap<SyntaxStyle, Vec<String>>,
}

impl Default for SyntaxFilterSet {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxFilterSet {
    /// Create a filter set with the built-in default associations.
    pub fn new() -> Self {
        Self {
            filters: DEFAULT_FILTERS.clone(),
            added_filters: BTreeMap::new(),
        }
    }

    /// Parse a filter set from its serialized form.
    ///
    /// Groups are applied on top of the defaults, so styles a saved string
    /// does not mention keep their default filters. Any malformed group
    /// (missing `:` separator, unknown style token) abandons the partial
    /// result and yields pristine defaults; a saved string from a different
    /// version must never prevent startup.
    pub fn from_string(serialized: &str) -> Self {
        let mut set = Self::new();
        if let Err(e) = set.apply_serialized(serialized) {
            warn!("Invalid saved filter string, using default syntax filters: {}", e);
            return Self::new();
        }
        set
    }

    fn apply_serialized(&mut self, serialized: &str) -> Result<()> {
        for group in serialized.split(',') {
            let (token, filter_string) = group
                .split_once(':')
                .ok_or_else(|| FilterError::malformed_group(group))?;
            self.set_filters_for_style_token(token, filter_string)?;
        }
        Ok(())
    }

    /// The filters for a style: the primary map's list if present, else the
    /// added map's, else empty. Pure read; never creates entries.
    pub fn filters_for(&self, style: SyntaxStyle) -> &[String] {
        if let Some(list) = self.filters.get(&style) {
            return list;
        }
        self.added_filters
            .get(&style)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    /// Append a filter for a style.
    ///
    /// Styles present in the primary map grow their primary list; all other
    /// styles grow an added-map list created on demand.
    pub fn add_filter(&mut self, style: SyntaxStyle, filter: impl Into<String>) {
        let filter = filter.into();
        match self.filters.get_mut(&style) {
            Some(list) => list.push(filter),
            None => self.added_filters.entry(style).or_default().push(filter),
        }
    }

    /// Replace all filters for a style with the whitespace-separated tokens
    /// of `filter_string`.
    pub fn set_filters_for_style(&mut self, style: SyntaxStyle, filter_string: &str) {
        let tokens: Vec<String> = filter_string
            .split_whitespace()
            .map(str::to_string)
            .collect();
        match self.filters.get_mut(&style) {
            Some(list) => *list = tokens,
            None => {
                self.added_filters.insert(style, tokens);
            }
        }
    }

    /// String-typed variant of [`set_filters_for_style`] for callers holding
    /// persisted tokens. An unknown token is a contract violation by the
    /// caller and propagates as an error.
    ///
    /// [`set_filters_for_style`]: Self::set_filters_for_style
    pub fn set_filters_for_style_token(&mut self, token: &str, filter_string: &str) -> Result<()> {
        let style: SyntaxStyle = token.parse()?;
        self.set_filters_for_style(style, filter_string);
        Ok(())
    }

    /// All filters for a style joined with a single trailing space after
    /// each, e.g. `"*.cpp *.cxx *.h "`. This is the display form used by
    /// settings UIs and the per-group payload of the serialized form.
    pub fn filter_string_for(&self, style: SyntaxStyle) -> String {
        let mut filter_string = String::new();
        for filter in self.filters_for(style) {
            filter_string.push_str(filter);
            filter_string.push(' ');
        }
        filter_string
    }

    /// Reset the primary map to the built-in defaults.
    pub fn restore_defaults(&mut self) {
        self.filters = DEFAULT_FILTERS.clone();
        // Filters added by plugins are kept
    }

    /// Replace the primary map with a copy of `other`'s, keeping this set's
    /// added filters. Applies a bulk edit from a settings UI without losing
    /// plugin registrations.
    pub fn replace_preserving_added(&mut self, other: &SyntaxFilterSet) {
        self.filters = other.filters.clone();
    }

    /// Styles present in the primary map, in resolution order.
    pub fn primary_styles(&self) -> impl Iterator<Item = SyntaxStyle> + '_ {
        self.filters.keys().copied()
    }

    pub(crate) fn primary_map(&self) -> &BTreeMap<SyntaxStyle, Vec<String>> {
        &self.filters
    }

    pub(crate) fn added_map(&self) -> &BTreeMap<SyntaxStyle, Vec<String>> {
        &self.added_filters
    }
}

/// The serialized form: comma-separated `style:filter1 filter2 ` groups over
/// the primary map only, final comma trimmed. Byte-compatible with strings
/// persisted by earlier versions.
impl fmt::Display for SyntaxFilterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups: Vec<String> = self
            .filters
            .keys()
            .map(|style| format!("{}:{}", style, self.filter_string_for(*style)))
            .collect();
        f.write_str(&groups.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================
    // Defaults
    // ============================================================

    #[test]
    fn test_defaults_cover_common_styles() {
        let set = SyntaxFilterSet::new();
        assert_eq!(set.filters_for(SyntaxStyle::Java), ["*.java"]);
        assert_eq!(
            set.filters_for(SyntaxStyle::Cplusplus),
            ["*.cpp", "*.cxx", "*.h", "*.hpp"]
        );
        assert_eq!(
            set.filters_for(SyntaxStyle::Makefile),
            ["Makefile", "makefile", "GNUmakefile"]
        );
        assert_eq!(set.filters_for(SyntaxStyle::Hosts), ["hosts"]);
        assert_eq!(set.filters_for(SyntaxStyle::Htaccess), [".htaccess"]);
        assert_eq!(set.filters_for(SyntaxStyle::Ruby), ["*.rb", "Vagrantfile"]);
        assert_eq!(
            set.filters_for(SyntaxStyle::Ini),
            ["*.ini", ".editorconfig"]
        );
    }

    #[test]
    fn test_unmapped_style_has_no_filters() {
        let set = SyntaxFilterSet::new();
        assert!(set.filters_for(SyntaxStyle::Clojure).is_empty());
        assert!(set.filters_for(SyntaxStyle::Markdown).is_empty());
        assert!(set.filters_for(SyntaxStyle::None).is_empty());
    }

    #[test]
    fn test_defaults_never_map_the_reserved_style() {
        let set = SyntaxFilterSet::new();
        assert!(set.primary_styles().all(|s| s != SyntaxStyle::None));
    }

    // ============================================================
    // Mutation
    // ============================================================

    #[test]
    fn test_add_filter_to_primary_style() {
        let mut set = SyntaxFilterSet::new();
        set.add_filter(SyntaxStyle::Java, "*.j2");
        assert_eq!(set.filters_for(SyntaxStyle::Java), ["*.java", "*.j2"]);
    }

    #[test]
    fn test_add_filter_for_plugin_style_goes_to_added_map() {
        let mut set = SyntaxFilterSet::new();
        set.add_filter(SyntaxStyle::Clojure, "*.clj");
        set.add_filter(SyntaxStyle::Clojure, "*.cljs");

        assert_eq!(set.filters_for(SyntaxStyle::Clojure), ["*.clj", "*.cljs"]);
        // Added filters stay out of the primary map and the serialized form.
        assert!(set.primary_styles().all(|s| s != SyntaxStyle::Clojure));
        assert!(!set.to_string().contains("clojure"));
    }

    #[test]
    fn test_set_filters_replaces_existing_list() {
        let mut set = SyntaxFilterSet::new();
        set.set_filters_for_style(SyntaxStyle::Lua, "*.lua *.luau");
        assert_eq!(set.filters_for(SyntaxStyle::Lua), ["*.lua", "*.luau"]);

        set.set_filters_for_style(SyntaxStyle::Lua, "");
        assert!(set.filters_for(SyntaxStyle::Lua).is_empty());
    }

    #[test]
    fn test_set_filters_keeps_single_character_tokens() {
        let mut set = SyntaxFilterSet::new();
        set.set_filters_for_style(SyntaxStyle::C, "h *.c");
        assert_eq!(set.filters_for(SyntaxStyle::C), ["h", "*.c"]);
    }

    #[test]
    fn test_set_filters_collapses_repeated_spaces() {
        let mut set = SyntaxFilterSet::new();
        set.set_filters_for_style(SyntaxStyle::C, "  *.c   *.i  ");
        assert_eq!(set.filters_for(SyntaxStyle::C), ["*.c", "*.i"]);
    }

    #[test]
    fn test_set_filters_by_unknown_token_is_an_error() {
        let mut set = SyntaxFilterSet::new();
        let result = set.set_filters_for_style_token("text/x-bogus", "*.zzz");
        assert!(matches!(
            result,
            Err(FilterError::UnknownStyle { .. })
        ));
    }

    #[test]
    fn test_filter_string_for_has_trailing_spaces() {
        let set = SyntaxFilterSet::new();
        assert_eq!(
            set.filter_string_for(SyntaxStyle::Cplusplus),
            "*.cpp *.cxx *.h *.hpp "
        );
        assert_eq!(set.filter_string_for(SyntaxStyle::Clojure), "");
    }

    // ============================================================
    // Serialization
    // ============================================================

    #[test]
    fn test_serialized_shape() {
        let serialized = SyntaxFilterSet::new().to_string();
        assert!(serialized.starts_with("c:*.c ,"));
        assert!(serialized.contains(",makefile:Makefile makefile GNUmakefile ,"));
        assert!(serialized.ends_with("yaml:*.yml *.yaml "));
        assert!(!serialized.ends_with(','));
    }

    #[test]
    fn test_round_trip_preserves_filter_strings() {
        let mut set = SyntaxFilterSet::new();
        set.add_filter(SyntaxStyle::Java, "*.j2");
        set.set_filters_for_style(SyntaxStyle::Lua, "*.lua *.luau");
        set.set_filters_for_style(SyntaxStyle::Sql, "");

        let restored = SyntaxFilterSet::from_string(&set.to_string());
        for style in set.primary_styles() {
            assert_eq!(
                restored.filter_string_for(style),
                set.filter_string_for(style),
                "filter string mismatch for {}",
                style
            );
        }
        assert_eq!(restored.to_string(), set.to_string());
    }

    #[test]
    fn test_deserialize_applies_groups_on_top_of_defaults() {
        let set = SyntaxFilterSet::from_string("java:*.jav ");
        assert_eq!(set.filters_for(SyntaxStyle::Java), ["*.jav"]);
        // Styles the string does not mention keep their defaults.
        assert_eq!(set.filters_for(SyntaxStyle::Python), ["*.py"]);
    }

    #[test]
    fn test_deserialize_malformed_group_restores_defaults() {
        let set = SyntaxFilterSet::from_string("java:*.foo ,this-has-no-colon");
        assert_eq!(set, SyntaxFilterSet::new());
    }

    #[test]
    fn test_deserialize_unknown_style_restores_defaults() {
        let set = SyntaxFilterSet::from_string("java:*.foo ,text/x-bogus:*.z ");
        assert_eq!(set, SyntaxFilterSet::new());
    }

    #[test]
    fn test_deserialize_empty_string_restores_defaults() {
        assert_eq!(SyntaxFilterSet::from_string(""), SyntaxFilterSet::new());
    }

    #[test]
    fn test_deserialize_trailing_comma_restores_defaults() {
        let set = SyntaxFilterSet::from_string("java:*.foo ,");
        assert_eq!(set, SyntaxFilterSet::new());
    }

    // ============================================================
    // Defaults restoration and bulk replacement
    // ============================================================

    #[test]
    fn test_restore_defaults_is_idempotent() {
        let mut set = SyntaxFilterSet::new();
        set.add_filter(SyntaxStyle::Java, "*.j2");

        set.restore_defaults();
        let first = set.to_string();
        set.restore_defaults();
        assert_eq!(set.to_string(), first);
        assert_eq!(set, SyntaxFilterSet::new());
    }

    #[test]
    fn test_restore_defaults_keeps_added_filters() {
        let mut set = SyntaxFilterSet::new();
        set.add_filter(SyntaxStyle::Clojure, "*.clj");

        set.restore_defaults();
        assert_eq!(set.filters_for(SyntaxStyle::Clojure), ["*.clj"]);
    }

    #[test]
    fn test_replace_preserving_added() {
        let mut edited = SyntaxFilterSet::new();
        edited.set_filters_for_style(SyntaxStyle::Java, "*.jav");

        let mut live = SyntaxFilterSet::new();
        live.add_filter(SyntaxStyle::Clojure, "*.clj");

        live.replace_preserving_added(&edited);
        assert_eq!(live.filters_for(SyntaxStyle::Java), ["*.jav"]);
        assert_eq!(live.filters_for(SyntaxStyle::Clojure), ["*.clj"]);
    }
}
