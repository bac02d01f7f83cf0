//! Syntax style identifiers
//!
//! The closed set of highlighting styles known to the host editor. Styles are
//! identified on the wire (serialized filter sets, preference files) by short
//! lowercase tokens, and `Ord` follows token order so that any `BTreeMap`
//! keyed by style iterates deterministically.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::FilterError;

/// Identifier for a syntax highlighting style.
///
/// `None` is the reserved "plain text / no highlighting" value returned when
/// file type resolution finds no match. Declaration order is alphabetical by
/// token with `None` last; resolution walks styles in this order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum SyntaxStyle {
    ActionScript,
    C,
    Clojure,
    Cplusplus,
    Csharp,
    Css,
    Csv,
    D,
    Dart,
    Delphi,
    Dockerfile,
    Dtd,
    Fortran,
    Go,
    Groovy,
    Hosts,
    Htaccess,
    Html,
    Ini,
    Java,
    JavaScript,
    Json,
    #[serde(rename = "jsonc")]
    JsonWithComments,
    Jsp,
    Kotlin,
    Latex,
    Less,
    Lisp,
    Lua,
    Makefile,
    Markdown,
    Mxml,
    Nsis,
    Perl,
    Php,
    Properties,
    Python,
    Ruby,
    Sas,
    Scala,
    Sql,
    Tcl,
    TypeScript,
    UnixShell,
    VisualBasic,
    WindowsBatch,
    Xml,
    Yaml,
    None,
}

/// Every resolvable style, in declaration (resolution) order. `None` is the
/// absence of a style and is excluded.
pub const ALL: &[SyntaxStyle] = &[
    SyntaxStyle::ActionScript,
    SyntaxStyle::C,
    SyntaxStyle::Clojure,
    SyntaxStyle::Cplusplus,
    SyntaxStyle::Csharp,
    SyntaxStyle::Css,
    SyntaxStyle::Csv,
    SyntaxStyle::D,
    SyntaxStyle::Dart,
    SyntaxStyle::Delphi,
    SyntaxStyle::Dockerfile,
    SyntaxStyle::Dtd,
    SyntaxStyle::Fortran,
    SyntaxStyle::Go,
    SyntaxStyle::Groovy,
    SyntaxStyle::Hosts,
    SyntaxStyle::Htaccess,
    SyntaxStyle::Html,
    SyntaxStyle::Ini,
    SyntaxStyle::Java,
    SyntaxStyle::JavaScript,
    SyntaxStyle::Json,
    SyntaxStyle::JsonWithComments,
    SyntaxStyle::Jsp,
    SyntaxStyle::Kotlin,
    SyntaxStyle::Latex,
    SyntaxStyle::Less,
    SyntaxStyle::Lisp,
    SyntaxStyle::Lua,
    SyntaxStyle::Makefile,
    SyntaxStyle::Markdown,
    SyntaxStyle::Mxml,
    SyntaxStyle::Nsis,
    SyntaxStyle::Perl,
    SyntaxStyle::Php,
    SyntaxStyle::Properties,
    SyntaxStyle::Python,
    SyntaxStyle::Ruby,
    SyntaxStyle::Sas,
    SyntaxStyle::Scala,
    SyntaxStyle::Sql,
    SyntaxStyle::Tcl,
    SyntaxStyle::TypeScript,
    SyntaxStyle::UnixShell,
    SyntaxStyle::VisualBasic,
    SyntaxStyle::WindowsBatch,
    SyntaxStyle::Xml,
    SyntaxStyle::Yaml,
];

impl SyntaxStyle {
    /// The persisted token for this style.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ActionScript => "actionscript",
            Self::C => "c",
            Self::Clojure => "clojure",
            Self::Cplusplus => "cplusplus",
            Self::Csharp => "csharp",
            Self::Css => "css",
            Self::Csv => "csv",
            Self::D => "d",
            Self::Dart => "dart",
            Self::Delphi => "delphi",
            Self::Dockerfile => "dockerfile",
            Self::Dtd => "dtd",
            Self::Fortran => "fortran",
            Self::Go => "go",
            Self::Groovy => "groovy",
            Self::Hosts => "hosts",
            Self::Htaccess => "htaccess",
            Self::Html => "html",
            Self::Ini => "ini",
            Self::Java => "java",
            Self::JavaScript => "javascript",
            Self::Json => "json",
            Self::JsonWithComments => "jsonc",
            Self::Jsp => "jsp",
            Self::Kotlin => "kotlin",
            Self::Latex => "latex",
            Self::Less => "less",
            Self::Lisp => "lisp",
            Self::Lua => "lua",
            Self::Makefile => "makefile",
            Self::Markdown => "markdown",
            Self::Mxml => "mxml",
            Self::Nsis => "nsis",
            Self::Perl => "perl",
            Self::Php => "php",
            Self::Properties => "properties",
            Self::Python => "python",
            Self::Ruby => "ruby",
            Self::Sas => "sas",
            Self::Scala => "scala",
            Self::Sql => "sql",
            Self::Tcl => "tcl",
            Self::TypeScript => "typescript",
            Self::UnixShell => "unixshell",
            Self::VisualBasic => "visualbasic",
            Self::WindowsBatch => "windowsbatch",
            Self::Xml => "xml",
            Self::Yaml => "yaml",
            Self::None => "none",
        }
    }

    /// Parse a persisted token back into a style.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "actionscript" => Some(Self::ActionScript),
            "c" => Some(Self::C),
            "clojure" => Some(Self::Clojure),
            "cplusplus" => Some(Self::Cplusplus),
            "csharp" => Some(Self::Csharp),
            "css" => Some(Self::Css),
            "csv" => Some(Self::Csv),
            "d" => Some(Self::D),
            "dart" => Some(Self::Dart),
            "delphi" => Some(Self::Delphi),
            "dockerfile" => Some(Self::Dockerfile),
            "dtd" => Some(Self::Dtd),
            "fortran" => Some(Self::Fortran),
            "go" => Some(Self::Go),
            "groovy" => Some(Self::Groovy),
            "hosts" => Some(Self::Hosts),
            "htaccess" => Some(Self::Htaccess),
            "html" => Some(Self::Html),
            "ini" => Some(Self::Ini),
            "java" => Some(Self::Java),
            "javascript" => Some(Self::JavaScript),
            "json" => Some(Self::Json),
            "jsonc" => Some(Self::JsonWithComments),
            "jsp" => Some(Self::Jsp),
            "kotlin" => Some(Self::Kotlin),
            "latex" => Some(Self::Latex),
            "less" => Some(Self::Less),
            "lisp" => Some(Self::Lisp),
            "lua" => Some(Self::Lua),
            "makefile" => Some(Self::Makefile),
            "markdown" => Some(Self::Markdown),
            "mxml" => Some(Self::Mxml),
            "nsis" => Some(Self::Nsis),
            "perl" => Some(Self::Perl),
            "php" => Some(Self::Php),
            "properties" => Some(Self::Properties),
            "python" => Some(Self::Python),
            "ruby" => Some(Self::Ruby),
            "sas" => Some(Self::Sas),
            "scala" => Some(Self::Scala),
            "sql" => Some(Self::Sql),
            "tcl" => Some(Self::Tcl),
            "typescript" => Some(Self::TypeScript),
            "unixshell" => Some(Self::UnixShell),
            "visualbasic" => Some(Self::VisualBasic),
            "windowsbatch" => Some(Self::WindowsBatch),
            "xml" => Some(Self::Xml),
            "yaml" => Some(Self::Yaml),
            "none" => Some(Self::None),
            _ => Option::None,
        }
    }

    /// Human-readable name for settings panels.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ActionScript => "ActionScript",
            Self::C => "C",
            Self::Clojure => "Clojure",
            Self::Cplusplus => "C++",
            Self::Csharp => "C#",
            Self::Css => "CSS",
            Self::Csv => "CSV",
            Self::D => "D",
            Self::Dart => "Dart",
            Self::Delphi => "Delphi",
            Self::Dockerfile => "Dockerfile",
            Self::Dtd => "DTD",
            Self::Fortran => "Fortran",
            Self::Go => "Go",
            Self::Groovy => "Groovy",
            Self::Hosts => "Hosts",
            Self::Htaccess => ".htaccess",
            Self::Html => "HTML",
            Self::Ini => "INI",
            Self::Java => "Java",
            Self::JavaScript => "JavaScript",
            Self::Json => "JSON",
            Self::JsonWithComments => "JSON with comments",
            Self::Jsp => "JSP",
            Self::Kotlin => "Kotlin",
            Self::Latex => "LaTeX",
            Self::Less => "LESS",
            Self::Lisp => "Lisp",
            Self::Lua => "Lua",
            Self::Makefile => "Makefile",
            Self::Markdown => "Markdown",
            Self::Mxml => "MXML",
            Self::Nsis => "NSIS",
            Self::Perl => "Perl",
            Self::Php => "PHP",
            Self::Properties => "Properties",
            Self::Python => "Python",
            Self::Ruby => "Ruby",
            Self::Sas => "SAS",
            Self::Scala => "Scala",
            Self::Sql => "SQL",
            Self::Tcl => "Tcl",
            Self::TypeScript => "TypeScript",
            Self::UnixShell => "Unix shell",
            Self::VisualBasic => "Visual Basic",
            Self::WindowsBatch => "Windows batch",
            Self::Xml => "XML",
            Self::Yaml => "YAML",
            Self::None => "Plain text",
        }
    }
}

impl fmt::Display for SyntaxStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SyntaxStyle {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| FilterError::unknown_style(s))
    }
}
