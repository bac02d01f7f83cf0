//! Theme-aware file type icons
//!
//! Maps syntax styles to the small icons shown next to open files. Pixel
//! decoding stays out of this crate: a [`IconLoader`] collaborator loads
//! raster resources and rasterizes SVG ones, and [`FileIconCache`] memoizes
//! the results per resource name. Lookups never fail; a style without a
//! mapping, or a resource that fails to load, falls back to a theme-matched
//! default icon.

use std::collections::BTreeMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use log::warn;

#[cfg(test)]
use mockall::automock;

use crate::core::style::SyntaxStyle;

/// Resource directory holding the bundled file type icons.
pub const ICON_PATH: &str = "file_icons/";

/// Edge length in pixels at which SVG icons are rasterized.
pub const ICON_SIZE: u32 = 16;

const DEFAULT_ICON_DARK_UI: &str = "plain.svg";
const DEFAULT_ICON_LIGHT_UI: &str = "txt.gif";

lazy_static! {
    /// Built-in style to icon resource table. Styles absent here display the
    /// theme default unless a plugin installs an override.
    static ref STYLE_ICONS: BTreeMap<SyntaxStyle, String> = {
        let mut m = BTreeMap::new();
        let mut put = |style: SyntaxStyle, name: &str| {
            m.insert(style, format!("{}{}", ICON_PATH, name));
        };
        put(SyntaxStyle::C, "c.gif");
        put(SyntaxStyle::Clojure, "clojure.png");
        put(SyntaxStyle::Cplusplus, "cpp.gif");
        put(SyntaxStyle::Csharp, "cs.gif");
        put(SyntaxStyle::Css, "css.png");
        put(SyntaxStyle::Csv, "csv.svg");
        put(SyntaxStyle::D, "d.png");
        put(SyntaxStyle::Dart, "dart.png");
        put(SyntaxStyle::Go, "go.svg");
        put(SyntaxStyle::Html, "html.png");
        put(SyntaxStyle::Java, "java.png");
        put(SyntaxStyle::JavaScript, "script_code.png");
        put(SyntaxStyle::Perl, "epic.gif");
        put(SyntaxStyle::Php, "page_white_php.png");
        put(SyntaxStyle::Sas, "sas.gif");
        put(SyntaxStyle::Scala, "scala.png");
        put(SyntaxStyle::UnixShell, "page_white_tux.png");
        put(SyntaxStyle::TypeScript, "ts.png");
        put(SyntaxStyle::WindowsBatch, "bat.gif");
        put(SyntaxStyle::Xml, "xml.png");
        m
    };
}

// =============================================================================
// Error Types
// =============================================================================

/// Error raised when an icon resource cannot be loaded or rasterized.
#[derive(Debug, Clone)]
pub struct IconError {
    /// The resource that failed to load
    pub resource: String,
    /// Human-readable error description
    pub message: String,
}

impl IconError {
    pub fn new(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for IconError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cannot load icon '{}': {}", self.resource, self.message)
    }
}

impl std::error::Error for IconError {}

// =============================================================================
// Core Types
// =============================================================================

/// A decoded icon: tightly packed RGBA pixels, row-major.
///
/// `rgba` holds `width * height * 4` bytes; the loader collaborator is
/// responsible for producing consistent data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl IconImage {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgba,
        }
    }

    /// A fully transparent icon, the fallback of last resort when even the
    /// default resource fails to load.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rgba: vec![0; width as usize * height as usize * 4],
        }
    }
}

/// Loads icon resources bundled with the application.
///
/// Implementations sit at the UI layer where the image decoders live; this
/// crate only dictates the decoded form.
#[cfg_attr(test, automock)]
pub trait IconLoader: Send + Sync {
    /// Load a raster resource (PNG, GIF) at its native size.
    fn load_raster(&self, resource: &str) -> Result<IconImage, IconError>;

    /// Rasterize an SVG resource to a square image of `size` pixels.
    fn rasterize_svg(&self, resource: &str, size: u32) -> Result<IconImage, IconError>;
}

// =============================================================================
// Icon Cache
// =============================================================================

/// Lazily populated cache of file type icons.
///
/// Icons load on first use and stay cached for the process lifetime; the
/// population is bounded by the fixed style table. A resource that fails to
/// load caches the default icon under its key, so missing resources are not
/// probed again on every lookup.
pub struct FileIconCache {
    loader: Box<dyn IconLoader>,
    images: BTreeMap<String, Arc<IconImage>>,
    overrides: BTreeMap<SyntaxStyle, Arc<IconImage>>,
    default_icon: Arc<IconImage>,
    dark_theme: bool,
}

impl FileIconCache {
    /// Create a cache over `loader`, selecting the default icon for the
    /// active UI theme.
    pub fn new(loader: Box<dyn IconLoader>, dark_theme: bool) -> Self {
        let default_icon = Arc::new(Self::load_default(loader.as_ref(), dark_theme));
        Self {
            loader,
            images: BTreeMap::new(),
            overrides: BTreeMap::new(),
            default_icon,
            dark_theme,
        }
    }

    /// The icon for a syntax style.
    ///
    /// Plugin overrides win over the built-in resource table; a style with
    /// neither returns the theme default without touching the cache.
    pub fn icon_for(&mut self, style: SyntaxStyle) -> Arc<IconImage> {
        if let Some(icon) = self.overrides.get(&style) {
            return Arc::clone(icon);
        }
        match STYLE_ICONS.get(&style) {
            Some(resource) => self.icon_for_resource(resource),
            None => Arc::clone(&self.default_icon),
        }
    }

    /// The icon for a resource name, loading and caching it on first use.
    /// SVG resources are rasterized at [`ICON_SIZE`]; anything else loads as
    /// a raster image.
    pub fn icon_for_resource(&mut self, resource: &str) -> Arc<IconImage> {
        if let Some(icon) = self.images.get(resource) {
            return Arc::clone(icon);
        }
        let icon = match Self::load_resource(self.loader.as_ref(), resource) {
            Ok(image) => Arc::new(image),
            Err(e) => {
                warn!("Using default file icon: {}", e);
                Arc::clone(&self.default_icon)
            }
        };
        self.images.insert(resource.to_string(), Arc::clone(&icon));
        icon
    }

    /// Install an already-loaded icon for a style, bypassing resource
    /// lookup. Lets plugins adding language support ship their own icons.
    pub fn set_icon_for(&mut self, style: SyntaxStyle, icon: Arc<IconImage>) {
        self.overrides.insert(style, icon);
    }

    /// Switch between the light and dark default icon. Only the default is
    /// rebuilt; cached per-resource icons and overrides are unaffected.
    pub fn set_dark_theme(&mut self, dark_theme: bool) {
        if self.dark_theme == dark_theme {
            return;
        }
        self.dark_theme = dark_theme;
        self.default_icon = Arc::new(Self::load_default(self.loader.as_ref(), dark_theme));
    }

    /// Whether the cache currently serves the dark theme default.
    pub fn dark_theme(&self) -> bool {
        self.dark_theme
    }

    /// The icon used when no style-specific icon exists.
    pub fn default_icon(&self) -> Arc<IconImage> {
        Arc::clone(&self.default_icon)
    }

    /// Number of cached resource icons.
    pub fn cache_size(&self) -> usize {
        self.images.len()
    }

    fn load_default(loader: &dyn IconLoader, dark_theme: bool) -> IconImage {
        let name = if dark_theme {
            DEFAULT_ICON_DARK_UI
        } else {
            DEFAULT_ICON_LIGHT_UI
        };
        let resource = format!("{}{}", ICON_PATH, name);
        match Self::load_resource(loader, &resource) {
            Ok(image) => image,
            Err(e) => {
                warn!("Cannot load default file icon: {}", e);
                IconImage::blank(ICON_SIZE, ICON_SIZE)
            }
        }
    }

    fn load_resource(loader: &dyn IconLoader, resource: &str) -> Result<IconImage, IconError> {
        if resource.ends_with(".svg") {
            loader.rasterize_svg(resource, ICON_SIZE)
        } else {
            loader.load_raster(resource)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
