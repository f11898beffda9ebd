//! TrueType fonts for dashboard text.
//!
//! Fonts are read once when a dashboard is built and shared by every frame.
//! DejaVu Sans regular and bold are embedded and used for any face the
//! configuration does not name.

use std::fmt;
use std::path::Path;

use rusttype::Font;
use tracing::{info, warn};
use wind_common::{DashboardError, DashboardResult, FontConfig};

use crate::primitives::FontFace;

/// Embedded font data - DejaVu Sans (see `assets/DejaVu-LICENSE`)
const REGULAR_FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");
const BOLD_FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSans-Bold.ttf");

/// Loaded regular and bold fonts.
#[derive(Clone, Default)]
pub struct FontSet {
    regular: Option<Font<'static>>,
    bold: Option<Font<'static>>,
}

impl FontSet {
    /// A font set without fonts; text primitives are skipped.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The embedded DejaVu Sans regular and bold faces.
    pub fn embedded() -> Self {
        Self {
            regular: embedded_font(REGULAR_FONT_DATA, "DejaVuSans"),
            bold: embedded_font(BOLD_FONT_DATA, "DejaVuSans-Bold"),
        }
    }

    /// Load the fonts named in the configuration.
    ///
    /// A configured path that cannot be read or parsed is an error; an
    /// unconfigured face uses the embedded font.
    pub fn load(config: &FontConfig) -> DashboardResult<Self> {
        let embedded = Self::embedded();
        let regular = match config.regular.as_deref() {
            Some(path) => Some(load_font(path)?),
            None => embedded.regular,
        };
        let bold = match config.bold.as_deref() {
            Some(path) => Some(load_font(path)?),
            None => embedded.bold,
        };

        if regular.is_none() && bold.is_none() {
            warn!("No usable font, dashboard text will not be drawn");
        }

        Ok(Self { regular, bold })
    }

    /// Font for `face`; bold falls back to regular and vice versa.
    pub fn face(&self, face: FontFace) -> Option<&Font<'static>> {
        match face {
            FontFace::Regular => self.regular.as_ref().or(self.bold.as_ref()),
            FontFace::Bold => self.bold.as_ref().or(self.regular.as_ref()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.regular.is_none() && self.bold.is_none()
    }
}

impl fmt::Debug for FontSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontSet")
            .field("regular", &self.regular.is_some())
            .field("bold", &self.bold.is_some())
            .finish()
    }
}

fn embedded_font(data: &'static [u8], name: &str) -> Option<Font<'static>> {
    match Font::try_from_bytes(data) {
        Some(font) => Some(font),
        None => {
            warn!(font = name, "Failed to parse embedded font");
            None
        }
    }
}

fn load_font(path: &Path) -> DashboardResult<Font<'static>> {
    let bytes = std::fs::read(path).map_err(|e| DashboardError::FontLoad {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let font = Font::try_from_vec(bytes).ok_or_else(|| DashboardError::FontLoad {
        path: path.display().to_string(),
        message: "not a valid TrueType font".to_string(),
    })?;

    info!(path = %path.display(), "Loaded font");
    Ok(font)
}
