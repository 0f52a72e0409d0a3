//! Driver configuration as handed over by the host's option system.

use serde::{Deserialize, Serialize};

use crate::foundation::error::{VoError, VoResult};

/// Who composites OSD and subtitles onto the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OsdMode {
    /// Decide from the surface encoding at initialization.
    #[default]
    Auto,
    /// This driver draws OSD/subtitles directly on the surface.
    SelfComposited,
    /// The host renders its OSD onto the scaled frame before the blit.
    HostComposited,
}

/// Video-output options, set once before initialization.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Backend selection string, `None` for the backend's own default.
    pub backend: Option<String>,
    /// OSD font family name.
    pub osd_font: String,
    /// Subtitle font family name.
    pub sub_font: String,
    /// Integer pixel multiplier for the subtitle font, `1..=99`.
    pub sub_font_mul: u32,
    /// OSD compositing mode.
    pub osd_mode: OsdMode,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            backend: None,
            osd_font: "default".to_string(),
            sub_font: "default".to_string(),
            sub_font_mul: 1,
            osd_mode: OsdMode::Auto,
        }
    }
}

impl Options {
    pub fn validate(&self) -> VoResult<()> {
        if !(1..=99).contains(&self.sub_font_mul) {
            return Err(VoError::config(format!(
                "sub_font_mul must be in 1..=99, got {}",
                self.sub_font_mul
            )));
        }
        Ok(())
    }
}
