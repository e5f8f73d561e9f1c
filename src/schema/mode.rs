use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The framing a narrative is generated under.
///
/// The mode picks which lens list is used; every other phrase bank is
/// shared between modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Business strategy.
    #[default]
    Strategi,
    /// Product idea.
    Ide,
    /// Campaign content.
    Konten,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown mode: '{0}'")]
pub struct ModeParseError(pub String);

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Strategi, Mode::Ide, Mode::Konten];

    /// Returns the wire token for this mode (e.g., "strategi").
    pub fn token(&self) -> &'static str {
        match self {
            Self::Strategi => "strategi",
            Self::Ide => "ide",
            Self::Konten => "konten",
        }
    }

    /// Parse a wire token, falling back to the default mode for anything
    /// unrecognized.
    pub fn from_token_or_default(token: &str) -> Mode {
        token.parse().unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Strategi => "Strategi Bisnis",
            Self::Ide => "Ide Produk",
            Self::Konten => "Konten Kampanye",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Strategi => "Rancang peta jalan transformasi dan prioritas strategis.",
            Self::Ide => "Temukan peluang produk dan value proposition baru.",
            Self::Konten => "Ciptakan narasi kreatif yang relevan dengan audiens.",
        }
    }

    /// Example prompt shown to users before they type anything.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Strategi => {
                "Contoh: Kembangkan strategi ekspansi pasar untuk startup fintech di Asia Tenggara."
            }
            Self::Ide => {
                "Contoh: Temukan ide produk digital untuk membantu UMKM meningkatkan pemasaran online."
            }
            Self::Konten => {
                "Contoh: Susun konsep konten kampanye lebaran untuk brand fashion berkelanjutan."
            }
        }
    }
}

impl FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strategi" => Ok(Self::Strategi),
            "ide" => Ok(Self::Ide),
            "konten" => Ok(Self::Konten),
            other => Err(ModeParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Mode metadata as rendered by a front end.
#[derive(Debug, Clone, Serialize)]
pub struct ModeInfo {
    pub id: Mode,
    pub label: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
}

impl From<Mode> for ModeInfo {
    fn from(mode: Mode) -> Self {
        Self {
            id: mode,
            label: mode.label(),
            description: mode.description(),
            placeholder: mode.placeholder(),
        }
    }
}
