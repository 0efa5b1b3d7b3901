//! Packing and alignment policies, plus the serializable packer configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// How spacing is computed along the packing axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PackMode {
    /// Children follow each other separated by `sep`.
    #[default]
    Fixed,
    /// `sep` is stretched so the children span the target length exactly.
    Expand,
    /// Every child gets a slot as wide as the widest child plus `sep`.
    Equal,
}

impl PackMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackMode::Fixed => "fixed",
            PackMode::Expand => "expand",
            PackMode::Equal => "equal",
        }
    }
}

impl FromStr for PackMode {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(PackMode::Fixed),
            "expand" => Ok(PackMode::Expand),
            "equal" => Ok(PackMode::Equal),
            other => Err(LayoutError::UnknownMode(other.to_string())),
        }
    }
}

impl TryFrom<String> for PackMode {
    type Error = LayoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for PackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alignment on the cross axis.
///
/// `Left`/`Top` and `Right`/`Bottom` behave identically; the pairs exist so
/// that a configuration reads naturally for either packer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Align {
    /// Unify the baselines of all children.
    #[default]
    Baseline,
    Left,
    Top,
    Right,
    Bottom,
    Center,
}

impl Align {
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Baseline => "baseline",
            Align::Left => "left",
            Align::Top => "top",
            Align::Right => "right",
            Align::Bottom => "bottom",
            Align::Center => "center",
        }
    }
}

impl FromStr for Align {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "baseline" => Ok(Align::Baseline),
            "left" => Ok(Align::Left),
            "top" => Ok(Align::Top),
            "right" => Ok(Align::Right),
            "bottom" => Ok(Align::Bottom),
            "center" => Ok(Align::Center),
            other => Err(LayoutError::UnknownAlign(other.to_string())),
        }
    }
}

impl TryFrom<String> for Align {
    type Error = LayoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration shared by [`VPacker`](crate::VPacker) and
/// [`HPacker`](crate::HPacker).
///
/// `width`/`height` of `None` mean "compute from the children".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackerConfig {
    /// Border inset added on every side.
    pub pad: f32,
    /// Spacing between consecutive children.
    pub sep: f32,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub align: Align,
    pub mode: PackMode,
}

impl PackerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pad(mut self, pad: f32) -> Self {
        self.pad = pad;
        self
    }

    pub fn sep(mut self, sep: f32) -> Self {
        self.sep = sep;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn mode(mut self, mode: PackMode) -> Self {
        self.mode = mode;
        self
    }
}
