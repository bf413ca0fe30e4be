use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Free-rect choice heuristics for the MaxRects packer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    BestAreaFit,
    BestShortSideFit,
    BestLongSideFit,
    BottomLeft,
    ContactPoint,
}

impl Heuristic {
    pub const ALL: [Heuristic; 5] = [
        Heuristic::BestAreaFit,
        Heuristic::BestShortSideFit,
        Heuristic::BestLongSideFit,
        Heuristic::BottomLeft,
        Heuristic::ContactPoint,
    ];
}

impl FromStr for Heuristic {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "baf" | "bestareafit" => Ok(Self::BestAreaFit),
            "bssf" | "bestshortsidefit" => Ok(Self::BestShortSideFit),
            "blsf" | "bestlongsidefit" => Ok(Self::BestLongSideFit),
            "bl" | "bottomleft" => Ok(Self::BottomLeft),
            "cp" | "contactpoint" => Ok(Self::ContactPoint),
            _ => Err(()),
        }
    }
}

/// Sheet packing configuration.
///
/// `heuristic: None` selects the heuristic automatically by trying all five
/// and keeping the one with the highest final occupancy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackerConfig {
    /// Sheet width in pixels.
    pub width: u32,
    /// Sheet height in pixels.
    pub height: u32,
    /// Allow 90° rotations for placements where beneficial.
    pub allow_rotation: bool,
    #[serde(default)]
    pub heuristic: Option<Heuristic>,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            allow_rotation: true,
            heuristic: None,
        }
    }
}

impl PackerConfig {
    /// Rejects zero sheet dimensions; all other fields are valid by type.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(crate::error::SheetGenError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn builder() -> PackerConfigBuilder {
        PackerConfigBuilder::new()
    }
}

/// Builder for `PackerConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PackerConfigBuilder {
    cfg: PackerConfig,
}

impl PackerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PackerConfig::default(),
        }
    }
    pub fn with_dimensions(mut self, w: u32, h: u32) -> Self {
        self.cfg.width = w;
        self.cfg.height = h;
        self
    }
    pub fn allow_rotation(mut self, v: bool) -> Self {
        self.cfg.allow_rotation = v;
        self
    }
    pub fn heuristic(mut self, v: Option<Heuristic>) -> Self {
        self.cfg.heuristic = v;
        self
    }
    pub fn build(self) -> PackerConfig {
        self.cfg
    }
}
