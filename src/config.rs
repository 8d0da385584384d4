//! Rasterizer configuration.
//!
//! Read from the `[raster]` table of a scene file; every field is optional.
//!
//! ```toml
//! [raster]
//! rasterizer = "scanline"   # or "edge_function"
//! channel_mode = "wrap"     # or "saturate"
//! ```

use serde::{Deserialize, Serialize};

use crate::colors::ChannelMode;
use crate::render::RasterizerType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RasterConfig {
    pub rasterizer: RasterizerType,
    pub channel_mode: ChannelMode,
}
