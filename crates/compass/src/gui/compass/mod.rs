pub mod view;

pub use view::draw;

// shared with the tap hit test, which sizes labels from it
pub use compass_core::geometry::LABEL_FONT_SIZE;

pub const PANEL_WIDTH: i32 = 400;
pub const PANEL_HEIGHT: i32 = 120;

// Needle shape, in logical units along the needle's axis
pub const NEEDLE_LENGTH: f64 = 64.0;
pub const NEEDLE_SHOULDER: f64 = 12.0;
pub const NEEDLE_HALF_WIDTH: f64 = 3.0;
pub const HUB_RADIUS: f64 = 4.0;
pub const TRAIL_ALPHA: f64 = 0.3;

pub const DOT_RADIUS: f64 = 2.0;
pub const ACTIVE_DOT_RADIUS: f64 = 3.2;
pub const GLOW_RADIUS_FACTOR: f64 = 2.4;
pub const GLOW_ALPHA: f64 = 0.35;

pub const CONNECTOR_WIDTH: f64 = 0.6;
pub const CONNECTOR_ALPHA: f64 = 0.7;
pub const OUTER_ARC_WIDTH: f64 = 2.2;
pub const MIDDLE_ARC_WIDTH: f64 = 1.2;
pub const DASHED_ARC_WIDTH: f64 = 0.8;
pub const DASH_PATTERN: [f64; 2] = [2.0, 3.0];
