//! The "metabolic grid" artwork palette.
//!
//! The three subsystem hues ([`GATEWAY`], [`AGENT`], [`MCP`]) double as
//! connector tints; the remaining accents are used by exactly one panel.

use crate::color::Color;

pub const BACKGROUND: Color = Color::rgb(0x0D, 0x11, 0x17);
pub const GRID_LINE: Color = Color::rgba(255, 255, 255, 0.03);

/// Glow base of the gateway panel and its outgoing connectors.
pub const GATEWAY: Color = Color::rgb(0x2E, 0x7D, 0x32);
/// Spawning subsystem: the agent pool and its connectors.
pub const AGENT: Color = Color::rgb(0xE6, 0x51, 0x00);
/// Tooling subsystem: the tool-integration panel, its connector, and the
/// title subheading.
pub const MCP: Color = Color::rgb(0x00, 0x83, 0x8F);

pub const DASHBOARD: Color = Color::rgb(0x15, 0x65, 0xC0);
pub const STATE_DB: Color = Color::rgb(0x6A, 0x1B, 0x9A);
pub const REDIS_HUB: Color = Color::rgb(0xD3, 0x2F, 0x2F);
pub const MASTER_AGENT: Color = Color::rgb(0xFF, 0x8F, 0x00);
pub const SUB_AGENT: Color = Color::rgb(0xFF, 0x52, 0x52);
pub const EXTERNAL: Color = Color::rgb(0x88, 0x0E, 0x4F);

pub const TITLE_TEXT: Color = Color::rgb(0xFF, 0xFF, 0xFF);
pub const BODY_TEXT: Color = Color::rgba(255, 255, 255, 0.85);
/// Translucent panel interior; the grid stays faintly visible through it.
pub const PANEL_FILL: Color = Color::rgba(25, 25, 30, 0.6);
pub const PARTICLE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
