//! Descriptor structs and the hand-placed architecture map.
//!
//! A [`Scene`] is a flat list of drawing parameters. Panels that appear
//! nested in the picture (the two agents inside the execution pool) are
//! ordinary independent panels whose coordinates happen to overlap.

use crate::color::Color;
use crate::error::{Error, Result};
use crate::geom::{Point, point};
use crate::theme;
use serde::Serialize;

/// A labeled rounded-rectangle panel.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub accent: Color,
    pub title: String,
    /// May contain an embedded `\n`. The break character is part of the
    /// artwork and is handed to the text primitive verbatim.
    pub subtitle: String,
}

impl Node {
    pub fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        accent: Color,
        title: &str,
        subtitle: &str,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            accent,
            title: title.to_string(),
            subtitle: subtitle.to_string(),
        }
    }
}

/// A curved line between two panels, rendered as a single cubic bezier
/// whose control points sit at the horizontal midpoint between the
/// endpoints, each at its own endpoint's height.
#[derive(Debug, Clone, Serialize)]
pub struct Connection {
    pub from: Point,
    pub to: Point,
    pub color: Color,
    pub dashed: bool,
}

impl Connection {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, color: Color) -> Self {
        Self {
            from: point(x1, y1),
            to: point(x2, y2),
            color,
            dashed: false,
        }
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }
}

/// A small decorative filled circle suggesting data flow. Carries no
/// semantic data.
#[derive(Debug, Clone, Serialize)]
pub struct Particle {
    pub center: Point,
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            center: point(x, y),
            radius: 3.0,
            color: theme::PARTICLE,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TitleBlock {
    pub heading: String,
    pub heading_anchor: Point,
    pub heading_color: Color,
    pub subheading: String,
    pub subheading_anchor: Point,
    pub subheading_color: Color,
}

#[derive(Debug, Clone, Serialize)]
pub struct Grid {
    pub step: f64,
    pub stroke: Color,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub grid: Grid,
    pub title: TitleBlock,
    pub nodes: Vec<Node>,
    pub connections: Vec<Connection>,
    pub particles: Vec<Particle>,
}

impl Scene {
    /// The "TEAM WORK // METABOLIC GRID" architecture map.
    ///
    /// Every coordinate below is a deliberate literal; the picture is this
    /// data.
    pub fn architecture_map() -> Self {
        let nodes = vec![
            // Frontend (left)
            Node::new(
                100.0,
                450.0,
                280.0,
                120.0,
                theme::DASHBOARD,
                "UI Dashboard",
                "【多租戶】個人 Agent 看板\n【大盤】中央監控儀表板",
            ),
            // Gateway (center left)
            Node::new(
                480.0,
                300.0,
                280.0,
                160.0,
                theme::GATEWAY,
                "Spring Boot Gateway",
                "REST API / Event Router\nRedis Streams (Sub)",
            ),
            Node::new(
                380.0,
                550.0,
                260.0,
                90.0,
                theme::STATE_DB,
                "State DB (Postgres)",
                "任務狀態 & pgvector(長期記憶)",
            ),
            Node::new(
                680.0,
                640.0,
                380.0,
                120.0,
                theme::REDIS_HUB,
                "⚡ Redis (資料與事件中樞)",
                "» Streams (多租戶 Event Bus)\n» Chat Memory (高效上下文)",
            ),
            // Agent pool (center right); the next two panels sit inside its
            // bounds by coordinate overlap only.
            Node::new(
                880.0,
                200.0,
                320.0,
                380.0,
                theme::AGENT,
                "Agent Execution Pool",
                "Virtual Threads / Async",
            ),
            Node::new(
                910.0,
                270.0,
                260.0,
                80.0,
                theme::MASTER_AGENT,
                "Master Agent",
                "Depth 0 // ChatClient",
            ),
            Node::new(
                910.0,
                390.0,
                260.0,
                80.0,
                theme::SUB_AGENT,
                "Sub Agent Spawning",
                "Depth 1..3 // Delegate",
            ),
            // Tooling (right)
            Node::new(
                1340.0,
                270.0,
                280.0,
                160.0,
                theme::MCP,
                "🧩 Tool Integration",
                "內建 / MCP / Skills (.md)",
            ),
            Node::new(
                1340.0,
                480.0,
                280.0,
                90.0,
                theme::EXTERNAL,
                "External Services",
                "GitHub / Firecrawl / Notion",
            ),
        ];

        let connections = vec![
            // Dashboard -> gateway
            Connection::new(340.0, 480.0, 480.0, 380.0, theme::DASHBOARD),
            // Gateway -> state DB
            Connection::new(540.0, 460.0, 540.0, 550.0, theme::GATEWAY),
            // Gateway -> agent pool
            Connection::new(760.0, 380.0, 880.0, 350.0, theme::GATEWAY),
            // Agents -> tooling
            Connection::new(1200.0, 310.0, 1340.0, 310.0, theme::AGENT),
            Connection::new(1200.0, 430.0, 1340.0, 380.0, theme::AGENT),
            // Tooling -> external services
            Connection::new(1480.0, 430.0, 1480.0, 480.0, theme::MCP),
            // Agents -> Redis hub
            Connection::new(1000.0, 580.0, 950.0, 640.0, theme::REDIS_HUB),
            // Gateway -> Redis hub
            Connection::new(680.0, 460.0, 750.0, 640.0, theme::REDIS_HUB).dashed(),
        ];

        let particles = vec![
            Particle::new(410.0, 440.0),
            Particle::new(820.0, 380.0),
            Particle::new(820.0, 490.0),
            Particle::new(1270.0, 350.0),
        ];

        Self {
            width: 1920,
            height: 1080,
            background: theme::BACKGROUND,
            grid: Grid {
                step: 40.0,
                stroke: theme::GRID_LINE,
            },
            title: TitleBlock {
                heading: "TEAM WORK // METABOLIC GRID".to_string(),
                heading_anchor: point(80.0, 80.0),
                heading_color: theme::TITLE_TEXT,
                subheading: "ARCHITECTURE_MAP.V1 // NANO BANANA PRO".to_string(),
                subheading_anchor: point(80.0, 110.0),
                subheading_color: theme::MCP,
            },
            nodes,
            connections,
            particles,
        }
    }

    /// Checks the descriptor invariants that construction cannot enforce.
    pub fn validate(&self) -> Result<()> {
        for node in &self.nodes {
            if !(node.width > 0.0 && node.height > 0.0) {
                return Err(Error::NonPositivePanelSize {
                    title: node.title.clone(),
                    width: node.width,
                    height: node.height,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn architecture_map_has_expected_shape() {
        let scene = Scene::architecture_map();
        assert_eq!((scene.width, scene.height), (1920, 1080));
        assert_eq!(scene.nodes.len(), 9);
        assert_eq!(scene.connections.len(), 8);
        assert_eq!(scene.particles.len(), 4);
        assert!(scene.validate().is_ok());
    }

    #[test]
    fn exactly_one_connection_is_dashed() {
        let scene = Scene::architecture_map();
        let dashed: Vec<&Connection> =
            scene.connections.iter().filter(|c| c.dashed).collect();
        assert_eq!(dashed.len(), 1);
        // Gateway -> Redis hub is the dashed one.
        assert_eq!(dashed[0].from, point(680.0, 460.0));
        assert_eq!(dashed[0].to, point(750.0, 640.0));
    }

    #[test]
    fn pool_panels_overlap_by_coordinates_only() {
        let scene = Scene::architecture_map();
        let pool = &scene.nodes[4];
        for inner in &scene.nodes[5..=6] {
            assert!(inner.x >= pool.x && inner.x + inner.width <= pool.x + pool.width);
            assert!(inner.y >= pool.y && inner.y + inner.height <= pool.y + pool.height);
        }
    }

    #[test]
    fn subtitles_keep_embedded_line_breaks() {
        let scene = Scene::architecture_map();
        assert!(scene.nodes[0].subtitle.contains('\n'));
        assert!(scene.nodes[3].subtitle.contains('\n'));
        // Single-line subtitles stay single-line.
        assert!(!scene.nodes[2].subtitle.contains('\n'));
    }

    #[test]
    fn scene_snapshot_carries_the_hand_placed_literals() {
        let scene = Scene::architecture_map();
        let json = serde_json::to_value(&scene).expect("serialize scene");

        assert_eq!(json["nodes"][4]["x"], 880.0);
        assert_eq!(json["nodes"][4]["width"], 320.0);
        assert_eq!(json["nodes"][8]["title"], "External Services");
        assert_eq!(json["connections"][7]["dashed"], true);
        assert_eq!(json["grid"]["step"], 40.0);
        assert_eq!(json["background"]["r"], 0x0D);
        assert_eq!(json["background"]["g"], 0x11);
        assert_eq!(json["background"]["b"], 0x17);
    }

    #[test]
    fn validate_rejects_a_degenerate_panel() {
        let mut scene = Scene::architecture_map();
        scene.nodes[0].width = 0.0;
        let err = scene.validate().expect_err("zero width must be rejected");
        assert!(matches!(err, Error::NonPositivePanelSize { .. }));
    }
}
