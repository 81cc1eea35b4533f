//! Assembles the scene into one SVG document string.
//!
//! Canvas-style effects map onto document structure: the accent glow is an
//! `feDropShadow` filter referenced by the glowing element, the additive
//! connector blend is `mix-blend-mode:screen` on the connector group, and
//! panel labels are separate unfiltered elements so the glow can never
//! bleed into text.

use crate::Result;
use gridmap_core::{Color, Connection, Node, Particle, Scene, TitleBlock};
use indexmap::IndexSet;
use std::fmt::Write as _;

/// Fixed corner radius shared by every panel, regardless of panel size.
const PANEL_CORNER_RADIUS: f64 = 12.0;
/// Blur radius of the accent glow behind panels.
const PANEL_GLOW_BLUR: f64 = 30.0;
const PANEL_STROKE_WIDTH: f64 = 2.0;
/// Blur radius of the glow behind connectors and particles.
const FLOW_GLOW_BLUR: f64 = 10.0;
const CONNECTION_STROKE_WIDTH: f64 = 1.5;
const CONNECTION_DASH: &str = "5 5";

/// Label offsets from a panel's top-left corner, to the text baseline.
const PANEL_TITLE_OFFSET: (f64, f64) = (20.0, 35.0);
const PANEL_SUBTITLE_OFFSET: (f64, f64) = (20.0, 55.0);

const SANS_STACK: &str = "Segoe UI, sans-serif";
const MONO_STACK: &str = "Segoe UI, monospace";

/// Glow filters must not clip: the region is the whole surface plus this
/// margin. User-space units are required here: three connectors are
/// axis-aligned and have zero-area bounding boxes, which would collapse an
/// objectBoundingBox filter region and drop the element entirely.
const FILTER_MARGIN: f64 = 60.0;

/// Renders the scene as a complete SVG document.
///
/// Draw order is fixed: background, grid, title block, panels, connectors,
/// particles.
pub fn render_svg(scene: &Scene) -> Result<String> {
    scene.validate()?;

    let glows = collect_glows(scene);

    let mut out = String::new();
    let _ = writeln!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = scene.width,
        h = scene.height,
    );

    write_defs(&mut out, scene, &glows);

    let _ = writeln!(
        &mut out,
        r#"<rect class="background" width="{}" height="{}" {}/>"#,
        scene.width,
        scene.height,
        paint_attrs("fill", scene.background),
    );

    write_grid(&mut out, scene);
    write_title(&mut out, &scene.title);
    for node in &scene.nodes {
        write_node(&mut out, node);
    }
    for connection in &scene.connections {
        write_connection(&mut out, connection);
    }
    for particle in &scene.particles {
        write_particle(&mut out, particle);
    }

    out.push_str("</svg>\n");

    tracing::debug!(
        nodes = scene.nodes.len(),
        connections = scene.connections.len(),
        glow_filters = glows.len(),
        "assembled scene svg"
    );
    Ok(out)
}

/// One glow per distinct (blur, color) pair, in first-use order.
fn collect_glows(scene: &Scene) -> IndexSet<(u32, String)> {
    let mut glows = IndexSet::new();
    for node in &scene.nodes {
        glows.insert(glow_key(PANEL_GLOW_BLUR, node.accent));
    }
    for connection in &scene.connections {
        glows.insert(glow_key(FLOW_GLOW_BLUR, connection.color));
    }
    for particle in &scene.particles {
        glows.insert(glow_key(FLOW_GLOW_BLUR, particle.color));
    }
    glows
}

fn glow_key(blur: f64, color: Color) -> (u32, String) {
    (blur as u32, color.hex()[1..].to_string())
}

fn glow_id(blur: f64, color: Color) -> String {
    let (blur, hex) = glow_key(blur, color);
    format!("glow-{blur}-{hex}")
}

fn write_defs(out: &mut String, scene: &Scene, glows: &IndexSet<(u32, String)>) {
    out.push_str("<defs>\n");
    for (blur, hex) in glows {
        // feDropShadow stdDeviation is half the blur radius.
        let _ = writeln!(
            out,
            r##"<filter id="glow-{blur}-{hex}" filterUnits="userSpaceOnUse" x="{x}" y="{y}" width="{w}" height="{h}"><feDropShadow dx="0" dy="0" stdDeviation="{sigma}" flood-color="#{hex}"/></filter>"##,
            x = fmt(-FILTER_MARGIN),
            y = fmt(-FILTER_MARGIN),
            w = fmt(f64::from(scene.width) + FILTER_MARGIN * 2.0),
            h = fmt(f64::from(scene.height) + FILTER_MARGIN * 2.0),
            sigma = fmt(f64::from(*blur) / 2.0),
        );
    }
    out.push_str("</defs>\n");
}

fn write_grid(out: &mut String, scene: &Scene) {
    let _ = writeln!(
        out,
        r#"<g class="grid" {} stroke-width="1">"#,
        paint_attrs("stroke", scene.grid.stroke),
    );
    let (width, height) = (f64::from(scene.width), f64::from(scene.height));
    let mut x = 0.0;
    while x < width {
        let _ = writeln!(
            out,
            r#"<line x1="{x}" y1="0" x2="{x}" y2="{}"/>"#,
            fmt(height),
            x = fmt(x),
        );
        x += scene.grid.step;
    }
    let mut y = 0.0;
    while y < height {
        let _ = writeln!(
            out,
            r#"<line x1="0" y1="{y}" x2="{}" y2="{y}"/>"#,
            fmt(width),
            y = fmt(y),
        );
        y += scene.grid.step;
    }
    out.push_str("</g>\n");
}

fn write_title(out: &mut String, title: &TitleBlock) {
    let _ = writeln!(
        out,
        r#"<text class="title-heading" x="{}" y="{}" font-family="{SANS_STACK}" font-size="36" font-weight="200" letter-spacing="4" {}>{}</text>"#,
        fmt(title.heading_anchor.x),
        fmt(title.heading_anchor.y),
        paint_attrs("fill", title.heading_color),
        escape_xml(&title.heading),
    );
    let _ = writeln!(
        out,
        r#"<text class="title-subheading" x="{}" y="{}" font-family="{MONO_STACK}" font-size="14" font-weight="400" {}>{}</text>"#,
        fmt(title.subheading_anchor.x),
        fmt(title.subheading_anchor.y),
        paint_attrs("fill", title.subheading_color),
        escape_xml(&title.subheading),
    );
}

fn write_node(out: &mut String, node: &Node) {
    let _ = writeln!(
        out,
        r#"<path class="panel" d="{}" {} {} stroke-width="{}" filter="url(#{})"/>"#,
        panel_path(node.x, node.y, node.width, node.height),
        paint_attrs("fill", gridmap_core::theme::PANEL_FILL),
        paint_attrs("stroke", node.accent),
        fmt(PANEL_STROKE_WIDTH),
        glow_id(PANEL_GLOW_BLUR, node.accent),
    );
    // Labels stay outside the filtered element: the glow must never reach
    // the text.
    let _ = writeln!(
        out,
        r#"<text class="panel-title" x="{}" y="{}" font-family="{SANS_STACK}" font-size="18" font-weight="300" {}>{}</text>"#,
        fmt(node.x + PANEL_TITLE_OFFSET.0),
        fmt(node.y + PANEL_TITLE_OFFSET.1),
        paint_attrs("fill", gridmap_core::theme::TITLE_TEXT),
        escape_xml(&node.title),
    );
    let _ = writeln!(
        out,
        r#"<text class="panel-subtitle" x="{}" y="{}" font-family="{MONO_STACK}" font-size="12" font-weight="100" {}>{}</text>"#,
        fmt(node.x + PANEL_SUBTITLE_OFFSET.0),
        fmt(node.y + PANEL_SUBTITLE_OFFSET.1),
        paint_attrs("fill", gridmap_core::theme::BODY_TEXT),
        escape_xml(&node.subtitle),
    );
}

/// Four straight edges joined by four quadratic corner curves, closed.
fn panel_path(x: f64, y: f64, w: f64, h: f64) -> String {
    let r = PANEL_CORNER_RADIUS;
    format!(
        "M {} {} L {} {} Q {} {} {} {} L {} {} Q {} {} {} {} L {} {} Q {} {} {} {} L {} {} Q {} {} {} {} Z",
        fmt(x + r),
        fmt(y),
        fmt(x + w - r),
        fmt(y),
        fmt(x + w),
        fmt(y),
        fmt(x + w),
        fmt(y + r),
        fmt(x + w),
        fmt(y + h - r),
        fmt(x + w),
        fmt(y + h),
        fmt(x + w - r),
        fmt(y + h),
        fmt(x + r),
        fmt(y + h),
        fmt(x),
        fmt(y + h),
        fmt(x),
        fmt(y + h - r),
        fmt(x),
        fmt(y + r),
        fmt(x),
        fmt(y),
        fmt(x + r),
        fmt(y),
    )
}

fn write_connection(out: &mut String, connection: &Connection) {
    // Screen blending makes overlapping connector glows brighten instead of
    // occluding each other.
    let _ = writeln!(
        out,
        r#"<g class="connection" style="mix-blend-mode:screen" filter="url(#{})">"#,
        glow_id(FLOW_GLOW_BLUR, connection.color),
    );
    let dash = if connection.dashed {
        format!(r#" stroke-dasharray="{CONNECTION_DASH}""#)
    } else {
        String::new()
    };
    let mid_x = (connection.from.x + connection.to.x) / 2.0;
    let _ = writeln!(
        out,
        r#"<path d="M {} {} C {} {} {} {} {} {}" fill="none" {} stroke-width="{}"{dash}/>"#,
        fmt(connection.from.x),
        fmt(connection.from.y),
        fmt(mid_x),
        fmt(connection.from.y),
        fmt(mid_x),
        fmt(connection.to.y),
        fmt(connection.to.x),
        fmt(connection.to.y),
        paint_attrs("stroke", connection.color),
        fmt(CONNECTION_STROKE_WIDTH),
    );
    out.push_str("</g>\n");
}

fn write_particle(out: &mut String, particle: &Particle) {
    let _ = writeln!(
        out,
        r#"<circle class="particle" cx="{}" cy="{}" r="{}" {} filter="url(#{})"/>"#,
        fmt(particle.center.x),
        fmt(particle.center.y),
        fmt(particle.radius),
        paint_attrs("fill", particle.color),
        glow_id(FLOW_GLOW_BLUR, particle.color),
    );
}

/// `fill`/`stroke` attribute pair for a color, with the opacity attribute
/// only when it carries information.
fn paint_attrs(prefix: &str, color: Color) -> String {
    if color.is_opaque() {
        format!(r#"{prefix}="{}""#, color.hex())
    } else {
        format!(
            r#"{prefix}="{}" {prefix}-opacity="{}""#,
            color.hex(),
            color.a
        )
    }
}

fn fmt(v: f64) -> String {
    // Round-trippable decimal form, avoiding `-0` and float noise from our
    // own arithmetic.
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
