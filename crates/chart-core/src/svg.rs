// File: crates/chart-core/src/svg.rs
// Summary: Chart markup emitter; serializes mapped points, axes and a title into standalone SVG.

use std::fmt::Write as _;

use crate::error::ChartResult;
use crate::geometry::{round_px, Point};
use crate::theme::Theme;
use crate::types::CanvasGeometry;

/// Baseline of the title text, measured from the top edge of the canvas.
pub const TITLE_Y: f64 = 15.0;
pub const LINE_STROKE_WIDTH: f64 = 2.0;
pub const AXIS_STROKE_WIDTH: f64 = 1.0;

/// Escape text for use in XML character data and attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Polyline `points` attribute value: "x1,y1 x2,y2 ...".
pub fn points_attr(points: &[Point]) -> String {
    let mut s = String::with_capacity(points.len() * 12);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        let _ = write!(s, "{},{}", round_px(p.x), round_px(p.y));
    }
    s
}

/// Emit the complete SVG document for one chart.
///
/// The caller is expected to pass points produced by `scale::map_points` for the same `canvas`.
/// Fails with `InvalidConfiguration` when the margins leave no plot area.
pub fn emit_svg(
    points: &[Point],
    color: &str,
    title: &str,
    canvas: &CanvasGeometry,
    theme: &Theme,
) -> ChartResult<String> {
    canvas.validate()?;
    let w = round_px(canvas.width);
    let h = round_px(canvas.height);
    let m = &canvas.margin;
    let left = round_px(m.left);
    let top = round_px(m.top);
    let right = round_px(canvas.width - m.right);
    let bottom = round_px(canvas.height - m.bottom);

    let mut svg = String::with_capacity(512 + points.len() * 12);
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = writeln!(
        svg,
        r#"  <rect x="0" y="0" width="{w}" height="{h}" fill="{}"/>"#,
        escape_xml(&theme.background)
    );
    let _ = writeln!(
        svg,
        r#"  <text x="{}" y="{TITLE_Y}" text-anchor="middle" font-family="sans-serif" font-size="14" font-weight="bold" fill="{}">{}</text>"#,
        round_px(canvas.width / 2.0),
        escape_xml(&theme.title),
        escape_xml(title)
    );
    let _ = writeln!(
        svg,
        r#"  <polyline fill="none" stroke="{}" stroke-width="{LINE_STROKE_WIDTH}" points="{}"/>"#,
        escape_xml(color),
        points_attr(points)
    );
    let axis = escape_xml(&theme.axis_line);
    let _ = writeln!(
        svg,
        r#"  <line x1="{left}" y1="{bottom}" x2="{right}" y2="{bottom}" stroke="{axis}" stroke-width="{AXIS_STROKE_WIDTH}"/>"#
    );
    let _ = writeln!(
        svg,
        r#"  <line x1="{left}" y1="{top}" x2="{left}" y2="{bottom}" stroke="{axis}" stroke-width="{AXIS_STROKE_WIDTH}"/>"#
    );
    svg.push_str("</svg>");
    Ok(svg)
}
