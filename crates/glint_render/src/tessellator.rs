//! Geometry tessellation
//!
//! Generates triangle-list geometry for filled and outlined rounded
//! rectangles, pie/donut slices, and line segments. All functions append to
//! a [`Mesh`] and silently no-op on degenerate input (zero/negative sizes,
//! zero-length lines): those are routine transient states during layout,
//! not errors.
//!
//! Angles are degrees at the API surface and become radians only at trig
//! call sites. Arcs use a fixed 8 segments per 90° quadrant regardless of
//! radius.

use glint_core::{Color, CornerRadius, Rect};

use crate::mesh::Mesh;

/// Arc facets per quarter circle. Not adaptive to radius: tiny and huge
/// arcs get the same facet count.
pub const SEGMENTS_PER_QUADRANT: u32 = 8;

/// Fill an axis-aligned rectangle
pub fn fill_rect(mesh: &mut Mesh, rect: Rect, color: Color) {
    if rect.is_empty() {
        return;
    }
    mesh.quad(rect.x, rect.y, rect.width, rect.height, color);
}

/// Fill a rounded rectangle with per-corner radii.
///
/// Radii are clamped to `min(w, h) / 2`. The body is a cross shape (one
/// full-height central quad plus a side quad per column), each rounded
/// corner is an 8-segment quarter-circle fan, and corner gaps left by
/// uneven radii are closed with filler quads. Every emitted vertex lies
/// inside the rectangle.
pub fn fill_rounded_rect(mesh: &mut Mesh, rect: Rect, color: Color, radii: CornerRadius) {
    if rect.is_empty() {
        return;
    }
    let radii = radii.clamped(rect.width, rect.height);
    let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);

    // Column widths: each side column is as wide as its larger corner.
    let left_w = radii.top_left.max(radii.bottom_left);
    let right_w = radii.top_right.max(radii.bottom_right);

    // Central quad, full height.
    mesh.quad(x + left_w, y, w - left_w - right_w, h, color);

    // Side quads, shortened by their own corners.
    mesh.quad(
        x,
        y + radii.top_left,
        left_w,
        h - radii.top_left - radii.bottom_left,
        color,
    );
    mesh.quad(
        x + w - right_w,
        y + radii.top_right,
        right_w,
        h - radii.top_right - radii.bottom_right,
        color,
    );

    // Corners: a quarter fan per rounded corner, plus a filler quad when
    // the column is wider than this corner's radius (uneven radii).
    corner_fill(mesh, x + radii.top_left, y + radii.top_left, radii.top_left, 180.0, color);
    if left_w > radii.top_left && radii.top_left > 0.0 {
        mesh.quad(x + radii.top_left, y, left_w - radii.top_left, radii.top_left, color);
    }

    corner_fill(
        mesh,
        x + w - radii.top_right,
        y + radii.top_right,
        radii.top_right,
        270.0,
        color,
    );
    if right_w > radii.top_right && radii.top_right > 0.0 {
        mesh.quad(
            x + w - right_w,
            y,
            right_w - radii.top_right,
            radii.top_right,
            color,
        );
    }

    corner_fill(
        mesh,
        x + radii.bottom_left,
        y + h - radii.bottom_left,
        radii.bottom_left,
        90.0,
        color,
    );
    if left_w > radii.bottom_left && radii.bottom_left > 0.0 {
        mesh.quad(
            x + radii.bottom_left,
            y + h - radii.bottom_left,
            left_w - radii.bottom_left,
            radii.bottom_left,
            color,
        );
    }

    corner_fill(
        mesh,
        x + w - radii.bottom_right,
        y + h - radii.bottom_right,
        radii.bottom_right,
        0.0,
        color,
    );
    if right_w > radii.bottom_right && radii.bottom_right > 0.0 {
        mesh.quad(
            x + w - right_w,
            y + h - radii.bottom_right,
            right_w - radii.bottom_right,
            radii.bottom_right,
            color,
        );
    }
}

/// Quarter-circle fan for a corner. `start_deg` picks the quadrant
/// (0 = bottom-right, 90 = bottom-left, 180 = top-left, 270 = top-right).
fn corner_fill(mesh: &mut Mesh, cx: f32, cy: f32, radius: f32, start_deg: f32, color: Color) {
    if radius <= 0.0 {
        return;
    }
    let step = 90.0 / SEGMENTS_PER_QUADRANT as f32;
    for i in 0..SEGMENTS_PER_QUADRANT {
        let a0 = (start_deg + step * i as f32).to_radians();
        let a1 = (start_deg + step * (i + 1) as f32).to_radians();
        mesh.triangle(
            (cx, cy),
            (cx + radius * a0.cos(), cy + radius * a0.sin()),
            (cx + radius * a1.cos(), cy + radius * a1.sin()),
            color,
        );
    }
}

/// Outline a rounded rectangle with the given stroke thickness.
///
/// Emits four edge quads shortened by the adjacent corner radii, plus a
/// thick ring segment per rounded corner (inner radius floored at zero) or
/// a square filler quad per sharp corner.
pub fn stroke_rounded_rect(
    mesh: &mut Mesh,
    rect: Rect,
    color: Color,
    radii: CornerRadius,
    thickness: f32,
) {
    if rect.is_empty() || thickness <= 0.0 {
        return;
    }
    let radii = radii.clamped(rect.width, rect.height);
    let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);
    let t = thickness.min(w / 2.0).min(h / 2.0);

    // Sharp corners occupy a t-by-t square, so edges back off by at least t.
    let inset = |r: f32| if r > 0.0 { r } else { t };
    let (tl, tr, br, bl) = (
        inset(radii.top_left),
        inset(radii.top_right),
        inset(radii.bottom_right),
        inset(radii.bottom_left),
    );

    // Edges.
    mesh.quad(x + tl, y, w - tl - tr, t, color);
    mesh.quad(x + bl, y + h - t, w - bl - br, t, color);
    mesh.quad(x, y + tl, t, h - tl - bl, color);
    mesh.quad(x + w - t, y + tr, t, h - tr - br, color);

    // Corners.
    corner_stroke(mesh, x + tl, y + tl, radii.top_left, t, 180.0, color);
    corner_stroke(mesh, x + w - tr, y + tr, radii.top_right, t, 270.0, color);
    corner_stroke(mesh, x + w - br, y + h - br, radii.bottom_right, t, 0.0, color);
    corner_stroke(mesh, x + bl, y + h - bl, radii.bottom_left, t, 90.0, color);
}

/// Ring segment (rounded) or square filler (sharp) for one outline corner
fn corner_stroke(
    mesh: &mut Mesh,
    cx: f32,
    cy: f32,
    radius: f32,
    thickness: f32,
    start_deg: f32,
    color: Color,
) {
    if radius <= 0.0 {
        // Sharp corner: the edges stop `thickness` short, fill the square.
        let (qx, qy) = match start_deg as i32 {
            180 => (cx - thickness, cy - thickness),
            270 => (cx, cy - thickness),
            0 => (cx, cy),
            _ => (cx - thickness, cy),
        };
        mesh.quad(qx, qy, thickness, thickness, color);
        return;
    }

    let inner = (radius - thickness).max(0.0);
    let step = 90.0 / SEGMENTS_PER_QUADRANT as f32;
    for i in 0..SEGMENTS_PER_QUADRANT {
        let a0 = (start_deg + step * i as f32).to_radians();
        let a1 = (start_deg + step * (i + 1) as f32).to_radians();
        let (c0, s0) = (a0.cos(), a0.sin());
        let (c1, s1) = (a1.cos(), a1.sin());

        let outer0 = (cx + radius * c0, cy + radius * s0);
        let outer1 = (cx + radius * c1, cy + radius * s1);
        let inner0 = (cx + inner * c0, cy + inner * s0);
        let inner1 = (cx + inner * c1, cy + inner * s1);

        mesh.triangle(outer0, inner0, inner1, color);
        mesh.triangle(outer0, inner1, outer1, color);
    }
}

/// Fill a pie slice (no inner radius) or donut segment (inner radius set).
///
/// Angles are degrees, measured clockwise in screen space from the
/// positive X axis; a full circle is `start` to `start + 360`. A zero or
/// negative sweep, or a non-positive outer radius, silently no-ops.
#[allow(clippy::too_many_arguments)]
pub fn fill_arc(
    mesh: &mut Mesh,
    cx: f32,
    cy: f32,
    outer_radius: f32,
    inner_radius: Option<f32>,
    start_deg: f32,
    end_deg: f32,
    color: Color,
) {
    let sweep = end_deg - start_deg;
    if outer_radius <= 0.0 || sweep <= 0.0 {
        return;
    }

    let segments =
        ((sweep / 90.0 * SEGMENTS_PER_QUADRANT as f32).ceil() as u32).max(1);
    let step = sweep / segments as f32;

    match inner_radius {
        Some(inner) if inner > 0.0 => {
            let inner = inner.min(outer_radius);
            for i in 0..segments {
                let a0 = (start_deg + step * i as f32).to_radians();
                let a1 = (start_deg + step * (i + 1) as f32).to_radians();
                let (c0, s0) = (a0.cos(), a0.sin());
                let (c1, s1) = (a1.cos(), a1.sin());

                let outer0 = (cx + outer_radius * c0, cy + outer_radius * s0);
                let outer1 = (cx + outer_radius * c1, cy + outer_radius * s1);
                let inner0 = (cx + inner * c0, cy + inner * s0);
                let inner1 = (cx + inner * c1, cy + inner * s1);

                mesh.triangle(outer0, inner0, inner1, color);
                mesh.triangle(outer0, inner1, outer1, color);
            }
        }
        _ => {
            for i in 0..segments {
                let a0 = (start_deg + step * i as f32).to_radians();
                let a1 = (start_deg + step * (i + 1) as f32).to_radians();
                mesh.triangle(
                    (cx, cy),
                    (cx + outer_radius * a0.cos(), cy + outer_radius * a0.sin()),
                    (cx + outer_radius * a1.cos(), cy + outer_radius * a1.sin()),
                    color,
                );
            }
        }
    }
}

/// Draw a line segment as a rotated quad of the given width.
///
/// Zero-length segments silently no-op.
pub fn line(mesh: &mut Mesh, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: Color) {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len = (dx * dx + dy * dy).sqrt();
    if len <= 0.0 || width <= 0.0 {
        return;
    }

    // Unit perpendicular, scaled to half the stroke width.
    let nx = -dy / len * width / 2.0;
    let ny = dx / len * width / 2.0;

    mesh.triangle(
        (x1 + nx, y1 + ny),
        (x1 - nx, y1 - ny),
        (x2 - nx, y2 - ny),
        color,
    );
    mesh.triangle(
        (x1 + nx, y1 + ny),
        (x2 - nx, y2 - ny),
        (x2 + nx, y2 + ny),
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::VertexFormat;

    fn mesh() -> Mesh {
        Mesh::new(VertexFormat::PositionColor)
    }

    fn assert_all_within(mesh: &Mesh, rect: Rect) {
        const EPS: f32 = 1e-4;
        for (x, y) in mesh.positions() {
            assert!(
                x >= rect.x - EPS
                    && x <= rect.right() + EPS
                    && y >= rect.y - EPS
                    && y <= rect.bottom() + EPS,
                "vertex ({x}, {y}) escapes {rect:?}"
            );
        }
    }

    #[test]
    fn rounded_rect_vertices_stay_in_bounds() {
        let rect = Rect::new(10.0, 20.0, 80.0, 40.0);
        let mut m = mesh();
        fill_rounded_rect(&mut m, rect, Color::WHITE, CornerRadius::uniform(12.0));
        assert!(!m.is_empty());
        assert_all_within(&m, rect);
    }

    #[test]
    fn oversized_radius_is_clamped_into_bounds() {
        // Requested radius far exceeds min(w, h) / 2.
        let rect = Rect::new(0.0, 0.0, 100.0, 30.0);
        let mut m = mesh();
        fill_rounded_rect(&mut m, rect, Color::WHITE, CornerRadius::uniform(500.0));
        assert_all_within(&m, rect);
    }

    #[test]
    fn mixed_radii_stay_in_bounds() {
        let rect = Rect::new(0.0, 0.0, 60.0, 60.0);
        let radii = CornerRadius {
            top_left: 20.0,
            top_right: 0.0,
            bottom_right: 8.0,
            bottom_left: 30.0,
        };
        let mut m = mesh();
        fill_rounded_rect(&mut m, rect, Color::WHITE, radii);
        assert_all_within(&m, rect);
    }

    #[test]
    fn degenerate_rect_emits_nothing() {
        let mut m = mesh();
        fill_rounded_rect(
            &mut m,
            Rect::new(0.0, 0.0, 0.0, 50.0),
            Color::WHITE,
            CornerRadius::uniform(4.0),
        );
        assert!(m.is_empty());
    }

    #[test]
    fn outline_vertices_stay_in_bounds() {
        let rect = Rect::new(5.0, 5.0, 50.0, 50.0);
        let mut m = mesh();
        stroke_rounded_rect(&mut m, rect, Color::WHITE, CornerRadius::uniform(10.0), 2.0);
        assert!(!m.is_empty());
        assert_all_within(&m, rect);
    }

    #[test]
    fn sharp_outline_corners_use_filler_quads() {
        let rect = Rect::new(0.0, 0.0, 40.0, 40.0);
        let mut m = mesh();
        stroke_rounded_rect(&mut m, rect, Color::WHITE, CornerRadius::uniform(0.0), 3.0);
        // 4 edges + 4 corner fillers, 6 vertices each
        assert_eq!(m.vertex_count(), 8 * 6);
        assert_all_within(&m, rect);
    }

    #[test]
    fn full_circle_pie_has_fixed_lod() {
        let mut m = mesh();
        fill_arc(&mut m, 0.0, 0.0, 10.0, None, 0.0, 360.0, Color::WHITE);
        // 8 segments per quadrant, 3 vertices per fan triangle
        assert_eq!(m.vertex_count(), 32 * 3);
    }

    #[test]
    fn donut_segment_ring_strip() {
        let mut m = mesh();
        fill_arc(&mut m, 0.0, 0.0, 10.0, Some(6.0), 0.0, 90.0, Color::WHITE);
        // 8 segments, 2 triangles each
        assert_eq!(m.vertex_count(), 8 * 2 * 3);
        // All vertices between the two radii
        for (x, y) in m.positions() {
            let r = (x * x + y * y).sqrt();
            assert!(r >= 6.0 - 1e-4 && r <= 10.0 + 1e-4);
        }
    }

    #[test]
    fn zero_sweep_arc_is_skipped() {
        let mut m = mesh();
        fill_arc(&mut m, 0.0, 0.0, 10.0, None, 45.0, 45.0, Color::WHITE);
        assert!(m.is_empty());
    }

    #[test]
    fn zero_length_line_is_skipped() {
        let mut m = mesh();
        line(&mut m, 5.0, 5.0, 5.0, 5.0, 2.0, Color::WHITE);
        assert!(m.is_empty());
    }

    #[test]
    fn line_quad_matches_width() {
        let mut m = mesh();
        line(&mut m, 0.0, 0.0, 10.0, 0.0, 4.0, Color::WHITE);
        assert_eq!(m.vertex_count(), 6);
        for (_, y) in m.positions() {
            assert!(y.abs() <= 2.0 + 1e-6);
        }
    }
}
