//! Concentric-ring generator.
//!
//! Pure mapping from (shape kind, viewport) to a [`DrawList`]. Each call is
//! independent: no state is read or written, so identical inputs always
//! produce identical streams and the generator is safe to call from any
//! thread.
//!
//! Degeneracy rules differ per kind:
//! - circles: discs whose radius would be non-positive are skipped
//! - rectangles / rounded rectangles: half extents go negative on deep rings
//!   and are emitted unclamped

use crate::coords::{ArcRadii, Vec2, Viewport};
use crate::paint::Color;
use crate::scene::DrawList;

/// The shape family drawn in the panel.
///
/// Closed enumeration: there is no "unknown" selection and no runtime
/// fallback branch.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    #[default]
    Circle,
    Rectangle,
    RoundRectangle,
}

impl ShapeKind {
    /// Every kind, in selector display order.
    pub const ALL: [ShapeKind; 3] = [
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::RoundRectangle,
    ];

    /// Human-readable selector label.
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::RoundRectangle => "round rectangle",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of circle ring pairs (each pair is one outer + one inner disc).
pub const CIRCLE_RING_PAIRS: u32 = 5;
/// Number of rectangle rings.
pub const RECT_RING_COUNT: u32 = 10;
/// Number of rounded-rectangle rings.
pub const ROUND_RECT_RING_COUNT: u32 = 12;

/// Radius lost per circle ring pair.
const CIRCLE_STEP: i32 = 20;
/// Nominal inset between successive rectangle rings.
const INSET: i32 = 15;
/// Half-extent shrink per rectangle ring. Integer division is applied to the
/// inset once, so each ring steps in by 7 px per side.
const RING_STEP: i32 = INSET / 2;
/// Corner arc radii carried by every rounded-rectangle ring.
const ARC: ArcRadii = ArcRadii::uniform(30);

#[inline]
fn ring_color(i: u32) -> Color {
    if i % 2 == 0 { Color::RED } else { Color::YELLOW }
}

/// Generates the full ring stream for `kind` inside `viewport`.
///
/// Total over all viewports: a zero or degenerate viewport yields an empty
/// (circle) or degenerate (rectangle) stream, never an error.
pub fn generate(kind: ShapeKind, viewport: Viewport) -> DrawList {
    let mut list = DrawList::with_capacity(ROUND_RECT_RING_COUNT as usize);
    push_rings(&mut list, kind, viewport);
    list
}

/// Appends the ring stream for `kind` to an existing list.
pub fn push_rings(list: &mut DrawList, kind: ShapeKind, viewport: Viewport) {
    match kind {
        ShapeKind::Circle => push_circle_rings(list, viewport),
        ShapeKind::Rectangle => push_rect_rings(list, viewport),
        ShapeKind::RoundRectangle => push_round_rect_rings(list, viewport),
    }
}

fn push_circle_rings(list: &mut DrawList, viewport: Viewport) {
    let center = viewport.center();
    let outer_radius = (viewport.min_extent() / 3) as i32;

    for i in 0..CIRCLE_RING_PAIRS as i32 {
        let outer = outer_radius - i * CIRCLE_STEP;
        if outer > 0 {
            list.push_circle(center, outer, Color::RED);
        }

        // The inner disc sits halfway into the step; at the exact boundary
        // (radius == 0) it is excluded.
        let inner = outer_radius - (i * CIRCLE_STEP + CIRCLE_STEP / 2);
        if inner > 0 {
            list.push_circle(center, inner, Color::YELLOW);
        }
    }
}

fn push_rect_rings(list: &mut DrawList, viewport: Viewport) {
    let center = viewport.center();
    let base = Vec2::new((viewport.width / 4) as i32, (viewport.height / 4) as i32);

    for i in 0..RECT_RING_COUNT {
        let half = base - Vec2::splat(i as i32 * RING_STEP);
        list.push_rect(center, half, ring_color(i));
    }
}

fn push_round_rect_rings(list: &mut DrawList, viewport: Viewport) {
    let center = viewport.center();
    let base = Vec2::new((viewport.width / 3) as i32, (viewport.height / 3) as i32);

    for i in 0..ROUND_RECT_RING_COUNT {
        let half = base - Vec2::splat(i as i32 * RING_STEP);
        list.push_rounded_rect(center, half, ARC, ring_color(i));
    }
}
