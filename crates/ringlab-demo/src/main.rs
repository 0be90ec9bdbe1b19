//! Headless driver for the ring panel.
//!
//! Stands in for a windowed app's UI thread: it holds a shape
//! selection and a viewport, pulls one scene per "redraw", and hands the
//! command stream to a surface. The surface here just logs each primitive.
//!
//! Usage:
//!
//! ```text
//! ringlab-demo [circle|rectangle|round-rectangle] [WIDTHxHEIGHT]
//! ```

use anyhow::{Context, Result, bail};
use ringlab_scene::coords::Viewport;
use ringlab_scene::logging::{LoggingConfig, init_logging};
use ringlab_scene::panel::ShapePanel;
use ringlab_scene::render::{Surface, render_list};
use ringlab_scene::rings::ShapeKind;
use ringlab_scene::scene::shapes::{CircleCmd, RectCmd, RoundedRectCmd};

/// Surface that logs one line per primitive instead of filling pixels.
struct LogSurface;

impl Surface for LogSurface {
    fn fill_rect(&mut self, cmd: &RectCmd) {
        log::info!(
            "rect         center=({}, {}) half=({}, {}) color={:?}",
            cmd.center.x, cmd.center.y, cmd.half_extents.x, cmd.half_extents.y, cmd.color
        );
    }

    fn fill_rounded_rect(&mut self, cmd: &RoundedRectCmd) {
        log::info!(
            "rounded rect center=({}, {}) half=({}, {}) arc={}x{} color={:?}",
            cmd.center.x, cmd.center.y, cmd.half_extents.x, cmd.half_extents.y,
            cmd.arc.width, cmd.arc.height, cmd.color
        );
    }

    fn fill_circle(&mut self, cmd: &CircleCmd) {
        log::info!(
            "circle       center=({}, {}) radius={} color={:?}",
            cmd.center.x, cmd.center.y, cmd.radius, cmd.color
        );
    }
}

fn parse_shape(arg: &str) -> Result<ShapeKind> {
    match arg {
        "circle" => Ok(ShapeKind::Circle),
        "rectangle" => Ok(ShapeKind::Rectangle),
        "round-rectangle" | "round_rectangle" => Ok(ShapeKind::RoundRectangle),
        other => bail!("unknown shape '{other}' (expected circle, rectangle or round-rectangle)"),
    }
}

fn parse_viewport(arg: &str) -> Result<Viewport> {
    let (w, h) = arg
        .split_once('x')
        .with_context(|| format!("expected WIDTHxHEIGHT, got '{arg}'"))?;
    let width = w.parse().with_context(|| format!("bad width '{w}'"))?;
    let height = h.parse().with_context(|| format!("bad height '{h}'"))?;
    Ok(Viewport::new(width, height))
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut args = std::env::args().skip(1);
    let shape = match args.next() {
        Some(arg) => parse_shape(&arg)?,
        None => ShapeKind::default(),
    };
    // Default matches the panel's preferred size.
    let viewport = match args.next() {
        Some(arg) => parse_viewport(&arg)?,
        None => Viewport::new(600, 325),
    };

    let mut panel = ShapePanel::new();
    panel.set_shape(shape);

    let scene = panel.scene(viewport);
    log::info!(
        "shape={} viewport={}x{} -> {} draw commands",
        panel.shape(),
        viewport.width,
        viewport.height,
        scene.len()
    );

    render_list(&scene, &mut LogSurface);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_shape_accepts_known_kinds() {
        assert_eq!(parse_shape("circle").unwrap(), ShapeKind::Circle);
        assert_eq!(parse_shape("rectangle").unwrap(), ShapeKind::Rectangle);
        assert_eq!(parse_shape("round-rectangle").unwrap(), ShapeKind::RoundRectangle);
    }

    #[test]
    fn parse_shape_rejects_unknown() {
        assert!(parse_shape("triangle").is_err());
    }

    #[test]
    fn parse_viewport_accepts_wxh() {
        assert_eq!(parse_viewport("600x325").unwrap(), Viewport::new(600, 325));
    }

    #[test]
    fn parse_viewport_rejects_garbage() {
        assert!(parse_viewport("600").is_err());
        assert!(parse_viewport("axb").is_err());
    }
}
