use crate::frame::{Frame, Surface};
use std::fmt::Write;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads a frame and produces output. It never feeds anything
/// back into demo state.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, frame: &Frame) -> Self::Output;
}

/// Text renderer for the CLI, logs and tests.
///
/// Produces a human-readable listing of the frame.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    /// Print one line per shape, not just the totals.
    pub verbose: bool,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self { verbose: true }
    }

    pub fn terse() -> Self {
        Self { verbose: false }
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &Frame) -> String {
        let mut out = String::new();
        let c = frame.clear_color;
        let _ = writeln!(
            out,
            "=== Frame (clear=({:.2}, {:.2}, {:.2}), lighting={}) ===",
            c.r,
            c.g,
            c.b,
            if frame.lighting.enabled { "on" } else { "off" }
        );
        let _ = writeln!(
            out,
            "Eye: ({:.2}, {:.2}, {:.2})",
            frame.eye.x, frame.eye.y, frame.eye.z
        );
        let _ = writeln!(out, "Shapes: {}", frame.shapes.len());
        let _ = writeln!(
            out,
            "Overlay: {} triangles, {} lines",
            frame.overlay.triangles.len(),
            frame.overlay.lines.len()
        );

        if self.verbose {
            for shape in &frame.shapes {
                let p = shape.origin();
                let m = &shape.material;
                let surface = match m.surface {
                    Surface::Color => format!(
                        "color=({:.2}, {:.2}, {:.2}, {:.2})",
                        m.color.r, m.color.g, m.color.b, m.color.a
                    ),
                    Surface::UvDebug => "uv".to_string(),
                    Surface::Normal => "normal".to_string(),
                    Surface::Texture(slot) => format!("texture={slot:?}"),
                };
                let _ = writeln!(
                    out,
                    "  {:<8} at=({:.2}, {:.2}, {:.2}) {surface}",
                    shape.mesh.name(),
                    p.x,
                    p.y,
                    p.z
                );
            }
            for line in &frame.overlay.lines {
                let _ = writeln!(
                    out,
                    "  line     ({:.2}, {:.2}) -> ({:.2}, {:.2})",
                    line.from.x, line.from.y, line.to.x, line.to.y
                );
            }
        }

        for note in &frame.annotations {
            let _ = writeln!(out, "# {note}");
        }

        out
    }
}
