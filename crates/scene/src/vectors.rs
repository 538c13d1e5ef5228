//! Vector canvas: two 2D vectors drawn from the center of a 400x400 canvas,
//! plus the result of one arithmetic operation.

use crate::demo::{Demo, DemoKind};
use cglab_common::{Color, FrameClock, MathError, vector};
use cglab_input::{Action, KeyMap};
use cglab_render::{FlatLine, Frame};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const CANVAS_SIZE: f32 = 400.0;
/// Canvas pixels per vector unit.
pub const PIXELS_PER_UNIT: f32 = 20.0;

const V1_COLOR: Color = Color::RED;
const V2_COLOR: Color = Color::BLUE;
const RESULT_COLOR: Color = Color::GREEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VectorOp {
    Add,
    Sub,
    Mul,
    Div,
    Angle,
    Area,
    Magnitude,
    Normalize,
}

impl VectorOp {
    pub const ALL: [VectorOp; 8] = [
        VectorOp::Add,
        VectorOp::Sub,
        VectorOp::Mul,
        VectorOp::Div,
        VectorOp::Angle,
        VectorOp::Area,
        VectorOp::Magnitude,
        VectorOp::Normalize,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            VectorOp::Add => "add",
            VectorOp::Sub => "sub",
            VectorOp::Mul => "mul",
            VectorOp::Div => "div",
            VectorOp::Angle => "angle",
            VectorOp::Area => "area",
            VectorOp::Magnitude => "magnitude",
            VectorOp::Normalize => "normalize",
        }
    }

    /// Whether the operation uses the scalar input.
    pub fn takes_scalar(&self) -> bool {
        matches!(self, VectorOp::Mul | VectorOp::Div)
    }
}

impl fmt::Display for VectorOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vector operation '{0}'")]
pub struct ParseVectorOpError(pub String);

impl FromStr for VectorOp {
    type Err = ParseVectorOpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s.trim().to_ascii_lowercase().as_str() {
            "add" => VectorOp::Add,
            "sub" => VectorOp::Sub,
            "mul" | "mult" => VectorOp::Mul,
            "div" => VectorOp::Div,
            "angle" => VectorOp::Angle,
            "area" => VectorOp::Area,
            "mag" | "magnitude" => VectorOp::Magnitude,
            "normal" | "normalize" => VectorOp::Normalize,
            _ => return Err(ParseVectorOpError(s.to_string())),
        };
        Ok(op)
    }
}

/// What an operation produced: vectors to draw and lines to report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpOutcome {
    pub drawn: Vec<Vec3>,
    pub report: Vec<String>,
}

/// Apply `op` to the two inputs.
pub fn apply(op: VectorOp, v1: Vec3, v2: Vec3, scalar: f32) -> Result<OpOutcome, MathError> {
    let mut out = OpOutcome::default();
    match op {
        VectorOp::Add => out.drawn.push(v1 + v2),
        VectorOp::Sub => out.drawn.push(v1 - v2),
        VectorOp::Mul => out.drawn.extend([v1 * scalar, v2 * scalar]),
        VectorOp::Div => {
            out.drawn.push(vector::divide(v1, scalar)?);
            out.drawn.push(vector::divide(v2, scalar)?);
        }
        VectorOp::Normalize => out.drawn.extend([
            vector::normalize_or_keep(v1),
            vector::normalize_or_keep(v2),
        ]),
        VectorOp::Angle => out.report.push(match vector::angle_between(v1, v2) {
            Some(deg) => format!("Angle: {deg:.2}"),
            None => "Angle: undefined".to_string(),
        }),
        VectorOp::Area => out
            .report
            .push(format!("Area of this triangle: {:.2}", vector::triangle_area(v1, v2))),
        VectorOp::Magnitude => {
            out.report.push(format!("Magnitude v1: {}", vector::magnitude(v1)));
            out.report.push(format!("Magnitude v2: {}", vector::magnitude(v2)));
        }
    }
    Ok(out)
}

/// Canvas pixel where `v` ends. Y grows downward.
pub fn canvas_endpoint(v: Vec3) -> Vec2 {
    let half = CANVAS_SIZE / 2.0;
    Vec2::new(half + v.x * PIXELS_PER_UNIT, half - v.y * PIXELS_PER_UNIT)
}

/// Canvas pixel to normalized device coordinates.
pub fn canvas_to_ndc(p: Vec2) -> Vec2 {
    let half = CANVAS_SIZE / 2.0;
    Vec2::new(p.x / half - 1.0, 1.0 - p.y / half)
}

fn vector_line(v: Vec3, color: Color) -> FlatLine {
    let center = Vec2::splat(CANVAS_SIZE / 2.0);
    FlatLine {
        from: canvas_to_ndc(center),
        to: canvas_to_ndc(canvas_endpoint(v)),
        color,
    }
}

#[derive(Debug, Clone)]
pub struct VectorDemo {
    pub v1: Vec3,
    pub v2: Vec3,
    pub op: VectorOp,
    pub scalar: f32,
    /// Last evaluated operation; `None` until one is run.
    outcome: Option<Result<OpOutcome, MathError>>,
}

impl Default for VectorDemo {
    fn default() -> Self {
        Self {
            v1: Vec3::new(2.25, 2.25, 0.0),
            v2: Vec3::ZERO,
            op: VectorOp::Add,
            scalar: 1.0,
            outcome: None,
        }
    }
}

impl VectorDemo {
    /// Set both inputs. Z is always dropped. Clears any earlier result.
    pub fn set_inputs(&mut self, v1: Vec2, v2: Vec2) {
        self.v1 = v1.extend(0.0);
        self.v2 = v2.extend(0.0);
        self.outcome = None;
    }

    /// Draw only the two inputs.
    pub fn draw(&mut self) {
        self.outcome = None;
    }

    /// Evaluate the selected operation and log its report.
    pub fn draw_operation(&mut self) {
        let outcome = apply(self.op, self.v1, self.v2, self.scalar);
        match &outcome {
            Ok(out) => {
                for line in &out.report {
                    tracing::info!(op = %self.op, "{line}");
                }
            }
            Err(e) => tracing::error!(op = %self.op, scalar = self.scalar, "vector operation failed: {e}"),
        }
        self.outcome = Some(outcome);
    }

    pub fn outcome(&self) -> Option<&Result<OpOutcome, MathError>> {
        self.outcome.as_ref()
    }
}

impl Demo for VectorDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Vectors
    }

    fn key_map(&self) -> KeyMap {
        KeyMap::empty()
    }

    fn handle(&mut self, _action: Action) {}

    fn update(&mut self, _clock: &FrameClock) {}

    fn frame(&self) -> Frame {
        let mut frame = Frame::new(Color::BLACK);
        frame.overlay.lines.push(vector_line(self.v1, V1_COLOR));
        frame.overlay.lines.push(vector_line(self.v2, V2_COLOR));
        match &self.outcome {
            Some(Ok(out)) => {
                for v in &out.drawn {
                    frame.overlay.lines.push(vector_line(*v, RESULT_COLOR));
                }
                frame.annotations.extend(out.report.iter().cloned());
            }
            Some(Err(e)) => frame.annotations.push(format!("Error: {e}")),
            None => {}
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn parses_long_and_short_names() {
        assert_eq!("mult".parse::<VectorOp>(), Ok(VectorOp::Mul));
        assert_eq!("MAG".parse::<VectorOp>(), Ok(VectorOp::Magnitude));
        assert_eq!("normal".parse::<VectorOp>(), Ok(VectorOp::Normalize));
        for op in VectorOp::ALL {
            assert_eq!(op.name().parse::<VectorOp>(), Ok(op));
        }
        assert!("cross".parse::<VectorOp>().is_err());
    }

    #[test]
    fn add_and_sub_draw_one_result() {
        let v1 = Vec3::new(1.0, 2.0, 0.0);
        let v2 = Vec3::new(3.0, -1.0, 0.0);
        assert_eq!(apply(VectorOp::Add, v1, v2, 0.0).unwrap().drawn, vec![Vec3::new(4.0, 1.0, 0.0)]);
        assert_eq!(apply(VectorOp::Sub, v1, v2, 0.0).unwrap().drawn, vec![Vec3::new(-2.0, 3.0, 0.0)]);
    }

    #[test]
    fn scalar_ops_draw_both_vectors() {
        let v1 = Vec3::new(2.0, 4.0, 0.0);
        let v2 = Vec3::new(-6.0, 0.0, 0.0);
        let mul = apply(VectorOp::Mul, v1, v2, 0.5).unwrap();
        assert_eq!(mul.drawn, vec![Vec3::new(1.0, 2.0, 0.0), Vec3::new(-3.0, 0.0, 0.0)]);
        let div = apply(VectorOp::Div, v1, v2, 2.0).unwrap();
        assert_eq!(div.drawn, mul.drawn);
    }

    #[test]
    fn divide_by_zero_is_an_error() {
        assert_eq!(
            apply(VectorOp::Div, Vec3::X, Vec3::Y, 0.0),
            Err(MathError::DivideByZero)
        );
    }

    #[test]
    fn reports_match_canvas_wording() {
        let v1 = Vec3::new(1.0, 0.0, 0.0);
        let v2 = Vec3::new(1.0, 1.0, 0.0);
        assert_eq!(apply(VectorOp::Angle, v1, v2, 0.0).unwrap().report, vec!["Angle: 45.00"]);
        let area = apply(VectorOp::Area, Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0), 0.0).unwrap();
        assert_eq!(area.report, vec!["Area of this triangle: 2.00"]);
        let mag = apply(VectorOp::Magnitude, Vec3::new(3.0, 4.0, 0.0), Vec3::ZERO, 0.0).unwrap();
        assert_eq!(mag.report, vec!["Magnitude v1: 5", "Magnitude v2: 0"]);
        assert!(area.drawn.is_empty());
    }

    #[test]
    fn zero_vector_angle_is_undefined() {
        let out = apply(VectorOp::Angle, Vec3::ZERO, Vec3::X, 0.0).unwrap();
        assert_eq!(out.report, vec!["Angle: undefined"]);
    }

    #[test]
    fn canvas_mapping() {
        assert_eq!(canvas_endpoint(Vec3::new(1.0, 1.0, 0.0)), Vec2::new(220.0, 180.0));
        assert_eq!(canvas_to_ndc(Vec2::new(200.0, 200.0)), Vec2::ZERO);
        let corner = canvas_to_ndc(canvas_endpoint(Vec3::new(10.0, -10.0, 0.0)));
        assert!((corner - Vec2::new(1.0, -1.0)).length() < EPS);
    }

    #[test]
    fn frame_draws_inputs_then_results() {
        let mut demo = VectorDemo::default();
        demo.set_inputs(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0));
        assert_eq!(demo.frame().overlay.lines.len(), 2);

        demo.op = VectorOp::Normalize;
        demo.draw_operation();
        let frame = demo.frame();
        assert_eq!(frame.overlay.lines.len(), 4);
        assert_eq!(frame.overlay.lines[0].color, Color::RED);
        assert_eq!(frame.overlay.lines[1].color, Color::BLUE);
        assert_eq!(frame.overlay.lines[3].color, Color::GREEN);
        assert_eq!(frame.clear_color, Color::BLACK);
    }

    #[test]
    fn failed_operation_draws_nothing_extra() {
        let mut demo = VectorDemo::default();
        demo.op = VectorOp::Div;
        demo.scalar = 0.0;
        demo.draw_operation();
        let frame = demo.frame();
        assert_eq!(frame.overlay.lines.len(), 2);
        assert_eq!(frame.annotations, vec!["Error: division by zero"]);
        assert_eq!(demo.outcome(), Some(&Err(MathError::DivideByZero)));

        demo.draw();
        assert!(demo.frame().annotations.is_empty());
        assert!(demo.outcome().is_none());
    }
}
