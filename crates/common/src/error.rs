/// Errors from vector and matrix operations.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum MathError {
    #[error("division by zero")]
    DivideByZero,
    #[error("matrix is singular (determinant {0:e})")]
    Singular(f32),
}
