mod matrix;
mod operand;
mod vector_2d;
mod vector_3d;

pub use matrix::Matrix;
pub use operand::Operand;
pub use vector_2d::Vector2d;
pub use vector_3d::Vector3d;

/// 2D point type used for interop with `nalgebra`.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type used for interop with `nalgebra`.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type used for interop with `nalgebra`.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Dynamically sized matrix type used for interop with `nalgebra`.
pub type DMatrix = nalgebra::DMatrix<f64>;
