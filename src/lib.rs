//! Math and geometry value types for the Prophecy 2D game framework.
//!
//! Every type here is a self-contained value: no type depends on another,
//! clones are deep, and nothing is shared between instances.

pub mod config;
pub mod error;
pub mod geom;
pub mod math;
pub mod storage;

pub use config::{GameConfig, ENGINE_NAME, ENGINE_VERSION};
pub use error::{ElementwiseOp, MatrixError, ProphecyError, Result};
pub use geom::{Point, Rect};
pub use math::{Matrix, Operand, Vector2d, Vector3d};
pub use storage::{KeyValueStore, MemoryStorage};
