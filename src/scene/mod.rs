//! Scene Module
//!
//! Hierarchical evaluation of articulated figures:
//!
//! - [`TransformStack`]: current transform plus saved copies
//! - [`Skeleton`] / [`PartNode`]: the rigid-part tree
//! - [`SkeletonEvaluator`]: depth-first draw walk capturing socket frames
//! - [`props`]: bars and attached primitives placed from sockets
//! - [`Camera`] / [`CameraState`]: orbit view and projection

pub mod camera;
pub mod node;
pub mod props;
pub mod skeleton;
pub mod transform_stack;
pub mod transform_system;

pub use camera::{Camera, CameraState};
pub use node::{Joint, PartNode, Segment};
pub use props::{AttachedProp, BarPlacement, draw_bar_between, draw_bar_between_sockets};
pub use skeleton::{PartId, PartKey, Skeleton, SocketId};
pub use transform_stack::TransformStack;
pub use transform_system::{EvaluatedFrame, SkeletonEvaluator};
