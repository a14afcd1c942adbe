//! WebGPU rendering module
//!
//! GPU context, camera, procedural meshes, and the arm scene renderer.

pub mod camera;
pub mod context;
pub mod mesh;
pub mod pipeline;
pub mod scene;

pub use camera::{Camera, CameraController, MouseAction, OrbitController};
pub use context::{ContextError, GpuContext};
pub use mesh::Mesh;
pub use pipeline::RenderPipelines;
pub use scene::SceneRenderer;
