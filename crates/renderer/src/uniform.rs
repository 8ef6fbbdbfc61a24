//! Scene uniform block shared with `shaders/mesh.wgsl`.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Matches `struct Scene` in WGSL. vec3 values are padded to vec4.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SceneUniform {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub light_dir: [f32; 4],
    pub object_color: [f32; 4],
}

impl SceneUniform {
    pub fn new(model: Mat4, view: Mat4, projection: Mat4, light_dir: Vec3, object_color: Vec3) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            light_dir: light_dir.extend(0.0).to_array(),
            object_color: object_color.extend(1.0).to_array(),
        }
    }
}
