//! CPU-side mesh representation handed to the renderer.

/// Expanded (non-indexed) triangle list as two parallel flat buffers.
///
/// `positions[3*i..3*i+3]` and `normals[3*i..3*i+3]` describe vertex `i`;
/// every three consecutive vertices form one triangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
}

impl MeshBuffers {
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices * 3),
            normals: Vec::with_capacity(vertices * 3),
        }
    }

    pub fn push(&mut self, position: [f32; 3], normal: [f32; 3]) {
        self.positions.extend_from_slice(&position);
        self.normals.extend_from_slice(&normal);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns `true` if the buffers are non-empty, parallel and form whole triangles.
    pub fn is_valid(&self) -> bool {
        !self.positions.is_empty()
            && self.positions.len() == self.normals.len()
            && self.positions.len() % 9 == 0
    }

    /// Arithmetic mean of all positions, accumulated in f64.
    /// `None` for an empty mesh.
    pub fn centroid(&self) -> Option<[f32; 3]> {
        if self.is_empty() {
            return None;
        }
        let mut sum = [0.0f64; 3];
        for p in self.positions.chunks_exact(3) {
            sum[0] += f64::from(p[0]);
            sum[1] += f64::from(p[1]);
            sum[2] += f64::from(p[2]);
        }
        let n = self.vertex_count() as f64;
        Some([(sum[0] / n) as f32, (sum[1] / n) as f32, (sum[2] / n) as f32])
    }

    /// Translate every position so the centroid lands on the origin.
    /// Returns the offset that was subtracted.
    pub fn recenter(&mut self) -> Option<[f32; 3]> {
        let center = self.centroid()?;
        for p in self.positions.chunks_exact_mut(3) {
            p[0] -= center[0];
            p[1] -= center[1];
            p[2] -= center[2];
        }
        Some(center)
    }

    pub fn into_parts(self) -> (Vec<f32>, Vec<f32>) {
        (self.positions, self.normals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> MeshBuffers {
        let mut mesh = MeshBuffers::with_capacity(3);
        mesh.push([0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        mesh.push([3.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        mesh.push([0.0, 3.0, 6.0], [0.0, 1.0, 0.0]);
        mesh
    }

    #[test]
    fn mesh_buffers_validity() {
        assert!(triangle().is_valid());
        assert!(!MeshBuffers::default().is_valid());
    }

    #[test]
    fn counts_follow_flat_layout() {
        let mesh = triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn recenter_moves_centroid_to_origin() {
        let mut mesh = triangle();
        let offset = mesh.recenter().expect("non-empty");
        assert_eq!(offset, [1.0, 1.0, 2.0]);
        let c = mesh.centroid().unwrap();
        assert!(c.iter().all(|v| v.abs() < 1e-6));
        assert_eq!(&mesh.positions[0..3], &[-1.0, -1.0, -2.0]);
    }

    #[test]
    fn empty_mesh_has_no_centroid() {
        let mut mesh = MeshBuffers::default();
        assert!(mesh.centroid().is_none());
        assert!(mesh.recenter().is_none());
    }
}
