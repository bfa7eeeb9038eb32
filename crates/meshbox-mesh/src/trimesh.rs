use meshbox_core::traits::Bounded;
use meshbox_core::Result;
use meshbox_math::{Aabb3, Obb3, Point3, Vector3};

/// Indexed triangle mesh: flat vertex positions plus a triangle index list.
#[derive(Debug, Clone, Default)]
pub struct TriMesh {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vector3>,
    pub indices: Vec<u32>,
}

impl TriMesh {
    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Merge another mesh into this one, offsetting indices appropriately.
    pub fn merge(&mut self, other: &TriMesh) {
        let offset = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.indices
            .extend(other.indices.iter().map(|&i| i + offset));
    }

    /// Compute per-vertex normals by accumulating adjacent face normals
    /// and normalizing (smooth shading approximation).
    pub fn compute_normals(&mut self) {
        let n = self.positions.len();
        self.normals.clear();
        self.normals.resize(n, Vector3::ZERO);

        for tri in self.indices.chunks_exact(3) {
            let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let p0 = self.positions[i0];
            let p1 = self.positions[i1];
            let p2 = self.positions[i2];
            let normal = (p1 - p0).cross(p2 - p0);
            self.normals[i0] += normal;
            self.normals[i1] += normal;
            self.normals[i2] += normal;
        }

        for n in &mut self.normals {
            let len = n.length();
            if len > 1e-12 {
                *n /= len;
            }
        }
    }

    /// Axis-aligned bounding box of the vertex set.
    pub fn aabb(&self) -> Result<Aabb3> {
        Aabb3::from_points(&self.positions)
    }

    /// PCA-oriented bounding box of the vertex set.
    pub fn obb(&self) -> Result<Obb3> {
        Obb3::from_points(&self.positions)
    }
}

impl Bounded for TriMesh {
    type Point = Point3;

    fn bounds(&self) -> Option<(Point3, Point3)> {
        let aabb = Aabb3::from_points(&self.positions).ok()?;
        Some((aabb.min, aabb.max))
    }
}
