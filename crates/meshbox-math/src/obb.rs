//! Oriented bounding box via principal component analysis.
//!
//! The box axes are the eigenvectors of the point-set covariance matrix,
//! ordered by ascending eigenvalue: axis 0 carries the least variance,
//! axis 2 the greatest.

use crate::{Point3, Vector3};
use meshbox_core::{MeshboxError, Result, Tolerance};
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

/// Sign applied to each principal axis after the eigen-decomposition.
///
/// Axes 0 and 2 are negated. This is a convention inherited from a
/// specific eigensolver's output orientation, not a derived property;
/// reconcile a replacement solver's signs here and nowhere else.
pub const AXIS_SIGN_CONVENTION: [f64; 3] = [-1.0, 1.0, -1.0];

/// PCA-oriented bounding box of a point set.
///
/// `min_proj[i]`/`max_proj[i]` are the signed extrema of the mean-centered
/// points projected onto `axes[i]`; `variances[i]` is the covariance
/// eigenvalue belonging to `axes[i]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obb3 {
    pub center: Point3,
    pub axes: [Vector3; 3],
    pub min_proj: [f64; 3],
    pub max_proj: [f64; 3],
    pub variances: [f64; 3],
}

impl Obb3 {
    /// Compute the oriented bounding box of a point set.
    ///
    /// Centroid, covariance `C = Σ dᵢdᵢᵗ / n`, symmetric eigen-decomposition,
    /// then per-axis projection extrema of the mean-centered points. Rejects
    /// empty input; a rank-deficient point set (coplanar, collinear, or a
    /// single point) still yields a well-defined box, see
    /// [`Obb3::degenerate_axes`].
    pub fn from_points(points: &[Point3]) -> Result<Self> {
        if points.is_empty() {
            return Err(MeshboxError::EmptyPointSet("oriented box of no points".into()));
        }
        let n = points.len() as f64;

        let mut sum = Vector3::ZERO;
        for &p in points {
            sum += p;
        }
        let center = sum / n;

        // Covariance is symmetric; accumulate the six unique entries.
        let (mut xx, mut xy, mut xz) = (0.0, 0.0, 0.0);
        let (mut yy, mut yz, mut zz) = (0.0, 0.0, 0.0);
        for &p in points {
            let d = p - center;
            xx += d.x * d.x;
            xy += d.x * d.y;
            xz += d.x * d.z;
            yy += d.y * d.y;
            yz += d.y * d.z;
            zz += d.z * d.z;
        }
        #[rustfmt::skip]
        let covariance = Matrix3::new(
            xx, xy, xz,
            xy, yy, yz,
            xz, yz, zz,
        ) / n;

        let eigen = covariance.symmetric_eigen();

        // nalgebra does not guarantee an eigenvalue order; sort ascending so
        // axis 0 is the direction of least spread and axis 2 the greatest.
        let mut order = [0usize, 1, 2];
        order.sort_by(|&a, &b| eigen.eigenvalues[a].total_cmp(&eigen.eigenvalues[b]));

        let mut axes = [Vector3::ZERO; 3];
        let mut variances = [0.0; 3];
        for (i, &k) in order.iter().enumerate() {
            let col = eigen.eigenvectors.column(k);
            axes[i] = Vector3::new(col[0], col[1], col[2]) * AXIS_SIGN_CONVENTION[i];
            variances[i] = eigen.eigenvalues[k];
        }

        let mut min_proj = [f64::INFINITY; 3];
        let mut max_proj = [f64::NEG_INFINITY; 3];
        for &p in points {
            let d = p - center;
            for i in 0..3 {
                let t = axes[i].dot(d);
                min_proj[i] = min_proj[i].min(t);
                max_proj[i] = max_proj[i].max(t);
            }
        }

        Ok(Self {
            center,
            axes,
            min_proj,
            max_proj,
            variances,
        })
    }

    /// The six extremal points in world space, in the fixed order
    /// `[Xmin, Xmax, Ymin, Ymax, Zmin, Zmax]`:
    /// entry `2i` is `center + axes[i] * min_proj[i]`, entry `2i + 1` is
    /// `center + axes[i] * max_proj[i]`.
    pub fn oriented_points(&self) -> [Point3; 6] {
        let mut pts = [self.center; 6];
        for i in 0..3 {
            pts[2 * i] = self.center + self.axes[i] * self.min_proj[i];
            pts[2 * i + 1] = self.center + self.axes[i] * self.max_proj[i];
        }
        pts
    }

    /// Extent of the box along principal axis `i`.
    pub fn extent(&self, i: usize) -> f64 {
        self.max_proj[i] - self.min_proj[i]
    }

    /// Which principal axes carry no spread within tolerance.
    ///
    /// The variance eigenvalue has squared-length units, so its square root
    /// is compared against the linear tolerance. A degenerate axis means the
    /// input was coplanar (one axis), collinear (two), or a single repeated
    /// point (three).
    pub fn degenerate_axes(&self, tol: Tolerance) -> [bool; 3] {
        self.variances.map(|v| v.max(0.0).sqrt() < tol.linear)
    }

    /// True if the covariance is rank-deficient within tolerance.
    pub fn is_degenerate(&self, tol: Tolerance) -> bool {
        self.degenerate_axes(tol).into_iter().any(|d| d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec3;

    #[test]
    fn test_empty_is_error() {
        assert!(Obb3::from_points(&[]).is_err());
    }

    #[test]
    fn test_single_point() {
        let obb = Obb3::from_points(&[dvec3(1.0, 2.0, 3.0)]).unwrap();
        assert_eq!(obb.center, dvec3(1.0, 2.0, 3.0));
        for p in obb.oriented_points() {
            assert!((p - obb.center).length() < 1e-12);
        }
        assert!(obb.is_degenerate(Tolerance::default()));
    }

    #[test]
    fn test_identical_points() {
        let pts = vec![dvec3(5.0, 5.0, 5.0); 10];
        let obb = Obb3::from_points(&pts).unwrap();
        assert_eq!(obb.center, dvec3(5.0, 5.0, 5.0));
        for i in 0..3 {
            assert!(obb.min_proj[i].abs() < 1e-12);
            assert!(obb.max_proj[i].abs() < 1e-12);
        }
        for p in obb.oriented_points() {
            assert!((p - dvec3(5.0, 5.0, 5.0)).length() < 1e-12);
        }
        assert_eq!(obb.degenerate_axes(Tolerance::default()), [true, true, true]);
    }

    #[test]
    fn test_deterministic_for_fixed_input() {
        let pts = vec![
            dvec3(0.1, 0.2, 0.3),
            dvec3(1.5, -0.4, 0.9),
            dvec3(-2.0, 1.1, 0.0),
            dvec3(0.7, 0.7, -1.3),
        ];
        let a = Obb3::from_points(&pts).unwrap();
        let b = Obb3::from_points(&pts).unwrap();
        assert_eq!(a.center, b.center);
        assert_eq!(a.axes, b.axes);
        assert_eq!(a.min_proj, b.min_proj);
        assert_eq!(a.max_proj, b.max_proj);
    }

    #[test]
    fn test_coplanar_flags_one_axis() {
        // Points in the z = 2 plane; least-variance axis has zero spread.
        let pts = vec![
            dvec3(0.0, 0.0, 2.0),
            dvec3(3.0, 0.0, 2.0),
            dvec3(0.0, 1.0, 2.0),
            dvec3(3.0, 1.0, 2.0),
            dvec3(1.5, 0.5, 2.0),
        ];
        let obb = Obb3::from_points(&pts).unwrap();
        let degenerate = obb.degenerate_axes(Tolerance::default());
        assert!(degenerate[0]);
        assert!(!degenerate[1]);
        assert!(!degenerate[2]);
        assert!(obb.is_degenerate(Tolerance::default()));
    }
}
