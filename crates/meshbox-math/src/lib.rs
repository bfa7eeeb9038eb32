pub mod aabb;
pub mod obb;

pub use glam::{DMat3, DMat4, DVec2, DVec3, DVec4};

pub use aabb::Aabb3;
pub use obb::{Obb3, AXIS_SIGN_CONVENTION};

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Vector2 = DVec2;
pub type Vector3 = DVec3;
