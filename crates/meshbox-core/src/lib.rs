pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{MeshboxError, Result};
pub use tolerance::Tolerance;
