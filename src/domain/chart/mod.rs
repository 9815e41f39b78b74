//! Chart aggregate: keys, declarative configuration and the renderer seam.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
