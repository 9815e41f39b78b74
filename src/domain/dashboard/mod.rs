//! Dashboard aggregate: endpoints, payload shapes, operator slots and display targets.

pub mod endpoints;
pub mod operators;
pub mod payloads;
pub mod repositories;
pub mod surface;
pub mod targets;
pub mod value_objects;

pub use endpoints::*;
pub use operators::*;
pub use payloads::*;
pub use repositories::*;
pub use surface::*;
pub use value_objects::*;
