//! Domain layer: the recipe tree and its operations
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod comida;
pub mod error;
pub mod locate;
pub mod ops;
pub mod projector;
pub mod render;
pub mod samples;

pub use comida::{Comida, Item, Items, Target, DEFAULT_QUANTITY};
pub use error::{DomainError, DomainResult};
pub use locate::{Site, Slot};
pub use projector::{Projected, Projection};
pub use render::{Contents, Iter, RenderOptions};
pub use samples::Sample;
