//! Domain layer: labeled trees, re-rooting and path search
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod error;
pub mod notation;
pub mod pov;
pub mod render;

pub use arena::{Node, Tree, TreeIterator, TreeNode};
pub use builder::build;
pub use error::DomainError;
pub use notation::parse;
pub use render::ToTermTree;
