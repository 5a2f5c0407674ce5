//! Re-root labeled trees at any node and find the unique path between two nodes.
//!
//! ```
//! use pov::domain::{build, Tree};
//!
//! let mut tree = build(
//!     "one",
//!     [
//!         build("two", [Tree::leaf("three")]),
//!         build("four", [build("five", [Tree::leaf("six")]), Tree::leaf("seven")]),
//!     ],
//! );
//! let path = tree.path_to("three", "seven").unwrap();
//! assert_eq!(path, ["three", "two", "one", "four", "seven"]);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
