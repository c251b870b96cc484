//! dirtree
//! -------
//!
//! Lists a directory hierarchy as a box-drawn tree:
//!
//! ```ascii
//!     ├───a
//!     │   └───c.txt (empty)
//!     └───b.txt (12b)
//! ```
//!
//! Listing happens in two passes. [`walk::walk`] reads the whole hierarchy into
//! memory, then [`render::render`] writes it out. [`dir_tree`] does both.
pub mod error;
pub mod node;
pub mod render;
pub mod walk;

use std::io::Write;
use std::path::Path;

pub use crate::error::{Error, Result};
pub use crate::node::{Directory, File, Node};
pub use crate::walk::{walk, Skipped, Walk};

/// Walk `path` and write its tree to `out`.
///
/// Files are listed only when `with_files` is set. If the root cannot be read,
/// whatever was read before the failure is still written and the error is
/// returned afterwards. Failures below the root are ignored.
pub fn dir_tree<W: Write + ?Sized, P: AsRef<Path>>(
    out: &mut W,
    path: P,
    with_files: bool,
) -> Result<()> {
    let walk = walk(path, with_files);
    render::render(out, walk.nodes())?;
    match walk.into_error() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
