//! # Walking a directory
//!
//! [`walk`] reads a directory and every directory below it, depth first, and
//! returns the hierarchy as a sequence of [`Node`]s. Files are only kept when
//! asked for; directories are always kept, even when nothing inside them was.
//!
//! A failed read of the root directory is reported through [`Walk::error`],
//! together with whatever entries had already been read. A failed read anywhere
//! below the root is not an error: the directory stays in the tree with the
//! children read so far (usually none), and the failure is recorded in
//! [`Walk::skipped`] so callers that care can report it.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::error::Error;
use crate::node::Node;

/// Result of walking a root directory.
#[derive(Debug)]
pub struct Walk {
    nodes: Vec<Node>,
    error: Option<Error>,
    skipped: Vec<Skipped>,
}

/// A directory below the root that could not be read in full.
#[derive(Debug)]
pub struct Skipped {
    pub path: PathBuf,
    pub error: io::Error,
}

impl Walk {
    /// Nodes found directly inside the root, in enumeration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    /// The error raised while reading the root itself, if any.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn into_error(self) -> Option<Error> {
        self.error
    }

    /// Nested directories whose read failed and was ignored.
    pub fn skipped(&self) -> &[Skipped] {
        &self.skipped
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Strict view of the walk: the nodes, or the root error with the partial
    /// nodes dropped.
    pub fn into_result(self) -> crate::error::Result<Vec<Node>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.nodes),
        }
    }
}

/// Walk `path`, keeping regular files only if `with_files` is set.
pub fn walk<P: AsRef<Path>>(path: P, with_files: bool) -> Walk {
    let path = path.as_ref();
    let mut skipped = Vec::new();
    let (nodes, error) = read_nodes(path, with_files, &mut skipped);

    debug!(
        "walked {}: {} nodes, {} skipped directories",
        path.display(),
        crate::node::count(&nodes),
        skipped.len()
    );

    Walk {
        nodes,
        error: error.map(|err| Error::read_dir(path, err)),
        skipped,
    }
}

// Reads one directory. On failure the nodes accumulated so far are returned
// along with the error that stopped the read.
fn read_nodes(
    path: &Path,
    with_files: bool,
    skipped: &mut Vec<Skipped>,
) -> (Vec<Node>, Option<io::Error>) {
    let mut nodes = Vec::new();

    trace!("reading {}", path.display());
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(err) => return (nodes, Some(err)),
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => return (nodes, Some(err)),
        };
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(err) if vanished(&err) => continue,
            Err(err) => return (nodes, Some(err)),
        };
        let name = entry.file_name().to_string_lossy().into_owned();

        if file_type.is_dir() {
            let dir_path = entry.path();
            let (children, err) = read_nodes(&dir_path, with_files, skipped);
            if let Some(err) = err {
                debug!("ignoring read failure in {}: {}", dir_path.display(), err);
                skipped.push(Skipped {
                    path: dir_path,
                    error: err,
                });
            }
            nodes.push(Node::directory(name, children));
        } else if with_files {
            match file_node(name, entry.metadata()) {
                Ok(Some(node)) => nodes.push(node),
                Ok(None) => {}
                Err(err) => return (nodes, Some(err)),
            }
        }
    }

    (nodes, None)
}

// An entry removed between listing the directory and looking it up is left
// out; any other metadata failure stops the read.
fn file_node(name: String, metadata: io::Result<fs::Metadata>) -> io::Result<Option<Node>> {
    match metadata {
        Ok(metadata) => Ok(Some(Node::file(name, metadata.len()))),
        Err(err) if vanished(&err) => {
            debug!("{} vanished while reading its directory", name);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn vanished(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::NotFound
}
