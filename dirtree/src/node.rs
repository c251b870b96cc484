//! # Nodes
//!
//! A directory hierarchy is held in memory as a tree of [`Node`]s. Each node is
//! either a [`Directory`], which owns the nodes found inside it, or a [`File`],
//! which only remembers its size.
//!
//! The children of a directory are kept in the order the filesystem handed them
//! out when the directory was read. Nothing in this crate sorts them.
//!
//! Nodes know how to label themselves through `Display`:
//!
//! ```ascii
//!     src            <- directory
//!     main.rs (42b)  <- file with 42 bytes
//!     .keep (empty)  <- file with 0 bytes
//! ```
use std::fmt;

/// An entry in the tree, either a File or a Directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory(Directory),
    File(File),
}

/// A directory and everything read from inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    pub name: String,
    pub nodes: Vec<Node>,
}

/// A non-directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub name: String,
    pub size: u64,
}

impl Node {
    pub fn directory<S: Into<String>>(name: S, nodes: Vec<Node>) -> Node {
        Node::Directory(Directory {
            name: name.into(),
            nodes,
        })
    }

    pub fn file<S: Into<String>>(name: S, size: u64) -> Node {
        Node::File(File {
            name: name.into(),
            size,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Directory(dir) => &dir.name,
            Node::File(file) => &file.name,
        }
    }

    /// Children of a directory. Files have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Directory(dir) => &dir.nodes,
            Node::File(_) => &[],
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File(_))
    }

    /// Number of nodes below this one, not counting the node itself.
    pub fn count(&self) -> usize {
        count(self.children())
    }
}

/// Number of nodes in `nodes` and all of their descendants.
pub fn count(nodes: &[Node]) -> usize {
    nodes.iter().map(|node| 1 + node.count()).sum()
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Directory(dir) => fmt::Display::fmt(dir, f),
            Node::File(file) => fmt::Display::fmt(file, f),
        }
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.size == 0 {
            write!(f, "{} (empty)", self.name)
        } else {
            write!(f, "{} ({}b)", self.name, self.size)
        }
    }
}
