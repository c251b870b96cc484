//! # Rendering
//!
//! Turns a node sequence into text, one line per node, depth first:
//!
//! ```ascii
//!     ├───src
//!     │   ├───main.rs (42b)
//!     │   └───lib.rs (7b)
//!     └───README.md (empty)
//! ```
//!
//! Every line starts with the prefix fragments inherited from its ancestors,
//! followed by a connector and the node's label. A directory that still has
//! siblings after it hands `│\t` down to its children so the vertical line keeps
//! going; the last directory of a sequence hands down a bare `\t`. Indentation
//! is a tab, not spaces.
use std::io::Write;

use crate::node::Node;

/// Connector for a node followed by more siblings.
pub const BRANCH: &str = "├───";
/// Connector for the last node of a sequence.
pub const LAST_BRANCH: &str = "└───";
/// Prefix fragment below a node that has more siblings.
pub const PIPE: &str = "│\t";
/// Prefix fragment below the last node of a sequence.
pub const INDENT: &str = "\t";

/// Write `nodes` to `out` as a tree. An empty sequence writes nothing.
pub fn render<W: Write + ?Sized>(out: &mut W, nodes: &[Node]) -> std::io::Result<()> {
    let mut prefixes = Vec::new();
    render_with_prefixes(out, nodes, &mut prefixes)
}

/// Write `nodes` below the given ancestor prefixes.
///
/// `prefixes` is used as a stack: fragments pushed for a directory's children
/// are popped again before moving to the next sibling, so on return it holds
/// exactly what it held on entry.
pub fn render_with_prefixes<'a, W: Write + ?Sized>(
    out: &mut W,
    nodes: &[Node],
    prefixes: &mut Vec<&'a str>,
) -> std::io::Result<()> {
    let last = nodes.len().saturating_sub(1);

    for (i, node) in nodes.iter().enumerate() {
        let (connector, fragment) = if i == last {
            (LAST_BRANCH, INDENT)
        } else {
            (BRANCH, PIPE)
        };

        for prefix in prefixes.iter() {
            out.write_all(prefix.as_bytes())?;
        }
        writeln!(out, "{}{}", connector, node)?;

        if let Node::Directory(dir) = node {
            prefixes.push(fragment);
            let rendered = render_with_prefixes(out, &dir.nodes, prefixes);
            prefixes.pop();
            rendered?;
        }
    }

    Ok(())
}

/// Render `nodes` into a `String`.
pub fn to_string(nodes: &[Node]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = render(&mut buf, nodes);
    String::from_utf8_lossy(&buf).into_owned()
}
