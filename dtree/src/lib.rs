extern crate clap;
extern crate dirtree;

pub mod cli;
pub mod error;
pub mod logging;

use std::io::Write;

use log::debug;

use crate::cli::Options;
use crate::error::Result;

/// List `options.path` to `out`.
pub fn run<W: Write + ?Sized>(out: &mut W, options: &Options) -> Result<()> {
    debug!(
        "listing {} ({})",
        options.path.display(),
        if options.with_files {
            "directories and files"
        } else {
            "directories only"
        }
    );
    dirtree::dir_tree(out, &options.path, options.with_files)?;
    Ok(())
}
