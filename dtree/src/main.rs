extern crate dtree;

use std::io::{self, BufWriter, Write};
use std::process;

use dtree::error::Error;

fn main() {
    let options = match dtree::cli::parse_flags() {
        Ok(options) => options,
        Err(err) => fail(err),
    };

    dtree::logging::init(options.debug);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    // Whatever was listed before a failure still goes out.
    let result = dtree::run(&mut out, &options).and(out.flush().map_err(Error::from));
    if let Err(err) = result {
        fail(err);
    }
}

fn fail(err: Error) -> ! {
    eprintln!("Error: {}", err);
    process::exit(1);
}
