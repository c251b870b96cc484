use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Second positional value that turns on file listing. Anything else lists
/// directories only.
pub const FILES_MODE: &str = "-f";

const HELP_AND_VERSION: [&str; 4] = ["-h", "--help", "-V", "--version"];

/// Everything the command line decides for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub path: PathBuf,
    pub with_files: bool,
    pub debug: bool,
}

impl Options {
    pub fn from_matches(matches: &clap::ArgMatches) -> Options {
        // `path` is required, so clap has already rejected its absence.
        Options {
            path: PathBuf::from(matches.value_of_os("path").unwrap_or_default()),
            with_files: matches.value_of_os("mode") == Some(OsStr::new(FILES_MODE)),
            debug: matches.is_present("debug"),
        }
    }
}

fn app<'a, 'b>(builtin_flags: bool) -> clap::App<'a, 'b> {
    let app = clap::App::new("dtree")
        .version(clap::crate_version!())
        .author(clap::crate_authors!())
        .about("Print a directory hierarchy as a tree")
        // `-f` is taken as the value of `mode`, not as an unknown flag.
        .setting(clap::AppSettings::AllowLeadingHyphen)
        .arg(clap::Arg::from_usage("-d --debug 'Enable debug output'"))
        .arg(
            clap::Arg::with_name("path")
                .help("Directory to list")
                .required(true)
                .index(1),
        )
        .arg(
            clap::Arg::with_name("mode")
                .help("Pass -f to list files as well as directories")
                .index(2),
        );

    if builtin_flags {
        app
    } else {
        app.setting(clap::AppSettings::DisableHelpFlags)
            .setting(clap::AppSettings::DisableVersion)
    }
}

/// Parse the process arguments. Usage errors, `--help` and `--version` print
/// their message and exit the process.
pub fn parse_flags() -> Result<Options> {
    match parse_flags_from(std::env::args_os()) {
        Err(Error::Clap(err)) => err.exit(),
        other => other,
    }
}

/// `--help` and `--version` (and their short forms) are only honoured as the
/// sole argument. Anywhere else they are ordinary values, so `dtree dir -h`
/// lists `dir` without files.
pub fn parse_flags_from<I, T>(args: I) -> Result<Options>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let builtin_flags = args.len() == 2
        && HELP_AND_VERSION
            .iter()
            .any(|flag| args[1].as_os_str() == OsStr::new(flag));

    let matches = app(builtin_flags).get_matches_from_safe(args)?;
    Ok(Options::from_matches(&matches))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options> {
        parse_flags_from(args.iter().copied())
    }

    #[test]
    fn test_path_only() {
        let options = parse(&["dtree", "some/dir"]).unwrap();
        assert_eq!(
            options,
            Options {
                path: PathBuf::from("some/dir"),
                with_files: false,
                debug: false,
            }
        );
    }

    #[test]
    fn test_files_mode() {
        let options = parse(&["dtree", ".", "-f"]).unwrap();
        assert_eq!(options.path, PathBuf::from("."));
        assert!(options.with_files);
    }

    #[test]
    fn test_other_mode_lists_directories_only() {
        let options = parse(&["dtree", ".", "files"]).unwrap();
        assert!(!options.with_files);

        let options = parse(&["dtree", ".", "-F"]).unwrap();
        assert!(!options.with_files);
    }

    #[test]
    fn test_debug_switch() {
        let options = parse(&["dtree", "--debug", ".", "-f"]).unwrap();
        assert!(options.debug);
        assert!(options.with_files);
    }

    #[test]
    fn test_missing_path_is_usage_error() {
        match parse(&["dtree"]) {
            Err(Error::Clap(err)) => {
                assert_eq!(err.kind, clap::ErrorKind::MissingRequiredArgument)
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_mode_lists_directories_only() {
        use std::os::unix::ffi::OsStrExt;

        let args = vec![
            OsString::from("dtree"),
            OsString::from("."),
            OsStr::from_bytes(b"\xff").to_os_string(),
        ];
        let options = parse_flags_from(args).unwrap();
        assert_eq!(options.path, PathBuf::from("."));
        assert!(!options.with_files);
    }

    #[test]
    fn test_help_and_version_as_mode_are_plain_values() {
        for mode in ["-h", "--help", "-V", "--version"] {
            let options = parse(&["dtree", ".", mode]).unwrap();
            assert_eq!(options.path, PathBuf::from("."));
            assert!(!options.with_files, "mode {}", mode);
        }
    }

    #[test]
    fn test_lone_help_and_version_are_honoured() {
        match parse(&["dtree", "--help"]) {
            Err(Error::Clap(err)) => assert_eq!(err.kind, clap::ErrorKind::HelpDisplayed),
            other => panic!("unexpected result: {:?}", other),
        }
        match parse(&["dtree", "-V"]) {
            Err(Error::Clap(err)) => assert_eq!(err.kind, clap::ErrorKind::VersionDisplayed),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_too_many_arguments_is_usage_error() {
        assert!(matches!(
            parse(&["dtree", ".", "-f", "extra"]),
            Err(Error::Clap(_))
        ));
    }
}
