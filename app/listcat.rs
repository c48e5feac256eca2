//! Command-line interface for listcat.
//!
//! Walks a directory tree and appends every matching file, under a path
//! header, to a single output file.

use clap::{ArgGroup, Parser};
use listcat::{
    DEFAULT_OUTPUT, DEFAULT_SEPARATOR, ListcatBuilder, ListcatOptions, ListingSummary,
    TextEncoding, create_listing,
};
use std::env;
use std::path::PathBuf;
use std::process::exit;
use tracing::Level;

/// listcat — create one text file from many text files
#[derive(Parser, Debug)]
#[command(name = "listcat", version, about, long_about = None, group(
    ArgGroup::new("verbosity")
        .required(false)
        .args(["verbose", "debug"]),
))]
struct Cli {
    /// Directory to scan (default current working dir)
    source: Option<PathBuf>,

    /// Output file, appended to if it exists
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    out: PathBuf,

    /// Names of directories to skip, matched against every path segment
    #[arg(short = 's', long = "skip-dir", num_args = 0..)]
    skip_dirs: Vec<String>,

    /// Extensions to include, with leading dot (ex.: .py .tsx); all if empty
    #[arg(short = 'a', long = "allow-ext", num_args = 0..)]
    allow_ext: Vec<String>,

    /// Character used to underline each path header
    #[arg(long, default_value_t = DEFAULT_SEPARATOR, conflicts_with = "no_separator")]
    separator: char,

    /// Do not underline path headers
    #[arg(long)]
    no_separator: bool,

    /// Encoding for reading sources and writing the output (utf8, latin1)
    #[arg(long, default_value = "utf8", value_parser = parse_encoding)]
    encoding: TextEncoding,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Leave the output file out of the listing if it lies inside the scanned tree
    #[arg(long)]
    skip_output: bool,

    /// Print a JSON summary of the run on stdout
    #[arg(long)]
    summary: bool,

    /// Report each processed file
    #[arg(short, long)]
    verbose: bool,

    /// Report each processed and skipped file
    #[arg(short, long)]
    debug: bool,
}

fn parse_encoding(s: &str) -> Result<TextEncoding, String> {
    s.parse()
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.debug {
            Level::DEBUG
        } else if self.verbose {
            Level::INFO
        } else {
            Level::WARN
        }
    }

    fn into_options(self, root: PathBuf) -> ListcatOptions {
        let separator = (!self.no_separator).then_some(self.separator);
        let builder = ListcatBuilder::new(root)
            .output(self.out)
            .skip_dirs(self.skip_dirs)
            .allowed_extensions(self.allow_ext)
            .separator(separator)
            .encoding(self.encoding)
            .follow_links(self.follow_links)
            .skip_output_file(self.skip_output);

        match self.max_depth {
            Some(depth) => builder.max_depth(depth),
            None => builder.no_limit_depth(),
        }
        .build()
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("{:?}", cli);

    let root = match cli.source.clone() {
        Some(path) => path,
        None => env::current_dir().unwrap_or_else(|e| {
            eprintln!("Error: cannot determine current directory: {}", e);
            exit(1);
        }),
    };
    let print_summary = cli.summary;
    let options = cli.into_options(root);

    match create_listing(&options) {
        Ok(summary) if print_summary => output_summary(&summary),
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn output_summary(summary: &ListingSummary) {
    let json = serde_json::to_string_pretty(summary).unwrap_or_else(|e| {
        eprintln!("JSON serialization error: {}", e);
        exit(1);
    });
    println!("{}", json);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_original_tool() {
        let cli = Cli::try_parse_from(["listcat"]).unwrap();
        assert!(cli.source.is_none());
        assert_eq!(cli.out, PathBuf::from("out.txt"));
        assert_eq!(cli.log_level(), Level::WARN);
        let options = cli.into_options(PathBuf::from("."));
        assert_eq!(options.separator, Some('-'));
        assert!(options.skip_dirs.is_empty());
        assert!(options.allowed_extensions.is_empty());
        assert!(!options.skip_output_file);
    }

    #[test]
    fn multi_value_filters() {
        let cli = Cli::try_parse_from([
            "listcat", "proj", "-s", "target", ".git", "-a", ".rs", ".toml", "-o", "l.txt",
        ])
        .unwrap();
        assert_eq!(cli.source, Some(PathBuf::from("proj")));
        assert_eq!(cli.skip_dirs, vec!["target", ".git"]);
        assert_eq!(cli.allow_ext, vec![".rs", ".toml"]);
    }

    #[test]
    fn verbosity_flags_are_exclusive() {
        assert!(Cli::try_parse_from(["listcat", "-v", "-d"]).is_err());
        let cli = Cli::try_parse_from(["listcat", "-d"]).unwrap();
        assert_eq!(cli.log_level(), Level::DEBUG);
    }

    #[test]
    fn no_separator_disables_underline() {
        let cli = Cli::try_parse_from(["listcat", "--no-separator"]).unwrap();
        assert_eq!(cli.into_options(PathBuf::from(".")).separator, None);
        assert!(Cli::try_parse_from(["listcat", "--no-separator", "--separator", "="]).is_err());
    }
}
