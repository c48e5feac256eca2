//! # Listcat
//!
//! `listcat` walks a directory tree and appends the text of every file that
//! passes its filters to a single output file. Each file is written under a
//! header made of its path and an underline of separator characters.
//!
//! Two filters decide which files are listed:
//!
//! - directory names to skip, matched against every segment of a file's path;
//! - allowed extensions (with their leading dot), where an empty list allows all.
//!
//! The output file is opened in append mode, so repeated runs accumulate.
//! A file that cannot be read or decoded is logged through `tracing` and
//! skipped without aborting the run.
//!
//! # Example
//!
//! ```no_run
//! use listcat::{ListcatBuilder, create_listing};
//!
//! let options = ListcatBuilder::new("src")
//!     .output("listing.txt")
//!     .skip_dirs(["target", ".git"])
//!     .allowed_extensions([".rs", ".toml"])
//!     .build();
//!
//! let summary = create_listing(&options).expect("Failed to create listing");
//! println!("{} files written", summary.written());
//! ```

mod engine;
mod error;
pub mod filter;
mod options;
pub mod output;
mod types;

pub use engine::{create_listing, write_listing};
pub use error::ListcatError;
pub use options::{DEFAULT_OUTPUT, DEFAULT_SEPARATOR, ListcatBuilder, ListcatOptions};
pub use output::TextEncoding;
pub use types::ListingSummary;
