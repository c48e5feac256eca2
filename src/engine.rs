use crate::error::ListcatError;
use crate::filter::{extension_allowed, path_allowed};
use crate::options::ListcatOptions;
use crate::output::render_entry;
use crate::types::ListingSummary;
use ignore::WalkBuilder;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &ListcatOptions) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .max_depth(options.max_depth)
            .follow_links(options.follow_links);
        Self {
            inner: builder.build(),
        }
    }
    /// Yields every non-directory entry below the root, in enumeration order.
    fn into_files(self) -> impl Iterator<Item = PathBuf> {
        self.inner.filter_map(|result| match result {
            Ok(entry) if entry.depth() == 0 => None,
            Ok(entry) => {
                if entry.path().is_dir() {
                    None
                } else {
                    Some(entry.into_path())
                }
            }
            Err(e) => {
                warn!("Error walking entry: {}", e);
                None
            }
        })
    }
}
fn check_root(root: &Path) -> Result<(), ListcatError> {
    let root_error = |source| ListcatError::Root {
        path: root.to_path_buf(),
        source,
    };
    let metadata = fs::metadata(root).map_err(root_error)?;
    if !metadata.is_dir() {
        return Err(ListcatError::NotADirectory(root.to_path_buf()));
    }
    fs::read_dir(root).map_err(root_error)?;
    Ok(())
}
fn read_source(path: &Path, options: &ListcatOptions) -> Result<String, ListcatError> {
    let bytes = fs::read(path).map_err(|e| ListcatError::io(path, e))?;
    options
        .encoding
        .decode(bytes)
        .ok_or_else(|| ListcatError::Decode {
            path: path.to_path_buf(),
            encoding: options.encoding,
        })
}
fn render_file(
    path: &Path,
    path_str: &str,
    options: &ListcatOptions,
) -> Result<Vec<u8>, ListcatError> {
    let content = read_source(path, options)?;
    let entry = render_entry(path_str, options.separator, &content);
    options
        .encoding
        .encode(&entry)
        .ok_or_else(|| ListcatError::Encode {
            path: path.to_path_buf(),
            encoding: options.encoding,
        })
}
/// Identity of the output file, used to keep it out of its own listing.
struct OutputFile {
    name: std::ffi::OsString,
    canonical: PathBuf,
}
impl OutputFile {
    fn resolve(options: &ListcatOptions) -> Option<Self> {
        if !options.skip_output_file {
            return None;
        }
        let canonical = fs::canonicalize(&options.output).ok()?;
        let name = canonical.file_name()?.to_os_string();
        Some(Self { name, canonical })
    }
    fn is(&self, path: &Path) -> bool {
        path.file_name() == Some(self.name.as_os_str())
            && fs::canonicalize(path).is_ok_and(|p| p == self.canonical)
    }
}
/// Appends the listing of `options.root` to an already open sink.
///
/// Per-file read and encoding failures are logged and counted; only a failing
/// root or a failing write to `writer` aborts the run.
pub fn write_listing<W: Write>(
    options: &ListcatOptions,
    writer: &mut W,
) -> Result<ListingSummary, ListcatError> {
    check_root(&options.root)?;
    append_entries(options, writer)
}
/// Appends the listing of `options.root` to `options.output`, creating the
/// file if needed. Existing content is never truncated.
pub fn create_listing(options: &ListcatOptions) -> Result<ListingSummary, ListcatError> {
    debug!("Starting listing with root: {}", options.root.display());
    // Root is validated before the output is opened so a bad root creates nothing.
    check_root(&options.root)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&options.output)
        .map_err(|e| ListcatError::output(&options.output, e))?;
    let mut writer = BufWriter::new(file);
    let summary = append_entries(options, &mut writer)?;
    debug!(
        "Listing done: {} discovered, {} processed, {} skipped, {} failed",
        summary.discovered, summary.processed, summary.skipped, summary.failed
    );
    Ok(summary)
}
fn append_entries<W: Write>(
    options: &ListcatOptions,
    writer: &mut W,
) -> Result<ListingSummary, ListcatError> {
    let output_file = OutputFile::resolve(options);
    let mut summary = ListingSummary::default();
    for path in Walker::new(options).into_files() {
        summary.discovered += 1;
        let path_str = path.to_string_lossy();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        let included = path_allowed(&path_str, &options.skip_dirs)
            && extension_allowed(&file_name, &options.allowed_extensions);
        if !included {
            debug!("Skipped file: {}", path_str);
            summary.skipped += 1;
            continue;
        }
        if output_file.as_ref().is_some_and(|out| out.is(&path)) {
            debug!("Skipped output file: {}", path_str);
            summary.skipped += 1;
            continue;
        }
        info!("Processing file: {}", path_str);
        summary.processed += 1;
        match render_file(&path, &path_str, options) {
            Ok(bytes) => writer
                .write_all(&bytes)
                .map_err(|e| ListcatError::output(&options.output, e))?,
            Err(e) if e.is_per_file() => {
                error!("{}: processing error: {}", path_str, e);
                summary.failed += 1;
                summary.failures.push(path.clone());
            }
            Err(e) => return Err(e),
        }
    }
    writer
        .flush()
        .map_err(|e| ListcatError::output(&options.output, e))?;
    Ok(summary)
}
