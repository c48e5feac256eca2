//! Inclusion predicates applied to every discovered file.

use std::path::MAIN_SEPARATOR;

/// Returns `false` if any separator-delimited segment of `path` equals one of
/// `skip_dirs`.
///
/// The whole path is checked, root prefix included, so a skipped name that
/// appears in the root argument itself rejects every file below it.
pub fn path_allowed(path: &str, skip_dirs: &[String]) -> bool {
    if skip_dirs.is_empty() {
        return true;
    }
    !path
        .split(MAIN_SEPARATOR)
        .any(|segment| skip_dirs.iter().any(|dir| dir == segment))
}

/// Extension of a file name, leading dot included, or `""` if it has none.
///
/// Leading dots do not start an extension: `.bashrc` has none, `a.tar.gz`
/// has `.gz` and `name.` has `.`.
pub fn extension_of(file_name: &str) -> &str {
    let stem_start = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[stem_start..].rfind('.') {
        Some(idx) => &file_name[stem_start + idx..],
        None => "",
    }
}

/// An empty `allowed` list lets every file through; otherwise the extension
/// must be an exact, case-sensitive member.
pub fn extension_allowed(file_name: &str, allowed: &[String]) -> bool {
    if allowed.is_empty() {
        return true;
    }
    let ext = extension_of(file_name);
    allowed.iter().any(|a| a == ext)
}
