use crate::output::TextEncoding;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
pub const DEFAULT_OUTPUT: &str = "out.txt";
pub const DEFAULT_SEPARATOR: char = '-';
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListcatOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub skip_dirs: Vec<String>,
    pub allowed_extensions: Vec<String>,
    pub separator: Option<char>,
    pub encoding: TextEncoding,
    pub follow_links: bool,
    pub max_depth: Option<usize>,
    pub skip_output_file: bool,
}
impl Default for ListcatOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            skip_dirs: Vec::new(),
            allowed_extensions: Vec::new(),
            separator: Some(DEFAULT_SEPARATOR),
            encoding: TextEncoding::Utf8,
            follow_links: false,
            max_depth: None,
            skip_output_file: false,
        }
    }
}
#[derive(Debug, Default)]
pub struct ListcatBuilder {
    options: ListcatOptions,
}
impl ListcatBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ListcatOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn skip_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.skip_dirs = names.into_iter().map(Into::into).collect();
        self
    }
    pub fn allowed_extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allowed_extensions = exts.into_iter().map(Into::into).collect();
        self
    }
    /// `None` drops the underline below each path header.
    pub fn separator(mut self, sep: Option<char>) -> Self {
        self.options.separator = sep;
        self
    }
    pub fn encoding(mut self, encoding: TextEncoding) -> Self {
        self.options.encoding = encoding;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn skip_output_file(mut self, yes: bool) -> Self {
        self.options.skip_output_file = yes;
        self
    }
    pub fn build(self) -> ListcatOptions {
        self.options
    }
}
