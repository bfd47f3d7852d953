use crate::error::BindShaderError;
use clap::ValueEnum;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Leading character on a path argument that selects [`Mode::Append`].
pub const APPEND_MARKER: char = '+';

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Mode {
	/// Create the file or truncate it to the single new line.
	#[default]
	Create,
	/// Keep existing content and add the new line at the end, creating the file if missing.
	Append,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Target {
	pub path: PathBuf,
	pub mode: Mode,
}

impl Target {
	/// Target `path` verbatim with an explicit `mode`. A leading `+` is part of the file name.
	pub fn new(path: impl Into<PathBuf>, mode: Mode) -> Self {
		Self {
			path: path.into(),
			mode,
		}
	}

	/// Parse a path argument carrying the optional append marker: `+out.txt` appends to `out.txt`, anything else
	/// creates or truncates the whole argument as a path. The argument need not be UTF-8.
	pub fn from_marked(arg: impl AsRef<OsStr>) -> Result<Self, BindShaderError> {
		let arg = arg.as_ref();
		let target = match strip_marker(arg) {
			Some(path) => Self::new(path, Mode::Append),
			None => Self::new(arg, Mode::Create),
		};
		target.validate()
	}

	pub(crate) fn validate(self) -> Result<Self, BindShaderError> {
		if self.path.as_os_str().is_empty() {
			Err(BindShaderError::Usage(String::from("<output_path> must not be empty")))
		} else {
			Ok(self)
		}
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

#[cfg(unix)]
fn strip_marker(arg: &OsStr) -> Option<&OsStr> {
	use std::os::unix::ffi::OsStrExt;
	arg.as_bytes().strip_prefix(&[APPEND_MARKER as u8]).map(OsStr::from_bytes)
}

// only UTF-8 arguments can carry the marker here
#[cfg(not(unix))]
fn strip_marker(arg: &OsStr) -> Option<&OsStr> {
	arg.to_str()?.strip_prefix(APPEND_MARKER).map(OsStr::new)
}
