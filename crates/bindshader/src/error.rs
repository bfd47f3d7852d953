use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Process exit code of a successful invocation.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_USAGE: i32 = 2;
pub const EXIT_OPEN_FAILURE: i32 = 3;
pub const EXIT_WRITE_FAILURE: i32 = 4;

#[derive(Error)]
pub enum BindShaderError {
	#[error("{0}")]
	Usage(String),
	#[error("failed to open `{}`: {source}", .path.display())]
	OpenFailure { path: PathBuf, source: io::Error },
	#[error("failed to write to `{}`: {source}", .path.display())]
	WriteFailure { path: PathBuf, source: io::Error },
}

impl BindShaderError {
	/// Each error kind exits with its own code, so build steps can tell them apart without parsing the message.
	pub fn exit_code(&self) -> i32 {
		match self {
			BindShaderError::Usage(_) => EXIT_USAGE,
			BindShaderError::OpenFailure { .. } => EXIT_OPEN_FAILURE,
			BindShaderError::WriteFailure { .. } => EXIT_WRITE_FAILURE,
		}
	}
}

impl Debug for BindShaderError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(self, f)
	}
}
