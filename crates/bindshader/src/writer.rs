use crate::error::BindShaderError;
use crate::target::{Mode, Target};
use log::{debug, warn};
use std::ffi::{OsStr, OsString};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// One line to be written into a [`Target`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Invocation {
	pub target: Target,
	pub payload: OsString,
}

impl Invocation {
	pub fn new(target: Target, payload: impl Into<OsString>) -> Self {
		Self {
			target,
			payload: payload.into(),
		}
	}

	/// Write `payload` followed by `\n` into the target, then flush and close the file.
	///
	/// The line goes out in a single `write_all`, but nothing serializes concurrent invocations on the same file:
	/// callers running build steps in parallel must order writes to a shared target themselves.
	pub fn execute(&self) -> Result<(), BindShaderError> {
		let path = self.target.path();
		let mut file = open(&self.target)?;

		let payload = self.payload.as_encoded_bytes();
		let mut line = Vec::with_capacity(payload.len() + 1);
		line.extend_from_slice(payload);
		line.push(b'\n');

		let written = file.write_all(&line).and_then(|_| file.flush());
		if let Err(source) = written {
			warn!("writing to {} failed: {}", path.display(), source);
			return Err(BindShaderError::WriteFailure {
				path: path.to_path_buf(),
				source,
			});
		}
		drop(file);
		debug!("{:?} {} bytes to {}", self.target.mode, line.len(), path.display());
		Ok(())
	}
}

fn open(target: &Target) -> Result<File, BindShaderError> {
	let mut options = OpenOptions::new();
	match target.mode {
		Mode::Create => options.write(true).create(true).truncate(true),
		Mode::Append => options.append(true).create(true),
	};
	options.open(target.path()).map_err(|source| BindShaderError::OpenFailure {
		path: target.path().to_path_buf(),
		source,
	})
}

/// Replace the content of the file at `path` with the single line `payload`.
pub fn create_line(path: impl Into<PathBuf>, payload: impl AsRef<OsStr>) -> Result<(), BindShaderError> {
	Invocation::new(Target::new(path, Mode::Create).validate()?, payload.as_ref()).execute()
}

/// Add the line `payload` to the end of the file at `path`, creating it if missing.
pub fn append_line(path: impl Into<PathBuf>, payload: impl AsRef<OsStr>) -> Result<(), BindShaderError> {
	Invocation::new(Target::new(path, Mode::Append).validate()?, payload.as_ref()).execute()
}
