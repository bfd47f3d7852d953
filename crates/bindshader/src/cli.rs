use crate::error::{BindShaderError, EXIT_SUCCESS};
use crate::target::{Mode, Target};
use crate::writer::Invocation;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::debug;
use std::ffi::OsString;
use std::fmt::Display;

#[derive(Parser, Debug)]
#[command(name = "bindshader")]
#[command(version, about = "Write a single line into a generated listing file")]
pub struct Cli {
	/// Write mode. When given, <OUTPUT_PATH> is used verbatim and a leading `+` is part of the file name.
	#[arg(short, long, value_enum)]
	pub mode: Option<Mode>,
	/// File to write. A leading `+` appends to the rest of the path instead of truncating.
	pub output_path: OsString,
	/// Line to write, verbatim. Everything after <OUTPUT_PATH> is taken as text, even if it looks like a flag.
	pub text: OsString,
}

impl Cli {
	/// Returns `Ok(None)` when `--help` or `--version` was printed and there is nothing left to do.
	pub fn try_parse_args<I, T>(args: I) -> Result<Option<Self>, BindShaderError>
	where
		I: IntoIterator<Item = T>,
		T: Into<OsString> + Clone,
	{
		let args = escape_after_output_path(args.into_iter().map(Into::into));
		match Self::try_parse_from(args) {
			Ok(cli) => Ok(Some(cli)),
			Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
				print!("{err}");
				Ok(None)
			}
			Err(err) => Err(BindShaderError::Usage(err.to_string().trim_end().to_owned())),
		}
	}

	pub fn into_invocation(self) -> Result<Invocation, BindShaderError> {
		let target = match self.mode {
			Some(mode) => Target::new(self.output_path, mode).validate(),
			None => Target::from_marked(&self.output_path),
		}
		.map_err(|err| match err {
			BindShaderError::Usage(msg) => usage_error(msg),
			err => err,
		})?;
		Ok(Invocation::new(target, self.text))
	}
}

/// Inserts `--` right after the first positional so clap reads every later token as a value: `bindshader out.txt -h`
/// writes `-h` instead of printing help. Flags are only recognized before <OUTPUT_PATH>.
fn escape_after_output_path(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
	let mut args = args.into_iter();
	let mut out = Vec::new();
	out.extend(args.next());
	while let Some(arg) = args.next() {
		let bytes = arg.as_encoded_bytes();
		let escape = bytes == b"--";
		let flag = bytes.len() > 1 && bytes[0] == b'-';
		let takes_value = bytes == b"-m" || bytes == b"--mode";
		out.push(arg);
		if escape {
			// clap already treats the rest as values
			out.extend(args.by_ref());
			break;
		} else if flag {
			if takes_value {
				out.extend(args.next());
			}
		} else {
			out.push(OsString::from("--"));
			out.extend(args.by_ref());
			break;
		}
	}
	out
}

fn usage_error(msg: impl Display) -> BindShaderError {
	BindShaderError::Usage(format!("error: {msg}\n\n{}", Cli::command().render_usage()))
}

/// Parse `args` (including the program name), write the line, and return the process exit code.
///
/// Diagnostics are printed to standard output. Concurrent invocations on the same target are not serialized.
pub fn run<I, T>(args: I) -> i32
where
	I: IntoIterator<Item = T>,
	T: Into<OsString> + Clone,
{
	match try_run(args) {
		Ok(()) => EXIT_SUCCESS,
		Err(err) => {
			debug!("exiting with code {}", err.exit_code());
			println!("{err}");
			err.exit_code()
		}
	}
}

fn try_run<I, T>(args: I) -> Result<(), BindShaderError>
where
	I: IntoIterator<Item = T>,
	T: Into<OsString> + Clone,
{
	let Some(cli) = Cli::try_parse_args(args)? else {
		return Ok(());
	};
	let invocation = cli.into_invocation()?;
	debug!("{:?}", invocation);
	invocation.execute()
}
