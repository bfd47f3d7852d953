use log::LevelFilter;
use std::process::ExitCode;

fn main() -> ExitCode {
	env_logger::builder()
		.filter_level(LevelFilter::Warn)
		.parse_default_env()
		.init();
	let code = bindshader::run(std::env::args_os());
	ExitCode::from(u8::try_from(code).unwrap_or(u8::MAX))
}
