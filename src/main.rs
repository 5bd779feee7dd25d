use std::io::{Read, Write, stdin, stdout};

use anyhow::Context;
use log::info;

use ansipage::Conversion;

fn main() -> anyhow::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let mut buffer = Vec::new();
	stdin().read_to_end(&mut buffer).context("Failed to read stdin")?;
	let input = String::from_utf8_lossy(&buffer);

	let (html, warnings) = Conversion::convert(input.trim()).into_parts();
	if !warnings.is_empty() {
		info!("Converted with {} warning(s)", warnings.len());
	}

	let mut out = stdout().lock();
	writeln!(out, "{html}").context("Failed to write html to stdout")?;
	out.flush().context("Failed to flush stdout")?;

	Ok(())
}
