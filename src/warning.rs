use thiserror::Error;

/// Non-fatal problems found in terminal output while converting it.
///
/// None of these stop a conversion. The affected styling is dropped and the text
/// is kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
	/// An SGR parameter (or unresolved run of parameters) with no entry in the code table.
	#[error("unknown SGR code `{code}`")]
	UnknownCode { code: String },
	/// A complete escape sequence that does not select graphic rendition.
	#[error("ignored escape sequence `{body}` terminated by `{terminator}`")]
	IgnoredSequence { body: String, terminator: char },
	/// Input ended while an escape sequence was still open.
	#[error("unterminated escape sequence `{body}` at end of input")]
	Unterminated { body: String },
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn display_test() {
		assert_eq!(
			Warning::UnknownCode {
				code: String::from("38;5;196")
			}
			.to_string(),
			"unknown SGR code `38;5;196`"
		);
		assert_eq!(
			Warning::IgnoredSequence {
				body: String::from("[2"),
				terminator: 'J'
			}
			.to_string(),
			"ignored escape sequence `[2` terminated by `J`"
		);
		assert_eq!(
			Warning::Unterminated {
				body: String::from("[38")
			}
			.to_string(),
			"unterminated escape sequence `[38` at end of input"
		);
	}
}
