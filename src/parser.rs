const ESC: u8 = 0x1B;

/// Bytes that close an open escape sequence.
pub const TERMINATORS: &[u8] = b"ABCDEFGHIJKSTsufm";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
	Text(&'a str),
	/// Everything between ESC and the terminator, exclusive on both ends.
	Sequence {
		body: &'a str,
		terminator: char,
	},
	/// An escape sequence still open when the input ran out.
	Unterminated(&'a str),
}

impl<'a> Token<'a> {
	/// The parameter body of a `ESC [ ... m` sequence.
	pub fn sgr_params(&self) -> Option<&'a str> {
		match *self {
			Token::Sequence { body, terminator: 'm' } => body.strip_prefix('['),
			_ => None,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
	Text,
	InEscape,
}

/// Single pass scanner splitting terminal output into text runs and escape sequences.
///
/// ESC and every terminator are ASCII so slicing at their positions always lands on
/// a char boundary.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
	input: &'a str,
	pos: usize,
}

impl<'a> Tokenizer<'a> {
	pub fn new(input: &'a str) -> Self {
		Self { input, pos: 0 }
	}

	fn scan_until(&self, state: State) -> (State, usize) {
		let bytes = self.input.as_bytes();
		let mut i = self.pos;

		match state {
			State::Text => {
				while i < bytes.len() && bytes[i] != ESC {
					i += 1;
				}
				(State::Text, i)
			},
			State::InEscape => {
				while i < bytes.len() {
					if TERMINATORS.contains(&bytes[i]) {
						return (State::Text, i);
					}
					i += 1;
				}
				(State::InEscape, i)
			},
		}
	}
}

impl<'a> Iterator for Tokenizer<'a> {
	type Item = Token<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		let bytes = self.input.as_bytes();
		if self.pos >= bytes.len() {
			return None;
		}

		if bytes[self.pos] != ESC {
			let start = self.pos;
			let (_, end) = self.scan_until(State::Text);
			self.pos = end;
			return Some(Token::Text(&self.input[start..end]));
		}

		self.pos += 1;
		let start = self.pos;
		match self.scan_until(State::InEscape) {
			(State::Text, end) => {
				self.pos = end + 1;
				Some(Token::Sequence {
					body: &self.input[start..end],
					terminator: bytes[end] as char,
				})
			},
			(State::InEscape, end) => {
				self.pos = end;
				Some(Token::Unterminated(&self.input[start..end]))
			},
		}
	}
}
