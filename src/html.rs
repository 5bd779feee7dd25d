/// Writes the wrapped text with HTML metacharacters replaced by entities.
///
/// Only `& < > " '` and NUL are rewritten. Control bytes such as ESC pass
/// through untouched so escape sequences survive for the tokenizer.
#[derive(Debug, Clone, Copy)]
pub struct Escaped<'a>(pub &'a str);

impl std::fmt::Display for Escaped<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		let mut last = 0;

		for (i, c) in self.0.char_indices() {
			let entity = match c {
				'&' => "&amp;",
				'<' => "&lt;",
				'>' => "&gt;",
				'"' => "&#34;",
				'\'' => "&#39;",
				'\0' => "\u{FFFD}",
				_ => continue,
			};

			f.write_str(&self.0[last..i])?;
			f.write_str(entity)?;
			last = i + c.len_utf8();
		}

		f.write_str(&self.0[last..])
	}
}

pub fn escape(input: &str) -> String {
	Escaped(input).to_string()
}

/// An HTML fragment that is already safe to embed without further escaping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Html(String);

impl Html {
	pub(crate) fn from_trusted(markup: String) -> Self {
		Self(markup)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_string(self) -> String {
		self.0
	}
}

impl std::fmt::Display for Html {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for Html {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl PartialEq<&str> for Html {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}
