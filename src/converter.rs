use log::{debug, trace, warn};

use crate::{
	html::{Escaped, Html},
	parser::{Token, Tokenizer},
	styles::Style,
	warning::Warning,
};

/// The result of turning one captured output stream into HTML.
///
/// Every SGR sequence closes the open span and opens a new one carrying the classes
/// of the updated style, so the markup never needs a stack to stay balanced.
#[derive(Debug, Clone)]
pub struct Conversion {
	html: String,
	style: Style,
	warnings: Vec<Warning>,
}

impl Conversion {
	pub fn convert(input: &str) -> Self {
		// escape first so raw markup from the input can never reach the output
		let escaped = Escaped(input).to_string();

		let mut result = Self {
			html: String::with_capacity(escaped.len() + 16),
			style: Style::default(),
			warnings: Vec::new(),
		};

		result.html.push_str("<span>");
		for token in Tokenizer::new(&escaped) {
			result.push_token(token);
		}
		result.html.push_str("</span>");

		trace!(
			"Converted {} input bytes into {} bytes of html with {} warning(s)",
			input.len(),
			result.html.len(),
			result.warnings.len()
		);

		result
	}

	fn push_token(&mut self, token: Token<'_>) {
		if let Some(params) = token.sgr_params() {
			self.style.apply_sgr(params, &mut self.warnings);
			self.push_span();
			return;
		}

		match token {
			Token::Text(text) => self.html.push_str(text),
			Token::Sequence { body, terminator } => {
				debug!("Ignoring escape sequence {body:?} terminated by {terminator:?}");
				self.warnings.push(Warning::IgnoredSequence {
					body: body.to_string(),
					terminator,
				});
			},
			Token::Unterminated(body) => {
				warn!("Dropping unterminated escape sequence {body:?}");
				self.warnings.push(Warning::Unterminated { body: body.to_string() });
			},
		}
	}

	fn push_span(&mut self) {
		self.html.push_str("</span><span class=\"");
		self.html.push_str(&self.style.to_string());
		self.html.push_str("\">");
	}

	pub fn warnings(&self) -> &[Warning] {
		&self.warnings
	}

	pub fn export(&self) -> Html {
		Html::from_trusted(self.html.clone())
	}

	pub fn into_parts(self) -> (Html, Vec<Warning>) {
		(Html::from_trusted(self.html), self.warnings)
	}
}

/// Converts captured terminal output into a balanced, escaped HTML fragment.
pub fn convert(input: &str) -> Html {
	Conversion::convert(input).into_parts().0
}
