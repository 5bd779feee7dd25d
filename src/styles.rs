use log::warn;

use crate::warning::Warning;

/// The fixed palette downstream stylesheets know about.
///
/// This is not the full 256 color or truecolor space. Extending it changes the
/// class names a page has to style, so codes outside it are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
	Red,
	Green,
	Yellow,
	Blue,
	Purple,
	Cyan,
}

impl std::fmt::Display for Color {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Color::Red => write!(f, "red"),
			Color::Green => write!(f, "green"),
			Color::Yellow => write!(f, "yellow"),
			Color::Blue => write!(f, "blue"),
			Color::Purple => write!(f, "purple"),
			Color::Cyan => write!(f, "cyan"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
	pub color: Option<Color>,
	pub bold: bool,
	pub italic: bool,
	pub underline: bool,
}

impl Style {
	/// Applies one SGR parameter body (the text between `[` and `m`).
	///
	/// Segments are resolved left to right against [`Transition::lookup`]. A segment
	/// that matches nothing on its own is held back and joined with the following
	/// ones until the joined key matches, which is how `38;5;9` resolves. Whatever is
	/// still pending after the last segment is reported and dropped.
	pub fn apply_sgr(&mut self, params: &str, warnings: &mut Vec<Warning>) {
		let mut pending = String::new();

		for segment in params.split(';') {
			let segment = segment.trim_start_matches('0');

			if !pending.is_empty() {
				pending.push(';');
			}
			pending.push_str(segment);

			if let Some(transition) = Transition::lookup(&pending) {
				*self = transition.apply(*self);
				pending.clear();
			}
		}

		if !pending.is_empty() {
			warn!("Unknown SGR code: {pending:?}");
			warnings.push(Warning::UnknownCode { code: pending });
		}
	}
}

/// Space separated class list in the order color, bold, italic, underline.
impl std::fmt::Display for Style {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		let mut sep = "";

		if let Some(color) = self.color {
			write!(f, "{sep}{color}")?;
			sep = " ";
		}
		if self.bold {
			write!(f, "{sep}bold")?;
			sep = " ";
		}
		if self.italic {
			write!(f, "{sep}italic")?;
			sep = " ";
		}
		if self.underline {
			write!(f, "{sep}underline")?;
		}

		Ok(())
	}
}

/// A pure state change attached to one recognized SGR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
	Reset,
	Bold,
	Italic,
	Underline,
	Foreground(Option<Color>),
}

impl Transition {
	/// Looks up a code with its leading zeros already stripped.
	pub fn lookup(code: &str) -> Option<Self> {
		let transition = match code {
			"" => Transition::Reset,
			"1" => Transition::Bold,
			"3" => Transition::Italic,
			"4" => Transition::Underline,

			"30" | "90" => Transition::Foreground(None),
			"31" | "91" => Transition::Foreground(Some(Color::Red)),
			"32" | "92" => Transition::Foreground(Some(Color::Green)),
			"33" | "93" => Transition::Foreground(Some(Color::Yellow)),
			"34" | "94" => Transition::Foreground(Some(Color::Blue)),
			"35" | "95" => Transition::Foreground(Some(Color::Purple)),
			"36" | "96" => Transition::Foreground(Some(Color::Cyan)),

			// the most common 256 color indices only
			"38;5;9" => Transition::Foreground(Some(Color::Red)),
			"38;5;10" => Transition::Foreground(Some(Color::Green)),
			"38;5;11" => Transition::Foreground(Some(Color::Yellow)),
			"38;5;12" => Transition::Foreground(Some(Color::Blue)),

			_ => return None,
		};

		Some(transition)
	}

	pub fn apply(self, style: Style) -> Style {
		match self {
			Transition::Reset => Style::default(),
			Transition::Bold => Style { bold: true, ..style },
			Transition::Italic => Style { italic: true, ..style },
			Transition::Underline => Style {
				underline: true,
				..style
			},
			Transition::Foreground(color) => Style { color, ..style },
		}
	}
}
