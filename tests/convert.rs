use ansipage::{Conversion, Warning, convert, html::escape};

#[test]
fn no_escape_bytes_is_just_escaped_text_test() {
	for input in ["", "hello", "fn main() {}", "a<b>c&d", "x = \"y\" + 'z'", "warning: unused variable"] {
		assert_eq!(convert(input).into_string(), format!("<span>{}</span>", escape(input)));
	}
}

#[test]
fn compiler_output_test() {
	let input = "\x1B[1m\x1B[31merror[E0308]\x1B[0m\x1B[1m: mismatched types\x1B[0m\n  \
		\x1B[1m\x1B[34m-->\x1B[0m src/main.rs:2:18";

	assert_eq!(
		convert(input),
		"<span></span><span class=\"bold\"></span><span class=\"red bold\">error[E0308]</span>\
		<span class=\"\"></span><span class=\"bold\">: mismatched types</span><span class=\"\">\n  </span>\
		<span class=\"bold\"></span><span class=\"blue bold\">--&gt;</span><span class=\"\"> src/main.rs:2:18</span>"
	);
}

#[test]
fn gcc_256_color_output_test() {
	let input = "main.c:3:5: \x1B[01;38;5;9merror: \x1B[0m\x1B[Kexpected ';'";

	let (html, warnings) = Conversion::convert(input).into_parts();
	assert_eq!(
		html,
		"<span>main.c:3:5: </span><span class=\"red bold\">error: </span><span class=\"\">expected &#39;;&#39;</span>"
	);
	assert_eq!(
		warnings,
		vec![Warning::IgnoredSequence {
			body: String::from("["),
			terminator: 'K'
		}]
	);
}

#[test]
fn spans_stay_balanced_test() {
	let inputs = [
		"\x1B[1;3;4;36mall\x1B[0m",
		"\x1B[99;1mlost\x1B[38;5;77m",
		"\x1B[31mdangling\x1B[",
		"\x1B\x1B\x1B",
		"<span>\x1B[32m</span>",
	];

	for input in inputs {
		let html = convert(input);
		let html = html.as_str();
		assert!(html.starts_with("<span>"), "{html}");
		assert!(html.ends_with("</span>"), "{html}");
		assert_eq!(html.matches("<span").count(), html.matches("</span>").count(), "{html}");
	}
}

#[test]
fn injected_markup_is_escaped_test() {
	let html = convert("\x1B[31m<script>alert('x')</script>\x1B[0m");
	assert!(!html.as_str().contains("<script>"));
	assert!(html.as_str().contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
}
