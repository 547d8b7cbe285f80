//! Backslash escape sequences.
//!
//! Turtle scalars (IRI references, strings and the local part of prefixed
//! names) may contain `\uXXXX` and `\UXXXXXXXX` sequences. Strings and local
//! names additionally define named escapes, which differ per context.

/// Unescaping error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnescapeError {
	#[error("no replacement found for '{0}'")]
	NoReplacement(char),

	#[error("invalid character code point {0:x}")]
	InvalidCodepoint(u32),

	#[error("incomplete escape sequence `{0}`")]
	Incomplete(String),
}

/// Set of named escapes allowed in a given context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escapes {
	/// `ECHAR` escapes of string literals.
	String,

	/// IRI references only allow numeric escapes.
	Iri,

	/// `PN_LOCAL_ESC` escapes of prefixed names.
	PnLocal,
}

impl Escapes {
	/// Returns the character denoted by `\c` in this context.
	pub fn replacement(self, c: char) -> Option<char> {
		match self {
			Self::String => match c {
				't' => Some('\t'),
				'b' => Some('\u{08}'),
				'n' => Some('\n'),
				'r' => Some('\r'),
				'f' => Some('\u{0c}'),
				'"' | '\'' | '\\' => Some(c),
				_ => None,
			},
			Self::Iri => None,
			Self::PnLocal => match c {
				'_' | '~' | '.' | '-' | '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ','
				| ';' | '=' | '/' | '?' | '#' | '@' | '%' => Some(c),
				_ => None,
			},
		}
	}
}

/// Replaces every escape sequence of `text` with the character it denotes.
pub fn unescape(text: &str, escapes: Escapes) -> Result<String, UnescapeError> {
	let mut result = String::with_capacity(text.len());
	let mut chars = text.chars();

	while let Some(c) = chars.next() {
		if c != '\\' {
			result.push(c);
			continue;
		}

		match chars.next() {
			Some('u') => result.push(hex_char(&mut chars, 4, 'u')?),
			Some('U') => result.push(hex_char(&mut chars, 8, 'U')?),
			Some(c) => match escapes.replacement(c) {
				Some(r) => result.push(r),
				None => return Err(UnescapeError::NoReplacement(c)),
			},
			None => return Err(UnescapeError::Incomplete("\\".to_owned())),
		}
	}

	Ok(result)
}

fn hex_char(chars: &mut std::str::Chars, len: usize, marker: char) -> Result<char, UnescapeError> {
	let mut codepoint = 0u32;
	let mut sequence = format!("\\{marker}");

	for _ in 0..len {
		match chars.next() {
			Some(c) => {
				sequence.push(c);
				match c.to_digit(16) {
					Some(d) => codepoint = codepoint << 4 | d,
					None => return Err(UnescapeError::Incomplete(sequence)),
				}
			}
			None => return Err(UnescapeError::Incomplete(sequence)),
		}
	}

	char::try_from(codepoint).map_err(|_| UnescapeError::InvalidCodepoint(codepoint))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn named_string_escapes() {
		assert_eq!(
			unescape("\\\\\\'\\\"\\n", Escapes::String).unwrap(),
			"\\'\"\n"
		);
		assert_eq!(
			unescape("\\\\\\'\\\"\\n", Escapes::String)
				.unwrap()
				.chars()
				.count(),
			4
		)
	}

	#[test]
	fn outside_bmp() {
		assert_eq!(unescape("\\U0001D49E", Escapes::String).unwrap(), "𝒞")
	}

	#[test]
	fn numeric_escapes() {
		assert_eq!(unescape("a\\u0062\\U00000063", Escapes::Iri).unwrap(), "abc")
	}

	#[test]
	fn unknown_escape() {
		let e = unescape("\\q", Escapes::String).unwrap_err();
		assert_eq!(e, UnescapeError::NoReplacement('q'));
		assert_eq!(e.to_string(), "no replacement found for 'q'")
	}

	#[test]
	fn context_dependent() {
		assert_eq!(unescape("a\\-b\\.c", Escapes::PnLocal).unwrap(), "a-b.c");
		assert!(unescape("\\n", Escapes::PnLocal).is_err());
		assert!(unescape("\\n", Escapes::Iri).is_err())
	}

	#[test]
	fn surrogate() {
		assert_eq!(
			unescape("\\uD835", Escapes::String),
			Err(UnescapeError::InvalidCodepoint(0xd835))
		)
	}

	#[test]
	fn truncated() {
		assert!(matches!(
			unescape("\\u12", Escapes::String),
			Err(UnescapeError::Incomplete(_))
		));
		assert!(unescape("abc\\", Escapes::String).is_err())
	}
}
