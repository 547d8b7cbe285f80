//! Source positions and excerpts.
use std::fmt;

/// Line and column of a character in a source document.
///
/// Lines start at 1, columns at 0 and count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
	pub line: usize,
	pub column: usize,
}

impl Default for Position {
	fn default() -> Self {
		Self { line: 1, column: 0 }
	}
}

impl Position {
	/// Computes the position of the byte `offset` in `source`.
	pub fn from_offset(source: &str, offset: usize) -> Self {
		let before = prefix(source, offset);
		let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);

		Self {
			line: before.matches('\n').count() + 1,
			column: before[line_start..].chars().count(),
		}
	}
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}:{}", self.line, self.column)
	}
}

fn prefix(source: &str, mut offset: usize) -> &str {
	offset = offset.min(source.len());
	while !source.is_char_boundary(offset) {
		offset -= 1
	}

	&source[..offset]
}

/// Returns the line of `source` containing the byte `offset`, without its
/// line break.
pub fn line_at(source: &str, offset: usize) -> &str {
	let start = prefix(source, offset)
		.rfind('\n')
		.map(|i| i + 1)
		.unwrap_or(0);
	let line = &source[start..];
	let line = match line.find('\n') {
		Some(end) => &line[..end],
		None => line,
	};

	line.strip_suffix('\r').unwrap_or(line)
}

/// Renders the line containing `offset` followed by a caret line pointing at
/// its column.
///
/// ```
/// # use lossless_turtle::location::excerpt;
/// assert_eq!(excerpt("<a> <b> c:d .", 8), "<a> <b> c:d .\n--------^")
/// ```
pub fn excerpt(source: &str, offset: usize) -> String {
	let position = Position::from_offset(source, offset);
	format!(
		"{}\n{}^",
		line_at(source, offset),
		"-".repeat(position.column)
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn first_line() {
		assert_eq!(
			Position::from_offset("<a> <b> c:d .", 8),
			Position { line: 1, column: 8 }
		)
	}

	#[test]
	fn columns_count_chars() {
		let source = "<s> <p> \"é\"\n  pre:x";
		let offset = source.find("pre").unwrap();
		assert_eq!(
			Position::from_offset(source, offset),
			Position { line: 2, column: 2 }
		);
		assert_eq!(Position::from_offset(source, 10).column, 9)
	}

	#[test]
	fn excerpt_of_second_line() {
		let source = "PREFIX pre: <http://a.example/ns#>\r\n  pre:s<#p><#o>.";
		let offset = source.find("pre:s").unwrap();
		assert_eq!(excerpt(source, offset), "  pre:s<#p><#o>.\n--^")
	}

	#[test]
	fn end_of_input() {
		assert_eq!(excerpt("<a>", 3), "<a>\n---^");
		assert_eq!(excerpt("", 0), "\n^")
	}
}
