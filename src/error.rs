//! Errors reported by the [`Parser`](crate::Parser).
use crate::{context, lexing, location, parsing};
use locspan::{Meta, Span};
use std::fmt;

/// Error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// No token matches the input.
	Lexical,

	/// The tokens do not follow the grammar.
	Syntax,

	/// Undeclared prefix.
	Prefix,

	/// Invalid escape sequence.
	Unescape,

	/// Invalid IRI or base IRI.
	Iri,

	/// The document is not `text/turtle`.
	UnsupportedMediaType,
}

impl ErrorKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Lexical => "lexical",
			Self::Syntax => "syntax",
			Self::Prefix => "prefix",
			Self::Unescape => "unescape",
			Self::Iri => "IRI",
			Self::UnsupportedMediaType => "unsupported media type",
		}
	}
}

impl fmt::Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.as_str().fmt(f)
	}
}

/// Parse error, located in the source document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
	pub kind: ErrorKind,

	/// `Parse error; <cause>` followed by the offending line and a caret
	/// line pointing at the error.
	pub message: String,

	pub offending_text: String,
	pub position: location::Position,
}

impl ParseError {
	/// Builds the error from an internal parse error on `source`.
	pub fn new(Meta(e, span): parsing::MetaError<lexing::Error>, source: &str) -> Self {
		let kind = match &e {
			parsing::Error::Lexer(lexing::Error::UnknownKeyword(_)) => ErrorKind::Syntax,
			parsing::Error::Lexer(lexing::Error::Unescape(_)) => ErrorKind::Unescape,
			parsing::Error::Lexer(_) => ErrorKind::Lexical,
			parsing::Error::Unexpected(_) | parsing::Error::TooDeep => ErrorKind::Syntax,
			parsing::Error::Context(context::Error::UnknownPrefix(_)) => ErrorKind::Prefix,
			parsing::Error::Context(_) => ErrorKind::Iri,
		};

		Self {
			kind,
			message: format!(
				"Parse error; {e}\n{}",
				location::excerpt(source, span.start())
			),
			offending_text: slice(source, span).to_owned(),
			position: location::Position::from_offset(source, span.start()),
		}
	}
}

fn slice(source: &str, span: Span) -> &str {
	source.get(span.start()..span.end()).unwrap_or_default()
}

/// Checks that a document media type is `text/turtle`.
///
/// Parameters such as `charset` are ignored.
pub fn check_media_type(media_type: &str) -> Result<(), ParseError> {
	let essence = media_type.split(';').next().unwrap_or_default().trim();

	if essence.eq_ignore_ascii_case("text/turtle") {
		Ok(())
	} else {
		Err(ParseError {
			kind: ErrorKind::UnsupportedMediaType,
			message: format!("unsupported media type `{essence}`"),
			offending_text: media_type.to_owned(),
			position: location::Position::default(),
		})
	}
}
