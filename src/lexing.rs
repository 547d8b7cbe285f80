//! Lossless Turtle lexer.
//!
//! Unlike an ordinary lexer, whitespace and comments are not discarded but
//! returned as [`Token::Ws`] and [`Token::Comment`] tokens. Every token comes
//! with the exact source text it was lexed from, in a [`Lexeme`].
use crate::escape::{self, Escapes, UnescapeError};
use decoded_char::DecodedChar;
use iref::Iri;
use langtag::LanguageTagBuf;
use locspan::{Meta, Span};
use rdf_types::{BlankIdBuf, RdfDisplay};
use static_iref::iri;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub const XSD_STRING: Iri<'static> = iri!("http://www.w3.org/2001/XMLSchema#string");
pub const XSD_BOOLEAN: Iri<'static> = iri!("http://www.w3.org/2001/XMLSchema#boolean");
pub const XSD_INTEGER: Iri<'static> = iri!("http://www.w3.org/2001/XMLSchema#integer");
pub const XSD_DECIMAL: Iri<'static> = iri!("http://www.w3.org/2001/XMLSchema#decimal");
pub const XSD_DOUBLE: Iri<'static> = iri!("http://www.w3.org/2001/XMLSchema#double");

/// Fallible tokens iterator with lookahead.
pub trait Tokens {
	type Error;

	/// Peeks the next token, skipped or not.
	#[allow(clippy::type_complexity)]
	fn peek(&mut self) -> Result<Meta<Option<&Token>, Span>, Meta<Self::Error, Span>>;

	/// Peeks the next token that is neither whitespace nor a comment, without
	/// consuming anything.
	#[allow(clippy::type_complexity)]
	fn peek_significant(&mut self) -> Result<Meta<Option<&Token>, Span>, Meta<Self::Error, Span>>;

	#[allow(clippy::type_complexity)]
	fn next(&mut self) -> Result<Meta<Option<Lexeme>, Span>, Meta<Self::Error, Span>>;
}

/// Unexpected char or end of file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Unexpected {
	#[error("unexpected character `{0}`")]
	Char(char),

	#[error("unexpected end of file")]
	EndOfFile,
}

impl From<Option<char>> for Unexpected {
	fn from(value: Option<char>) -> Self {
		match value {
			Some(c) => Self::Char(c),
			None => Self::EndOfFile,
		}
	}
}

/// Lexing error.
#[derive(Debug, thiserror::Error)]
pub enum Error<E = Infallible> {
	#[error("invalid language tag")]
	InvalidLangTag,

	#[error("unknown keyword `{0}`")]
	UnknownKeyword(String),

	#[error(transparent)]
	Unescape(UnescapeError),

	#[error(transparent)]
	Unexpected(Unexpected),

	#[error(transparent)]
	Stream(E),
}

/// Token with the exact text it was lexed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
	pub token: Token,
	pub text: String,
}

/// Token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
	/// Whitespace run.
	Ws,

	/// `#` line comment (without the line break) or `/* */` block comment.
	Comment,

	Keyword(Keyword),
	Begin(Delimiter),
	End(Delimiter),

	/// Language tag, without the leading `@`.
	LangTag(LanguageTagBuf),

	/// Unescaped IRI reference, without the angle brackets.
	IriRef(String),

	/// Unescaped string literal value.
	StringLiteral(String),

	BlankNodeLabel(BlankIdBuf),
	Punct(Punct),

	/// Prefixed name, with its unescaped local part.
	CompactIri {
		prefix: String,
		local: String,
	},

	Numeric(NumericLiteral),
}

impl Token {
	/// Checks if this token is whitespace or a comment.
	pub fn is_skipped(&self) -> bool {
		matches!(self, Self::Ws | Self::Comment)
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Ws => write!(f, "whitespace"),
			Self::Comment => write!(f, "comment"),
			Self::Keyword(kw) => write!(f, "keyword `{kw}`"),
			Self::Begin(d) => write!(f, "opening `{}`", d.begin()),
			Self::End(d) => write!(f, "closing `{}`", d.end()),
			Self::LangTag(tag) => write!(f, "language tag `{tag}`"),
			Self::IriRef(iri_ref) => write!(f, "IRI reference <{iri_ref}>"),
			Self::StringLiteral(string) => write!(f, "string literal {}", string.rdf_display()),
			Self::BlankNodeLabel(label) => write!(f, "blank node label `{label}`"),
			Self::Punct(p) => p.fmt(f),
			Self::CompactIri { prefix, local } => {
				write!(f, "compact IRI `{prefix}:{local}`")
			}
			Self::Numeric(n) => write!(f, "numeric literal `{n}`"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
	A,
	Prefix,
	Base,
	SparqlBase,
	SparqlPrefix,
	True,
	False,
}

#[derive(Debug, Clone)]
pub struct NotAKeyword;

impl FromStr for Keyword {
	type Err = NotAKeyword;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s == "a" {
			Ok(Self::A)
		} else if s == "true" {
			Ok(Self::True)
		} else if s == "false" {
			Ok(Self::False)
		} else if s == unicase::Ascii::new("BASE") {
			Ok(Self::SparqlBase)
		} else if s == unicase::Ascii::new("PREFIX") {
			Ok(Self::SparqlPrefix)
		} else if s == "@prefix" {
			Ok(Self::Prefix)
		} else if s == "@base" {
			Ok(Self::Base)
		} else {
			Err(NotAKeyword)
		}
	}
}

impl fmt::Display for Keyword {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::A => write!(f, "a"),
			Self::Prefix => write!(f, "@prefix"),
			Self::Base => write!(f, "@base"),
			Self::SparqlBase => write!(f, "BASE"),
			Self::SparqlPrefix => write!(f, "PREFIX"),
			Self::True => write!(f, "true"),
			Self::False => write!(f, "false"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
	Parenthesis,
	Bracket,
}

impl Delimiter {
	pub fn begin(&self) -> char {
		match self {
			Self::Parenthesis => '(',
			Self::Bracket => '[',
		}
	}

	pub fn end(&self) -> char {
		match self {
			Self::Parenthesis => ')',
			Self::Bracket => ']',
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punct {
	Period,
	Semicolon,
	Comma,
	Carets,
}

impl fmt::Display for Punct {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Period => write!(f, "dot `.`"),
			Self::Semicolon => write!(f, "semicolon `;`"),
			Self::Comma => write!(f, "comma `,`"),
			Self::Carets => write!(f, "carets `^^`"),
		}
	}
}

/// Numeric literal, kept in its lexical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericLiteral {
	Integer(String),
	Decimal(String),
	Double(String),
}

impl NumericLiteral {
	pub fn as_str(&self) -> &str {
		match self {
			Self::Integer(s) | Self::Decimal(s) | Self::Double(s) => s,
		}
	}

	/// XSD datatype of the literal.
	pub fn datatype(&self) -> Iri<'static> {
		match self {
			Self::Integer(_) => XSD_INTEGER,
			Self::Decimal(_) => XSD_DECIMAL,
			Self::Double(_) => XSD_DOUBLE,
		}
	}
}

impl fmt::Display for NumericLiteral {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.as_str().fmt(f)
	}
}

/// Lexer position.
struct Position {
	span: Span,
}

impl Position {
	fn current(&self) -> Span {
		self.span
	}

	fn end(&self) -> Span {
		self.span.end().into()
	}
}

/// Lexer.
///
/// Changes a character iterator into a [`Lexeme`] iterator.
pub struct Lexer<C: Iterator<Item = Result<DecodedChar, E>>, E> {
	chars: C,
	buffer: VecDeque<DecodedChar>,
	pos: Position,
	text: String,
	lookahead: VecDeque<Meta<Lexeme, Span>>,
}

impl<C: Iterator<Item = Result<DecodedChar, E>>, E> Lexer<C, E> {
	pub fn new(chars: C) -> Self {
		Self {
			chars,
			buffer: VecDeque::new(),
			pos: Position {
				span: Span::default(),
			},
			text: String::new(),
			lookahead: VecDeque::new(),
		}
	}
}

enum NumericOrPeriod {
	Numeric(NumericLiteral),
	Period,
}

impl<C: Iterator<Item = Result<DecodedChar, E>>, E> Lexer<C, E> {
	/// Peeks the `n`-th character after the current position.
	fn peek_char_at(&mut self, n: usize) -> Result<Option<char>, Meta<Error<E>, Span>> {
		while self.buffer.len() <= n {
			match self.chars.next() {
				Some(Ok(c)) => self.buffer.push_back(c),
				Some(Err(e)) => return Err(Meta(Error::Stream(e), self.pos.end())),
				None => return Ok(None),
			}
		}

		Ok(Some(self.buffer[n].chr()))
	}

	fn peek_char(&mut self) -> Result<Option<char>, Meta<Error<E>, Span>> {
		self.peek_char_at(0)
	}

	fn next_char(&mut self) -> Result<Option<char>, Meta<Error<E>, Span>> {
		if self.buffer.is_empty() {
			self.peek_char()?;
		}

		match self.buffer.pop_front() {
			Some(c) => {
				self.pos.span.push(c.len());
				self.text.push(c.chr());
				Ok(Some(c.chr()))
			}
			None => Ok(None),
		}
	}

	fn expect_char(&mut self) -> Result<char, Meta<Error<E>, Span>> {
		self.next_char()?
			.ok_or_else(|| Meta(Error::Unexpected(Unexpected::EndOfFile), self.pos.current()))
	}

	/// Error located on the text lexed so far for the current token.
	fn error(&self, e: Error<E>) -> Meta<Error<E>, Span> {
		Meta(e, self.pos.current())
	}

	fn unexpected(&self, c: Option<char>) -> Meta<Error<E>, Span> {
		self.error(Error::Unexpected(c.into()))
	}

	fn unescape(&self, text: &str, escapes: Escapes) -> Result<String, Meta<Error<E>, Span>> {
		escape::unescape(text, escapes).map_err(|e| self.error(Error::Unescape(e)))
	}

	fn next_whitespaces(&mut self) -> Result<(), Meta<Error<E>, Span>> {
		while let Some(c) = self.peek_char()? {
			if is_ws(c) {
				self.next_char()?;
			} else {
				break;
			}
		}

		Ok(())
	}

	/// Parses the rest of a comment, after the first `#` character, up to
	/// the end of line (excluded) or end of file.
	fn next_comment(&mut self) -> Result<(), Meta<Error<E>, Span>> {
		while let Some(c) = self.peek_char()? {
			if matches!(c, '\n' | '\r') {
				break;
			}

			self.next_char()?;
		}

		Ok(())
	}

	/// Parses the rest of a block comment, after the opening `/*`.
	fn next_block_comment(&mut self) -> Result<(), Meta<Error<E>, Span>> {
		loop {
			match self.next_char()? {
				Some('*') if self.peek_char()? == Some('/') => {
					self.next_char()?;
					break Ok(());
				}
				Some(_) => (),
				None => break Err(self.unexpected(None)),
			}
		}
	}

	/// Parses the rest of a lang tag, after the first `@` character.
	fn next_langtag_or_keyword(&mut self) -> Result<Token, Meta<Error<E>, Span>> {
		while let Some(c) = self.peek_char()? {
			if c.is_ascii_alphabetic() {
				self.next_char()?;
			} else {
				break;
			}
		}

		if self.text.len() == 1 {
			return Err(self.error(Error::InvalidLangTag));
		}

		if self.peek_char()? != Some('-') {
			if let Ok(kw @ (Keyword::Prefix | Keyword::Base)) = Keyword::from_str(&self.text) {
				return Ok(Token::Keyword(kw));
			}
		}

		while self.peek_char()? == Some('-')
			&& self
				.peek_char_at(1)?
				.map(|c| c.is_ascii_alphanumeric())
				.unwrap_or(false)
		{
			self.next_char()?;
			while let Some(c) = self.peek_char()? {
				if c.is_ascii_alphanumeric() {
					self.next_char()?;
				} else {
					break;
				}
			}
		}

		match LanguageTagBuf::parse_copy(&self.text[1..]) {
			Ok(tag) => Ok(Token::LangTag(tag)),
			Err(_) => Err(self.error(Error::InvalidLangTag)),
		}
	}

	/// Parses an IRI reference, starting after the first `<` until the closing
	/// `>`.
	fn next_iriref(&mut self) -> Result<String, Meta<Error<E>, Span>> {
		loop {
			match self.next_char()? {
				Some('>') => break,
				Some('\\') => {
					self.expect_char()?;
				}
				Some(c) => {
					if matches!(
						c,
						'\u{00}'..='\u{20}' | '<' | '"' | '{' | '}' | '|' | '^' | '`'
					) {
						return Err(self.unexpected(Some(c)));
					}
				}
				None => return Err(self.unexpected(None)),
			}
		}

		let body = &self.text[1..self.text.len() - 1];
		self.unescape(body, Escapes::Iri)
	}

	/// Parses a string literal, starting after the first quote until the
	/// closing quote(s).
	fn next_string_literal(&mut self, delimiter: char) -> Result<String, Meta<Error<E>, Span>> {
		let long = if self.peek_char()? == Some(delimiter)
			&& self.peek_char_at(1)? == Some(delimiter)
		{
			self.next_char()?;
			self.next_char()?;
			true
		} else {
			false
		};

		loop {
			match self.next_char()? {
				Some(c) if c == delimiter => {
					if !long {
						break;
					}

					if self.peek_char()? == Some(delimiter)
						&& self.peek_char_at(1)? == Some(delimiter)
					{
						self.next_char()?;
						self.next_char()?;
						break;
					}
				}
				Some('\\') => {
					self.expect_char()?;
				}
				Some(c @ ('\n' | '\r')) if !long => return Err(self.unexpected(Some(c))),
				Some(_) => (),
				None => return Err(self.unexpected(None)),
			}
		}

		let quotes = if long { 3 } else { 1 };
		let body = &self.text[quotes..self.text.len() - quotes];
		self.unescape(body, Escapes::String)
	}

	/// Checks if an exponent (`e`, optional sign, digit) starts at the `n`-th
	/// next character.
	fn exponent_at(&mut self, n: usize) -> Result<bool, Meta<Error<E>, Span>> {
		if !matches!(self.peek_char_at(n)?, Some('e' | 'E')) {
			return Ok(false);
		}

		Ok(match self.peek_char_at(n + 1)? {
			Some('0'..='9') => true,
			Some('+' | '-') => matches!(self.peek_char_at(n + 2)?, Some('0'..='9')),
			_ => false,
		})
	}

	/// Consumes an exponent marker and its sign, if any.
	fn next_exponent_marker(&mut self) -> Result<(), Meta<Error<E>, Span>> {
		self.expect_char()?;
		if matches!(self.peek_char()?, Some('+' | '-')) {
			self.next_char()?;
		}

		Ok(())
	}

	fn digit_at(&mut self, n: usize) -> Result<bool, Meta<Error<E>, Span>> {
		Ok(matches!(self.peek_char_at(n)?, Some('0'..='9')))
	}

	/// Parses a numeric literal or a single `.`, after its first character.
	///
	/// A `.` is only part of the number when followed by a digit or an
	/// exponent, so that `1.` at the end of a statement is an integer
	/// followed by a period.
	fn next_numeric_or_dot(&mut self, first: char) -> Result<NumericOrPeriod, Meta<Error<E>, Span>> {
		enum State {
			Integer,
			Decimal,
			Exponent,
		}

		let mut state = match first {
			'+' | '-' => {
				if self.digit_at(0)? {
					State::Integer
				} else if self.peek_char()? == Some('.') && self.digit_at(1)? {
					self.next_char()?;
					State::Decimal
				} else {
					let c = self.next_char()?;
					return Err(self.unexpected(c));
				}
			}
			'.' => {
				if self.digit_at(0)? {
					State::Decimal
				} else {
					return Ok(NumericOrPeriod::Period);
				}
			}
			_ => State::Integer,
		};

		loop {
			state = match state {
				State::Integer => {
					if self.digit_at(0)? {
						State::Integer
					} else if self.peek_char()? == Some('.')
						&& (self.digit_at(1)? || self.exponent_at(1)?)
					{
						State::Decimal
					} else if self.exponent_at(0)? {
						self.next_exponent_marker()?;
						State::Exponent
					} else {
						break;
					}
				}
				State::Decimal => {
					if self.digit_at(0)? {
						State::Decimal
					} else if self.exponent_at(0)? {
						self.next_exponent_marker()?;
						State::Exponent
					} else {
						break;
					}
				}
				State::Exponent => {
					if self.digit_at(0)? {
						State::Exponent
					} else {
						break;
					}
				}
			};

			self.expect_char()?;
		}

		let lexical = self.text.clone();
		let n = match state {
			State::Integer => NumericLiteral::Integer(lexical),
			State::Decimal => NumericLiteral::Decimal(lexical),
			State::Exponent => NumericLiteral::Double(lexical),
		};

		Ok(NumericOrPeriod::Numeric(n))
	}

	/// Consumes a run of `.` if it is followed by a character accepted by
	/// `f`, so that names never end with a period.
	fn next_inner_dots(&mut self, f: impl Fn(char) -> bool) -> Result<bool, Meta<Error<E>, Span>> {
		let mut n = 0;
		while self.peek_char_at(n)? == Some('.') {
			n += 1
		}

		match self.peek_char_at(n)? {
			Some(c) if n > 0 && f(c) => {
				for _ in 0..n {
					self.next_char()?;
				}

				Ok(true)
			}
			_ => Ok(false),
		}
	}

	/// Parses a blank node label, starting after the first `_`.
	fn next_blank_node_label(&mut self) -> Result<BlankIdBuf, Meta<Error<E>, Span>> {
		match self.next_char()? {
			Some(':') => match self.next_char()? {
				Some(c) if c.is_ascii_digit() || is_pn_chars_u(c) => {
					loop {
						match self.peek_char()? {
							Some(c) if is_pn_chars(c) => {
								self.next_char()?;
							}
							Some('.') => {
								if !self.next_inner_dots(is_pn_chars)? {
									break;
								}
							}
							_ => break,
						}
					}

					Ok(unsafe { BlankIdBuf::new_unchecked(self.text.clone()) })
				}
				unexpected => Err(self.unexpected(unexpected)),
			},
			unexpected => Err(self.unexpected(unexpected)),
		}
	}

	/// Parses one character of a local name, which may be a `%XX` sequence
	/// or a `\` escape.
	fn next_local_char(&mut self) -> Result<(), Meta<Error<E>, Span>> {
		match self.expect_char()? {
			'%' => {
				for _ in 0..2 {
					let c = self.next_char()?;
					if !c.map(|c| c.is_ascii_hexdigit()).unwrap_or(false) {
						return Err(self.unexpected(c));
					}
				}
			}
			'\\' => {
				self.expect_char()?;
			}
			_ => (),
		}

		Ok(())
	}

	fn next_name_or_keyword(&mut self, c: char) -> Result<Token, Meta<Error<E>, Span>> {
		// PNAME_NS or Keyword
		if c != ':' {
			if !is_pn_chars_base(c) {
				return Err(self.unexpected(Some(c)));
			}

			loop {
				match self.peek_char()? {
					Some(c) if is_pn_chars(c) => {
						self.next_char()?;
					}
					Some('.') => {
						if !self.next_inner_dots(is_pn_chars)? {
							break;
						}
					}
					Some(':') => {
						self.next_char()?;
						break;
					}
					_ => break,
				}
			}

			if !self.text.ends_with(':') {
				return match Keyword::from_str(&self.text) {
					Ok(kw) => Ok(Token::Keyword(kw)),
					Err(NotAKeyword) => Err(self.error(Error::UnknownKeyword(self.text.clone()))),
				};
			}
		}

		let prefix_len = self.text.len();

		// PN_LOCAL
		if let Some(c) = self.peek_char()? {
			if is_pn_chars_u(c) || c.is_ascii_digit() || matches!(c, ':' | '%' | '\\') {
				self.next_local_char()?;

				loop {
					match self.peek_char()? {
						Some(c) if is_pn_chars(c) || matches!(c, ':' | '%' | '\\') => {
							self.next_local_char()?
						}
						Some('.') => {
							if !self.next_inner_dots(|c| {
								is_pn_chars(c) || matches!(c, ':' | '%' | '\\')
							})? {
								break;
							}
						}
						_ => break,
					}
				}
			}
		}

		let prefix = self.text[..prefix_len - 1].to_owned();
		let local = self.unescape(&self.text[prefix_len..], Escapes::PnLocal)?;
		Ok(Token::CompactIri { prefix, local })
	}

	/// Lexes the next token, or returns `None` at the end of the input.
	pub fn consume(&mut self) -> Result<Option<Meta<Lexeme, Span>>, Meta<Error<E>, Span>> {
		self.pos.span.clear();
		self.text.clear();

		let token = match self.next_char()? {
			None => return Ok(None),
			Some(c) if is_ws(c) => {
				self.next_whitespaces()?;
				Token::Ws
			}
			Some('#') => {
				self.next_comment()?;
				Token::Comment
			}
			Some('/') => match self.next_char()? {
				Some('*') => {
					self.next_block_comment()?;
					Token::Comment
				}
				unexpected => return Err(self.unexpected(unexpected)),
			},
			Some('@') => self.next_langtag_or_keyword()?,
			Some('<') => Token::IriRef(self.next_iriref()?),
			Some(q @ ('"' | '\'')) => Token::StringLiteral(self.next_string_literal(q)?),
			Some('_') => Token::BlankNodeLabel(self.next_blank_node_label()?),
			Some(',') => Token::Punct(Punct::Comma),
			Some(';') => Token::Punct(Punct::Semicolon),
			Some('^') => match self.next_char()? {
				Some('^') => Token::Punct(Punct::Carets),
				unexpected => return Err(self.unexpected(unexpected)),
			},
			Some('(') => Token::Begin(Delimiter::Parenthesis),
			Some('[') => Token::Begin(Delimiter::Bracket),
			Some(')') => Token::End(Delimiter::Parenthesis),
			Some(']') => Token::End(Delimiter::Bracket),
			Some(c @ ('+' | '-' | '0'..='9' | '.')) => match self.next_numeric_or_dot(c)? {
				NumericOrPeriod::Numeric(n) => Token::Numeric(n),
				NumericOrPeriod::Period => Token::Punct(Punct::Period),
			},
			Some(c) => self.next_name_or_keyword(c)?,
		};

		let text = std::mem::take(&mut self.text);
		Ok(Some(Meta(Lexeme { token, text }, self.pos.current())))
	}

	#[allow(clippy::type_complexity)]
	pub fn peek(&mut self) -> Result<Meta<Option<&Token>, Span>, Meta<Error<E>, Span>> {
		if self.lookahead.is_empty() {
			if let Some(lexeme) = self.consume()? {
				self.lookahead.push_back(lexeme);
			}
		}

		match self.lookahead.front() {
			Some(Meta(lexeme, span)) => Ok(Meta(Some(&lexeme.token), *span)),
			None => Ok(Meta(None, self.pos.end())),
		}
	}

	#[allow(clippy::type_complexity)]
	pub fn peek_significant(&mut self) -> Result<Meta<Option<&Token>, Span>, Meta<Error<E>, Span>> {
		let mut i = 0;
		loop {
			if i == self.lookahead.len() {
				match self.consume()? {
					Some(lexeme) => self.lookahead.push_back(lexeme),
					None => return Ok(Meta(None, self.pos.end())),
				}
			}

			if !self.lookahead[i].0.token.is_skipped() {
				break;
			}

			i += 1
		}

		let Meta(lexeme, span) = &self.lookahead[i];
		Ok(Meta(Some(&lexeme.token), *span))
	}

	#[allow(clippy::type_complexity, clippy::should_implement_trait)]
	pub fn next(&mut self) -> Result<Meta<Option<Lexeme>, Span>, Meta<Error<E>, Span>> {
		let next = match self.lookahead.pop_front() {
			Some(lexeme) => Some(lexeme),
			None => self.consume()?,
		};

		match next {
			Some(Meta(lexeme, span)) => Ok(Meta(Some(lexeme), span)),
			None => Ok(Meta(None, self.pos.end())),
		}
	}
}

impl<E, C: Iterator<Item = Result<DecodedChar, E>>> Tokens for Lexer<C, E> {
	type Error = Error<E>;

	fn peek(&mut self) -> Result<Meta<Option<&Token>, Span>, Meta<Error<E>, Span>> {
		self.peek()
	}

	fn peek_significant(&mut self) -> Result<Meta<Option<&Token>, Span>, Meta<Error<E>, Span>> {
		self.peek_significant()
	}

	fn next(&mut self) -> Result<Meta<Option<Lexeme>, Span>, Meta<Error<E>, Span>> {
		self.next()
	}
}

impl<E, C: Iterator<Item = Result<DecodedChar, E>>> Iterator for Lexer<C, E> {
	type Item = Result<Meta<Lexeme, Span>, Meta<Error<E>, Span>>;

	fn next(&mut self) -> Option<Self::Item> {
		match self.next() {
			Ok(Meta(Some(lexeme), span)) => Some(Ok(Meta(lexeme, span))),
			Ok(Meta(None, _)) => None,
			Err(e) => Some(Err(e)),
		}
	}
}

/// Turtle `WS`: space, tab, carriage return and line feed only.
fn is_ws(c: char) -> bool {
	matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn is_pn_chars_base(c: char) -> bool {
	matches!(c, 'A'..='Z' | 'a'..='z' | '\u{00c0}'..='\u{00d6}' | '\u{00d8}'..='\u{00f6}' | '\u{00f8}'..='\u{02ff}' | '\u{0370}'..='\u{037d}' | '\u{037f}'..='\u{1fff}' | '\u{200c}'..='\u{200d}' | '\u{2070}'..='\u{218f}' | '\u{2c00}'..='\u{2fef}' | '\u{3001}'..='\u{d7ff}' | '\u{f900}'..='\u{fdcf}' | '\u{fdf0}'..='\u{fffd}' | '\u{10000}'..='\u{effff}')
}

fn is_pn_chars_u(c: char) -> bool {
	is_pn_chars_base(c) || c == '_'
}

fn is_pn_chars(c: char) -> bool {
	is_pn_chars_u(c)
		|| matches!(c, '-' | '0'..='9' | '\u{00b7}' | '\u{0300}'..='\u{036f}' | '\u{203f}'..='\u{2040}')
}

/// Creates a lexer over a string.
pub fn from_str(text: &str) -> Lexer<impl Iterator<Item = Result<DecodedChar, Infallible>> + '_, Infallible> {
	Lexer::new(text.chars().map(|c| Ok(DecodedChar::new(c, c.len_utf8()))))
}
