use crate::{
	ast::Document,
	context::{self, Context},
	error::ParseError,
	lexing,
	parsing::{self, Parse},
	term::{DataFactory, Quad, TermFactory},
};
use iref::IriBuf;
use locspan::{Meta, Span};

/// Parser configuration.
#[derive(Debug, Clone, Default)]
pub struct ParserOptions<F = DataFactory> {
	/// Base IRI used when a parse is not given one.
	pub base_iri: Option<String>,

	pub factory: F,
}

/// Turtle parser.
///
/// The prefix table, base IRI and blank node counters persist from one
/// call to [`Parser::parse`] to the next, until [`Parser::reset`] is
/// called.
pub struct Parser<F: TermFactory = DataFactory> {
	base_iri: Option<String>,
	context: Context<F>,
}

impl Parser {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Default for Parser {
	fn default() -> Self {
		Self::with_options(ParserOptions::default())
	}
}

impl<F: TermFactory> Parser<F> {
	pub fn with_options(options: ParserOptions<F>) -> Self {
		Self {
			base_iri: options.base_iri,
			context: Context::new(options.factory),
		}
	}

	/// Base IRI given at construction.
	pub fn base_iri(&self) -> Option<&str> {
		self.base_iri.as_deref()
	}

	/// Base IRI currently in effect, possibly set by a base directive.
	pub fn current_base_iri(&self) -> Option<&IriBuf> {
		self.context.base_iri()
	}

	pub fn factory(&self) -> &F {
		self.context.factory()
	}

	/// Parses a document, returning its parse tree and quads.
	pub fn parse(&mut self, text: &str) -> Result<(Document, Vec<Quad>), ParseError> {
		self.parse_with(text, None, std::iter::empty::<(String, String)>())
	}

	/// Parses a document with the given base IRI, after adding `prefixes` to
	/// the prefix table.
	///
	/// Without `base_iri` the base IRI given at construction is used, or else
	/// the one left by the previous parse.
	pub fn parse_with<K, V>(
		&mut self,
		text: &str,
		base_iri: Option<&str>,
		prefixes: impl IntoIterator<Item = (K, V)>,
	) -> Result<(Document, Vec<Quad>), ParseError>
	where
		K: Into<String>,
		V: AsRef<str>,
	{
		log::debug!("parsing {} bytes", text.len());
		self.context.begin();

		if let Some(base_iri) = base_iri.or(self.base_iri.as_deref()) {
			self.context
				.set_base_iri(base_iri)
				.map_err(|e| setup_error(e, text))?;
		}

		for (prefix, namespace) in prefixes {
			let namespace = self
				.context
				.resolve_iri_ref(namespace.as_ref())
				.map_err(|e| setup_error(e, text))?;
			self.context.insert_prefix(prefix.into(), namespace);
		}

		let mut lexer = lexing::from_str(text);
		match Document::parse(&mut lexer, &mut self.context) {
			Ok(document) => {
				log::debug!("parsed {} quads", self.context.quads().len());
				Ok((document, self.context.quads().to_vec()))
			}
			Err(e) => {
				let e = ParseError::new(e, text);
				log::debug!("{e}");
				Err(e)
			}
		}
	}

	/// Quads of the last parse.
	pub fn quads(&self) -> &[Quad] {
		self.context.quads()
	}

	/// Forgets prefixes, base IRI and blank node counters.
	pub fn reset(&mut self) {
		self.context.reset()
	}
}

/// Error occurring before the first token, reported at the start of the
/// document.
fn setup_error(e: context::Error, text: &str) -> ParseError {
	ParseError::new(Meta(parsing::Error::Context(e), Span::default()), text)
}
