//! Recursive descent parser building the lossless tree and emitting quads.
//!
//! Productions taking part in a triple receive their subject (and predicate)
//! as parameters. A blank node property list mints its node, parses its
//! content with that node as subject, and hands the node back to its caller
//! which still holds its own subject and predicate.
use crate::{
	ast::*,
	context::{self, Context, RDF_TYPE},
	lexing::{self, Delimiter, Keyword, Lexeme, Punct, Token, Tokens},
	term::{self, Id, TermFactory},
};
use iref::IriRefBuf;
use locspan::{Meta, Span};
use std::fmt;

#[derive(Debug)]
pub enum Error<E> {
	Lexer(E),
	Unexpected(Option<Token>),
	Context(context::Error),
	TooDeep,
}

impl<E: fmt::Display> fmt::Display for Error<E> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Unexpected(None) => write!(f, "unexpected end of file"),
			Self::Unexpected(Some(token)) => write!(f, "unexpected {token}"),
			Self::Lexer(e) => e.fmt(f),
			Self::Context(e) => e.fmt(f),
			Self::TooDeep => write!(
				f,
				"more than {} nested blank node property lists or collections",
				context::MAX_NESTING_DEPTH
			),
		}
	}
}

impl<E: 'static + std::error::Error> std::error::Error for Error<E> {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Lexer(e) => Some(e),
			Self::Context(e) => Some(e),
			_ => None,
		}
	}
}

pub type MetaError<E> = Meta<Error<E>, Span>;

fn lexer_error<E>(Meta(e, span): Meta<E, Span>) -> MetaError<E> {
	Meta(Error::Lexer(e), span)
}

fn context_error<E>(span: Span) -> impl FnOnce(context::Error) -> MetaError<E> {
	move |e| Meta(Error::Context(e), span)
}

fn unexpected<E>(lexeme: Lexeme, span: Span) -> MetaError<E> {
	Meta(Error::Unexpected(Some(lexeme.token)), span)
}

fn next<L: Tokens>(lexer: &mut L) -> Result<(Lexeme, Span), MetaError<L::Error>> {
	match lexer.next().map_err(lexer_error)? {
		Meta(Some(lexeme), span) => Ok((lexeme, span)),
		Meta(None, span) => Err(Meta(Error::Unexpected(None), span)),
	}
}

/// Parses the next token, expecting `expected`.
fn expect<L: Tokens>(lexer: &mut L, expected: Token) -> Result<Leaf, MetaError<L::Error>> {
	let (lexeme, span) = next(lexer)?;
	if lexeme.token == expected {
		Ok(Meta(lexeme.text, span))
	} else {
		Err(unexpected(lexeme, span))
	}
}

fn skipped(lexeme: Lexeme, span: Span) -> Skipped {
	match lexeme.token {
		Token::Comment => Skipped::Comment(Meta(lexeme.text, span)),
		_ => Skipped::Ws(Meta(lexeme.text, span)),
	}
}

/// Parses all the whitespace and comments up to the next significant token.
fn parse_skipped<L: Tokens>(lexer: &mut L) -> Result<Vec<Skipped>, MetaError<L::Error>> {
	let mut result = Vec::new();

	loop {
		let is_skipped = matches!(lexer.peek().map_err(lexer_error)?, Meta(Some(t), _) if t.is_skipped());
		if !is_skipped {
			break Ok(result);
		}

		let (lexeme, span) = next(lexer)?;
		result.push(skipped(lexeme, span))
	}
}

fn peek_significant_is<L: Tokens>(
	lexer: &mut L,
	f: impl FnOnce(&Token) -> bool,
) -> Result<bool, MetaError<L::Error>> {
	match lexer.peek_significant().map_err(lexer_error)? {
		Meta(Some(token), _) => Ok(f(token)),
		Meta(None, _) => Ok(false),
	}
}

fn is_verb_start(token: &Token) -> bool {
	matches!(
		token,
		Token::IriRef(_) | Token::CompactIri { .. } | Token::Keyword(Keyword::A)
	)
}

pub trait Parse: Sized {
	#[allow(clippy::type_complexity)]
	fn parse<L: Tokens, F: TermFactory>(
		lexer: &mut L,
		context: &mut Context<F>,
	) -> Result<Self, MetaError<L::Error>> {
		let (lexeme, span) = next(lexer)?;
		Self::parse_from(lexer, context, lexeme, span)
	}

	#[allow(clippy::type_complexity)]
	fn parse_from<L: Tokens, F: TermFactory>(
		lexer: &mut L,
		context: &mut Context<F>,
		lexeme: Lexeme,
		span: Span,
	) -> Result<Self, MetaError<L::Error>>;
}

impl Parse for Document {
	fn parse<L: Tokens, F: TermFactory>(
		lexer: &mut L,
		context: &mut Context<F>,
	) -> Result<Self, MetaError<L::Error>> {
		let mut statements = Vec::new();

		while let Meta(Some(lexeme), span) = lexer.next().map_err(lexer_error)? {
			statements.push(Statement::parse_from(lexer, context, lexeme, span)?);
		}

		Ok(Self { statements })
	}

	fn parse_from<L: Tokens, F: TermFactory>(
		lexer: &mut L,
		context: &mut Context<F>,
		lexeme: Lexeme,
		span: Span,
	) -> Result<Self, MetaError<L::Error>> {
		let mut statements = vec![Statement::parse_from(lexer, context, lexeme, span)?];

		while let Meta(Some(lexeme), span) = lexer.next().map_err(lexer_error)? {
			statements.push(Statement::parse_from(lexer, context, lexeme, span)?);
		}

		Ok(Self { statements })
	}
}

impl Parse for Statement {
	fn parse_from<L: Tokens, F: TermFactory>(
		lexer: &mut L,
		context: &mut Context<F>,
		lexeme: Lexeme,
		span: Span,
	) -> Result<Self, MetaError<L::Error>> {
		if lexeme.token.is_skipped() {
			Ok(Self::Skipped(skipped(lexeme, span)))
		} else if matches!(
			lexeme.token,
			Token::Keyword(
				Keyword::Prefix | Keyword::Base | Keyword::SparqlPrefix | Keyword::SparqlBase
			)
		) {
			Ok(Self::Directive(Directive::parse_from(
				lexer, context, lexeme, span,
			)?))
		} else {
			Ok(Self::Triples(Triples::parse_from(
				lexer, context, lexeme, span,
			)?))
		}
	}
}

/// Parses the `pre:` part of a prefix declaration.
fn parse_prefix_name<L: Tokens>(lexer: &mut L) -> Result<(Leaf, String), MetaError<L::Error>> {
	let (lexeme, span) = next(lexer)?;
	match lexeme.token {
		Token::CompactIri { prefix, local } if local.is_empty() => {
			Ok((Meta(lexeme.text, span), prefix))
		}
		token => Err(Meta(Error::Unexpected(Some(token)), span)),
	}
}

fn parse_relative_url<L: Tokens, F: TermFactory>(
	lexer: &mut L,
	context: &mut Context<F>,
) -> Result<RelativeUrl, MetaError<L::Error>> {
	let (lexeme, span) = next(lexer)?;
	match lexeme.token {
		Token::IriRef(value) => {
			let iri = context
				.resolve_iri_ref(&value)
				.map_err(context_error(span))?;
			Ok(RelativeUrl {
				text: Meta(lexeme.text, span),
				value,
				iri,
			})
		}
		token => Err(Meta(Error::Unexpected(Some(token)), span)),
	}
}

fn set_base_iri<E, F: TermFactory>(
	context: &mut Context<F>,
	base: &RelativeUrl,
) -> Result<(), MetaError<E>> {
	context
		.set_base_iri(base.iri.as_str())
		.map_err(context_error(base.text.1))
}

impl Parse for Directive {
	fn parse_from<L: Tokens, F: TermFactory>(
		lexer: &mut L,
		context: &mut Context<F>,
		lexeme: Lexeme,
		span: Span,
	) -> Result<Self, MetaError<L::Error>> {
		let keyword = Meta(lexeme.text, span);
		match lexeme.token {
			Token::Keyword(Keyword::Prefix) => {
				let ws1 = parse_skipped(lexer)?;
				let (prefix_leaf, prefix) = parse_prefix_name(lexer)?;
				let ws2 = parse_skipped(lexer)?;
				let namespace = parse_relative_url(lexer, context)?;
				let ws3 = parse_skipped(lexer)?;
				let period = expect(lexer, Token::Punct(Punct::Period))?;
				context.insert_prefix(prefix, namespace.iri.clone());
				Ok(Self::N3Prefix(N3Prefix {
					keyword,
					ws1,
					prefix: prefix_leaf,
					ws2,
					namespace,
					ws3,
					period,
				}))
			}
			Token::Keyword(Keyword::Base) => {
				let ws1 = parse_skipped(lexer)?;
				let base = parse_relative_url(lexer, context)?;
				let ws2 = parse_skipped(lexer)?;
				let period = expect(lexer, Token::Punct(Punct::Period))?;
				set_base_iri(context, &base)?;
				Ok(Self::N3Base(N3Base {
					keyword,
					ws1,
					base,
					ws2,
					period,
				}))
			}
			Token::Keyword(Keyword::SparqlPrefix) => {
				let ws1 = parse_skipped(lexer)?;
				let (prefix_leaf, prefix) = parse_prefix_name(lexer)?;
				let ws2 = parse_skipped(lexer)?;
				let namespace = parse_relative_url(lexer, context)?;
				context.insert_prefix(prefix, namespace.iri.clone());
				Ok(Self::SparqlPrefix(SparqlPrefix {
					keyword,
					ws1,
					prefix: prefix_leaf,
					ws2,
					namespace,
				}))
			}
			Token::Keyword(Keyword::SparqlBase) => {
				let ws1 = parse_skipped(lexer)?;
				let base = parse_relative_url(lexer, context)?;
				set_base_iri(context, &base)?;
				Ok(Self::SparqlBase(SparqlBase { keyword, ws1, base }))
			}
			token => Err(Meta(Error::Unexpected(Some(token)), span)),
		}
	}
}

impl Parse for Triples {
	fn parse_from<L: Tokens, F: TermFactory>(
		lexer: &mut L,
		context: &mut Context<F>,
		lexeme: Lexeme,
		span: Span,
	) -> Result<Self, MetaError<L::Error>> {
		let subject = Subject::parse_from(lexer, context, lexeme, span)?;
		let ws = parse_skipped(lexer)?;

		let standalone = matches!(subject, Subject::BlankNodePropertyList(_))
			&& matches!(
				lexer.peek().map_err(lexer_error)?,
				Meta(Some(Token::Punct(Punct::Period)), _)
			);

		let (ws1, predicate_objects, ws2) = if standalone {
			(Vec::new(), Vec::new(), ws)
		} else {
			let id = subject.id();
			let (lexeme, span) = next(lexer)?;
			let predicate_objects =
				parse_predicate_object_list(lexer, context, &id, lexeme, span)?;
			(ws, predicate_objects, parse_skipped(lexer)?)
		};

		let period = expect(lexer, Token::Punct(Punct::Period))?;

		Ok(Self {
			subject,
			ws1,
			predicate_objects,
			ws2,
			period,
		})
	}
}

/// Parses a predicate-object list about `subject`, starting with the given
/// verb token.
///
/// Whitespace following the list is left to the caller.
fn parse_predicate_object_list<L: Tokens, F: TermFactory>(
	lexer: &mut L,
	context: &mut Context<F>,
	subject: &Id,
	lexeme: Lexeme,
	span: Span,
) -> Result<Vec<PredicateObject>, MetaError<L::Error>> {
	let mut items = vec![PredicateObject::VerbObjectList(
		parse_verb_object_list(lexer, context, subject, lexeme, span)?,
	)];

	while peek_significant_is(lexer, |t| *t == Token::Punct(Punct::Semicolon))? {
		items.extend(
			parse_skipped(lexer)?
				.into_iter()
				.map(PredicateObject::Skipped),
		);
		let semicolon = expect(lexer, Token::Punct(Punct::Semicolon))?;
		items.push(PredicateObject::Semicolon(semicolon));

		if peek_significant_is(lexer, is_verb_start)? {
			items.extend(
				parse_skipped(lexer)?
					.into_iter()
					.map(PredicateObject::Skipped),
			);
			let (lexeme, span) = next(lexer)?;
			items.push(PredicateObject::VerbObjectList(parse_verb_object_list(
				lexer, context, subject, lexeme, span,
			)?));
		}
	}

	Ok(items)
}

fn parse_verb_object_list<L: Tokens, F: TermFactory>(
	lexer: &mut L,
	context: &mut Context<F>,
	subject: &Id,
	lexeme: Lexeme,
	span: Span,
) -> Result<VerbObjectList, MetaError<L::Error>> {
	let verb = parse_verb(context, lexeme, span)?;
	let ws1 = parse_skipped(lexer)?;
	let predicate = verb.iri().clone();
	let objects = parse_object_list(lexer, context, subject, &predicate)?;
	Ok(VerbObjectList { verb, ws1, objects })
}

/// Parses a comma separated object list, emitting a quad for each object.
fn parse_object_list<L: Tokens, F: TermFactory>(
	lexer: &mut L,
	context: &mut Context<F>,
	subject: &Id,
	predicate: &IriRefBuf,
) -> Result<Vec<ObjectItem>, MetaError<L::Error>> {
	let mut items = Vec::new();

	loop {
		let object = Object::parse(lexer, context)?;
		context.emit(subject.clone(), predicate.clone(), object.term());
		items.push(ObjectItem::Object(object));

		if !peek_significant_is(lexer, |t| *t == Token::Punct(Punct::Comma))? {
			break Ok(items);
		}

		items.extend(parse_skipped(lexer)?.into_iter().map(ObjectItem::Skipped));
		items.push(ObjectItem::Comma(expect(
			lexer,
			Token::Punct(Punct::Comma),
		)?));
		items.extend(parse_skipped(lexer)?.into_iter().map(ObjectItem::Skipped));
	}
}

fn parse_verb<E, F: TermFactory>(
	context: &mut Context<F>,
	lexeme: Lexeme,
	span: Span,
) -> Result<Verb, MetaError<E>> {
	match lexeme.token {
		Token::Keyword(Keyword::A) => {
			let iri = context.constant(RDF_TYPE).map_err(context_error(span))?;
			Ok(Verb::A(A {
				text: Meta(lexeme.text, span),
				iri,
			}))
		}
		_ => Ok(Verb::Iri(parse_iri(context, lexeme, span)?)),
	}
}

fn parse_iri<E, F: TermFactory>(
	context: &mut Context<F>,
	lexeme: Lexeme,
	span: Span,
) -> Result<Iri, MetaError<E>> {
	match lexeme.token {
		Token::IriRef(value) => {
			let iri = context
				.resolve_iri_ref(&value)
				.map_err(context_error(span))?;
			Ok(Iri::RelativeUrl(RelativeUrl {
				text: Meta(lexeme.text, span),
				value,
				iri,
			}))
		}
		Token::CompactIri { prefix, local } => {
			let iri = context
				.resolve_compact_iri(&prefix, &local)
				.map_err(context_error(span))?;

			let mut text = lexeme.text;
			let local_name = text.split_off(prefix.len() + 1);
			let split = span.start() + text.len();

			Ok(Iri::Pname(Pname {
				prefix: Meta(text, Span::new(span.start(), split)),
				local_name: Meta(local_name, Span::new(split, span.end())),
				local,
				iri,
			}))
		}
		token => Err(Meta(Error::Unexpected(Some(token)), span)),
	}
}

/// Term-denoting node that can be used as both subject and object.
enum Node {
	Iri(Iri),
	BlankNode(BlankNode),
	Collection(Collection),
	BlankNodePropertyList(BlankNodePropertyList),
}

impl From<Node> for Subject {
	fn from(node: Node) -> Self {
		match node {
			Node::Iri(iri) => Self::Iri(iri),
			Node::BlankNode(b) => Self::BlankNode(b),
			Node::Collection(c) => Self::Collection(c),
			Node::BlankNodePropertyList(b) => Self::BlankNodePropertyList(b),
		}
	}
}

impl From<Node> for Object {
	fn from(node: Node) -> Self {
		match node {
			Node::Iri(iri) => Self::Iri(iri),
			Node::BlankNode(b) => Self::BlankNode(b),
			Node::Collection(c) => Self::Collection(c),
			Node::BlankNodePropertyList(b) => Self::BlankNodePropertyList(b),
		}
	}
}

/// Parses an IRI or blank node, or returns the token back if it does not
/// start one.
#[allow(clippy::type_complexity)]
fn parse_node<L: Tokens, F: TermFactory>(
	lexer: &mut L,
	context: &mut Context<F>,
	lexeme: Lexeme,
	span: Span,
) -> Result<Result<Node, (Lexeme, Span)>, MetaError<L::Error>> {
	match &lexeme.token {
		Token::IriRef(_) | Token::CompactIri { .. } => {
			Ok(Ok(Node::Iri(parse_iri(context, lexeme, span)?)))
		}
		Token::BlankNodeLabel(label) => {
			let (ordinal, id) = context.labeled_blank_node(label);
			Ok(Ok(Node::BlankNode(BlankNode::Label(BlankNodeLabel {
				text: Meta(lexeme.text, span),
				ordinal,
				id,
			}))))
		}
		Token::Begin(Delimiter::Bracket) => Ok(Ok(parse_bracketed(
			lexer,
			context,
			Meta(lexeme.text, span),
		)?)),
		Token::Begin(Delimiter::Parenthesis) => Ok(Ok(Node::Collection(parse_collection(
			lexer,
			context,
			Meta(lexeme.text, span),
		)?))),
		_ => Ok(Err((lexeme, span))),
	}
}

/// Parses an anonymous blank node or a blank node property list, after the
/// opening `[`.
fn parse_bracketed<L: Tokens, F: TermFactory>(
	lexer: &mut L,
	context: &mut Context<F>,
	open: Leaf,
) -> Result<Node, MetaError<L::Error>> {
	let (ordinal, id) = context.fresh_blank_node();
	let ws1 = parse_skipped(lexer)?;

	let (lexeme, span) = next(lexer)?;
	if lexeme.token == Token::End(Delimiter::Bracket) {
		return Ok(Node::BlankNode(BlankNode::Anon(Anon {
			open,
			ws: ws1,
			close: Meta(lexeme.text, span),
			ordinal,
			id,
		})));
	}

	if !context.enter() {
		return Err(Meta(Error::TooDeep, open.1));
	}

	let subject = Id::Blank(id.clone());
	let predicate_objects = parse_predicate_object_list(lexer, context, &subject, lexeme, span)?;
	let ws2 = parse_skipped(lexer)?;
	let close = expect(lexer, Token::End(Delimiter::Bracket))?;
	context.leave();

	Ok(Node::BlankNodePropertyList(BlankNodePropertyList {
		open,
		ordinal,
		id,
		ws1,
		predicate_objects,
		ws2,
		close,
	}))
}

/// Parses a collection after the opening `(`.
///
/// The list nodes are minted once the closing `)` is reached.
fn parse_collection<L: Tokens, F: TermFactory>(
	lexer: &mut L,
	context: &mut Context<F>,
	open: Leaf,
) -> Result<Collection, MetaError<L::Error>> {
	if !context.enter() {
		return Err(Meta(Error::TooDeep, open.1));
	}

	let ws = parse_skipped(lexer)?;
	let mut objects = Vec::new();

	let close = loop {
		let (lexeme, span) = next(lexer)?;
		if lexeme.token == Token::End(Delimiter::Parenthesis) {
			break Meta(lexeme.text, span);
		}

		let object = Object::parse_from(lexer, context, lexeme, span)?;
		let ws = parse_skipped(lexer)?;
		objects.push((object, ws));
	};

	context.leave();

	let terms = objects.iter().map(|(o, _)| o.term()).collect();
	let (head, nodes) = context
		.build_collection(terms)
		.map_err(context_error(close.1))?;

	let elements = objects
		.into_iter()
		.zip(nodes)
		.map(|((object, ws), (ordinal, node))| ListElement {
			object,
			ordinal,
			node,
			ws,
		})
		.collect();

	Ok(Collection {
		open,
		ws,
		elements,
		close,
		head,
	})
}

impl Parse for Subject {
	fn parse_from<L: Tokens, F: TermFactory>(
		lexer: &mut L,
		context: &mut Context<F>,
		lexeme: Lexeme,
		span: Span,
	) -> Result<Self, MetaError<L::Error>> {
		match parse_node(lexer, context, lexeme, span)? {
			Ok(node) => Ok(node.into()),
			Err((lexeme, span)) => Err(unexpected(lexeme, span)),
		}
	}
}

impl Parse for Object {
	fn parse_from<L: Tokens, F: TermFactory>(
		lexer: &mut L,
		context: &mut Context<F>,
		lexeme: Lexeme,
		span: Span,
	) -> Result<Self, MetaError<L::Error>> {
		match parse_node(lexer, context, lexeme, span)? {
			Ok(node) => Ok(node.into()),
			Err((lexeme, span)) => Ok(Self::Literal(Literal::parse_from(
				lexer, context, lexeme, span,
			)?)),
		}
	}
}

fn typed<E, F: TermFactory>(
	context: &mut Context<F>,
	value: String,
	datatype: iref::Iri<'static>,
	span: Span,
) -> Result<term::Literal, MetaError<E>> {
	let datatype = context.constant(datatype).map_err(context_error(span))?;
	Ok(term::Literal::new(value, term::LiteralType::Any(datatype)))
}

impl Parse for Literal {
	fn parse_from<L: Tokens, F: TermFactory>(
		lexer: &mut L,
		context: &mut Context<F>,
		lexeme: Lexeme,
		span: Span,
	) -> Result<Self, MetaError<L::Error>> {
		match lexeme.token {
			Token::StringLiteral(value) => {
				let string = QuotedString {
					text: Meta(lexeme.text, span),
					value,
				};

				if peek_significant_is(lexer, |t| matches!(t, Token::LangTag(_)))? {
					let ws = parse_skipped(lexer)?;
					let (lexeme, span) = next(lexer)?;
					match lexeme.token {
						Token::LangTag(tag) => {
							let literal = term::Literal::new(
								string.value.clone(),
								term::LiteralType::LangString(tag),
							);
							Ok(Self::LangTag(LangTagLiteral {
								string,
								ws,
								lang: Meta(lexeme.text, span),
								literal,
							}))
						}
						token => Err(Meta(Error::Unexpected(Some(token)), span)),
					}
				} else if peek_significant_is(lexer, |t| *t == Token::Punct(Punct::Carets))? {
					let ws1 = parse_skipped(lexer)?;
					let carets = expect(lexer, Token::Punct(Punct::Carets))?;
					let ws2 = parse_skipped(lexer)?;
					let (lexeme, span) = next(lexer)?;
					let datatype = parse_iri(context, lexeme, span)?;
					let literal = term::Literal::new(
						string.value.clone(),
						term::LiteralType::Any(datatype.iri().clone()),
					);
					Ok(Self::Datatyped(DatatypedLiteral {
						string,
						ws1,
						carets,
						ws2,
						datatype,
						literal,
					}))
				} else {
					let literal = typed(context, string.value.clone(), lexing::XSD_STRING, span)?;
					Ok(Self::Simple(SimpleLiteral { string, literal }))
				}
			}
			Token::Numeric(value) => {
				let literal = typed(context, value.as_str().to_owned(), value.datatype(), span)?;
				Ok(Self::Numeric(NumericLiteral {
					text: Meta(lexeme.text, span),
					value,
					literal,
				}))
			}
			Token::Keyword(kw @ (Keyword::True | Keyword::False)) => {
				let value = kw == Keyword::True;
				let literal = typed(
					context,
					value.to_string(),
					lexing::XSD_BOOLEAN,
					span,
				)?;
				Ok(Self::Boolean(BooleanLiteral {
					text: Meta(lexeme.text, span),
					value,
					literal,
				}))
			}
			token => Err(Meta(Error::Unexpected(Some(token)), span)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::term::DataFactory;
	use rdf_types::RdfDisplay;

	fn parse(input: &str) -> (Document, Vec<String>) {
		let mut context = Context::new(DataFactory::new());
		context.set_base_iri("http://a.example/ns").unwrap();
		let mut lexer = lexing::from_str(input);
		let document = Document::parse(&mut lexer, &mut context).unwrap();
		let quads = context
			.quads()
			.iter()
			.map(|q| format!("{} .", q.rdf_display()))
			.collect();
		(document, quads)
	}

	fn parse_err(input: &str) -> Error<lexing::Error> {
		let mut context = Context::new(DataFactory::new());
		let mut lexer = lexing::from_str(input);
		Document::parse(&mut lexer, &mut context).unwrap_err().0
	}

	#[test]
	fn semicolons_and_commas() {
		let (_, quads) = parse("<#s> <#p1> <#o1> , <#o2> ; ; <#p2> <#o3> ; .");
		assert_eq!(
			quads,
			[
				"<http://a.example/ns#s> <http://a.example/ns#p1> <http://a.example/ns#o1> .",
				"<http://a.example/ns#s> <http://a.example/ns#p1> <http://a.example/ns#o2> .",
				"<http://a.example/ns#s> <http://a.example/ns#p2> <http://a.example/ns#o3> ."
			]
		)
	}

	#[test]
	fn anon_and_property_list() {
		let (document, quads) = parse("[ ] <#p> [ <#q> 1 ] .");
		match &document.statements[0] {
			Statement::Triples(t) => {
				assert!(matches!(t.subject, Subject::BlankNode(BlankNode::Anon(_))))
			}
			_ => panic!("expected triples"),
		}

		assert_eq!(
			quads,
			[
				"_:df_0_1 <http://a.example/ns#q> \"1\"^^<http://www.w3.org/2001/XMLSchema#integer> .",
				"_:df_0_0 <http://a.example/ns#p> _:df_0_1 ."
			]
		)
	}

	#[test]
	fn standalone_property_list() {
		let (document, quads) = parse("[ <#p> <#o> ] .");
		match &document.statements[0] {
			Statement::Triples(t) => {
				assert!(t.predicate_objects.is_empty());
				assert_eq!(t.ws2.len(), 1)
			}
			_ => panic!("expected triples"),
		}

		assert_eq!(quads.len(), 1)
	}

	#[test]
	fn literals() {
		let (_, quads) = parse(
			"<#s> <#p> \"a\" , \"b\" @en-US , \"c\" ^^ <#t> , true , 2.5 , 1e3 .",
		);
		assert_eq!(
			quads,
			[
				"<http://a.example/ns#s> <http://a.example/ns#p> \"a\"^^<http://www.w3.org/2001/XMLSchema#string> .",
				"<http://a.example/ns#s> <http://a.example/ns#p> \"b\"@en-US .",
				"<http://a.example/ns#s> <http://a.example/ns#p> \"c\"^^<http://a.example/ns#t> .",
				"<http://a.example/ns#s> <http://a.example/ns#p> \"true\"^^<http://www.w3.org/2001/XMLSchema#boolean> .",
				"<http://a.example/ns#s> <http://a.example/ns#p> \"2.5\"^^<http://www.w3.org/2001/XMLSchema#decimal> .",
				"<http://a.example/ns#s> <http://a.example/ns#p> \"1e3\"^^<http://www.w3.org/2001/XMLSchema#double> ."
			]
		)
	}

	#[test]
	fn pname_leaves() {
		let mut context = Context::new(DataFactory::new());
		let mut lexer = lexing::from_str("@prefix ex: <http://e.example/> . ex:a\\.b ex:p ex: .");
		let document = Document::parse(&mut lexer, &mut context).unwrap();
		match &document.statements[2] {
			Statement::Triples(Triples {
				subject: Subject::Iri(Iri::Pname(p)),
				..
			}) => {
				assert_eq!(p.prefix.0, "ex:");
				assert_eq!(p.local_name.0, "a\\.b");
				assert_eq!(p.local, "a.b");
				assert_eq!(p.iri.as_str(), "http://e.example/a.b");
				assert_eq!((p.local_name.1.start(), p.local_name.1.end()), (37, 41))
			}
			_ => panic!("expected a prefixed name subject"),
		}
	}

	#[test]
	fn missing_period() {
		assert!(matches!(
			parse_err("<s> <p> <o>"),
			Error::Unexpected(None)
		))
	}

	#[test]
	fn literal_subject() {
		assert!(matches!(
			parse_err("\"s\" <p> <o> ."),
			Error::Unexpected(Some(Token::StringLiteral(_)))
		))
	}

	fn nested(depth: usize) -> String {
		format!(
			"<s> <p> {}<o>{} .",
			"[ <q> ".repeat(depth),
			" ]".repeat(depth)
		)
	}

	#[test]
	fn nesting_limit() {
		let (_, quads) = parse(&nested(context::MAX_NESTING_DEPTH));
		assert_eq!(quads.len(), context::MAX_NESTING_DEPTH + 1);
		assert!(matches!(
			parse_err(&nested(context::MAX_NESTING_DEPTH + 1)),
			Error::TooDeep
		))
	}

	#[test]
	fn collection_nesting_limit() {
		let n = context::MAX_NESTING_DEPTH;
		let (_, quads) = parse(&format!("<s> <p> {}{} .", "(".repeat(n), ")".repeat(n)));
		assert_eq!(quads.len(), 1 + 2 * (n - 1));
		assert!(matches!(
			parse_err(&format!("<s> <p> {}{} .", "(".repeat(n + 1), ")".repeat(n + 1))),
			Error::TooDeep
		))
	}

	#[test]
	fn invalid_base() {
		assert!(matches!(
			parse_err("BASE <relative/>"),
			Error::Context(context::Error::Iri(_))
		))
	}
}
