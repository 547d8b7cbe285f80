//! Lossless parse tree.
//!
//! Every character of the source document belongs to exactly one [`Leaf`],
//! so that concatenating the leaves in document order gives back the input.
//! See [`crate::visit::orig_text`].
//!
//! Nodes denoting an RDF term carry it: IRI nodes their IRI, blank nodes
//! their identifier, collections their head and literals their value.
use crate::term::{self, Id, Term};
use iref::IriRefBuf;
use locspan::{Meta, Span};
use rdf_types::BlankIdBuf;

/// Source text with its byte span.
pub type Leaf = Meta<String, Span>;

/// Whitespace or comment.
#[derive(Debug, Clone, PartialEq)]
pub enum Skipped {
	Ws(Leaf),
	Comment(Leaf),
}

impl Skipped {
	pub fn leaf(&self) -> &Leaf {
		match self {
			Self::Ws(l) | Self::Comment(l) => l,
		}
	}
}

/// Turtle document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
	pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
	/// Whitespace or comment between two statements.
	Skipped(Skipped),
	Directive(Directive),
	Triples(Triples),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
	/// `@prefix pre: <iri> .`
	N3Prefix(N3Prefix),

	/// `@base <iri> .`
	N3Base(N3Base),

	/// `PREFIX pre: <iri>`
	SparqlPrefix(SparqlPrefix),

	/// `BASE <iri>`
	SparqlBase(SparqlBase),
}

#[derive(Debug, Clone, PartialEq)]
pub struct N3Prefix {
	pub keyword: Leaf,
	pub ws1: Vec<Skipped>,
	pub prefix: Leaf,
	pub ws2: Vec<Skipped>,
	pub namespace: RelativeUrl,
	pub ws3: Vec<Skipped>,
	pub period: Leaf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct N3Base {
	pub keyword: Leaf,
	pub ws1: Vec<Skipped>,
	pub base: RelativeUrl,
	pub ws2: Vec<Skipped>,
	pub period: Leaf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SparqlPrefix {
	pub keyword: Leaf,
	pub ws1: Vec<Skipped>,
	pub prefix: Leaf,
	pub ws2: Vec<Skipped>,
	pub namespace: RelativeUrl,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SparqlBase {
	pub keyword: Leaf,
	pub ws1: Vec<Skipped>,
	pub base: RelativeUrl,
}

/// Subject followed by its predicate-object list and the final period.
///
/// The predicate-object list is empty only when the subject is a blank node
/// property list.
#[derive(Debug, Clone, PartialEq)]
pub struct Triples {
	pub subject: Subject,
	pub ws1: Vec<Skipped>,
	pub predicate_objects: Vec<PredicateObject>,
	pub ws2: Vec<Skipped>,
	pub period: Leaf,
}

/// Item of a predicate-object list.
#[derive(Debug, Clone, PartialEq)]
pub enum PredicateObject {
	VerbObjectList(VerbObjectList),
	Semicolon(Leaf),
	Skipped(Skipped),
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerbObjectList {
	pub verb: Verb,
	pub ws1: Vec<Skipped>,
	pub objects: Vec<ObjectItem>,
}

impl VerbObjectList {
	pub fn objects(&self) -> impl Iterator<Item = &Object> {
		self.objects.iter().filter_map(|item| match item {
			ObjectItem::Object(o) => Some(o),
			_ => None,
		})
	}
}

/// Item of an object list.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectItem {
	Object(Object),
	Comma(Leaf),
	Skipped(Skipped),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Verb {
	/// `a`, for `rdf:type`.
	A(A),
	Iri(Iri),
}

impl Verb {
	pub fn iri(&self) -> &IriRefBuf {
		match self {
			Self::A(a) => &a.iri,
			Self::Iri(iri) => iri.iri(),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct A {
	pub text: Leaf,
	pub iri: IriRefBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Iri {
	RelativeUrl(RelativeUrl),
	Pname(Pname),
}

impl Iri {
	pub fn iri(&self) -> &IriRefBuf {
		match self {
			Self::RelativeUrl(r) => &r.iri,
			Self::Pname(p) => &p.iri,
		}
	}
}

/// `<...>` IRI reference.
#[derive(Debug, Clone, PartialEq)]
pub struct RelativeUrl {
	pub text: Leaf,

	/// Unescaped reference, before resolution.
	pub value: String,

	/// Resolved IRI.
	pub iri: IriRefBuf,
}

/// Prefixed name.
#[derive(Debug, Clone, PartialEq)]
pub struct Pname {
	/// Prefix, including the `:`.
	pub prefix: Leaf,
	pub local_name: Leaf,

	/// Unescaped local name.
	pub local: String,
	pub iri: IriRefBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlankNode {
	Label(BlankNodeLabel),
	Anon(Anon),
}

impl BlankNode {
	pub fn id(&self) -> &BlankIdBuf {
		match self {
			Self::Label(l) => &l.id,
			Self::Anon(a) => &a.id,
		}
	}

	pub fn ordinal(&self) -> usize {
		match self {
			Self::Label(l) => l.ordinal,
			Self::Anon(a) => a.ordinal,
		}
	}
}

/// `_:label`
#[derive(Debug, Clone, PartialEq)]
pub struct BlankNodeLabel {
	pub text: Leaf,
	pub ordinal: usize,
	pub id: BlankIdBuf,
}

/// `[]`, possibly with whitespace or comments inside.
#[derive(Debug, Clone, PartialEq)]
pub struct Anon {
	pub open: Leaf,
	pub ws: Vec<Skipped>,
	pub close: Leaf,
	pub ordinal: usize,
	pub id: BlankIdBuf,
}

/// `[ predicateObjectList ]`
#[derive(Debug, Clone, PartialEq)]
pub struct BlankNodePropertyList {
	pub open: Leaf,
	pub ordinal: usize,
	pub id: BlankIdBuf,
	pub ws1: Vec<Skipped>,
	pub predicate_objects: Vec<PredicateObject>,
	pub ws2: Vec<Skipped>,
	pub close: Leaf,
}

/// `( object* )`
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
	pub open: Leaf,
	pub ws: Vec<Skipped>,
	pub elements: Vec<ListElement>,
	pub close: Leaf,

	/// First list node, or `rdf:nil` for an empty collection.
	pub head: Id,
}

/// Collection element, with the list node holding it and the whitespace
/// following it.
#[derive(Debug, Clone, PartialEq)]
pub struct ListElement {
	pub object: Object,
	pub ordinal: usize,
	pub node: BlankIdBuf,
	pub ws: Vec<Skipped>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Subject {
	Iri(Iri),
	BlankNode(BlankNode),
	Collection(Collection),
	BlankNodePropertyList(BlankNodePropertyList),
}

impl Subject {
	pub fn id(&self) -> Id {
		match self {
			Self::Iri(iri) => Id::Iri(iri.iri().clone()),
			Self::BlankNode(b) => Id::Blank(b.id().clone()),
			Self::Collection(c) => c.head.clone(),
			Self::BlankNodePropertyList(b) => Id::Blank(b.id.clone()),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum Object {
	Iri(Iri),
	BlankNode(BlankNode),
	Collection(Collection),
	BlankNodePropertyList(BlankNodePropertyList),
	Literal(Literal),
}

impl Object {
	pub fn term(&self) -> Term {
		match self {
			Self::Iri(iri) => Term::Id(Id::Iri(iri.iri().clone())),
			Self::BlankNode(b) => Term::Id(Id::Blank(b.id().clone())),
			Self::Collection(c) => Term::Id(c.head.clone()),
			Self::BlankNodePropertyList(b) => Term::Id(Id::Blank(b.id.clone())),
			Self::Literal(l) => Term::Literal(l.literal().clone()),
		}
	}
}

/// Quoted string, in any of the four quoting styles.
#[derive(Debug, Clone, PartialEq)]
pub struct QuotedString {
	pub text: Leaf,

	/// Unescaped value.
	pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
	Simple(SimpleLiteral),
	LangTag(LangTagLiteral),
	Datatyped(DatatypedLiteral),
	Numeric(NumericLiteral),
	Boolean(BooleanLiteral),
}

impl Literal {
	pub fn literal(&self) -> &term::Literal {
		match self {
			Self::Simple(l) => &l.literal,
			Self::LangTag(l) => &l.literal,
			Self::Datatyped(l) => &l.literal,
			Self::Numeric(l) => &l.literal,
			Self::Boolean(l) => &l.literal,
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimpleLiteral {
	pub string: QuotedString,
	pub literal: term::Literal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LangTagLiteral {
	pub string: QuotedString,
	pub ws: Vec<Skipped>,

	/// Language tag, including the `@`.
	pub lang: Leaf,
	pub literal: term::Literal,
}

impl LangTagLiteral {
	/// Validated language tag.
	pub fn language_tag(&self) -> Option<&langtag::LanguageTagBuf> {
		self.literal.lang_tag()
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatatypedLiteral {
	pub string: QuotedString,
	pub ws1: Vec<Skipped>,
	pub carets: Leaf,
	pub ws2: Vec<Skipped>,
	pub datatype: Iri,
	pub literal: term::Literal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumericLiteral {
	pub text: Leaf,
	pub value: crate::lexing::NumericLiteral,
	pub literal: term::Literal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
	pub text: Leaf,
	pub value: bool,
	pub literal: term::Literal,
}
