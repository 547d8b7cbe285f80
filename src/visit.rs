//! Parse tree traversal.
//!
//! The [`Visit`] trait has one method per node type, each defaulting to a
//! depth-first walk of the node's children in document order. Leaves are
//! reported to [`Visit::visit_leaf`] along with their [`NodeKind`].
//!
//! ```
//! use lossless_turtle::{visit::orig_text, Parser};
//!
//! let input = "PREFIX ex: <http://example.org/> # comment\nex:s a ex:C .\n";
//! let (document, _) = Parser::new().parse(input).unwrap();
//! assert_eq!(orig_text(&document).concat(), input);
//! ```
use crate::ast::*;
use std::fmt;

/// Kind of parse tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
	Ws,
	Comment,
	SparqlPrefix,
	SparqlBase,
	N3Prefix,
	N3Base,
	Keyword,
	Prefix,
	Triples,
	VerbObjectList,
	RelativeUrl,
	Pname,
	LocalName,
	A,
	BlankNodeLabel,
	Anon,
	BlankNodePropertyList,
	Collection,
	SimpleLiteral,
	DatatypedLiteral,
	LangTagLiteral,
	String,
	LangTag,
	NumericLiteral,
	BooleanLiteral,

	/// Punctuation: `.`, `,`, `;`, `^^` and brackets.
	Token,
}

impl NodeKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Ws => "ws",
			Self::Comment => "comment",
			Self::SparqlPrefix => "sparqlPrefix",
			Self::SparqlBase => "sparqlBase",
			Self::N3Prefix => "n3Prefix",
			Self::N3Base => "n3Base",
			Self::Keyword => "keyword",
			Self::Prefix => "prefix",
			Self::Triples => "triples",
			Self::VerbObjectList => "verb_objectList",
			Self::RelativeUrl => "relativeUrl",
			Self::Pname => "pname",
			Self::LocalName => "localName",
			Self::A => "a",
			Self::BlankNodeLabel => "BLANK_NODE_LABEL",
			Self::Anon => "ANON",
			Self::BlankNodePropertyList => "blankNodePropertyList",
			Self::Collection => "collection",
			Self::SimpleLiteral => "simpleLiteral",
			Self::DatatypedLiteral => "datatypedLiteral",
			Self::LangTagLiteral => "langTagLiteral",
			Self::String => "String",
			Self::LangTag => "LANGTAG",
			Self::NumericLiteral => "numericLiteral",
			Self::BooleanLiteral => "booleanLiteral",
			Self::Token => "token",
		}
	}
}

impl fmt::Display for NodeKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.as_str().fmt(f)
	}
}

impl Directive {
	pub fn kind(&self) -> NodeKind {
		match self {
			Self::N3Prefix(_) => NodeKind::N3Prefix,
			Self::N3Base(_) => NodeKind::N3Base,
			Self::SparqlPrefix(_) => NodeKind::SparqlPrefix,
			Self::SparqlBase(_) => NodeKind::SparqlBase,
		}
	}
}

impl Iri {
	pub fn kind(&self) -> NodeKind {
		match self {
			Self::RelativeUrl(_) => NodeKind::RelativeUrl,
			Self::Pname(_) => NodeKind::Pname,
		}
	}
}

impl BlankNode {
	pub fn kind(&self) -> NodeKind {
		match self {
			Self::Label(_) => NodeKind::BlankNodeLabel,
			Self::Anon(_) => NodeKind::Anon,
		}
	}
}

impl Literal {
	pub fn kind(&self) -> NodeKind {
		match self {
			Self::Simple(_) => NodeKind::SimpleLiteral,
			Self::LangTag(_) => NodeKind::LangTagLiteral,
			Self::Datatyped(_) => NodeKind::DatatypedLiteral,
			Self::Numeric(_) => NodeKind::NumericLiteral,
			Self::Boolean(_) => NodeKind::BooleanLiteral,
		}
	}
}

/// Parse tree visitor.
pub trait Visit<'ast> {
	fn visit_document(&mut self, node: &'ast Document) {
		walk_document(self, node)
	}

	fn visit_statement(&mut self, node: &'ast Statement) {
		walk_statement(self, node)
	}

	fn visit_skipped(&mut self, node: &'ast Skipped) {
		match node {
			Skipped::Ws(leaf) => self.visit_leaf(NodeKind::Ws, leaf),
			Skipped::Comment(leaf) => self.visit_leaf(NodeKind::Comment, leaf),
		}
	}

	fn visit_directive(&mut self, node: &'ast Directive) {
		walk_directive(self, node)
	}

	fn visit_triples(&mut self, node: &'ast Triples) {
		walk_triples(self, node)
	}

	fn visit_predicate_object(&mut self, node: &'ast PredicateObject) {
		walk_predicate_object(self, node)
	}

	fn visit_verb_object_list(&mut self, node: &'ast VerbObjectList) {
		walk_verb_object_list(self, node)
	}

	fn visit_verb(&mut self, node: &'ast Verb) {
		match node {
			Verb::A(a) => self.visit_leaf(NodeKind::A, &a.text),
			Verb::Iri(iri) => self.visit_iri(iri),
		}
	}

	fn visit_subject(&mut self, node: &'ast Subject) {
		walk_subject(self, node)
	}

	fn visit_object(&mut self, node: &'ast Object) {
		walk_object(self, node)
	}

	fn visit_iri(&mut self, node: &'ast Iri) {
		match node {
			Iri::RelativeUrl(r) => self.visit_relative_url(r),
			Iri::Pname(p) => self.visit_pname(p),
		}
	}

	fn visit_relative_url(&mut self, node: &'ast RelativeUrl) {
		self.visit_leaf(NodeKind::RelativeUrl, &node.text)
	}

	fn visit_pname(&mut self, node: &'ast Pname) {
		self.visit_leaf(NodeKind::Prefix, &node.prefix);
		self.visit_leaf(NodeKind::LocalName, &node.local_name)
	}

	fn visit_blank_node(&mut self, node: &'ast BlankNode) {
		walk_blank_node(self, node)
	}

	fn visit_blank_node_property_list(&mut self, node: &'ast BlankNodePropertyList) {
		walk_blank_node_property_list(self, node)
	}

	fn visit_collection(&mut self, node: &'ast Collection) {
		walk_collection(self, node)
	}

	fn visit_literal(&mut self, node: &'ast Literal) {
		walk_literal(self, node)
	}

	/// Called on every leaf, in document order.
	fn visit_leaf(&mut self, _kind: NodeKind, _leaf: &'ast Leaf) {}
}

fn walk_skipped<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, ws: &'ast [Skipped]) {
	for s in ws {
		v.visit_skipped(s)
	}
}

pub fn walk_document<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast Document) {
	for statement in &node.statements {
		v.visit_statement(statement)
	}
}

pub fn walk_statement<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast Statement) {
	match node {
		Statement::Skipped(s) => v.visit_skipped(s),
		Statement::Directive(d) => v.visit_directive(d),
		Statement::Triples(t) => v.visit_triples(t),
	}
}

pub fn walk_directive<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast Directive) {
	match node {
		Directive::N3Prefix(d) => {
			v.visit_leaf(NodeKind::Keyword, &d.keyword);
			walk_skipped(v, &d.ws1);
			v.visit_leaf(NodeKind::Prefix, &d.prefix);
			walk_skipped(v, &d.ws2);
			v.visit_relative_url(&d.namespace);
			walk_skipped(v, &d.ws3);
			v.visit_leaf(NodeKind::Token, &d.period)
		}
		Directive::N3Base(d) => {
			v.visit_leaf(NodeKind::Keyword, &d.keyword);
			walk_skipped(v, &d.ws1);
			v.visit_relative_url(&d.base);
			walk_skipped(v, &d.ws2);
			v.visit_leaf(NodeKind::Token, &d.period)
		}
		Directive::SparqlPrefix(d) => {
			v.visit_leaf(NodeKind::Keyword, &d.keyword);
			walk_skipped(v, &d.ws1);
			v.visit_leaf(NodeKind::Prefix, &d.prefix);
			walk_skipped(v, &d.ws2);
			v.visit_relative_url(&d.namespace)
		}
		Directive::SparqlBase(d) => {
			v.visit_leaf(NodeKind::Keyword, &d.keyword);
			walk_skipped(v, &d.ws1);
			v.visit_relative_url(&d.base)
		}
	}
}

pub fn walk_triples<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast Triples) {
	v.visit_subject(&node.subject);
	walk_skipped(v, &node.ws1);
	for item in &node.predicate_objects {
		v.visit_predicate_object(item)
	}
	walk_skipped(v, &node.ws2);
	v.visit_leaf(NodeKind::Token, &node.period)
}

pub fn walk_predicate_object<'ast, V: Visit<'ast> + ?Sized>(
	v: &mut V,
	node: &'ast PredicateObject,
) {
	match node {
		PredicateObject::VerbObjectList(l) => v.visit_verb_object_list(l),
		PredicateObject::Semicolon(leaf) => v.visit_leaf(NodeKind::Token, leaf),
		PredicateObject::Skipped(s) => v.visit_skipped(s),
	}
}

pub fn walk_verb_object_list<'ast, V: Visit<'ast> + ?Sized>(
	v: &mut V,
	node: &'ast VerbObjectList,
) {
	v.visit_verb(&node.verb);
	walk_skipped(v, &node.ws1);
	for item in &node.objects {
		match item {
			ObjectItem::Object(o) => v.visit_object(o),
			ObjectItem::Comma(leaf) => v.visit_leaf(NodeKind::Token, leaf),
			ObjectItem::Skipped(s) => v.visit_skipped(s),
		}
	}
}

pub fn walk_subject<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast Subject) {
	match node {
		Subject::Iri(iri) => v.visit_iri(iri),
		Subject::BlankNode(b) => v.visit_blank_node(b),
		Subject::Collection(c) => v.visit_collection(c),
		Subject::BlankNodePropertyList(b) => v.visit_blank_node_property_list(b),
	}
}

pub fn walk_object<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast Object) {
	match node {
		Object::Iri(iri) => v.visit_iri(iri),
		Object::BlankNode(b) => v.visit_blank_node(b),
		Object::Collection(c) => v.visit_collection(c),
		Object::BlankNodePropertyList(b) => v.visit_blank_node_property_list(b),
		Object::Literal(l) => v.visit_literal(l),
	}
}

pub fn walk_blank_node<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast BlankNode) {
	match node {
		BlankNode::Label(l) => v.visit_leaf(NodeKind::BlankNodeLabel, &l.text),
		BlankNode::Anon(a) => {
			v.visit_leaf(NodeKind::Token, &a.open);
			walk_skipped(v, &a.ws);
			v.visit_leaf(NodeKind::Token, &a.close)
		}
	}
}

pub fn walk_blank_node_property_list<'ast, V: Visit<'ast> + ?Sized>(
	v: &mut V,
	node: &'ast BlankNodePropertyList,
) {
	v.visit_leaf(NodeKind::Token, &node.open);
	walk_skipped(v, &node.ws1);
	for item in &node.predicate_objects {
		v.visit_predicate_object(item)
	}
	walk_skipped(v, &node.ws2);
	v.visit_leaf(NodeKind::Token, &node.close)
}

pub fn walk_collection<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast Collection) {
	v.visit_leaf(NodeKind::Token, &node.open);
	walk_skipped(v, &node.ws);
	for element in &node.elements {
		v.visit_object(&element.object);
		walk_skipped(v, &element.ws);
	}
	v.visit_leaf(NodeKind::Token, &node.close)
}

pub fn walk_literal<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast Literal) {
	match node {
		Literal::Simple(l) => v.visit_leaf(NodeKind::String, &l.string.text),
		Literal::LangTag(l) => {
			v.visit_leaf(NodeKind::String, &l.string.text);
			walk_skipped(v, &l.ws);
			v.visit_leaf(NodeKind::LangTag, &l.lang)
		}
		Literal::Datatyped(l) => {
			v.visit_leaf(NodeKind::String, &l.string.text);
			walk_skipped(v, &l.ws1);
			v.visit_leaf(NodeKind::Token, &l.carets);
			walk_skipped(v, &l.ws2);
			v.visit_iri(&l.datatype)
		}
		Literal::Numeric(l) => v.visit_leaf(NodeKind::NumericLiteral, &l.text),
		Literal::Boolean(l) => v.visit_leaf(NodeKind::BooleanLiteral, &l.text),
	}
}

/// Parse tree node.
pub trait Node {
	fn accept<'ast, V: Visit<'ast> + ?Sized>(&'ast self, visitor: &mut V);
}

macro_rules! node {
	($($ty:ident => $method:ident),*) => {
		$(
			impl Node for $ty {
				fn accept<'ast, V: Visit<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
					visitor.$method(self)
				}
			}
		)*
	};
}

node! {
	Document => visit_document,
	Statement => visit_statement,
	Skipped => visit_skipped,
	Directive => visit_directive,
	Triples => visit_triples,
	PredicateObject => visit_predicate_object,
	VerbObjectList => visit_verb_object_list,
	Verb => visit_verb,
	Subject => visit_subject,
	Object => visit_object,
	Iri => visit_iri,
	RelativeUrl => visit_relative_url,
	Pname => visit_pname,
	BlankNode => visit_blank_node,
	BlankNodePropertyList => visit_blank_node_property_list,
	Collection => visit_collection,
	Literal => visit_literal
}

struct TextCollector<'ast>(Vec<&'ast str>);

impl<'ast> Visit<'ast> for TextCollector<'ast> {
	fn visit_leaf(&mut self, _kind: NodeKind, leaf: &'ast Leaf) {
		self.0.push(leaf.0.as_str())
	}
}

/// Returns the source text of every leaf of `node`, in document order.
///
/// Joined, they give back the exact source text of the node.
pub fn orig_text<N: Node + ?Sized>(node: &N) -> Vec<&str> {
	let mut collector = TextCollector(Vec::new());
	node.accept(&mut collector);
	collector.0
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Parser;

	#[derive(Default)]
	struct Kinds(Vec<(NodeKind, String)>);

	impl<'ast> Visit<'ast> for Kinds {
		fn visit_leaf(&mut self, kind: NodeKind, leaf: &'ast Leaf) {
			self.0.push((kind, leaf.0.clone()))
		}
	}

	#[test]
	fn leaf_kinds() {
		let (document, _) = Parser::new()
			.parse("@prefix p: <n#>.\n_:b a p:c , \"x\"@en.")
			.unwrap();
		let mut kinds = Kinds::default();
		kinds.visit_document(&document);

		let expected = [
			(NodeKind::Keyword, "@prefix"),
			(NodeKind::Ws, " "),
			(NodeKind::Prefix, "p:"),
			(NodeKind::Ws, " "),
			(NodeKind::RelativeUrl, "<n#>"),
			(NodeKind::Token, "."),
			(NodeKind::Ws, "\n"),
			(NodeKind::BlankNodeLabel, "_:b"),
			(NodeKind::Ws, " "),
			(NodeKind::A, "a"),
			(NodeKind::Ws, " "),
			(NodeKind::Prefix, "p:"),
			(NodeKind::LocalName, "c"),
			(NodeKind::Ws, " "),
			(NodeKind::Token, ","),
			(NodeKind::Ws, " "),
			(NodeKind::String, "\"x\""),
			(NodeKind::LangTag, "@en"),
			(NodeKind::Token, "."),
		];

		assert_eq!(
			kinds.0,
			expected
				.iter()
				.map(|(k, t)| (*k, t.to_string()))
				.collect::<Vec<_>>()
		)
	}

	#[test]
	fn orig_text_of_subtree() {
		let (document, _) = Parser::new().parse("<s> <p> ( 1 [ <q> 2 ] ) .").unwrap();
		match &document.statements[0] {
			Statement::Triples(t) => match &t.predicate_objects[0] {
				PredicateObject::VerbObjectList(l) => {
					let object = l.objects().next().unwrap();
					assert_eq!(orig_text(object).concat(), "( 1 [ <q> 2 ] )")
				}
				_ => panic!("expected a verb-object list"),
			},
			_ => panic!("expected triples"),
		}
	}
}
