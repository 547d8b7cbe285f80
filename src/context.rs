//! Parse state and quad emission.
use crate::iri;
use crate::term::{Id, InvalidIri, Quad, Term, TermFactory};
use iref::{Iri, IriBuf, IriRefBuf};
use rdf_types::BlankIdBuf;
use static_iref::iri;
use std::collections::HashMap;

pub const RDF_TYPE: Iri<'static> = iri!("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
pub const RDF_NIL: Iri<'static> = iri!("http://www.w3.org/1999/02/22-rdf-syntax-ns#nil");
pub const RDF_FIRST: Iri<'static> = iri!("http://www.w3.org/1999/02/22-rdf-syntax-ns#first");
pub const RDF_REST: Iri<'static> = iri!("http://www.w3.org/1999/02/22-rdf-syntax-ns#rest");

/// Maximum number of nested blank node property lists and collections.
pub const MAX_NESTING_DEPTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("unknown prefix \"{0}:\"")]
	UnknownPrefix(String),

	#[error(transparent)]
	Iri(#[from] iri::Error),

	#[error(transparent)]
	InvalidIri(#[from] InvalidIri),
}

/// Parse context.
///
/// Holds the base IRI, the prefix table, the blank node ordinal counter and
/// the quads emitted by the current parse. The prefix table, base IRI and
/// counters persist across parses until [`Context::reset`] is called.
pub struct Context<F> {
	factory: F,
	base_iri: Option<IriBuf>,
	prefixes: HashMap<String, IriRefBuf>,
	ordinal: usize,
	quads: Vec<Quad>,
	depth: usize,
}

impl<F: TermFactory> Context<F> {
	pub fn new(factory: F) -> Self {
		Self {
			factory,
			base_iri: None,
			prefixes: HashMap::new(),
			ordinal: 0,
			quads: Vec::new(),
			depth: 0,
		}
	}

	pub fn factory(&self) -> &F {
		&self.factory
	}

	pub fn base_iri(&self) -> Option<&IriBuf> {
		self.base_iri.as_ref()
	}

	/// Sets the base IRI, which must be absolute.
	pub fn set_base_iri(&mut self, iri: &str) -> Result<(), Error> {
		let base = iri::parse_base(iri)?;
		log::trace!("base IRI <{base}>");
		self.base_iri = Some(base);
		Ok(())
	}

	pub fn prefixes(&self) -> &HashMap<String, IriRefBuf> {
		&self.prefixes
	}

	pub fn insert_prefix(&mut self, prefix: String, namespace: IriRefBuf) {
		log::trace!("prefix {prefix}: <{namespace}>");
		self.prefixes.insert(prefix, namespace);
	}

	pub fn named_node(&mut self, iri: String) -> Result<IriRefBuf, Error> {
		Ok(self.factory.named_node(iri)?)
	}

	/// Creates a named node for a well-known IRI.
	pub fn constant(&mut self, iri: Iri<'static>) -> Result<IriRefBuf, Error> {
		self.named_node(iri.as_str().to_owned())
	}

	/// Resolves an unescaped IRI reference against the current base IRI.
	pub fn resolve_iri_ref(&mut self, iri_ref: &str) -> Result<IriRefBuf, Error> {
		let iri = iri::resolve(iri_ref, self.base_iri.as_ref())?;
		self.named_node(iri)
	}

	/// Expands a prefixed name using the prefix table.
	pub fn resolve_compact_iri(&mut self, prefix: &str, local: &str) -> Result<IriRefBuf, Error> {
		match self.prefixes.get(prefix) {
			Some(namespace) => {
				let iri = format!("{namespace}{local}");
				self.named_node(iri)
			}
			None => Err(Error::UnknownPrefix(prefix.to_owned())),
		}
	}

	/// Mints a fresh blank node, with its ordinal.
	pub fn fresh_blank_node(&mut self) -> (usize, BlankIdBuf) {
		let ordinal = self.next_ordinal();
		let id = self.factory.blank_node();
		log::trace!("blank node #{ordinal} {id}");
		(ordinal, id)
	}

	/// Maps a blank node label, giving it an ordinal.
	pub fn labeled_blank_node(&mut self, label: &BlankIdBuf) -> (usize, BlankIdBuf) {
		let ordinal = self.next_ordinal();
		(ordinal, self.factory.labeled_blank_node(label))
	}

	fn next_ordinal(&mut self) -> usize {
		let ordinal = self.ordinal;
		self.ordinal += 1;
		ordinal
	}

	pub fn emit(&mut self, subject: Id, predicate: IriRefBuf, object: Term) {
		self.quads.push(rdf_types::Quad(subject, predicate, object, None))
	}

	/// Desugars a collection into an RDF list.
	///
	/// Returns the head of the list, and the ordinal and identifier of the
	/// blank node minted for each element.
	pub fn build_collection(
		&mut self,
		elements: Vec<Term>,
	) -> Result<(Id, Vec<(usize, BlankIdBuf)>), Error> {
		if elements.is_empty() {
			return Ok((Id::Iri(self.constant(RDF_NIL)?), Vec::new()));
		}

		let first = self.constant(RDF_FIRST)?;
		let rest = self.constant(RDF_REST)?;
		let nodes: Vec<_> = elements.iter().map(|_| self.fresh_blank_node()).collect();

		for (i, element) in elements.into_iter().enumerate() {
			let node = Id::Blank(nodes[i].1.clone());
			if i > 0 {
				let previous = Id::Blank(nodes[i - 1].1.clone());
				self.emit(previous, rest.clone(), Term::Id(node.clone()));
			}

			self.emit(node, first.clone(), element);
		}

		let nil = self.constant(RDF_NIL)?;
		let last = Id::Blank(nodes[nodes.len() - 1].1.clone());
		self.emit(last, rest, Term::Id(Id::Iri(nil)));

		let head = Id::Blank(nodes[0].1.clone());
		Ok((head, nodes))
	}

	/// Enters a nested blank node property list or collection.
	///
	/// Returns `false` if this exceeds [`MAX_NESTING_DEPTH`].
	pub fn enter(&mut self) -> bool {
		self.depth += 1;
		self.depth <= MAX_NESTING_DEPTH
	}

	pub fn leave(&mut self) {
		self.depth -= 1
	}

	/// Prepares the context for a new parse.
	pub fn begin(&mut self) {
		self.quads.clear();
		self.depth = 0
	}

	/// Quads emitted by the current or last parse.
	pub fn quads(&self) -> &[Quad] {
		&self.quads
	}

	/// Clears everything: prefixes, base IRI, quads and blank node counters.
	pub fn reset(&mut self) {
		self.prefixes.clear();
		self.base_iri = None;
		self.ordinal = 0;
		self.quads.clear();
		self.depth = 0;
		self.factory.reset_blank_node_counter()
	}
}
