//! RDF terms produced by the parser.
//!
//! IRIs are stored as [`IriRefBuf`] since, when no base IRI is available,
//! relative references are kept as they appear in the document.
use iref::IriRefBuf;
use langtag::LanguageTagBuf;
use rdf_types::BlankIdBuf;

/// Node identifier: IRI or blank node.
pub type Id = rdf_types::Id<IriRefBuf, BlankIdBuf>;

/// Literal type: a datatype IRI or a language tag.
pub type LiteralType = rdf_types::literal::Type<IriRefBuf, LanguageTagBuf>;

/// Literal value.
///
/// Simple literals are typed `xsd:string`.
pub type Literal = rdf_types::Literal<LiteralType, String>;

/// Any RDF term.
pub type Term = rdf_types::Term<Id, Literal>;

/// Quad. The graph is always `None` (default graph) for Turtle documents.
pub type Quad = rdf_types::Quad<Id, IriRefBuf, Term, Id>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid IRI <{0}>")]
pub struct InvalidIri(pub String);

/// Term construction capability.
///
/// The factory decides how IRIs are represented and how fresh blank nodes
/// are named. Its blank node counter is reset with the parser.
pub trait TermFactory {
	fn named_node(&mut self, iri: String) -> Result<IriRefBuf, InvalidIri> {
		IriRefBuf::from_string(iri).map_err(|(_, iri)| InvalidIri(iri))
	}

	/// Mints a fresh, unlabeled blank node.
	fn blank_node(&mut self) -> BlankIdBuf;

	/// Maps a blank node label found in the document.
	///
	/// Must return the same node for the same label until the next call to
	/// [`Self::reset_blank_node_counter`].
	fn labeled_blank_node(&mut self, label: &BlankIdBuf) -> BlankIdBuf {
		label.clone()
	}

	fn reset_blank_node_counter(&mut self);
}

/// Default factory, naming fresh blank nodes `_:df_<instance>_<n>`.
#[derive(Debug, Default, Clone)]
pub struct DataFactory {
	instance: usize,
	count: usize,
}

impl DataFactory {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a factory with the given instance number, so that the blank
	/// nodes of different factories do not collide.
	pub fn with_instance(instance: usize) -> Self {
		Self { instance, count: 0 }
	}

	pub fn instance(&self) -> usize {
		self.instance
	}
}

impl TermFactory for DataFactory {
	fn blank_node(&mut self) -> BlankIdBuf {
		let label = format!("_:df_{}_{}", self.instance, self.count);
		self.count += 1;
		unsafe { BlankIdBuf::new_unchecked(label) }
	}

	fn reset_blank_node_counter(&mut self) {
		self.count = 0
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rdf_types::RdfDisplay;

	#[test]
	fn blank_node_naming() {
		let mut factory = DataFactory::with_instance(3);
		assert_eq!(factory.blank_node().to_string(), "_:df_3_0");
		assert_eq!(factory.blank_node().to_string(), "_:df_3_1");
		factory.reset_blank_node_counter();
		assert_eq!(factory.blank_node().to_string(), "_:df_3_0")
	}

	#[test]
	fn display_quad() {
		let mut factory = DataFactory::new();
		let s = factory.named_node("http://a.example/s".to_owned()).unwrap();
		let p = factory.named_node("http://a.example/p".to_owned()).unwrap();
		let tag = LanguageTagBuf::parse_copy("en").unwrap();
		let quad: Quad = rdf_types::Quad(
			Id::Iri(s),
			p,
			Term::Literal(Literal::new(
				"a\"b\nc".to_owned(),
				LiteralType::LangString(tag),
			)),
			None,
		);

		assert_eq!(
			quad.rdf_display().to_string(),
			"<http://a.example/s> <http://a.example/p> \"a\\\"b\\nc\"@en"
		)
	}

	#[test]
	fn relative_named_node() {
		let mut factory = DataFactory::new();
		assert_eq!(factory.named_node("a".to_owned()).unwrap().to_string(), "a");
		assert!(factory.named_node("a b".to_owned()).is_err())
	}
}
