//! Turtle is a textual syntax for RDF that allows an RDF graph to be completely
//! written in a compact and natural text form, with abbreviations for common
//! usage patterns and datatypes. This library provides a *lossless* Turtle
//! parser: along with the RDF quads denoted by a document, it builds a parse
//! tree keeping every character of the source, whitespace and comments
//! included, with its byte span (using the [`locspan`](https://crates.io/crates/locspan) library).
//!
//! ## Basic usage
//!
//! A [`Parser`] parses a document into its parse tree ([`Document`]) and its
//! quads. The original text of any node is given back by
//! [`visit::orig_text`].
//!
//! ```rust
//! use lossless_turtle::{visit::orig_text, DataFactory, Parser, ParserOptions};
//! use rdf_types::RdfDisplay;
//!
//! let mut parser = Parser::with_options(ParserOptions {
//!   base_iri: Some("http://example.org/".to_string()),
//!   factory: DataFactory::new(),
//! });
//!
//! let input = "@prefix foaf: <http://xmlns.com/foaf/0.1/> .\n\n<alice> foaf:knows [ foaf:name \"Bob\" ] . # done\n";
//! let (document, quads) = parser.parse(input).unwrap();
//!
//! assert_eq!(orig_text(&document).concat(), input);
//! assert_eq!(
//!   quads[1].rdf_display().to_string(),
//!   "<http://example.org/alice> <http://xmlns.com/foaf/0.1/knows> _:df_0_0"
//! );
//! ```
//!
//! ## Errors
//!
//! A [`ParseError`] gives the error [`ErrorKind`], the offending text and its
//! position. Its message ends with an excerpt of the offending line:
//!
//! ```rust
//! use lossless_turtle::{ErrorKind, Parser};
//!
//! let e = Parser::new().parse("<a> <b> c:d .").unwrap_err();
//! assert_eq!(e.kind, ErrorKind::Prefix);
//! assert_eq!(e.offending_text, "c:d");
//! assert_eq!(e.to_string(), "Parse error; unknown prefix \"c:\"\n<a> <b> c:d .\n--------^");
//! ```
//!
//! The lower level [`lexing::Lexer`] and [`parsing::Parse`] trait can be used
//! directly with any fallible [`decoded_char::DecodedChar`] stream, with
//! errors located by byte spans, ready to be reported with
//! [`codespan_reporting`](https://crates.io/crates/codespan-reporting) (see
//! the `toy` demo).
pub mod ast;
pub mod context;
pub mod error;
pub mod escape;
pub mod iri;
pub mod lexing;
pub mod location;
mod parser;
pub mod parsing;
pub mod term;
pub mod visit;

pub use ast::*;
pub use error::{check_media_type, ErrorKind, ParseError};
pub use location::Position;
pub use parser::*;
pub use term::{DataFactory, Quad, TermFactory};
