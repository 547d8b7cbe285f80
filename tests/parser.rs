use lossless_turtle::{
	context::MAX_NESTING_DEPTH, visit::orig_text, DataFactory, ErrorKind, Iri, Literal, Object,
	Parser, ParserOptions, Position, PredicateObject, Quad, Statement, Subject,
};
use rdf_types::RdfDisplay;

const RDF_FIRST: &str = "<http://www.w3.org/1999/02/22-rdf-syntax-ns#first>";
const RDF_REST: &str = "<http://www.w3.org/1999/02/22-rdf-syntax-ns#rest>";
const RDF_NIL: &str = "<http://www.w3.org/1999/02/22-rdf-syntax-ns#nil>";

fn lines(quads: &[Quad]) -> Vec<String> {
	quads
		.iter()
		.map(|q| format!("{} .", q.rdf_display()))
		.collect()
}

fn coverage_parser() -> Parser {
	Parser::with_options(ParserOptions {
		base_iri: Some("http://localhost/some/path.ext".to_string()),
		factory: DataFactory::new(),
	})
}

/// Parses `input` after a reset, checking that it round trips.
fn parse(parser: &mut Parser, input: &str, base_iri: Option<&str>) -> Vec<String> {
	parser.reset();
	let (document, quads) = parser
		.parse_with(input, base_iri, std::iter::empty::<(String, String)>())
		.unwrap();
	assert_eq!(orig_text(&document).concat(), input);
	lines(&quads)
}

fn subject(statement: &Statement) -> &Subject {
	match statement {
		Statement::Triples(t) => &t.subject,
		_ => panic!("expected triples"),
	}
}

fn subject_iri(statement: &Statement) -> &str {
	match subject(statement) {
		Subject::Iri(iri) => iri.iri().as_str(),
		_ => panic!("expected an IRI subject"),
	}
}

#[test]
fn construction() {
	let mut parser = Parser::new();
	assert!(parser.base_iri().is_none());
	assert_eq!(parser.factory().instance(), 0);

	let (document, quads) = parser.parse("<a> <b> <c> .").unwrap();
	assert_eq!(lines(&quads), ["<a> <b> <c> ."]);

	match subject(&document.statements[0]) {
		Subject::Iri(Iri::RelativeUrl(r)) => {
			assert_eq!(r.value, "a");
			assert_eq!(r.text.0, "<a>")
		}
		_ => panic!("expected a relative URL"),
	}
}

#[test]
fn unescape() {
	let mut parser = Parser::new();
	let input = "<a\\u0062\\U00000063> <def> \"g\\u0068\\U00000069\" .";
	let (document, quads) = parser.parse(input).unwrap();
	assert_eq!(
		lines(&quads),
		["<abc> <def> \"ghi\"^^<http://www.w3.org/2001/XMLSchema#string> ."]
	);

	let triples = match &document.statements[0] {
		Statement::Triples(t) => t,
		_ => panic!("expected triples"),
	};

	match &triples.subject {
		Subject::Iri(Iri::RelativeUrl(r)) => {
			assert_eq!(r.value, "abc");
			assert_eq!(r.text.0, "<a\\u0062\\U00000063>")
		}
		_ => panic!("expected a relative URL"),
	}

	match &triples.predicate_objects[0] {
		PredicateObject::VerbObjectList(l) => match l.objects().next() {
			Some(Object::Literal(Literal::Simple(l))) => {
				assert_eq!(l.string.value, "ghi");
				assert_eq!(l.string.text.0, "\"g\\u0068\\U00000069\"")
			}
			_ => panic!("expected a simple literal"),
		},
		_ => panic!("expected a verb-object list"),
	}
}

#[test]
fn unknown_lexical_term() {
	let e = Parser::new().parse("<a> <b> & .").unwrap_err();
	assert_eq!(e.kind, ErrorKind::Lexical);
	assert_eq!(e.offending_text, "&");
	assert_eq!(e.position, Position { line: 1, column: 8 })
}

#[test]
fn non_turtle_whitespace() {
	let e = Parser::new().parse("<a>\u{a0}<b> <c> .").unwrap_err();
	assert_eq!(e.kind, ErrorKind::Lexical);
	assert_eq!(e.offending_text, "\u{a0}");
	assert_eq!(e.position, Position { line: 1, column: 3 });

	let e = Parser::new().parse("<a> <b>\u{2003}<c> .").unwrap_err();
	assert_eq!(e.kind, ErrorKind::Lexical);
	assert_eq!(e.offending_text, "\u{2003}")
}

#[test]
fn syntax_error() {
	let e = Parser::new().parse("<a> <b> c .").unwrap_err();
	assert_eq!(e.kind, ErrorKind::Syntax);
	assert_eq!(e.offending_text, "c");

	let e = Parser::new().parse("<a> <b> <c> <d> .").unwrap_err();
	assert_eq!(e.kind, ErrorKind::Syntax);
	assert_eq!(e.offending_text, "<d>")
}

#[test]
fn prefix_error() {
	let e = Parser::new().parse("<a> <b> c:d .").unwrap_err();
	assert_eq!(e.kind, ErrorKind::Prefix);
	assert_eq!(
		e.message,
		"Parse error; unknown prefix \"c:\"\n<a> <b> c:d .\n--------^"
	);
	assert_eq!(e.offending_text, "c:d")
}

#[test]
fn unescape_error() {
	let e = Parser::new().parse("<a> <b> \"\\u00ZZ\" .").unwrap_err();
	assert_eq!(e.kind, ErrorKind::Unescape)
}

fn nested_lists(depth: usize) -> String {
	format!("<s> <p> {}<o>{} .", "[ <q> ".repeat(depth), " ]".repeat(depth))
}

#[test]
fn too_deep() {
	let (_, quads) = Parser::new()
		.parse(&nested_lists(MAX_NESTING_DEPTH))
		.unwrap();
	assert_eq!(quads.len(), MAX_NESTING_DEPTH + 1);

	let input = nested_lists(MAX_NESTING_DEPTH + 1);
	let e = Parser::new().parse(&input).unwrap_err();
	assert_eq!(e.kind, ErrorKind::Syntax);
	assert_eq!(e.offending_text, "[");
	assert_eq!(e.position.column, 8 + 6 * MAX_NESTING_DEPTH);

	let e = Parser::new().parse(&"(".repeat(MAX_NESTING_DEPTH + 1)).unwrap_err();
	assert_eq!(e.kind, ErrorKind::Syntax)
}

#[test]
fn reset() {
	let mut parser = Parser::new();
	let (document, _) = parser
		.parse("PREFIX pre: <http://a.example/ns#>\npre:s<#p><#o>.")
		.unwrap();
	assert_eq!(subject_iri(&document.statements[2]), "http://a.example/ns#s");

	let (document, _) = parser.parse("pre:s<#p><#o>.").unwrap();
	assert_eq!(subject_iri(&document.statements[0]), "http://a.example/ns#s");

	parser.reset();
	let e = parser.parse("pre:s<#p><#o>.").unwrap_err();
	assert_eq!(
		e.to_string(),
		"Parse error; unknown prefix \"pre:\"\npre:s<#p><#o>.\n^"
	);
	assert_eq!(e.position, Position { line: 1, column: 0 })
}

#[test]
fn empty() {
	let mut parser = coverage_parser();
	assert!(parse(&mut parser, "", None).is_empty());
	assert!(parse(&mut parser, " \n# comment only\n/* block */\t", None).is_empty())
}

#[test]
fn prefix() {
	let mut parser = coverage_parser();
	let input = "\nPREFIX/*a*/pre:/*b*/<http://a.example/ns#>/*c*/pre:s<#p><#o>.";
	assert_eq!(
		parse(&mut parser, input, None),
		["<http://a.example/ns#s> <http://localhost/some/path.ext#p> <http://localhost/some/path.ext#o> ."]
	);

	let (document, _) = parser.parse(input).unwrap();
	assert!(matches!(document.statements[0], Statement::Skipped(_)));
	assert!(matches!(document.statements[1], Statement::Directive(_)));
	assert!(matches!(document.statements[2], Statement::Skipped(_)));
	match subject(&document.statements[3]) {
		Subject::Iri(Iri::Pname(p)) => {
			assert_eq!(p.prefix.0, "pre:");
			assert_eq!(p.local_name.0, "s")
		}
		_ => panic!("expected a prefixed name"),
	}
}

#[test]
fn spopo() {
	let mut parser = coverage_parser();
	assert_eq!(
		parse(
			&mut parser,
			"<#s><#p1><#o1>,<#o2>;<#p2><#o2>.",
			Some("http://a.example/ns")
		),
		[
			"<http://a.example/ns#s> <http://a.example/ns#p1> <http://a.example/ns#o1> .",
			"<http://a.example/ns#s> <http://a.example/ns#p1> <http://a.example/ns#o2> .",
			"<http://a.example/ns#s> <http://a.example/ns#p2> <http://a.example/ns#o2> ."
		]
	)
}

#[test]
fn property_lists() {
	let mut parser = coverage_parser();
	assert_eq!(
		parse(
			&mut parser,
			"[<#p1><#o1>;<#p2><#o2>]<#p3>[<#p4><#o4>;<#p5><#o5>].",
			Some("http://a.example/ns")
		),
		[
			"_:df_0_0 <http://a.example/ns#p1> <http://a.example/ns#o1> .",
			"_:df_0_0 <http://a.example/ns#p2> <http://a.example/ns#o2> .",
			"_:df_0_1 <http://a.example/ns#p4> <http://a.example/ns#o4> .",
			"_:df_0_1 <http://a.example/ns#p5> <http://a.example/ns#o5> .",
			"_:df_0_0 <http://a.example/ns#p3> _:df_0_1 ."
		]
	)
}

#[test]
fn nested_property_lists() {
	let mut parser = coverage_parser();
	assert_eq!(
		parse(
			&mut parser,
			"[<#p1>[<#p2><#o2>]]<#p3>[<#p4>[<#p5><#o5>]].",
			Some("http://a.example/ns")
		),
		[
			"_:df_0_1 <http://a.example/ns#p2> <http://a.example/ns#o2> .",
			"_:df_0_0 <http://a.example/ns#p1> _:df_0_1 .",
			"_:df_0_3 <http://a.example/ns#p5> <http://a.example/ns#o5> .",
			"_:df_0_2 <http://a.example/ns#p4> _:df_0_3 .",
			"_:df_0_0 <http://a.example/ns#p3> _:df_0_2 ."
		]
	)
}

#[test]
fn empty_collections() {
	let mut parser = coverage_parser();
	assert_eq!(
		parse(&mut parser, "()<p>().", None),
		[format!("{RDF_NIL} <http://localhost/some/p> {RDF_NIL} .")]
	)
}

#[test]
fn collections() {
	let mut parser = coverage_parser();
	let quads = parse(&mut parser, "(<a><b>)<p>(<c><d>).", None);
	assert_eq!(
		quads,
		[
			format!("_:df_0_0 {RDF_FIRST} <http://localhost/some/a> ."),
			format!("_:df_0_0 {RDF_REST} _:df_0_1 ."),
			format!("_:df_0_1 {RDF_FIRST} <http://localhost/some/b> ."),
			format!("_:df_0_1 {RDF_REST} {RDF_NIL} ."),
			format!("_:df_0_2 {RDF_FIRST} <http://localhost/some/c> ."),
			format!("_:df_0_2 {RDF_REST} _:df_0_3 ."),
			format!("_:df_0_3 {RDF_FIRST} <http://localhost/some/d> ."),
			format!("_:df_0_3 {RDF_REST} {RDF_NIL} ."),
			"_:df_0_0 <http://localhost/some/p> _:df_0_2 .".to_string()
		]
	)
}

#[test]
fn nested_empty_collections() {
	let mut parser = coverage_parser();
	assert_eq!(
		parse(&mut parser, "(())<p>(()).", None),
		[
			format!("_:df_0_0 {RDF_FIRST} {RDF_NIL} ."),
			format!("_:df_0_0 {RDF_REST} {RDF_NIL} ."),
			format!("_:df_0_1 {RDF_FIRST} {RDF_NIL} ."),
			format!("_:df_0_1 {RDF_REST} {RDF_NIL} ."),
			"_:df_0_0 <http://localhost/some/p> _:df_0_1 .".to_string()
		]
	)
}

#[test]
fn collection_ordinals() {
	let mut parser = coverage_parser();
	parser.reset();
	let (document, _) = parser.parse("(<a> [] <b>) <p> <o> .").unwrap();
	match subject(&document.statements[0]) {
		Subject::Collection(c) => {
			let ordinals: Vec<_> = c.elements.iter().map(|e| e.ordinal).collect();
			assert_eq!(ordinals, [1, 2, 3]);
			assert_eq!(c.elements[0].node.to_string(), "_:df_0_1")
		}
		_ => panic!("expected a collection"),
	}
}

#[test]
fn ordinals_are_deterministic() {
	let mut parser = coverage_parser();
	let input = "[<#p>[]] <#q> ( 1 _:x ) .";
	let first = parse(&mut parser, input, None);
	let second = parse(&mut parser, input, None);
	assert_eq!(first, second);

	let (_, quads) = parser.parse(input).unwrap();
	assert_ne!(lines(&quads), first)
}

#[test]
fn kitchen_sinks() {
	let spaces = include_str!("roundtrip/kitchen_sink_spaces.ttl");
	let comments = include_str!("roundtrip/kitchen_sink_comments.ttl");

	let mut parser = coverage_parser();
	let spaces_quads = parse(&mut parser, spaces, None);
	let comments_quads = parse(&mut parser, comments, None);

	assert_eq!(spaces_quads.len(), 49);
	assert_eq!(spaces_quads, comments_quads);
	assert!(spaces_quads.contains(
		&"<http://turtle.example/base/url1> <http://sparql.example/pre#p2> <http://b.example/u3> ."
			.to_string()
	));
	assert!(spaces_quads.contains(
		&"<http://turtle.example/base/s> <http://turtle.example/base/p> \"c\\nc\"@en-us ."
			.to_string()
	))
}
