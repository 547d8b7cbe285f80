use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use locspan::Meta;
use lossless_turtle::{
	context::Context, lexing, parsing::Parse, visit::orig_text, DataFactory, Document,
};
use rdf_types::RdfDisplay;
use std::fs::File;
use std::io::Read;

fn main() -> std::io::Result<()> {
	stderrlog::new().verbosity(3).init().ok();

	let mut args = std::env::args();
	args.next();

	let mut files = SimpleFiles::new();

	for filename in args {
		let mut file = File::open(&filename)?;
		let mut buffer = String::new();
		file.read_to_string(&mut buffer)?;
		let file_id = files.add(filename.clone(), buffer.clone());

		let mut context = Context::new(DataFactory::new());
		let mut lexer = lexing::from_str(&buffer);

		match Document::parse(&mut lexer, &mut context) {
			Ok(document) => {
				assert_eq!(orig_text(&document).concat(), buffer);
				for quad in context.quads() {
					println!("{} .", quad.rdf_display())
				}
			}
			Err(Meta(e, span)) => {
				let diagnostic = Diagnostic::error()
					.with_message(format!("parse error: {e}"))
					.with_labels(vec![Label::primary(file_id, span)]);

				let writer = StandardStream::stderr(ColorChoice::Auto);
				let config = codespan_reporting::term::Config::default();
				codespan_reporting::term::emit(&mut writer.lock(), &config, &files, &diagnostic)
					.unwrap();
				std::process::exit(1);
			}
		}
	}

	Ok(())
}
