//! IRI reference resolution.
use iref::{IriBuf, IriRef};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("invalid IRI reference <{0}>")]
	InvalidIriRef(String),

	#[error("invalid base IRI <{0}>")]
	InvalidBase(String),
}

/// Checks if `iri` starts with a scheme (`[a-zA-Z][a-zA-Z0-9+.-]*:`).
pub fn is_absolute(iri: &str) -> bool {
	let mut chars = iri.chars();

	match chars.next() {
		Some(c) if c.is_ascii_alphabetic() => (),
		_ => return false,
	}

	for c in chars {
		match c {
			':' => return true,
			c if c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-') => (),
			_ => return false,
		}
	}

	false
}

/// Resolves `reference` against `base`.
///
/// Without a base IRI the reference is returned as is, even if relative.
/// With a base, absolute references also go through RFC 3986 resolution,
/// which only normalizes their dot segments.
pub fn resolve(reference: &str, base: Option<&IriBuf>) -> Result<String, Error> {
	match base {
		Some(base) => {
			let iri_ref =
				IriRef::new(reference).map_err(|_| Error::InvalidIriRef(reference.to_owned()))?;
			Ok(iri_ref.resolved(base.as_iri()).to_string())
		}
		None => Ok(reference.to_owned()),
	}
}

/// Parses a base IRI, which must be absolute.
pub fn parse_base(iri: &str) -> Result<IriBuf, Error> {
	if !is_absolute(iri) {
		return Err(Error::InvalidBase(iri.to_owned()));
	}

	IriBuf::from_string(iri.to_owned()).map_err(|(_, iri)| Error::InvalidBase(iri))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn base(iri: &str) -> IriBuf {
		parse_base(iri).unwrap()
	}

	#[test]
	fn absolute() {
		assert!(is_absolute("http://a.example/"));
		assert!(is_absolute("urn:x"));
		assert!(is_absolute("a+b.c-d:e"));
		assert!(!is_absolute("a"));
		assert!(!is_absolute("#frag"));
		assert!(!is_absolute("//host/path"));
		assert!(!is_absolute("1a:b"));
		assert!(!is_absolute(""))
	}

	#[test]
	fn no_base() {
		assert_eq!(resolve("a", None).unwrap(), "a");
		assert_eq!(resolve("#p", None).unwrap(), "#p")
	}

	#[test]
	fn fragment() {
		let b = base("http://a.example/ns");
		assert_eq!(resolve("#s", Some(&b)).unwrap(), "http://a.example/ns#s")
	}

	#[test]
	fn path() {
		let b = base("http://localhost/some/path.ext");
		assert_eq!(resolve("p", Some(&b)).unwrap(), "http://localhost/some/p");
		assert_eq!(resolve("../p", Some(&b)).unwrap(), "http://localhost/p");
		assert_eq!(
			resolve("//b.example/u3", Some(&b)).unwrap(),
			"http://b.example/u3"
		)
	}

	#[test]
	fn absolute_reference() {
		let b = base("http://localhost/some/path.ext");
		assert_eq!(
			resolve("http://c.example/x", Some(&b)).unwrap(),
			"http://c.example/x"
		);
		assert_eq!(
			resolve("http://c.example/a/../x", Some(&b)).unwrap(),
			"http://c.example/x"
		)
	}

	#[test]
	fn relative_base_is_rejected() {
		assert!(parse_base("//turtle.example/base/").is_err());
		assert!(parse_base("path").is_err())
	}
}
