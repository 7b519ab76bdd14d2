/*!
# Streaming, indenting XML writing

This crate provides a forward-only, event-driven writer for XML 1.0
documents which keeps the output human-readable by indenting it as it goes.

## Features

* Write-only and forward-only: the writer never parses and never revisits
  anything it has emitted.
* Well-formedness discipline: an unfinished start tag is closed
  automatically before any other content is written, closing tags are taken
  from an internal element stack, and mismatched usage is reported as an
  error instead of producing malformed output.
* Configurable indentation unit, line ending, declared encoding and
  compact/block attribute layout.
* Namespace prefix bookkeeping with an optional caller-supplied resolver.
* Minimal internal-subset DTD support (`<!DOCTYPE ... [ <!ENTITY ...> ]>`).

## Example

```
use ixml::XmlWriter;

let mut w = XmlWriter::new(Vec::new());
w.write_start_document_version("1.0").unwrap();
w.write_start_element("hello").unwrap();
w.write_characters("World!").unwrap();
w.write_end_element().unwrap();
w.write_end_document().unwrap();
let out = w.into_inner().unwrap();
assert_eq!(
	String::from_utf8(out).unwrap(),
	"<?xml version=\"1.0\"?>\n<hello>World!</hello>"
);
```

## Scope

The writer emits text to whatever [`std::io::Write`] sink it is given; it
owns no file or network boundary itself. It does not validate the output
against any schema, and it declares at most one encoding in the prolog
without transcoding anything.
*/
pub mod error;
pub mod indent;
pub mod writer;

#[cfg(test)]
pub mod tests;

#[doc(inline)]
pub use error::{Error, Result, WriteError};
#[doc(inline)]
pub use indent::IndentingWriter;
#[doc(inline)]
pub use writer::{NamespaceResolver, NamespaceTable, Options, XmlWriter};

pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");
