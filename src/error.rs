/*!
# Error types

This module holds the error types returned by the various functions of this
crate.
*/
use std::error;
use std::fmt;
use std::io;
use std::result::Result as StdResult;

/// Violation of the writer's well-formedness contract by the caller.
///
/// These errors indicate misuse of the writer, not a transient failure:
/// retrying the same call will fail again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteError {
	/// Emitted if an attribute is written while no start tag is open.
	AttributeNotAllowed,

	/// Emitted on an end-element call with an empty element stack.
	NoOpenElement,

	/// Emitted if the document is ended while elements are still open.
	UnclosedElements,
}

impl fmt::Display for WriteError {
	fn fmt<'f>(&self, f: &'f mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::AttributeNotAllowed => {
				f.write_str("attributes not allowed outside element start tags")
			}
			Self::NoOpenElement => f.write_str("no open element"),
			Self::UnclosedElements => {
				f.write_str("document ended with unclosed elements")
			}
		}
	}
}

impl error::Error for WriteError {}

/// Error types which may be returned from the writer.
///
/// After an [`Error::Io`], the writer's internal state may be inconsistent
/// with what has reached the sink; the writer must not be reused.
#[derive(Debug)]
pub enum Error {
	/// An I/O error was encountered while writing to the sink.
	///
	/// The original cause is carried and available through
	/// [`std::error::Error::source`].
	Io(io::Error),

	/// A violation of the writer's well-formedness contract was encountered.
	NotWellFormed(WriteError),
}

pub type Result<T> = StdResult<T, Error>;

impl From<io::Error> for Error {
	fn from(e: io::Error) -> Error {
		Error::Io(e)
	}
}

impl From<WriteError> for Error {
	fn from(e: WriteError) -> Error {
		Error::NotWellFormed(e)
	}
}

impl fmt::Display for Error {
	fn fmt<'f>(&self, f: &'f mut fmt::Formatter) -> fmt::Result {
		match self {
			Error::Io(e) => write!(f, "I/O error: {}", e),
			Error::NotWellFormed(e) => write!(f, "not-well-formed: {}", e),
		}
	}
}

impl error::Error for Error {
	fn source(&self) -> Option<&(dyn error::Error + 'static)> {
		match self {
			Error::Io(e) => Some(e),
			Error::NotWellFormed(_) => None,
		}
	}
}
