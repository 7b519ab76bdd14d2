/*!
# Streaming writer for indented XML 1.0

The [`XmlWriter`] accepts a sequence of structural write events (elements,
attributes, namespace declarations, text, comments, processing instructions,
CDATA sections, DTD fragments, entity references) and emits well-formed,
indented markup through an [`IndentingWriter`].

The writer is purely event-driven, write-only and forward-only. It keeps the
minimum state needed for well-formedness: the stack of open element names,
the state of the current start tag, and whether the last write was character
data (so that no whitespace is introduced between trailing text and the
closing tag).
*/
use std::collections::HashMap;
use std::io;

use bytes::{BufMut, BytesMut};
use smartstring::alias::String as SmartString;

use crate::error::{Result, WriteError};
use crate::indent::IndentingWriter;

const TEXT_SPECIALS: &'static [u8] = &[b'"', b'\'', b'<', b'>', b'&', b'\r'];

const ATTR_SPECIALS: &'static [u8] = &[b'"', b'\'', b'\r', b'\n', b'\t', b'<', b'>', b'&'];

fn escape<B: BufMut>(out: &mut B, data: &[u8], specials: &'static [u8]) {
	let mut last_index = 0;
	for (i, &ch) in data.iter().enumerate() {
		if !specials.contains(&ch) {
			continue;
		}
		if i > last_index {
			out.put_slice(&data[last_index..i]);
		}
		match ch {
			b'"' => out.put_slice(b"&#34;"),
			b'\'' => out.put_slice(b"&#39;"),
			b'<' => out.put_slice(b"&lt;"),
			b'>' => out.put_slice(b"&gt;"),
			b'&' => out.put_slice(b"&amp;"),
			b'\r' => out.put_slice(b"&#xd;"),
			b'\n' => out.put_slice(b"&#xa;"),
			b'\t' => out.put_slice(b"&#x9;"),
			_ => panic!("unexpected special character?!"),
		}
		last_index = i + 1;
	}
	out.put_slice(&data[last_index..]);
}

/// Apply attribute-value normalization: runs of whitespace collapse to a
/// single space, leading and trailing whitespace is dropped.
fn is_attribute_space(ch: char) -> bool {
	matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

fn normalize_attribute_value(value: &str) -> std::borrow::Cow<'_, str> {
	// the value needs rewriting iff it has leading or trailing whitespace,
	// a whitespace character other than a plain space, or two adjacent
	// whitespace characters; scan for that first to keep the common
	// already-normal case allocation-free
	let mut prev_space = true;
	let mut dirty = false;
	for ch in value.chars() {
		if is_attribute_space(ch) {
			if prev_space || ch != ' ' {
				dirty = true;
				break;
			}
			prev_space = true;
		} else {
			prev_space = false;
		}
	}
	if !dirty && prev_space && !value.is_empty() {
		dirty = true;
	}
	if !dirty {
		return std::borrow::Cow::Borrowed(value);
	}

	let mut out = String::with_capacity(value.len());
	let mut pending_space = false;
	for ch in value.chars() {
		if is_attribute_space(ch) {
			pending_space = !out.is_empty();
		} else {
			if pending_space {
				out.push(' ');
				pending_space = false;
			}
			out.push(ch);
		}
	}
	std::borrow::Cow::Owned(out)
}

fn qualified(prefix: &str, local_name: &str) -> SmartString {
	if prefix.is_empty() {
		local_name.into()
	} else {
		let mut name = SmartString::from(prefix);
		name.push_str(":");
		name.push_str(local_name);
		name
	}
}

/// Trait for an external prefix/URI resolver.
///
/// A resolver installed on a [`NamespaceTable`] is consulted before the
/// table's own bindings on every lookup; the table is only searched when the
/// resolver reports a miss.
pub trait NamespaceResolver {
	/// Resolve a prefix to its namespace URI.
	fn resolve_uri(&self, prefix: &str) -> Option<&str>;

	/// Resolve a namespace URI to a prefix bound to it.
	fn resolve_prefix(&self, uri: &str) -> Option<&str>;

	/// All prefixes this resolver binds to `uri`.
	///
	/// The default implementation reports at most the single prefix
	/// returned by [`resolve_prefix`].
	///
	///   [`resolve_prefix`]: Self::resolve_prefix
	fn resolve_prefixes<'a>(&'a self, uri: &str) -> Vec<&'a str> {
		self.resolve_prefix(uri).into_iter().collect()
	}
}

/// Bidirectional prefix/URI binding table.
///
/// Bindings are scoped to the owning writer's lifetime, not to element
/// nesting: nothing is ever unbound. This mirrors the flat semantics of the
/// serializers this writer feeds and is deliberately not XML-scope-correct.
///
/// Lookup misses are not errors; they are reported as `None` and never
/// panic, including for URIs whose prefix list exists but is empty.
pub struct NamespaceTable {
	prefix_to_uri: HashMap<SmartString, String>,
	uri_to_prefixes: HashMap<String, Vec<SmartString>>,
	default_namespace: Option<String>,
	resolver: Option<Box<dyn NamespaceResolver>>,
}

impl NamespaceTable {
	pub fn new() -> Self {
		Self {
			prefix_to_uri: HashMap::new(),
			uri_to_prefixes: HashMap::new(),
			default_namespace: None,
			resolver: None,
		}
	}

	/// Bind `prefix` to `uri`.
	///
	/// Rebinding a prefix overwrites its URI; the prefix is appended to the
	/// new URI's prefix list, while earlier list entries are retained.
	pub fn bind(&mut self, prefix: &str, uri: &str) {
		self.prefix_to_uri.insert(prefix.into(), uri.to_string());
		self.uri_to_prefixes
			.entry(uri.to_string())
			.or_insert_with(Vec::new)
			.push(prefix.into());
	}

	/// Record the default namespace URI, overwriting any prior value.
	pub fn set_default_namespace(&mut self, uri: &str) {
		self.default_namespace = Some(uri.to_string());
	}

	pub fn default_namespace(&self) -> Option<&str> {
		self.default_namespace.as_deref()
	}

	/// Install an external resolver consulted before the local bindings.
	pub fn set_resolver(&mut self, resolver: Box<dyn NamespaceResolver>) {
		self.resolver = Some(resolver);
	}

	/// Look up a prefix for `uri`: resolver first, then the first-bound
	/// local prefix.
	pub fn resolve_prefix(&self, uri: &str) -> Option<&str> {
		if let Some(resolver) = self.resolver.as_ref() {
			if let Some(prefix) = resolver.resolve_prefix(uri) {
				return Some(prefix);
			}
		}
		self.uri_to_prefixes
			.get(uri)
			.and_then(|prefixes| prefixes.first())
			.map(|prefix| &**prefix)
	}

	/// Look up the URI bound to `prefix`: resolver first, then the local
	/// binding.
	pub fn resolve_uri(&self, prefix: &str) -> Option<&str> {
		if let Some(resolver) = self.resolver.as_ref() {
			if let Some(uri) = resolver.resolve_uri(prefix) {
				return Some(uri);
			}
		}
		self.prefix_to_uri.get(prefix).map(|uri| uri.as_str())
	}

	/// All prefixes bound to `uri`: the resolver's first, then the local
	/// bindings in binding order.
	pub fn prefixes<'a>(&'a self, uri: &str) -> impl Iterator<Item = &'a str> + 'a {
		let delegated = match self.resolver.as_ref() {
			Some(resolver) => resolver.resolve_prefixes(uri),
			None => Vec::new(),
		};
		delegated.into_iter().chain(
			self.uri_to_prefixes
				.get(uri)
				.into_iter()
				.flat_map(|prefixes| prefixes.iter().map(|prefix| &**prefix)),
		)
	}
}

impl Default for NamespaceTable {
	fn default() -> Self {
		Self::new()
	}
}

/// State of the most recently started tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagState {
	/// No start tag is open.
	Idle,

	/// A start tag is open and will be finished with `>`.
	OpenNormal,

	/// A start tag is open and will be finished with `/>`.
	OpenEmpty,
}

/// Construction options for an [`XmlWriter`].
#[derive(Debug, Clone)]
pub struct Options {
	/// Charset name declared in the prolog when
	/// [`XmlWriter::write_start_document_encoding`] is not used to pass one
	/// explicitly. Purely declarative; no transcoding happens.
	pub encoding: Option<String>,

	/// The string written once per indentation level after each line break.
	pub indent: String,

	/// If true, attributes are emitted space-separated on the tag's line
	/// instead of one per line at the next indentation level.
	pub compact_attributes: bool,

	/// Line terminator.
	pub line_end: String,
}

impl Default for Options {
	fn default() -> Self {
		Self {
			encoding: None,
			indent: "\t".to_string(),
			compact_attributes: false,
			line_end: "\n".to_string(),
		}
	}
}

impl Options {
	/// Set the [`Options::encoding`] value.
	pub fn encoding<T: Into<String>>(mut self, encoding: T) -> Self {
		self.encoding = Some(encoding.into());
		self
	}

	/// Set the [`Options::indent`] value.
	pub fn indent<T: Into<String>>(mut self, indent: T) -> Self {
		self.indent = indent.into();
		self
	}

	/// Set the [`Options::compact_attributes`] value.
	pub fn compact_attributes(mut self, compact: bool) -> Self {
		self.compact_attributes = compact;
		self
	}

	/// Set the [`Options::line_end`] value.
	pub fn line_end<T: Into<String>>(mut self, line_end: T) -> Self {
		self.line_end = line_end.into();
		self
	}
}

/**
Writes indented XML to an [`io::Write`] sink.

The writer is stateful and single-threaded; operations are invoked in
document order and every write goes directly to the sink. An unfinished
start tag is closed automatically by the next incompatible write, so the
output is well-formed for every properly nested call sequence; improperly
nested sequences are reported as [`WriteError`]s instead of producing
malformed output.

```rust
use ixml::XmlWriter;

let mut w = XmlWriter::new(Vec::new());
w.write_start_element("greeting").unwrap();
w.write_attribute("lang", "en").unwrap();
w.write_characters("hi").unwrap();
w.write_end_element().unwrap();
let out = w.into_inner().unwrap();
assert_eq!(&out[..], b"\n<greeting\n\tlang=\"en\">hi</greeting>");
```
*/
pub struct XmlWriter<W: io::Write> {
	out: IndentingWriter<W>,
	encoding: Option<String>,
	compact_attributes: bool,
	tag_state: TagState,
	after_text: bool,
	element_stack: Vec<SmartString>,
	namespaces: NamespaceTable,
	scratch: BytesMut,
}

impl<W: io::Write> XmlWriter<W> {
	/// Create a writer with default [`Options`]: tab indentation, `"\n"`
	/// line endings, one attribute per line, no declared encoding.
	pub fn new(sink: W) -> Self {
		Self::with_options(sink, Options::default())
	}

	pub fn with_options(sink: W, options: Options) -> Self {
		let mut out = IndentingWriter::new(sink);
		out.set_indentation_string(&options.indent);
		out.set_line_end(&options.line_end);
		Self {
			out,
			encoding: options.encoding,
			compact_attributes: options.compact_attributes,
			tag_state: TagState::Idle,
			after_text: false,
			element_stack: Vec::new(),
			namespaces: NamespaceTable::new(),
			scratch: BytesMut::new(),
		}
	}

	/// The charset name this writer declares, if any.
	pub fn xml_encoding(&self) -> Option<&str> {
		self.encoding.as_deref()
	}

	pub fn indentation_level(&self) -> usize {
		self.out.indentation_level()
	}

	pub fn set_indentation_level(&mut self, level: usize) {
		self.out.set_indentation_level(level);
	}

	pub fn indentation_string(&self) -> &str {
		self.out.indentation_string()
	}

	pub fn set_indentation_string(&mut self, s: &str) {
		self.out.set_indentation_string(s);
	}

	pub fn increase_indentation(&mut self) {
		self.out.increase_indentation();
	}

	pub fn decrease_indentation(&mut self) {
		self.out.decrease_indentation();
	}

	/// Emit a line break followed by the current indentation.
	pub fn write_eol(&mut self) -> Result<()> {
		self.out.write_eol()?;
		self.after_text = false;
		Ok(())
	}

	/// Close a pending start tag with `>` or `/>`.
	///
	/// Every non-tag write passes through here first; the three tag states
	/// and this single transition are the whole well-formedness machinery.
	fn finish_open_tag(&mut self) -> Result<()> {
		match self.tag_state {
			TagState::Idle => return Ok(()),
			TagState::OpenNormal => self.out.write(">")?,
			TagState::OpenEmpty => self.out.write("/>")?,
		}
		self.tag_state = TagState::Idle;
		Ok(())
	}

	/// Escape `data` into the scratch buffer and write it out.
	fn write_escaped(&mut self, data: &str, specials: &'static [u8]) -> Result<()> {
		self.scratch.clear();
		escape(&mut self.scratch, data.as_bytes(), specials);
		self.out.write_bytes(&self.scratch)?;
		Ok(())
	}

	fn start_element_impl(&mut self, name: SmartString) -> Result<()> {
		self.finish_open_tag()?;
		self.write_eol()?;
		self.out.write("<")?;
		self.out.write(&name)?;
		self.element_stack.push(name);
		self.out.increase_indentation();
		self.tag_state = TagState::OpenNormal;
		self.after_text = false;
		Ok(())
	}

	/// Open an element with the given (already qualified) name.
	///
	/// Finishes any pending start tag, emits a line break, writes `<name`
	/// and increases the indentation. The tag stays open for attributes
	/// until the next incompatible write.
	pub fn write_start_element(&mut self, name: &str) -> Result<()> {
		self.start_element_impl(name.into())
	}

	/// Open an element named `prefix:local_name` (or just `local_name` if
	/// the prefix is empty).
	pub fn write_start_element_prefixed(&mut self, prefix: &str, local_name: &str) -> Result<()> {
		self.start_element_impl(qualified(prefix, local_name))
	}

	/// Open an element which will be self-closed (`<name/>`) by the
	/// matching [`write_end_element`] call.
	///
	///   [`write_end_element`]: Self::write_end_element
	pub fn write_empty_element(&mut self, name: &str) -> Result<()> {
		self.write_start_element(name)?;
		self.tag_state = TagState::OpenEmpty;
		Ok(())
	}

	pub fn write_empty_element_prefixed(&mut self, prefix: &str, local_name: &str) -> Result<()> {
		self.write_start_element_prefixed(prefix, local_name)?;
		self.tag_state = TagState::OpenEmpty;
		Ok(())
	}

	/// Close the innermost open element.
	///
	/// Empty elements are closed as `<name/>`; all others get a `</name>`
	/// closing tag, preceded by a line break unless the element's last
	/// content was character data.
	pub fn write_end_element(&mut self) -> Result<()> {
		let is_empty = self.tag_state == TagState::OpenEmpty;
		self.finish_open_tag()?;
		let name = match self.element_stack.pop() {
			Some(name) => name,
			None => return Err(WriteError::NoOpenElement.into()),
		};
		self.out.decrease_indentation();
		if !is_empty {
			if !self.after_text {
				self.write_eol()?;
			}
			self.out.write("</")?;
			self.out.write(&name)?;
			self.out.write(">")?;
		}
		self.after_text = false;
		Ok(())
	}

	/// Begin an attribute: separator, name and `="`.
	///
	/// The value is supplied with [`write_attribute_characters`] and/or
	/// [`write_attribute_entity_ref`] and closed with [`end_attribute`].
	///
	///   [`write_attribute_characters`]: Self::write_attribute_characters
	///   [`write_attribute_entity_ref`]: Self::write_attribute_entity_ref
	///   [`end_attribute`]: Self::end_attribute
	pub fn write_start_attribute(&mut self, name: &str) -> Result<()> {
		self.write_start_attribute_prefixed("", name)
	}

	pub fn write_start_attribute_prefixed(&mut self, prefix: &str, local_name: &str) -> Result<()> {
		if self.tag_state == TagState::Idle {
			return Err(WriteError::AttributeNotAllowed.into());
		}
		if self.compact_attributes {
			self.out.write(" ")?;
		} else {
			self.write_eol()?;
		}
		if !prefix.is_empty() {
			self.out.write(prefix)?;
			self.out.write(":")?;
		}
		self.out.write(local_name)?;
		self.out.write("=\"")?;
		Ok(())
	}

	/// Write part of an attribute value, escaped and with attribute-value
	/// whitespace normalization applied.
	pub fn write_attribute_characters(&mut self, text: &str) -> Result<()> {
		let normalized = normalize_attribute_value(text);
		self.write_escaped(&normalized, ATTR_SPECIALS)
	}

	/// Write an entity reference (`&name;`) inside an attribute value.
	///
	/// An empty name writes nothing.
	pub fn write_attribute_entity_ref(&mut self, name: &str) -> Result<()> {
		if !name.is_empty() {
			self.out.write("&")?;
			self.out.write(name)?;
			self.out.write(";")?;
		}
		Ok(())
	}

	/// Close the attribute value quote.
	pub fn end_attribute(&mut self) -> Result<()> {
		self.out.write("\"")?;
		Ok(())
	}

	/// Write a complete attribute.
	///
	/// Must be called while a start tag is open; anything else is a
	/// contract violation reported as
	/// [`WriteError::AttributeNotAllowed`].
	pub fn write_attribute(&mut self, name: &str, value: &str) -> Result<()> {
		self.write_start_attribute(name)?;
		self.write_attribute_characters(value)?;
		self.end_attribute()
	}

	pub fn write_attribute_prefixed(
		&mut self,
		prefix: &str,
		local_name: &str,
		value: &str,
	) -> Result<()> {
		self.write_start_attribute_prefixed(prefix, local_name)?;
		self.write_attribute_characters(value)?;
		self.end_attribute()
	}

	/// Emit a namespace declaration pseudo-attribute
	/// (`xmlns:prefix="uri"`).
	///
	/// Namespace declarations always get their own line, regardless of the
	/// compact-attribute setting.
	pub fn write_namespace(&mut self, prefix: &str, uri: &str) -> Result<()> {
		self.write_eol()?;
		self.out.write("xmlns:")?;
		self.out.write(prefix)?;
		self.out.write("=\"")?;
		self.write_escaped(uri, ATTR_SPECIALS)?;
		self.out.write("\"")?;
		Ok(())
	}

	/// Emit a default namespace declaration (`xmlns="uri"`), on its own
	/// line.
	pub fn write_default_namespace(&mut self, uri: &str) -> Result<()> {
		self.write_eol()?;
		self.out.write("xmlns=\"")?;
		self.write_escaped(uri, ATTR_SPECIALS)?;
		self.out.write("\"")?;
		Ok(())
	}

	/// Write escaped character data.
	pub fn write_characters(&mut self, text: &str) -> Result<()> {
		self.finish_open_tag()?;
		self.write_escaped(text, TEXT_SPECIALS)?;
		self.after_text = true;
		Ok(())
	}

	/// Write a CDATA section with a verbatim payload.
	pub fn write_cdata(&mut self, data: &str) -> Result<()> {
		self.finish_open_tag()?;
		self.out.write("<![CDATA[")?;
		self.out.write(data)?;
		self.out.write("]]>")?;
		self.after_text = true;
		Ok(())
	}

	/// Write a comment with a verbatim body.
	pub fn write_comment(&mut self, data: &str) -> Result<()> {
		self.finish_open_tag()?;
		self.out.write("<!--")?;
		self.out.write(data)?;
		self.out.write("-->")?;
		Ok(())
	}

	/// Write a processing instruction without data.
	pub fn write_processing_instruction(&mut self, target: &str) -> Result<()> {
		self.finish_open_tag()?;
		self.out.write("<?")?;
		self.out.write(target)?;
		self.out.write("?>")?;
		Ok(())
	}

	/// Write a processing instruction with a verbatim data part.
	pub fn write_processing_instruction_data(&mut self, target: &str, data: &str) -> Result<()> {
		self.finish_open_tag()?;
		self.out.write("<?")?;
		self.out.write(target)?;
		self.out.write(" ")?;
		self.out.write(data)?;
		self.out.write("?>")?;
		Ok(())
	}

	/// Write an entity reference (`&name;`) as content.
	///
	/// An empty name writes nothing; either way the reference counts as
	/// text for line-break suppression before a closing tag.
	pub fn write_entity_ref(&mut self, name: &str) -> Result<()> {
		self.finish_open_tag()?;
		if !name.is_empty() {
			self.out.write("&")?;
			self.out.write(name)?;
			self.out.write(";")?;
		}
		self.after_text = true;
		Ok(())
	}

	/// Write verbatim DTD text.
	pub fn write_dtd(&mut self, text: &str) -> Result<()> {
		self.finish_open_tag()?;
		self.out.write(text)?;
		Ok(())
	}

	/// Open an internal-subset DTD block: `<!DOCTYPE root [`.
	pub fn start_dtd(&mut self, root_element_name: &str) -> Result<()> {
		self.finish_open_tag()?;
		self.out.write("<!DOCTYPE ")?;
		self.out.write(root_element_name)?;
		self.out.write(" [")?;
		self.out.increase_indentation();
		Ok(())
	}

	/// Close the internal-subset DTD block.
	pub fn end_dtd(&mut self) -> Result<()> {
		self.out.decrease_indentation();
		self.write_eol()?;
		self.out.write("]>")?;
		Ok(())
	}

	/// Write one `<!ENTITY name "value">` declaration on its own line,
	/// with the value escaped.
	pub fn write_dtd_entity(&mut self, name: &str, value: &str) -> Result<()> {
		self.write_eol()?;
		self.out.write("<!ENTITY ")?;
		self.out.write(name)?;
		self.out.write(" \"")?;
		self.write_escaped(value, ATTR_SPECIALS)?;
		self.out.write("\">")?;
		Ok(())
	}

	/// Write a bare XML declaration (`<?xml?>`) and reset the indentation
	/// level to zero.
	pub fn write_start_document(&mut self) -> Result<()> {
		self.out.set_indentation_level(0);
		self.write_processing_instruction("xml")
	}

	/// Write an XML declaration carrying the given version.
	pub fn write_start_document_version(&mut self, version: &str) -> Result<()> {
		self.out.set_indentation_level(0);
		let data = format!("version=\"{}\"", version);
		self.write_processing_instruction_data("xml", &data)
	}

	/// Write an XML declaration carrying the given encoding and version.
	///
	/// The legacy charset aliases `UTF8` and `UTF16` are canonicalized to
	/// their hyphenated names; all other values pass through unchanged.
	pub fn write_start_document_encoding(&mut self, encoding: &str, version: &str) -> Result<()> {
		self.out.set_indentation_level(0);
		let encoding = match encoding {
			"UTF8" => "UTF-8",
			"UTF16" => "UTF-16",
			other => other,
		};
		let data = format!("version=\"{}\" encoding=\"{}\"", version, encoding);
		self.write_processing_instruction_data("xml", &data)
	}

	/// End the document: flush buffered output and verify that every
	/// start-element has been matched.
	///
	/// A non-empty element stack is a contract violation reported as
	/// [`WriteError::UnclosedElements`], never silently ignored.
	pub fn write_end_document(&mut self) -> Result<()> {
		self.out.flush()?;
		self.tag_state = TagState::Idle;
		self.after_text = false;
		if !self.element_stack.is_empty() {
			return Err(WriteError::UnclosedElements.into());
		}
		Ok(())
	}

	/// Flush the underlying sink.
	pub fn flush(&mut self) -> Result<()> {
		self.out.flush()?;
		Ok(())
	}

	/// Flush and drop the writer together with its sink.
	pub fn close(mut self) -> Result<()> {
		self.out.flush()?;
		Ok(())
	}

	/// Flush and return the underlying sink.
	pub fn into_inner(self) -> Result<W> {
		let sink = self.out.into_inner()?;
		Ok(sink)
	}

	/// Bind `prefix` to `uri` in the writer's namespace table.
	///
	/// This records the binding for later lookups only; emitting the
	/// declaration is [`write_namespace`]'s job.
	///
	///   [`write_namespace`]: Self::write_namespace
	pub fn set_prefix(&mut self, prefix: &str, uri: &str) {
		self.namespaces.bind(prefix, uri);
	}

	/// Record the default namespace URI in the writer's namespace table.
	pub fn set_default_namespace(&mut self, uri: &str) {
		self.namespaces.set_default_namespace(uri);
	}

	/// Install an external resolver consulted before the local table.
	pub fn set_namespace_resolver(&mut self, resolver: Box<dyn NamespaceResolver>) {
		self.namespaces.set_resolver(resolver);
	}

	/// Look up a prefix for `uri`.
	pub fn prefix(&self, uri: &str) -> Option<&str> {
		self.namespaces.resolve_prefix(uri)
	}

	/// Look up the URI bound to `prefix`.
	pub fn namespace_uri(&self, prefix: &str) -> Option<&str> {
		self.namespaces.resolve_uri(prefix)
	}

	pub fn namespaces(&self) -> &NamespaceTable {
		&self.namespaces
	}

	pub fn namespaces_mut(&mut self) -> &mut NamespaceTable {
		&mut self.namespaces
	}
}

#[cfg(test)]
mod tests_namespace_table {
	use super::*;

	fn mk() -> NamespaceTable {
		NamespaceTable::new()
	}

	struct StaticResolver;

	impl NamespaceResolver for StaticResolver {
		fn resolve_uri(&self, prefix: &str) -> Option<&str> {
			if prefix == "ex" {
				Some("uri:delegate")
			} else {
				None
			}
		}

		fn resolve_prefix(&self, uri: &str) -> Option<&str> {
			if uri == "uri:delegate" {
				Some("ex")
			} else {
				None
			}
		}
	}

	#[test]
	fn bind_and_resolve_uri() {
		let mut ns = mk();
		ns.bind("a", "uri:foo");
		assert_eq!(ns.resolve_uri("a"), Some("uri:foo"));
	}

	#[test]
	fn resolve_prefix_returns_first_bound() {
		let mut ns = mk();
		ns.bind("a", "uri:foo");
		ns.bind("b", "uri:foo");
		assert_eq!(ns.resolve_prefix("uri:foo"), Some("a"));
	}

	#[test]
	fn rebinding_prefix_overwrites_uri() {
		let mut ns = mk();
		ns.bind("a", "uri:foo");
		ns.bind("a", "uri:bar");
		assert_eq!(ns.resolve_uri("a"), Some("uri:bar"));
		// bindings are never removed; the old URI keeps its list entry
		assert_eq!(ns.resolve_prefix("uri:foo"), Some("a"));
		assert_eq!(ns.resolve_prefix("uri:bar"), Some("a"));
	}

	#[test]
	fn unbound_uri_is_not_found() {
		let ns = mk();
		assert_eq!(ns.resolve_prefix("uri:foo"), None);
	}

	#[test]
	fn unbound_prefix_is_not_found() {
		let ns = mk();
		assert_eq!(ns.resolve_uri("a"), None);
	}

	#[test]
	fn default_namespace_overwrites() {
		let mut ns = mk();
		assert_eq!(ns.default_namespace(), None);
		ns.set_default_namespace("uri:foo");
		ns.set_default_namespace("uri:bar");
		assert_eq!(ns.default_namespace(), Some("uri:bar"));
	}

	#[test]
	fn resolver_is_consulted_first() {
		let mut ns = mk();
		ns.bind("local", "uri:delegate");
		ns.set_resolver(Box::new(StaticResolver));
		assert_eq!(ns.resolve_prefix("uri:delegate"), Some("ex"));
		assert_eq!(ns.resolve_uri("ex"), Some("uri:delegate"));
	}

	#[test]
	fn resolver_miss_falls_back_to_local_bindings() {
		let mut ns = mk();
		ns.bind("a", "uri:foo");
		ns.set_resolver(Box::new(StaticResolver));
		assert_eq!(ns.resolve_prefix("uri:foo"), Some("a"));
		assert_eq!(ns.resolve_uri("a"), Some("uri:foo"));
	}

	#[test]
	fn prefixes_lists_in_binding_order() {
		let mut ns = mk();
		ns.bind("b", "uri:foo");
		ns.bind("a", "uri:foo");
		ns.bind("c", "uri:bar");
		let prefixes: Vec<&str> = ns.prefixes("uri:foo").collect();
		assert_eq!(prefixes, vec!["b", "a"]);
	}

	#[test]
	fn prefixes_lists_resolver_bindings_first() {
		let mut ns = mk();
		ns.bind("local", "uri:delegate");
		ns.set_resolver(Box::new(StaticResolver));
		let prefixes: Vec<&str> = ns.prefixes("uri:delegate").collect();
		assert_eq!(prefixes, vec!["ex", "local"]);
	}

	#[test]
	fn prefixes_of_unbound_uri_is_empty() {
		let ns = mk();
		assert_eq!(ns.prefixes("uri:foo").count(), 0);
	}
}
