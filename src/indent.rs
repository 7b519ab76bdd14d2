/*!
# Character-level indentation sink

The [`IndentingWriter`] is the layer below the [`XmlWriter`]: it knows
nothing about XML, it only tracks an indentation depth, the string used for
one indentation step and the line-ending convention, and writes raw text to
the underlying [`io::Write`].

   [`XmlWriter`]: crate::writer::XmlWriter
*/
use std::io;

/// Writes raw text and maintains the current indentation.
///
/// Text passed to [`write`] is appended unmodified; a line break requested
/// via [`write_eol`] is followed by the indentation string repeated once per
/// indentation level, so everything written afterwards starts at the current
/// depth.
///
///   [`write`]: Self::write
///   [`write_eol`]: Self::write_eol
pub struct IndentingWriter<W: io::Write> {
	inner: W,
	indentation_string: String,
	line_end: String,
	level: usize,
}

impl<W: io::Write> IndentingWriter<W> {
	/// Create a new sink with a single tab as indentation unit and `"\n"`
	/// line endings.
	pub fn new(inner: W) -> Self {
		Self {
			inner,
			indentation_string: "\t".to_string(),
			line_end: "\n".to_string(),
			level: 0,
		}
	}

	/// Append raw text without modification.
	pub fn write(&mut self, s: &str) -> io::Result<()> {
		self.inner.write_all(s.as_bytes())
	}

	/// Append raw bytes without modification.
	pub fn write_bytes(&mut self, b: &[u8]) -> io::Result<()> {
		self.inner.write_all(b)
	}

	/// Emit the configured line terminator followed by the indentation
	/// string repeated once per indentation level.
	pub fn write_eol(&mut self) -> io::Result<()> {
		self.inner.write_all(self.line_end.as_bytes())?;
		for _ in 0..self.level {
			self.inner.write_all(self.indentation_string.as_bytes())?;
		}
		Ok(())
	}

	/// Increase the indentation depth by one level.
	pub fn increase_indentation(&mut self) {
		self.level += 1;
	}

	/// Decrease the indentation depth by one level.
	///
	/// # Panics
	///
	/// Decreasing below zero is a programming error and causes a panic.
	pub fn decrease_indentation(&mut self) {
		match self.level.checked_sub(1) {
			Some(level) => self.level = level,
			None => panic!("indentation decreased below zero"),
		}
	}

	pub fn indentation_level(&self) -> usize {
		self.level
	}

	pub fn set_indentation_level(&mut self, level: usize) {
		self.level = level;
	}

	pub fn indentation_string(&self) -> &str {
		&self.indentation_string
	}

	pub fn set_indentation_string(&mut self, s: &str) {
		self.indentation_string = s.to_string();
	}

	pub fn line_end(&self) -> &str {
		&self.line_end
	}

	pub fn set_line_end(&mut self, s: &str) {
		self.line_end = s.to_string();
	}

	/// Flush the underlying sink.
	pub fn flush(&mut self) -> io::Result<()> {
		self.inner.flush()
	}

	/// Return a reference to the underlying sink.
	pub fn get_ref(&self) -> &W {
		&self.inner
	}

	/// Return a mutable reference to the underlying sink.
	pub fn get_mut(&mut self) -> &mut W {
		&mut self.inner
	}

	/// Flush and return the underlying sink.
	pub fn into_inner(mut self) -> io::Result<W> {
		self.inner.flush()?;
		Ok(self.inner)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn mk() -> IndentingWriter<Vec<u8>> {
		IndentingWriter::new(Vec::new())
	}

	fn output(w: IndentingWriter<Vec<u8>>) -> String {
		String::from_utf8(w.into_inner().unwrap()).unwrap()
	}

	#[test]
	fn write_passes_text_through_unmodified() {
		let mut w = mk();
		w.write("<a b='c'>&amp;").unwrap();
		assert_eq!(output(w), "<a b='c'>&amp;");
	}

	#[test]
	fn eol_repeats_indentation_string_per_level() {
		let mut w = mk();
		w.increase_indentation();
		w.increase_indentation();
		w.write_eol().unwrap();
		w.write("x").unwrap();
		assert_eq!(output(w), "\n\t\tx");
	}

	#[test]
	fn eol_at_level_zero_is_bare_line_end() {
		let mut w = mk();
		w.write_eol().unwrap();
		assert_eq!(output(w), "\n");
	}

	#[test]
	fn indentation_string_and_line_end_are_configurable() {
		let mut w = mk();
		w.set_indentation_string("  ");
		w.set_line_end("\r\n");
		w.increase_indentation();
		w.write_eol().unwrap();
		w.write("x").unwrap();
		assert_eq!(output(w), "\r\n  x");
	}

	#[test]
	fn decrease_matches_increase() {
		let mut w = mk();
		w.increase_indentation();
		w.decrease_indentation();
		assert_eq!(w.indentation_level(), 0);
		w.write_eol().unwrap();
		assert_eq!(output(w), "\n");
	}

	#[test]
	#[should_panic(expected = "below zero")]
	fn decrease_below_zero_panics() {
		let mut w = mk();
		w.decrease_indentation();
	}

	#[test]
	fn set_indentation_level_resets_depth() {
		let mut w = mk();
		w.increase_indentation();
		w.increase_indentation();
		w.set_indentation_level(0);
		w.write_eol().unwrap();
		assert_eq!(output(w), "\n");
	}
}
