use super::*;

// note that these are just smoketests... the writer and the namespace table
// are tested extensively in their modules.
#[test]
fn writer_can_emit_a_nested_document() {
	let mut w = XmlWriter::new(Vec::new());
	w.write_start_document_version("1.0").unwrap();
	w.write_start_element("root").unwrap();
	w.write_attribute("id", "1").unwrap();
	w.write_start_element("child").unwrap();
	w.write_characters("hi").unwrap();
	w.write_end_element().unwrap();
	w.write_end_element().unwrap();
	w.write_end_document().unwrap();

	let out = String::from_utf8(w.into_inner().unwrap()).unwrap();
	assert_eq!(
		out,
		"<?xml version=\"1.0\"?>\n<root\n\tid=\"1\">\n\t<child>hi</child>\n</root>"
	);
}

#[test]
fn writer_can_emit_a_namespaced_document_with_compact_attributes() {
	let mut w = XmlWriter::with_options(
		Vec::new(),
		Options::default()
			.encoding("UTF-8")
			.indent("  ")
			.compact_attributes(true),
	);
	w.write_start_document_encoding("UTF8", "1.0").unwrap();
	w.write_start_element_prefixed("rdf", "RDF").unwrap();
	w.write_namespace("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#")
		.unwrap();
	w.write_empty_element_prefixed("rdf", "Description").unwrap();
	w.write_attribute_prefixed("rdf", "about", "urn:example:thing")
		.unwrap();
	w.write_end_element().unwrap();
	w.write_end_element().unwrap();
	w.write_end_document().unwrap();

	let out = String::from_utf8(w.into_inner().unwrap()).unwrap();
	assert_eq!(
		out,
		concat!(
			"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
			"<rdf:RDF\n",
			"  xmlns:rdf=\"http://www.w3.org/1999/02/22-rdf-syntax-ns#\">\n",
			"  <rdf:Description rdf:about=\"urn:example:thing\"/>\n",
			"</rdf:RDF>"
		)
	);
}

#[test]
fn output_structure_matches_the_call_sequence() {
	// tag names in the output must form matching nested pairs identical to
	// the start/end calls
	let mut w = XmlWriter::new(Vec::new());
	let names = ["a", "b", "c"];
	for name in names.iter() {
		w.write_start_element(name).unwrap();
	}
	for _ in names.iter() {
		w.write_end_element().unwrap();
	}
	w.write_end_document().unwrap();

	let out = String::from_utf8(w.into_inner().unwrap()).unwrap();
	let mut stack = Vec::new();
	for line in out.lines().filter(|l| !l.is_empty()) {
		let tag = line.trim();
		if tag.starts_with("</") {
			let name = &tag[2..tag.len() - 1];
			assert_eq!(stack.pop(), Some(name));
		} else {
			stack.push(&tag[1..tag.len() - 1]);
		}
	}
	assert_eq!(stack.len(), 0);
}
