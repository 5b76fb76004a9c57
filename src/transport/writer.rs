use quick_xml::escape::escape;

/// Line-oriented writer for the flat request documents the carrier accepts.
///
/// Fields are emitted in call order. `None` values and blank text are skipped
/// entirely; nothing is ever written as an empty placeholder.
pub struct XmlWriter {
    root: &'static str,
    lines: Vec<String>,
}

impl XmlWriter {
    pub fn new(root: &'static str) -> Self {
        Self {
            root,
            lines: vec![format!("<{root}>")],
        }
    }

    pub fn text(&mut self, tag: &'static str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.filter(|value| !value.trim().is_empty()) {
            self.lines
                .push(format!("  <{tag}>{}</{tag}>", escape(value)));
        }
        self
    }

    pub fn boolean(&mut self, tag: &'static str, value: Option<bool>) -> &mut Self {
        if let Some(value) = value {
            self.lines.push(format!("  <{tag}>{value}</{tag}>"));
        }
        self
    }

    /// Wrapper element with one child per item.
    pub fn list<'v>(
        &mut self,
        wrapper: &'static str,
        item: &'static str,
        values: Option<impl IntoIterator<Item = &'v str>>,
    ) -> &mut Self {
        if let Some(values) = values {
            self.lines.push(format!("  <{wrapper}>"));
            for value in values {
                self.lines
                    .push(format!("    <{item}>{}</{item}>", escape(value)));
            }
            self.lines.push(format!("  </{wrapper}>"));
        }
        self
    }

    pub fn finish(&mut self) -> String {
        self.lines.push(format!("</{}>", self.root));
        std::mem::take(&mut self.lines).join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_fields_in_call_order_and_skips_none() {
        let xml = XmlWriter::new("Thing")
            .text("Name", Some("A & B"))
            .text("Skipped", None)
            .boolean("Flag", Some(false))
            .boolean("Other", None)
            .list("Tns", "Tn", Some(["1", "2"]))
            .finish();
        assert_eq!(
            xml,
            "<Thing>\n  <Name>A &amp; B</Name>\n  <Flag>false</Flag>\n  <Tns>\n    <Tn>1</Tn>\n    <Tn>2</Tn>\n  </Tns>\n</Thing>"
        );
    }

    #[test]
    fn blank_text_is_skipped() {
        let xml = XmlWriter::new("Brand")
            .text("Website", Some(""))
            .text("Email", Some("  "))
            .text("Phone", Some("+15551234567"))
            .finish();
        assert_eq!(xml, "<Brand>\n  <Phone>+15551234567</Phone>\n</Brand>");
    }

    #[test]
    fn empty_document_keeps_root() {
        assert_eq!(XmlWriter::new("Brand").finish(), "<Brand>\n</Brand>");
    }
}
