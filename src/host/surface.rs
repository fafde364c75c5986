//! Display surfaces the stopwatch renders into

use std::{collections::BTreeMap, io::Write};
use tracing::warn;

/// Something that shows text and carries descriptive attributes
pub trait DisplaySurface {
    fn set_text(&mut self, text: &str);
    fn set_attribute(&mut self, name: &str, value: &str);
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for Box<S> {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        (**self).set_attribute(name, value)
    }
}

/// Single redrawn terminal line.
///
/// The `name` attribute becomes the line's label.
pub struct TerminalSurface<W: Write> {
    writer: W,
    attributes: BTreeMap<String, String>,
    text: String,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            attributes: BTreeMap::new(),
            text: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn redraw(&mut self) {
        let result = match self.attributes.get("name") {
            Some(label) => write!(self.writer, "\r{}  {}", label, self.text),
            None => write!(self.writer, "\r{}", self.text),
        }
        .and_then(|_| self.writer.flush());

        if let Err(e) = result {
            warn!("Failed to draw stopwatch: {}", e);
        }
    }
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.redraw();
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}
