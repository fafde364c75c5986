//! Registry of display surfaces addressed by element id

use std::collections::HashMap;

use super::DisplaySurface;

/// The host page: a set of surfaces the stopwatch can mount on
#[derive(Default)]
pub struct Page {
    elements: HashMap<String, Box<dyn DisplaySurface>>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(mut self, id: &str, surface: impl DisplaySurface + 'static) -> Self {
        self.elements.insert(id.to_string(), Box::new(surface));
        self
    }

    /// Take the surface registered under `id`
    pub fn element_by_id(&mut self, id: &str) -> Option<Box<dyn DisplaySurface>> {
        self.elements.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::TerminalSurface;

    #[test]
    fn finds_registered_elements_only() {
        let mut page = Page::new().with_element("stopwatch", TerminalSurface::new(Vec::new()));
        assert!(page.element_by_id("clock").is_none());
        assert!(page.element_by_id("stopwatch").is_some());
        assert!(page.element_by_id("stopwatch").is_none());
    }
}
