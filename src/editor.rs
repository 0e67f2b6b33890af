use crate::model::EMPTY_DOCUMENT;

/// Contract for the external rich-document editor surface.
///
/// The core never interprets editor markup. It pushes serialized content into
/// the surface when a message is loaded or the composition is reset, and it
/// receives the surface's change notifications through
/// [`crate::composer::Composer::edit`].
pub trait DocumentEditor {
    /// Replace the surface's content programmatically. Implementations must
    /// not re-enter the change-notification path from here.
    fn replace_content(&mut self, content: &str);

    /// Reset the surface to its canonical empty document.
    fn clear(&mut self);

    /// The surface's current serialized content.
    fn content(&self) -> &str;
}

/// Minimal in-memory editor surface: a plain buffer holding the serialized
/// document. Serves as the reference implementation and as the test double.
#[derive(Debug)]
pub struct BufferEditor {
    content: String,
}

impl Default for BufferEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl BufferEditor {
    pub fn new() -> Self {
        Self {
            content: EMPTY_DOCUMENT.to_string(),
        }
    }
}

impl DocumentEditor for BufferEditor {
    fn replace_content(&mut self, content: &str) {
        self.content = content.to_string();
    }

    fn clear(&mut self) {
        self.content = EMPTY_DOCUMENT.to_string();
    }

    fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_and_clears_to_the_canonical_empty_document() {
        let mut editor = BufferEditor::new();
        assert_eq!(editor.content(), EMPTY_DOCUMENT);

        editor.replace_content("<p>Hi</p>");
        assert_eq!(editor.content(), "<p>Hi</p>");

        editor.clear();
        assert_eq!(editor.content(), EMPTY_DOCUMENT);
    }
}
