/// Buffer behind the "add task" field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddInput {
    text: String,
}

impl AddInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Takes the typed title, leaving the field empty. An empty field emits
    /// nothing. Whitespace is a title like any other.
    pub fn submit(&mut self) -> Option<String> {
        if self.text.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.text))
    }
}
