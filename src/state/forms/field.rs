//! Form field value objects

/// A single text field with its configuration and current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    /// Hint shown while the field is empty
    pub placeholder: String,
    pub value: String,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(label: &str, placeholder: &str, is_multiline: bool) -> Self {
        Self {
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: String::new(),
            is_multiline,
        }
    }

    /// Get the current text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Whether the field holds no text
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_starts_empty() {
        let field = FormField::text("Your Name", "Enter your full name", false);
        assert_eq!(field.label, "Your Name");
        assert_eq!(field.placeholder, "Enter your full name");
        assert_eq!(field.as_text(), "");
        assert!(field.is_empty());
        assert!(!field.is_multiline);
    }

    #[test]
    fn test_push_char_appends() {
        let mut field = FormField::text("Your Name", "", false);
        field.push_char('J');
        field.push_char('o');
        assert_eq!(field.as_text(), "Jo");
        assert!(!field.is_empty());
    }

    #[test]
    fn test_pop_char_removes_last() {
        let mut field = FormField::text("Your Name", "", false);
        field.push_char('J');
        field.push_char('o');
        field.push_char('n');
        field.pop_char();
        assert_eq!(field.as_text(), "Jo");
    }

    #[test]
    fn test_pop_char_on_empty_is_noop() {
        let mut field = FormField::text("Your Name", "", false);
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_clear_empties_value() {
        let mut field = FormField::text("Your Email", "", false);
        field.push_char('a');
        field.push_char('@');
        field.push_char('b');
        field.clear();
        assert!(field.is_empty());
    }

    #[test]
    fn test_multiline_accepts_newlines() {
        let mut field = FormField::text("Describe your problem", "", true);
        field.push_char('h');
        field.push_char('\n');
        field.push_char('i');
        assert_eq!(field.as_text(), "h\ni");
        assert!(field.is_multiline);
    }
}
