//! Support request draft and submission state machine

use super::field::FormField;
use std::time::{Duration, Instant};

/// Snapshot of a draft handed to the submission sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportRequest {
    pub name: String,
    pub email: String,
    pub problem: String,
}

/// The three draft fields of a support request.
///
/// All values are free-form text; the email field is intentionally not
/// validated.
#[derive(Debug, Clone)]
pub struct SupportDraft {
    pub name: FormField,
    pub email: FormField,
    pub problem: FormField,
}

impl SupportDraft {
    pub fn new() -> Self {
        Self {
            name: FormField::text("Your Name", "Enter your full name", false),
            email: FormField::text("Your Email", "Enter your email address", false),
            problem: FormField::text(
                "Describe your problem",
                "Please provide details about the issue you are facing...",
                true,
            ),
        }
    }

    pub fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.problem),
            _ => None,
        }
    }

    pub fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.problem),
            _ => None,
        }
    }

    /// Empty all three fields
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.problem.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.problem.is_empty()
    }

    /// Copy the current values into a request payload
    pub fn snapshot(&self) -> SupportRequest {
        SupportRequest {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            problem: self.problem.as_text().to_string(),
        }
    }
}

impl Default for SupportDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// Form lifecycle. The draft travels with the state, so every
/// transition replaces the whole value; `Submitted` carries the instant
/// at which the form flips back to an empty `Editing`. Dropping or
/// replacing the state is what cancels that deadline, there is no
/// detached timer to chase.
#[derive(Debug, Clone)]
enum SupportFormState {
    Editing { draft: SupportDraft },
    Submitted { draft: SupportDraft, reset_at: Instant },
}

impl Default for SupportFormState {
    fn default() -> Self {
        Self::Editing {
            draft: SupportDraft::new(),
        }
    }
}

/// The support form: draft state machine plus focus bookkeeping
#[derive(Debug, Clone)]
pub struct SupportForm {
    state: SupportFormState,
    /// Focused slot: 0=name, 1=email, 2=problem, 3=buttons row
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Clear, 1=Submit)
    pub selected_button: usize,
}

impl SupportForm {
    /// How long the confirmation screen stays up before the form resets
    const RESET_DELAY: Duration = Duration::from_secs(3);

    pub fn new() -> Self {
        Self {
            state: SupportFormState::default(),
            active_field_index: 0,
            selected_button: 1, // Default to "Submit Request"
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.state, SupportFormState::Submitted { .. })
    }

    pub fn draft(&self) -> &SupportDraft {
        match &self.state {
            SupportFormState::Editing { draft }
            | SupportFormState::Submitted { draft, .. } => draft,
        }
    }

    /// The focused field, if a field (not the buttons row) is focused
    pub fn active_field(&self) -> Option<&FormField> {
        self.draft().get_field(self.active_field_index)
    }

    /// Append a character to the focused field. Ignored while submitted
    /// or when the buttons row is focused.
    pub fn insert_char(&mut self, c: char) {
        if let SupportFormState::Editing { draft } = &mut self.state {
            if let Some(field) = draft.get_field_mut(self.active_field_index) {
                field.push_char(c);
            }
        }
    }

    /// Delete the last character of the focused field. Same guards as
    /// `insert_char`.
    pub fn backspace(&mut self) {
        if let SupportFormState::Editing { draft } = &mut self.state {
            if let Some(field) = draft.get_field_mut(self.active_field_index) {
                field.pop_char();
            }
        }
    }

    /// Empty all fields without leaving `Editing`
    pub fn clear(&mut self) {
        if let SupportFormState::Editing { draft } = &mut self.state {
            draft.clear();
        }
    }

    /// Submit the draft. Returns the snapshot to deliver exactly once
    /// per submission; `None` when already submitted.
    pub fn submit(&mut self, now: Instant) -> Option<SupportRequest> {
        match std::mem::take(&mut self.state) {
            SupportFormState::Editing { draft } => {
                let request = draft.snapshot();
                self.state = SupportFormState::Submitted {
                    draft,
                    reset_at: now + Self::RESET_DELAY,
                };
                Some(request)
            }
            submitted => {
                self.state = submitted;
                None
            }
        }
    }

    /// Advance the machine. Once the confirmation deadline has passed,
    /// returns to an empty `Editing` and reports `true`.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.state {
            SupportFormState::Submitted { reset_at, .. } if now >= *reset_at => {
                self.reset();
                true
            }
            _ => false,
        }
    }

    /// Discard the draft and any pending confirmation deadline, back to
    /// a fresh empty form. Used when the page is left.
    pub fn reset(&mut self) {
        self.state = SupportFormState::default();
        self.active_field_index = 0;
        self.selected_button = 1;
    }

    pub fn field_count(&self) -> usize {
        4 // name, email, problem, buttons
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Returns true if the buttons row is currently focused
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == 3
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % 2;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = 1;
        } else {
            self.selected_button -= 1;
        }
    }
}

impl Default for SupportForm {
    fn default() -> Self {
        Self::new()
    }
}
