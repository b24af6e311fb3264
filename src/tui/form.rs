//! The always-visible task form.

use crate::model::task::{ClockTime, Priority, TaskFields};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

/// Single-line text input with a grapheme-aware cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    /// Byte offset, always on a grapheme boundary
    cursor: usize,
}

impl TextInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the contents and put the cursor at the end
    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = prev_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = next_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(self.cursor..next, "");
        }
    }

    pub fn left(&mut self) {
        if let Some(prev) = prev_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn right(&mut self) {
        if let Some(next) = next_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }
}

/// Focusable form controls, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Topic,
    Description,
    Date,
    Hour,
    Minute,
    Meridiem,
    Priority,
}

impl FormField {
    pub const ORDER: [FormField; 7] = [
        FormField::Topic,
        FormField::Description,
        FormField::Date,
        FormField::Hour,
        FormField::Minute,
        FormField::Meridiem,
        FormField::Priority,
    ];

    fn index(self) -> usize {
        FormField::ORDER
            .iter()
            .position(|f| *f == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> FormField {
        FormField::ORDER[(self.index() + 1) % FormField::ORDER.len()]
    }

    pub fn prev(self) -> FormField {
        let len = FormField::ORDER.len();
        FormField::ORDER[(self.index() + len - 1) % len]
    }

    /// Free-text fields take typed characters; the rest are spinners or choices
    pub fn is_text(self) -> bool {
        matches!(
            self,
            FormField::Topic | FormField::Description | FormField::Date
        )
    }
}

/// Form state: three text inputs, a time spinner and a priority choice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    pub topic: TextInput,
    pub description: TextInput,
    pub date: TextInput,
    pub time: ClockTime,
    pub priority: Priority,
    pub focus: FormField,
}

impl Default for TaskForm {
    fn default() -> Self {
        TaskForm {
            topic: TextInput::default(),
            description: TextInput::default(),
            date: TextInput::default(),
            time: ClockTime::default(),
            priority: Priority::Medium,
            focus: FormField::Topic,
        }
    }
}

impl TaskForm {
    /// Current values as raw input for validation
    pub fn to_fields(&self) -> TaskFields {
        TaskFields {
            topic: self.topic.text().to_string(),
            description: self.description.text().to_string(),
            date: self.date.text().to_string(),
            time: self.time,
            priority: self.priority.label().to_string(),
        }
    }

    /// Pre-fill from a task's values. An unknown priority label shows as Medium.
    pub fn fill(&mut self, fields: &TaskFields) {
        self.topic.set(&fields.topic);
        self.description.set(&fields.description);
        self.date.set(&fields.date);
        self.time = fields.time;
        self.priority = Priority::parse_label(&fields.priority).unwrap_or(Priority::Medium);
    }

    /// Reset every control to its default
    pub fn clear(&mut self) {
        *self = TaskForm::default();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// The text input with focus, if the focused control is a text field
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            FormField::Topic => Some(&mut self.topic),
            FormField::Description => Some(&mut self.description),
            FormField::Date => Some(&mut self.date),
            _ => None,
        }
    }

    /// Step the focused spinner or choice. Up is `+1`.
    pub fn adjust(&mut self, delta: i32) {
        match self.focus {
            FormField::Hour => self.time = self.time.step_hour(delta),
            FormField::Minute => self.time = self.time.step_minute(delta),
            FormField::Meridiem => self.time = self.time.toggle_meridiem(),
            FormField::Priority => {
                self.priority = if delta > 0 {
                    self.priority.prev()
                } else {
                    self.priority.next()
                }
            }
            _ => {}
        }
    }
}
