//! Contact form state and validation.
//!
//! Four fields (name, email, subject, message), validated together on
//! submit so every violation is reported at once. A successful submit
//! composes a `mailto:` URI, launches it through the injected mail
//! launcher, clears the fields, and shows a confirmation notice. The
//! hand-off itself is fire-and-forget; there is no delivery signal to
//! observe.

use super::mailto::{compose_mailto, MailLauncher};
use crate::widgets::TextInput;
use once_cell::sync::Lazy;
use regex::Regex;

/// Basic `local@domain.tld` shape; intentionally loose.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Identifies one of the form's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Email,
    Subject,
    Message,
}

/// Fields in focus-traversal order.
pub const FIELD_ORDER: [FieldId; 4] = [
    FieldId::Name,
    FieldId::Email,
    FieldId::Subject,
    FieldId::Message,
];

impl FieldId {
    /// Label shown above the field.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Name *",
            FieldId::Email => "Email *",
            FieldId::Subject => "Subject *",
            FieldId::Message => "Message *",
        }
    }

    /// Placeholder shown while the field is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            FieldId::Name => "Your full name",
            FieldId::Email => "your.email@example.com",
            FieldId::Subject => "What's this about?",
            FieldId::Message => "Tell me what's on your mind...",
        }
    }
}

/// Per-field validation messages; `None` means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub subject: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FormErrors {
    /// Error for one field.
    pub fn for_field(&self, field: FieldId) -> Option<&'static str> {
        match field {
            FieldId::Name => self.name,
            FieldId::Email => self.email,
            FieldId::Subject => self.subject,
            FieldId::Message => self.message,
        }
    }

    /// Number of fields with errors.
    pub fn count(&self) -> usize {
        [self.name, self.email, self.subject, self.message]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }

    /// Whether every field validated.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    fn clear_field(&mut self, field: FieldId) {
        match field {
            FieldId::Name => self.name = None,
            FieldId::Email => self.email = None,
            FieldId::Subject => self.subject = None,
            FieldId::Message => self.message = None,
        }
    }
}

/// The contact form: field buffers, focus, errors, and the
/// post-submit notice.
#[derive(Debug)]
pub struct ContactForm {
    name: TextInput,
    email: TextInput,
    subject: TextInput,
    message: TextInput,
    /// Which field has keyboard focus
    focused: FieldId,
    /// Validation results from the last submit attempt
    errors: FormErrors,
    /// True after a successful hand-off, until the user types again
    submitted: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: TextInput::new(),
            email: TextInput::new(),
            subject: TextInput::new(),
            message: TextInput::multiline(),
            focused: FieldId::Name,
            errors: FormErrors::default(),
            submitted: false,
        }
    }

    /// The focused field.
    pub fn focused(&self) -> FieldId {
        self.focused
    }

    /// Focus a specific field.
    pub fn focus(&mut self, field: FieldId) {
        self.focused = field;
    }

    /// Move focus to the next field, wrapping.
    pub fn focus_next(&mut self) {
        let pos = FIELD_ORDER.iter().position(|&f| f == self.focused).unwrap_or(0);
        self.focused = FIELD_ORDER[(pos + 1) % FIELD_ORDER.len()];
    }

    /// Move focus to the previous field, wrapping.
    pub fn focus_previous(&mut self) {
        let pos = FIELD_ORDER.iter().position(|&f| f == self.focused).unwrap_or(0);
        self.focused = FIELD_ORDER[(pos + FIELD_ORDER.len() - 1) % FIELD_ORDER.len()];
    }

    /// The buffer for a field.
    pub fn field(&self, field: FieldId) -> &TextInput {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Subject => &self.subject,
            FieldId::Message => &self.message,
        }
    }

    /// Mutable access to the focused field's buffer.
    ///
    /// Typing clears that field's error and any submit notice.
    pub fn focused_field_mut(&mut self) -> &mut TextInput {
        self.errors.clear_field(self.focused);
        self.submitted = false;
        match self.focused {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Subject => &mut self.subject,
            FieldId::Message => &mut self.message,
        }
    }

    /// Validation state from the last submit attempt.
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Whether the confirmation notice should show.
    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// Validate every field at once.
    ///
    /// All violations are reported together; nothing fails fast.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();

        if self.name.content().trim().is_empty() {
            errors.name = Some("Name is required");
        }

        // Only emptiness ignores surrounding whitespace; the pattern
        // check runs on the raw value, so stray spaces fail it.
        let email = self.email.content();
        if email.trim().is_empty() {
            errors.email = Some("Email is required");
        } else if !EMAIL_RE.is_match(email) {
            errors.email = Some("Please enter a valid email address");
        }

        if self.subject.content().trim().is_empty() {
            errors.subject = Some("Subject is required");
        }

        if self.message.content().trim().is_empty() {
            errors.message = Some("Message is required");
        }

        errors
    }

    /// Validate and, if clean, hand off to the mail client.
    ///
    /// On success the fields are cleared and the confirmation notice is
    /// shown. Launch failures are logged but not surfaced: whether the
    /// mail client actually opened is unobservable here either way.
    /// Returns true when the hand-off was attempted.
    pub fn submit(&mut self, recipient: &str, launcher: &dyn MailLauncher) -> bool {
        self.errors = self.validate();
        if !self.errors.is_empty() {
            tracing::debug!(errors = self.errors.count(), "contact form rejected");
            return false;
        }

        let uri = compose_mailto(
            recipient,
            self.subject.content(),
            self.name.content(),
            self.email.content(),
            self.message.content(),
        );

        if let Err(e) = launcher.launch(&uri) {
            tracing::warn!("failed to open mail client: {}", e);
        }

        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
        self.focused = FieldId::Name;
        self.submitted = true;
        tracing::info!("contact form handed off to mail client");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::mailto::RecordingLauncher;

    fn fill(form: &mut ContactForm, field: FieldId, text: &str) {
        form.focus(field);
        form.focused_field_mut().insert_str(text);
    }

    fn valid_form() -> ContactForm {
        let mut form = ContactForm::new();
        fill(&mut form, FieldId::Name, "A");
        fill(&mut form, FieldId::Email, "a@b.com");
        fill(&mut form, FieldId::Subject, "S");
        fill(&mut form, FieldId::Message, "M");
        form
    }

    #[test]
    fn test_empty_form_reports_all_four_errors() {
        let form = ContactForm::new();
        let errors = form.validate();
        assert_eq!(errors.count(), 4);
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut form = ContactForm::new();
        fill(&mut form, FieldId::Name, "   ");
        let errors = form.validate();
        assert_eq!(errors.name, Some("Name is required"));
    }

    #[test]
    fn test_invalid_email_is_the_only_error() {
        let mut form = valid_form();
        form.focus(FieldId::Email);
        form.focused_field_mut().clear();
        form.focused_field_mut().insert_str("abc");

        let errors = form.validate();
        assert_eq!(errors.count(), 1);
        assert_eq!(errors.email, Some("Please enter a valid email address"));
    }

    #[test]
    fn test_email_shapes() {
        let ok = ["a@b.co", "first.last@sub.domain.org", "x+y@b.io"];
        let bad = ["abc", "a@b", "a b@c.com", "@b.com", "a@.com "];
        for email in ok {
            let mut form = valid_form();
            form.focus(FieldId::Email);
            form.focused_field_mut().clear();
            form.focused_field_mut().insert_str(email);
            assert!(form.validate().email.is_none(), "expected {email:?} to pass");
        }
        for email in bad {
            let mut form = valid_form();
            form.focus(FieldId::Email);
            form.focused_field_mut().clear();
            form.focused_field_mut().insert_str(email);
            assert!(form.validate().email.is_some(), "expected {email:?} to fail");
        }
    }

    #[test]
    fn test_failed_submit_does_not_launch() {
        let mut form = ContactForm::new();
        let launcher = RecordingLauncher::default();
        assert!(!form.submit("me@example.com", &launcher));
        assert_eq!(launcher.launched().len(), 0);
        assert_eq!(form.errors().count(), 4);
        assert!(!form.submitted());
    }

    #[test]
    fn test_successful_submit_launches_once_and_clears() {
        let mut form = valid_form();
        let launcher = RecordingLauncher::default();
        assert!(form.submit("me@example.com", &launcher));

        let launched = launcher.launched();
        assert_eq!(launched.len(), 1);
        assert!(launched[0].starts_with("mailto:me@example.com?"));

        for field in FIELD_ORDER {
            assert!(form.field(field).is_empty(), "{field:?} not cleared");
        }
        assert!(form.submitted());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_typing_clears_field_error_and_notice() {
        let mut form = ContactForm::new();
        let launcher = RecordingLauncher::default();
        form.submit("me@example.com", &launcher);
        assert!(form.errors().name.is_some());

        form.focus(FieldId::Name);
        form.focused_field_mut().insert_char('A');
        assert!(form.errors().name.is_none());
        // Other errors stay until their fields are touched.
        assert!(form.errors().email.is_some());
    }

    #[test]
    fn test_focus_traversal_wraps() {
        let mut form = ContactForm::new();
        assert_eq!(form.focused(), FieldId::Name);
        form.focus_previous();
        assert_eq!(form.focused(), FieldId::Message);
        form.focus_next();
        assert_eq!(form.focused(), FieldId::Name);
        form.focus_next();
        assert_eq!(form.focused(), FieldId::Email);
    }
}
