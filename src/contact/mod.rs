//! Contact form: field state, validation, and the mail hand-off.

mod form;
mod mailto;

pub use form::{ContactForm, FieldId, FormErrors, FIELD_ORDER};
pub use mailto::{compose_mailto, MailLauncher, RecordingLauncher, SystemLauncher};
