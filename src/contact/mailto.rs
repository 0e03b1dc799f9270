//! Mail-compose URI generation and the launcher seam.
//!
//! The form's only outbound interface is a `mailto:` URI with
//! percent-encoded `subject` and `body` query parameters, opened by the
//! operating system's handler. The launcher is a trait so the event
//! loop and tests can observe the hand-off without opening anything.

use std::io;
use std::sync::Mutex;

/// Build the mail-compose URI for a validated form.
///
/// The body carries the sender's name, email, and message so the mail
/// lands with full context even though the user's client fills the
/// `From` header itself.
pub fn compose_mailto(
    recipient: &str,
    subject: &str,
    name: &str,
    email: &str,
    message: &str,
) -> String {
    let body = format!("Name: {name}\nEmail: {email}\n\nMessage:\n{message}");
    format!(
        "mailto:{recipient}?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(&body)
    )
}

/// Opens a mail-compose URI with the user's mail client.
pub trait MailLauncher {
    /// Hand the URI to the OS. Whether a mail client actually opens is
    /// not observable beyond this call's immediate result.
    fn launch(&self, uri: &str) -> io::Result<()>;
}

impl<T: MailLauncher + ?Sized> MailLauncher for std::sync::Arc<T> {
    fn launch(&self, uri: &str) -> io::Result<()> {
        (**self).launch(uri)
    }
}

/// Production launcher: delegates to the OS handler.
#[derive(Debug, Default)]
pub struct SystemLauncher;

impl MailLauncher for SystemLauncher {
    fn launch(&self, uri: &str) -> io::Result<()> {
        open::that(uri)
    }
}

/// Test double that records every launched URI.
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    launched: Mutex<Vec<String>>,
}

impl RecordingLauncher {
    /// The URIs launched so far, in order.
    pub fn launched(&self) -> Vec<String> {
        self.launched.lock().expect("launcher lock").clone()
    }
}

impl MailLauncher for RecordingLauncher {
    fn launch(&self, uri: &str) -> io::Result<()> {
        self.launched.lock().expect("launcher lock").push(uri.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_basic_shape() {
        let uri = compose_mailto("me@example.com", "Hi", "A", "a@b.com", "Hello");
        assert!(uri.starts_with("mailto:me@example.com?subject=Hi&body="));
    }

    #[test]
    fn test_compose_percent_encodes_spaces_and_newlines() {
        let uri = compose_mailto("me@example.com", "two words", "A B", "a@b.com", "line1\nline2");
        assert!(uri.contains("subject=two%20words"));
        assert!(uri.contains("%0A"), "newlines must be percent-encoded");
        assert!(!uri.contains(' '));
        assert!(!uri.contains('\n'));
    }

    #[test]
    fn test_compose_body_contains_all_fields() {
        let uri = compose_mailto("me@example.com", "S", "Ada", "ada@b.com", "Msg");
        let decoded = urlencoding::decode(uri.split("body=").nth(1).unwrap()).unwrap();
        assert!(decoded.contains("Name: Ada"));
        assert!(decoded.contains("Email: ada@b.com"));
        assert!(decoded.contains("Message:\nMsg"));
    }

    #[test]
    fn test_recording_launcher_records_in_order() {
        let launcher = RecordingLauncher::default();
        launcher.launch("mailto:a").unwrap();
        launcher.launch("mailto:b").unwrap();
        assert_eq!(launcher.launched(), vec!["mailto:a", "mailto:b"]);
    }
}
