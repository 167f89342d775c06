//! Terminal stand-in for desktop notifications.

use std::io::IsTerminal;

use helpthyself_core::timer::{Notifier, Permission};
use helpthyself_core::NotificationError;

/// Rings the bell and writes the message to stderr.
///
/// Permission is always granted; there is no one to ask.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn permission(&self) -> Option<Permission> {
        Some(Permission::Granted)
    }

    fn request_permission(&mut self) -> Option<Permission> {
        Some(Permission::Granted)
    }

    fn show(&mut self, title: &str, body: &str) -> Result<(), NotificationError> {
        let bell = if std::io::stderr().is_terminal() { "\x07" } else { "" };
        eprintln!("{bell}{title}: {body}");
        Ok(())
    }
}
