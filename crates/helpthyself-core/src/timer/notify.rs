//! Best-effort desktop notifications for mode changes.
//!
//! Nothing in here can fail the timer: permission problems and delivery
//! errors are logged and dropped.

use serde::{Deserialize, Serialize};

use super::FocusMode;
use crate::error::NotificationError;

/// Tri-state notification permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Granted,
    Denied,
    /// Not decided yet; asking is allowed.
    Default,
}

/// Something that can show a notification.
///
/// `permission` returns `None` when notifications are unsupported.
pub trait Notifier {
    fn permission(&self) -> Option<Permission>;

    /// Ask the user. Only called while the permission is [`Permission::Default`].
    fn request_permission(&mut self) -> Option<Permission>;

    fn show(&mut self, title: &str, body: &str) -> Result<(), NotificationError>;
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn permission(&self) -> Option<Permission> {
        (**self).permission()
    }

    fn request_permission(&mut self) -> Option<Permission> {
        (**self).request_permission()
    }

    fn show(&mut self, title: &str, body: &str) -> Result<(), NotificationError> {
        (**self).show(title, body)
    }
}

/// Notifier for hosts without notification support.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn permission(&self) -> Option<Permission> {
        None
    }

    fn request_permission(&mut self) -> Option<Permission> {
        None
    }

    fn show(&mut self, _title: &str, _body: &str) -> Result<(), NotificationError> {
        Err(NotificationError::Unsupported)
    }
}

/// Resolve the permission, asking once if undecided.
pub fn ensure_permission<N: Notifier + ?Sized>(notifier: &mut N) -> Result<(), NotificationError> {
    match notifier.permission() {
        None => Err(NotificationError::Unsupported),
        Some(Permission::Granted) => Ok(()),
        Some(Permission::Denied) => Err(NotificationError::Denied),
        Some(Permission::Default) => match notifier.request_permission() {
            Some(Permission::Granted) => Ok(()),
            None => Err(NotificationError::Unsupported),
            Some(_) => Err(NotificationError::Denied),
        },
    }
}

/// Title and body announcing the block that just began.
pub fn mode_change_message(to: FocusMode) -> (&'static str, &'static str) {
    match to {
        FocusMode::Break => ("Break time", "Step away briefly. You earned it."),
        FocusMode::Focus => ("Back to focus", "One more focused block."),
    }
}

/// Show a notification if enabled and permitted. Returns whether one was shown.
pub fn notify<N: Notifier + ?Sized>(enabled: bool, notifier: &mut N, title: &str, body: &str) -> bool {
    if !enabled {
        return false;
    }
    if let Err(e) = ensure_permission(notifier) {
        tracing::debug!(error = %e, "notification skipped");
        return false;
    }
    match notifier.show(title, body) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "notification error");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scripted {
        permission: Option<Permission>,
        answer: Option<Permission>,
        fail_show: bool,
        shown: Vec<String>,
    }

    impl Scripted {
        fn new(permission: Option<Permission>) -> Self {
            Self {
                permission,
                answer: Some(Permission::Granted),
                fail_show: false,
                shown: Vec::new(),
            }
        }
    }

    impl Notifier for Scripted {
        fn permission(&self) -> Option<Permission> {
            self.permission
        }
        fn request_permission(&mut self) -> Option<Permission> {
            self.permission = self.answer;
            self.answer
        }
        fn show(&mut self, title: &str, _body: &str) -> Result<(), NotificationError> {
            if self.fail_show {
                return Err(NotificationError::Delivery("boom".into()));
            }
            self.shown.push(title.to_string());
            Ok(())
        }
    }

    #[test]
    fn disabled_never_shows() {
        let mut n = Scripted::new(Some(Permission::Granted));
        assert!(!notify(false, &mut n, "t", "b"));
        assert!(n.shown.is_empty());
    }

    #[test]
    fn granted_shows() {
        let mut n = Scripted::new(Some(Permission::Granted));
        assert!(notify(true, &mut n, "Break time", "b"));
        assert_eq!(n.shown, vec!["Break time"]);
    }

    #[test]
    fn default_permission_is_requested() {
        let mut n = Scripted::new(Some(Permission::Default));
        assert!(ensure_permission(&mut n).is_ok());
        assert_eq!(n.permission, Some(Permission::Granted));

        let mut n = Scripted::new(Some(Permission::Default));
        n.answer = Some(Permission::Denied);
        assert_eq!(ensure_permission(&mut n), Err(NotificationError::Denied));
    }

    #[test]
    fn unsupported_and_denied_are_swallowed() {
        assert!(!notify(true, &mut NullNotifier, "t", "b"));
        let mut n = Scripted::new(Some(Permission::Denied));
        assert!(!notify(true, &mut n, "t", "b"));
    }

    #[test]
    fn delivery_failure_is_swallowed() {
        let mut n = Scripted::new(Some(Permission::Granted));
        n.fail_show = true;
        assert!(!notify(true, &mut n, "t", "b"));
    }

    #[test]
    fn messages_follow_new_mode() {
        assert_eq!(mode_change_message(FocusMode::Break).0, "Break time");
        assert_eq!(mode_change_message(FocusMode::Focus).0, "Back to focus");
    }
}
