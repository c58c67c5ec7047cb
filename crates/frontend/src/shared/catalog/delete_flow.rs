/// Confirmation gate in front of a destructive delete.
///
/// `Closed → Confirming → (deleting) → Closed` on success; a server-side
/// conflict keeps the dialog open with the translated message and blocks
/// further confirm attempts until it is dismissed and reopened.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DeleteFlow<T> {
    #[default]
    Closed,
    Confirming {
        target: T,
        deleting: bool,
        error: Option<String>,
    },
}

impl<T: Clone> DeleteFlow<T> {
    /// Open the dialog for `target`. Only valid from `Closed`; a second
    /// request while a dialog is already up is ignored.
    pub fn request(&mut self, target: T) -> bool {
        if !matches!(self, DeleteFlow::Closed) {
            return false;
        }
        *self = DeleteFlow::Confirming {
            target,
            deleting: false,
            error: None,
        };
        true
    }

    /// Start the delete. Returns the target when the transition is valid;
    /// `None` from `Closed`, while a request is in flight, or after an error.
    pub fn begin(&mut self) -> Option<T> {
        match self {
            DeleteFlow::Confirming {
                target,
                deleting: deleting @ false,
                error: None,
            } => {
                *deleting = true;
                Some(target.clone())
            }
            _ => None,
        }
    }

    /// Record a failed delete; the dialog stays open showing `message`.
    pub fn fail(&mut self, message: String) {
        if let DeleteFlow::Confirming {
            deleting, error, ..
        } = self
        {
            *deleting = false;
            *error = Some(message);
        }
    }

    pub fn succeed(&mut self) {
        *self = DeleteFlow::Closed;
    }

    /// Dismiss the dialog from any state, discarding the target and error.
    pub fn cancel(&mut self) {
        *self = DeleteFlow::Closed;
    }

    pub fn target(&self) -> Option<&T> {
        match self {
            DeleteFlow::Confirming { target, .. } => Some(target),
            DeleteFlow::Closed => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DeleteFlow::Confirming { error, .. } => error.as_deref(),
            DeleteFlow::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DeleteFlow::Confirming { .. })
    }

    pub fn is_deleting(&self) -> bool {
        matches!(self, DeleteFlow::Confirming { deleting: true, .. })
    }

    pub fn can_confirm(&self) -> bool {
        matches!(
            self,
            DeleteFlow::Confirming {
                deleting: false,
                error: None,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_from_closed_is_a_no_op() {
        let mut flow: DeleteFlow<u32> = DeleteFlow::Closed;
        assert_eq!(flow.begin(), None);
        assert_eq!(flow, DeleteFlow::Closed);
    }

    #[test]
    fn happy_path() {
        let mut flow = DeleteFlow::Closed;
        assert!(flow.request(7));
        assert!(flow.can_confirm());
        assert_eq!(flow.begin(), Some(7));
        assert!(flow.is_deleting());
        // re-entrant confirm while the request is in flight is rejected
        assert_eq!(flow.begin(), None);
        flow.succeed();
        assert_eq!(flow, DeleteFlow::Closed);
    }

    #[test]
    fn error_blocks_retry_until_reopened() {
        let mut flow = DeleteFlow::Closed;
        flow.request("SUV");
        flow.begin();
        flow.fail("3 cars still use this type".to_string());

        assert!(flow.is_open());
        assert_eq!(flow.error(), Some("3 cars still use this type"));
        assert!(!flow.can_confirm());
        assert_eq!(flow.begin(), None);

        flow.cancel();
        assert_eq!(flow, DeleteFlow::Closed);
        assert!(flow.request("SUV"));
        assert!(flow.can_confirm());
    }

    #[test]
    fn request_while_open_is_ignored() {
        let mut flow = DeleteFlow::Closed;
        assert!(flow.request(1));
        assert!(!flow.request(2));
        assert_eq!(flow.target(), Some(&1));
    }

    #[test]
    fn cancel_discards_transient_state() {
        let mut flow = DeleteFlow::Closed;
        flow.request(5);
        flow.cancel();
        assert_eq!(flow.target(), None);
        assert_eq!(flow.error(), None);
    }
}
