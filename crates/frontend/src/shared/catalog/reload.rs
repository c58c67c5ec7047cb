/// Request-generation guard against the stale-response race.
///
/// Rapid filter edits can issue overlapping searches that resolve out of
/// order. Each reload takes a token from `issue()`; a response is applied
/// only while its token is still the latest, so earlier requests that
/// resolve late are discarded deterministically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReloadToken {
    latest: u64,
}

impl ReloadToken {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_issue_invalidates_older_tokens() {
        let mut guard = ReloadToken::default();
        let first = guard.issue();
        let second = guard.issue();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn token_stays_current_until_the_next_issue() {
        let mut guard = ReloadToken::default();
        let token = guard.issue();
        assert!(guard.is_current(token));
        assert!(guard.is_current(token));
        guard.issue();
        assert!(!guard.is_current(token));
    }
}
