use serde::{Deserialize, Serialize};

/// Where the album fetch currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RequestStatus {
    /// Nothing has been requested yet, or the last request was abandoned.
    #[default]
    Idle,
    /// A fetch is in flight.
    Pending,
    /// The last fetch succeeded.
    Fulfilled,
    /// The last fetch failed with this message.
    Failed(String),
}
impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Idle => "idle",
            RequestStatus::Pending => "pending",
            RequestStatus::Fulfilled => "fulfilled",
            RequestStatus::Failed(_) => "failed",
        }
    }
}
impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Failed(message) => write!(f, "failed: {message}"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Identifies one call to [`RequestLifecycle::start_fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

/// Tracks the single album fetch a view may have in flight.
///
/// `idle -> pending -> fulfilled | failed`, and back to `pending` on the next
/// fetch. Starting a fetch while one is pending is a no-op, so concurrent
/// requests collapse into the one already running. A completion is only
/// accepted for the request currently in flight; anything else is stale.
#[derive(Debug, Default)]
pub struct RequestLifecycle {
    status: RequestStatus,
    request_counter: u64,
    in_flight: Option<RequestId>,
}
impl RequestLifecycle {
    /// Move to `pending` and return the new request's ID, or `None` if a
    /// request is already pending.
    pub fn start_fetch(&mut self) -> Option<RequestId> {
        if self.in_flight.is_some() {
            return None;
        }
        self.request_counter = self.request_counter.wrapping_add(1);
        let id = RequestId(self.request_counter);
        self.in_flight = Some(id);
        self.status = RequestStatus::Pending;
        Some(id)
    }

    /// Settle request `id` successfully. Returns `false`, changing nothing,
    /// if `id` is not the request in flight.
    pub fn succeed(&mut self, id: RequestId) -> bool {
        if !self.settle(id) {
            return false;
        }
        self.status = RequestStatus::Fulfilled;
        true
    }

    /// Settle request `id` with an error. Returns `false`, changing nothing,
    /// if `id` is not the request in flight.
    pub fn fail(&mut self, id: RequestId, message: impl Into<String>) -> bool {
        if !self.settle(id) {
            return false;
        }
        self.status = RequestStatus::Failed(message.into());
        true
    }

    /// Stop waiting for the request in flight and go back to `idle`.
    /// Its result will be treated as stale when it arrives.
    pub fn abandon(&mut self) -> Option<RequestId> {
        let abandoned = self.in_flight.take()?;
        self.status = RequestStatus::Idle;
        Some(abandoned)
    }

    /// Abandon request `id` if it is still the one in flight. Returns
    /// whether anything changed.
    pub fn abandon_request(&mut self, id: RequestId) -> bool {
        if !self.settle(id) {
            return false;
        }
        self.status = RequestStatus::Idle;
        true
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn is_idle(&self) -> bool {
        self.status == RequestStatus::Idle
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    pub fn is_fulfilled(&self) -> bool {
        self.status == RequestStatus::Fulfilled
    }

    /// The error message of the last failed fetch, while it is the latest outcome.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            RequestStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    fn settle(&mut self, id: RequestId) -> bool {
        if self.in_flight != Some(id) {
            return false;
        }
        self.in_flight = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let lifecycle = RequestLifecycle::default();
        assert!(lifecycle.is_idle());
        assert_eq!(lifecycle.error(), None);
    }

    #[test]
    fn pending_start_is_ignored() {
        let mut lifecycle = RequestLifecycle::default();
        let id = lifecycle.start_fetch().unwrap();
        assert!(lifecycle.is_pending());
        assert_eq!(lifecycle.start_fetch(), None);
        assert!(lifecycle.succeed(id));
        assert!(lifecycle.is_fulfilled());
    }

    #[test]
    fn failure_records_message_and_success_clears_it() {
        let mut lifecycle = RequestLifecycle::default();
        let id = lifecycle.start_fetch().unwrap();
        assert!(lifecycle.fail(id, "network error"));
        assert_eq!(
            lifecycle.status(),
            &RequestStatus::Failed("network error".to_string())
        );
        assert_eq!(lifecycle.error(), Some("network error"));

        let id = lifecycle.start_fetch().unwrap();
        assert!(lifecycle.is_pending());
        assert_eq!(lifecycle.error(), None);
        assert!(lifecycle.succeed(id));
        assert_eq!(lifecycle.error(), None);
    }

    #[test]
    fn ids_increase() {
        let mut lifecycle = RequestLifecycle::default();
        let first = lifecycle.start_fetch().unwrap();
        lifecycle.succeed(first);
        let second = lifecycle.start_fetch().unwrap();
        assert!(second > first);
    }

    #[test]
    fn abandoned_request_is_stale() {
        let mut lifecycle = RequestLifecycle::default();
        let old = lifecycle.start_fetch().unwrap();
        assert_eq!(lifecycle.abandon(), Some(old));
        assert!(lifecycle.is_idle());

        assert!(!lifecycle.succeed(old));
        assert!(!lifecycle.fail(old, "late"));
        assert!(lifecycle.is_idle());

        let new = lifecycle.start_fetch().unwrap();
        assert!(!lifecycle.succeed(old));
        assert!(lifecycle.is_pending());
        assert!(lifecycle.succeed(new));
    }

    #[test]
    fn settling_twice_is_rejected() {
        let mut lifecycle = RequestLifecycle::default();
        let id = lifecycle.start_fetch().unwrap();
        assert!(lifecycle.succeed(id));
        assert!(!lifecycle.fail(id, "again"));
        assert!(lifecycle.is_fulfilled());
    }

    #[test]
    fn abandon_when_idle_is_noop() {
        let mut lifecycle = RequestLifecycle::default();
        assert_eq!(lifecycle.abandon(), None);
        assert!(lifecycle.is_idle());
    }

    #[test]
    fn abandon_request_only_touches_its_own_request() {
        let mut lifecycle = RequestLifecycle::default();
        let old = lifecycle.start_fetch().unwrap();
        assert!(lifecycle.abandon_request(old));
        assert!(lifecycle.is_idle());
        assert!(!lifecycle.abandon_request(old));

        let new = lifecycle.start_fetch().unwrap();
        assert!(!lifecycle.abandon_request(old));
        assert!(lifecycle.is_pending());
        assert!(lifecycle.succeed(new));
        assert!(!lifecycle.abandon_request(new));
        assert!(lifecycle.is_fulfilled());
    }

    #[test]
    fn display() {
        assert_eq!(RequestStatus::Pending.to_string(), "pending");
        assert_eq!(
            RequestStatus::Failed("boom".to_string()).to_string(),
            "failed: boom"
        );
    }
}
