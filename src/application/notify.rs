//! Notify use case

use crate::domain::notification::{
    AuthorizationOptions, AuthorizationStatus, NotificationRequest, CLEAR_DELAY,
};

use super::ports::{NotificationCenter, NotificationError};

/// Input parameters for the notify use case
#[derive(Debug, Clone, Default)]
pub struct NotifyInput {
    /// The notification to deliver
    pub request: NotificationRequest,
    /// Only ask for permission, deliver nothing
    pub authorization_only: bool,
}

/// How a run of the notify flow ended.
/// Never affects the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// Authorization-only run finished
    AuthorizationRequested,
    /// Permission missing, nothing was submitted
    NotAuthorized(AuthorizationStatus),
    /// Notification delivered and later cleared
    Delivered,
    /// Submission failed, delivered notifications were still cleared
    SubmitFailed,
}

/// Callbacks for step reporting
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct NotifyCallbacks {
    /// Called with the answer to the authorization request
    pub on_authorization: Option<Box<dyn Fn(bool) + Send + Sync>>,
    /// Called with the queried authorization status
    pub on_status: Option<Box<dyn Fn(AuthorizationStatus) + Send + Sync>>,
    /// Called once the request was handed to the center
    pub on_submitted: Option<Box<dyn Fn(&NotificationRequest) + Send + Sync>>,
    /// Called for every swallowed error
    pub on_error: Option<Box<dyn Fn(&NotificationError) + Send + Sync>>,
    /// Called after delivered notifications were removed
    pub on_cleared: Option<Box<dyn Fn() + Send + Sync>>,
}

impl NotifyCallbacks {
    fn error(&self, err: &NotificationError) {
        if let Some(ref cb) = self.on_error {
            cb(err);
        }
    }
}

/// Request permission, show one notification, clear it after a delay
pub struct NotifyUseCase<N>
where
    N: NotificationCenter,
{
    center: N,
}

impl<N> NotifyUseCase<N>
where
    N: NotificationCenter,
{
    /// Create a new use case instance
    pub fn new(center: N) -> Self {
        Self { center }
    }

    /// Execute the notify workflow. Every failure is absorbed.
    pub async fn execute(&self, input: NotifyInput, callbacks: NotifyCallbacks) -> NotifyOutcome {
        match self
            .center
            .request_authorization(AuthorizationOptions::alert_and_sound())
            .await
        {
            Ok(granted) => {
                if let Some(ref cb) = callbacks.on_authorization {
                    cb(granted);
                }
            }
            Err(e) => callbacks.error(&e),
        }

        if input.authorization_only {
            return NotifyOutcome::AuthorizationRequested;
        }

        let status = self.center.authorization_status().await;
        if let Some(ref cb) = callbacks.on_status {
            cb(status);
        }
        if !status.is_authorized() {
            return NotifyOutcome::NotAuthorized(status);
        }

        let outcome = match self.center.add(&input.request).await {
            Ok(()) => {
                if let Some(ref cb) = callbacks.on_submitted {
                    cb(&input.request);
                }
                NotifyOutcome::Delivered
            }
            Err(e) => {
                callbacks.error(&e);
                NotifyOutcome::SubmitFailed
            }
        };

        tokio::time::sleep(CLEAR_DELAY).await;

        match self.center.remove_all_delivered().await {
            Ok(()) => {
                if let Some(ref cb) = callbacks.on_cleared {
                    cb();
                }
            }
            Err(e) => callbacks.error(&e),
        }

        outcome
    }
}
