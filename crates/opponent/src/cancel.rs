//! Cancellation for in-flight move requests.

use std::sync::Arc;

use tokio::sync::watch;

/// Shared stop switch for one move request.
///
/// Cheap to clone; every clone controls the same request. Cancelling is
/// idempotent.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    stop: Arc<watch::Sender<bool>>,
}

impl CancelHandle {
    pub(crate) fn new() -> Self {
        let (stop, _) = watch::channel(false);
        Self { stop: Arc::new(stop) }
    }

    pub fn cancel(&self) {
        self.stop.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.stop.borrow()
    }

    pub(crate) fn signal(&self) -> CancelSignal {
        CancelSignal {
            stop: self.stop.subscribe(),
        }
    }
}

/// Receiving side, owned by the delay task.
pub(crate) struct CancelSignal {
    stop: watch::Receiver<bool>,
}

impl CancelSignal {
    /// Completes once the request is cancelled or every handle is gone.
    pub(crate) async fn cancelled(mut self) {
        let _ = self.stop.wait_for(|&stop| stop).await;
    }
}

#[cfg(test)]
#[path = "cancel_tests.rs"]
mod cancel_tests;
