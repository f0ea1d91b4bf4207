use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use taskbot::errors::{Result, TaskbotError};
use taskbot::notify::Notifier;

/// A fake notifier that:
/// - records every message it is asked to send
/// - optionally fails, either always or starting from the n-th message
/// - optionally takes a while to "deliver", like a slow Bot API.
#[derive(Debug, Clone, Default)]
pub struct FakeNotifier {
    sent: Arc<Mutex<Vec<String>>>,
    fail_from: Option<usize>,
    latency: Option<Duration>,
}

impl FakeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every message fails to deliver (and is not recorded).
    pub fn failing() -> Self {
        Self::failing_from(0)
    }

    /// Messages with index `>= n` fail to deliver.
    pub fn failing_from(n: usize) -> Self {
        Self {
            fail_from: Some(n),
            ..Self::default()
        }
    }

    /// Each delivery sleeps for `latency` first.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Messages successfully "delivered", in order.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

impl Notifier for FakeNotifier {
    fn notify<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            if let Some(latency) = self.latency {
                tokio::time::sleep(latency).await;
            }

            let mut guard = self.sent.lock().unwrap();
            if let Some(n) = self.fail_from {
                if guard.len() >= n {
                    return Err(TaskbotError::Delivery("fake delivery failure".to_string()));
                }
            }
            guard.push(text.to_string());
            Ok(())
        })
    }
}
