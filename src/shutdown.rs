// src/shutdown.rs

//! Shutdown requests as a flag the monitor can both await and inspect.
//!
//! The Ctrl-C listener is registered synchronously by
//! [`listen_for_ctrl_c`], so a Ctrl-C that arrives while the task is being
//! spawned or the start message is in flight is not lost.

use tokio::sync::watch;
use tracing::info;

/// Receiving side: cheap to clone, starts out "not requested".
#[derive(Debug, Clone)]
pub struct Shutdown {
    rx: watch::Receiver<bool>,
}

/// Sending side.
#[derive(Debug)]
pub struct ShutdownTrigger {
    tx: watch::Sender<bool>,
}

/// Create a linked trigger/flag pair.
pub fn channel() -> (ShutdownTrigger, Shutdown) {
    let (tx, rx) = watch::channel(false);
    (ShutdownTrigger { tx }, Shutdown { rx })
}

impl ShutdownTrigger {
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

impl Shutdown {
    /// A flag that is never raised.
    pub fn never() -> Self {
        channel().1
    }

    pub fn is_requested(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once shutdown has been requested (immediately if it already
    /// was). Never resolves if the trigger is gone without firing.
    pub async fn requested(&mut self) {
        if self.rx.wait_for(|requested| *requested).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

/// Install the Ctrl-C handler now and forward it into a [`Shutdown`] flag.
///
/// Once installed, Ctrl-C no longer terminates taskbot directly.
pub fn listen_for_ctrl_c() -> std::io::Result<Shutdown> {
    let (trigger, shutdown) = channel();

    #[cfg(unix)]
    let mut signal =
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())?;
    #[cfg(windows)]
    let mut signal = tokio::signal::windows::ctrl_c()?;

    tokio::spawn(async move {
        if signal.recv().await.is_some() {
            info!("Ctrl-C received; requesting shutdown");
            trigger.trigger();
        }
    });

    Ok(shutdown)
}
