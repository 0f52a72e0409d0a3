//! Cross-thread wakeup channel interrupting the backend's bounded event wait.
//!
//! The handle side is clonable and may be written from any thread; the
//! receiver side lives with the backend and is read and drained only on the
//! rendering thread. This is the sole cross-thread primitive in the driver.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

/// Write-only side of the wakeup channel.
#[derive(Clone, Debug)]
pub struct WakeupHandle {
    tx: Sender<()>,
}

impl WakeupHandle {
    /// Force the rendering thread out of its event wait. Never blocks;
    /// a disconnected receiver is silently ignored during teardown.
    pub fn wake(&self) {
        let _ = self.tx.send(());
    }
}

/// Read-and-drain side, owned by the backend on the rendering thread.
#[derive(Debug)]
pub struct WakeupReceiver {
    rx: Receiver<()>,
}

impl WakeupReceiver {
    /// Block for up to `timeout` or until a wakeup arrives. Returns whether
    /// a wakeup was pending; pending signals stay queued for [`drain`].
    ///
    /// [`drain`]: Self::drain
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(()) => true,
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => false,
        }
    }

    /// Consume one queued wakeup signal, if any.
    pub fn signaled(&self) -> bool {
        match self.rx.try_recv() {
            Ok(()) => true,
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => false,
        }
    }

    /// Discard every queued wakeup signal.
    pub fn drain(&self) {
        while self.rx.try_recv().is_ok() {}
    }
}

/// Create a connected wakeup pair.
pub fn wakeup_channel() -> (WakeupHandle, WakeupReceiver) {
    let (tx, rx) = mpsc::channel();
    (WakeupHandle { tx }, WakeupReceiver { rx })
}
