// Debounced value propagation for the filter input

use std::time::Duration;

use tokio::sync::watch;
use tokio::time;

/// Create a debounced single-producer, single-consumer value channel.
///
/// The receiver only observes a value once the sender has left it
/// untouched for `delay`; every intermediate value of a rapid burst is
/// discarded. Sending again before the quiet period elapses cancels the
/// pending emission and restarts the timer.
pub fn channel<T>(delay: Duration, initial: T) -> (Sender<T>, Receiver<T>) {
    let (tx, rx) = watch::channel(initial);
    (Sender { tx }, Receiver { rx, delay })
}

/// Producing half of a debounced channel
pub struct Sender<T> {
    tx: watch::Sender<T>,
}

impl<T> Sender<T> {
    /// Push a new value, replacing any value still waiting out its quiet
    /// period. Returns `false` when the receiver is gone.
    pub fn send(&self, value: T) -> bool {
        self.tx.send(value).is_ok()
    }
}

/// Consuming half of a debounced channel
pub struct Receiver<T> {
    rx: watch::Receiver<T>,
    delay: Duration,
}

impl<T: Clone> Receiver<T> {
    /// Wait for the next value that has been stable for the configured
    /// delay. Returns `None` when the sender was dropped without ever
    /// sending.
    pub async fn settled(&mut self) -> Option<T> {
        self.rx.changed().await.ok()?;

        loop {
            let timer = time::sleep(self.delay);
            tokio::pin!(timer);

            tokio::select! {
                _ = &mut timer => {
                    return Some(self.rx.borrow_and_update().clone());
                }
                changed = self.rx.changed() => {
                    if changed.is_err() {
                        // Sender is gone; the current value is final once the
                        // quiet period runs out.
                        timer.as_mut().await;
                        return Some(self.rx.borrow_and_update().clone());
                    }
                    // New value arrived: fall through and restart the timer.
                }
            }
        }
    }
}
