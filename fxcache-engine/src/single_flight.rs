//! Single-flight execution of an async operation.

use std::future::Future;
use std::sync::Mutex;

use tokio::sync::watch;

type Slot<T> = Mutex<Option<watch::Receiver<Option<T>>>>;

/// Guards an async operation so at most one execution is in flight.
///
/// The first caller (the leader) runs the operation. Callers that arrive
/// while it is running are handed the leader's result when it resolves,
/// instead of starting a duplicate. Once the leader finishes, the next
/// caller starts a fresh execution.
pub struct SingleFlight<T> {
    slot: Slot<T>,
}

enum Role<T> {
    Leader(watch::Sender<Option<T>>),
    Follower(watch::Receiver<Option<T>>),
}

/// Frees the slot even if the leader's future is dropped mid-run, so a
/// cancelled execution cannot wedge the guard.
struct ResetOnDrop<'a, T> {
    slot: &'a Slot<T>,
}

impl<T> Drop for ResetOnDrop<'_, T> {
    fn drop(&mut self) {
        *self.slot.lock().unwrap() = None;
    }
}

impl<T: Clone> SingleFlight<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Runs `op`, or adopts the result of an already-running execution.
    pub async fn run<F, Fut>(&self, op: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let role = {
            let mut slot = self.slot.lock().unwrap();
            match slot.as_ref() {
                Some(rx) => Role::Follower(rx.clone()),
                None => {
                    let (tx, rx) = watch::channel(None);
                    *slot = Some(rx);
                    Role::Leader(tx)
                }
            }
        };

        match role {
            Role::Leader(tx) => {
                let reset = ResetOnDrop { slot: &self.slot };
                let value = op().await;
                drop(reset);
                let _ = tx.send(Some(value.clone()));
                value
            }
            Role::Follower(mut rx) => {
                let adopted = match rx.wait_for(|result| result.is_some()).await {
                    Ok(result) => (*result).clone(),
                    Err(_) => None,
                };
                match adopted {
                    Some(value) => value,
                    // The leader was dropped before publishing; run our own.
                    None => op().await,
                }
            }
        }
    }
}

impl<T: Clone> Default for SingleFlight<T> {
    fn default() -> Self {
        Self::new()
    }
}
