//! Component-scoped async tasks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requests started by a page must not write into its state after the page
//! is torn down. A `TaskScope` is created in the component body, where the
//! reactive owner is current, and aborts every task it spawned when that
//! owner is cleaned up. Event handlers spawn through the scope because no
//! owner is current while they run.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use futures::future::{AbortHandle, Abortable};
use leptos::prelude::*;

/// Wrap `fut` so it can be cancelled; resolves to `None` once aborted.
pub fn abortable<F>(fut: F) -> (AbortHandle, impl Future<Output = Option<F::Output>>)
where
    F: Future,
{
    let (handle, registration) = AbortHandle::new_pair();
    let task = Abortable::new(fut, registration);
    (handle, async move { task.await.ok() })
}

#[derive(Debug, Default)]
struct Handles {
    next_id: u64,
    live: HashMap<u64, AbortHandle>,
}

/// Set of abortable tasks sharing one lifetime.
///
/// A task's handle is held only while the task is outstanding; it is dropped
/// as soon as the task resolves, so a long-lived page does not accumulate one
/// handle per submission.
#[derive(Clone, Debug, Default)]
pub struct TaskScope {
    handles: Arc<Mutex<Handles>>,
}

impl TaskScope {
    /// Scope bound to the current component; aborts its tasks on cleanup.
    pub fn for_component() -> Self {
        let scope = Self::default();
        let on_teardown = scope.clone();
        on_cleanup(move || on_teardown.abort_all());
        scope
    }

    /// Register `fut` with the scope without spawning it.
    pub fn track<F>(&self, fut: F) -> impl Future<Output = Option<F::Output>> + use<F>
    where
        F: Future,
    {
        let (handle, task) = abortable(fut);
        let id = self.handles.lock().ok().map(|mut h| {
            let id = h.next_id;
            h.next_id += 1;
            h.live.insert(id, handle);
            id
        });
        let handles = Arc::clone(&self.handles);
        async move {
            let output = task.await;
            if let (Some(id), Ok(mut h)) = (id, handles.lock()) {
                h.live.remove(&id);
            }
            output
        }
    }

    /// Number of tracked tasks that have not resolved yet.
    pub fn outstanding(&self) -> usize {
        self.handles.lock().map_or(0, |h| h.live.len())
    }

    /// Spawn `fut` on the local executor under this scope.
    pub fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let task = self.track(fut);
        leptos::task::spawn_local(async move {
            if task.await.is_none() {
                log::debug!("scoped task aborted on cleanup");
            }
        });
    }

    pub fn abort_all(&self) {
        if let Ok(mut h) = self.handles.lock() {
            for (_, handle) in h.live.drain() {
                handle.abort();
            }
        }
    }
}
