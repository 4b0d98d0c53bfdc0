//! Cancellation scope for runtime-spawned effect futures.

use std::{cell::RefCell, collections::HashMap, future::Future, rc::Rc};

use futures::future::{AbortHandle, Abortable};

#[derive(Default)]
struct ScopeState {
    next_id: u64,
    handles: HashMap<u64, AbortHandle>,
    cancelled: bool,
}

#[derive(Clone, Default)]
/// Tracks in-flight effect futures so they can be aborted together when the runtime unmounts.
///
/// An aborted future is dropped at its next poll, so nothing it would have dispatched afterwards
/// reaches the view. Futures tracked after [`TaskScope::cancel_all`] never run.
pub struct TaskScope {
    inner: Rc<RefCell<ScopeState>>,
}

impl TaskScope {
    /// Wraps `future` so it resolves to `None` if the scope is cancelled first.
    pub fn track<F>(&self, future: F) -> impl Future<Output = Option<F::Output>>
    where
        F: Future,
    {
        let (handle, registration) = AbortHandle::new_pair();
        let id = {
            let mut scope = self.inner.borrow_mut();
            if scope.cancelled {
                handle.abort();
            }
            let id = scope.next_id;
            scope.next_id += 1;
            scope.handles.insert(id, handle);
            id
        };

        let inner = self.inner.clone();
        async move {
            let outcome = Abortable::new(future, registration).await.ok();
            inner.borrow_mut().handles.remove(&id);
            outcome
        }
    }

    /// Aborts every tracked future and marks the scope closed.
    pub fn cancel_all(&self) {
        let handles: Vec<AbortHandle> = {
            let mut scope = self.inner.borrow_mut();
            scope.cancelled = true;
            scope.handles.drain().map(|(_, handle)| handle).collect()
        };
        for handle in handles {
            handle.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.borrow().cancelled
    }

    /// Number of tracked futures that have not finished yet.
    pub fn in_flight(&self) -> usize {
        self.inner.borrow().handles.len()
    }
}
