//! Body-level click listeners.
//!
//! Components that react to clicks anywhere on the page subscribe here. The
//! returned [`ClickSubscription`] removes the listener when dropped, so a
//! component that goes away never leaves a handler behind.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Identifier of a mounted search container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(pub u64);

/// Where a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Inside the given search container.
    SearchContainer(ContainerId),
    /// Anywhere else on the page.
    Elsewhere,
}

/// A click on the page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    pub target: ClickTarget,
}

impl ClickEvent {
    pub fn inside(container: ContainerId) -> Self {
        Self {
            target: ClickTarget::SearchContainer(container),
        }
    }

    pub fn outside() -> Self {
        Self {
            target: ClickTarget::Elsewhere,
        }
    }

    /// True if the click landed inside `container`.
    pub fn is_inside(&self, container: ContainerId) -> bool {
        self.target == ClickTarget::SearchContainer(container)
    }
}

type Handler = Arc<dyn Fn(&ClickEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    handlers: Mutex<BTreeMap<u64, Handler>>,
    next_id: AtomicU64,
}

impl Registry {
    fn handlers(&self) -> MutexGuard<'_, BTreeMap<u64, Handler>> {
        self.handlers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Shared set of body click listeners.
#[derive(Clone, Default)]
pub struct ClickListeners {
    registry: Arc<Registry>,
}

impl std::fmt::Debug for ClickListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickListeners")
            .field("listeners", &self.len())
            .finish()
    }
}

impl ClickListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for the lifetime of the returned subscription.
    pub fn subscribe<F>(&self, handler: F) -> ClickSubscription
    where
        F: Fn(&ClickEvent) + Send + Sync + 'static,
    {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        self.registry.handlers().insert(id, Arc::new(handler));
        tracing::trace!(listener = id, "click listener attached");

        ClickSubscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver a click to every listener.
    pub fn dispatch(&self, event: &ClickEvent) {
        // Handlers run outside the lock so they may subscribe or unsubscribe.
        let handlers: Vec<Handler> = self.registry.handlers().values().cloned().collect();
        for handler in handlers {
            handler(event);
        }
    }

    /// Number of attached listeners.
    pub fn len(&self) -> usize {
        self.registry.handlers().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keeps a click listener attached until dropped.
#[derive(Debug)]
pub struct ClickSubscription {
    id: u64,
    registry: Weak<Registry>,
}

impl ClickSubscription {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for ClickSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.handlers().remove(&self.id);
            tracing::trace!(listener = self.id, "click listener detached");
        }
    }
}
