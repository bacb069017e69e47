//! Pending derivation tree
//!
//! Every `with_name`/`with_values` call against an unfulfilled
//! [`DelegatingSink`] records a [`Promise`] under the receiver's own
//! promise. Fulfillment walks the tree depth-first from the root, replays
//! each recorded derivation against the real backend and installs the
//! result into the paired sink.

use super::delegating::DelegatingSink;
use super::field::KeyValue;
use super::sink::SinkRef;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

/// The derivation a promise replays once a backend is available
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Derivation {
    /// Root of a tree: the backend is installed as-is
    Root,
    Name(String),
    Values(Vec<KeyValue>),
}

/// Children of one promise, plus the length at which abandoned leaves are
/// next swept out.
struct Children {
    nodes: Vec<Arc<Promise>>,
    prune_at: usize,
}

const MIN_PRUNE_AT: usize = 32;

/// One recorded derivation and the derivations made from its sink.
///
/// A sink that is dropped while still pending marks its promise abandoned.
/// Abandoned promises without children are swept from their parent's list
/// as it grows, so a pending root that keeps handing out short-lived
/// children (for example `log().with_values(..)` per request before any
/// backend is installed) does not accumulate them. Abandoned promises that
/// still have children are kept so those children can be fulfilled.
pub(crate) struct Promise {
    /// Not upgraded if every handle to the sink has been dropped; the
    /// subtree below is still fulfilled.
    target: Weak<DelegatingSink>,
    derivation: Derivation,
    /// Append-only until this node is fulfilled, apart from sweeping
    children: Mutex<Children>,
    claimed: AtomicBool,
    abandoned: AtomicBool,
}

impl Promise {
    pub(crate) fn root(target: Weak<DelegatingSink>) -> Arc<Self> {
        Arc::new(Self::new(target, Derivation::Root))
    }

    fn new(target: Weak<DelegatingSink>, derivation: Derivation) -> Self {
        Self {
            target,
            derivation,
            children: Mutex::new(Children {
                nodes: Vec::new(),
                prune_at: MIN_PRUNE_AT,
            }),
            claimed: AtomicBool::new(false),
            abandoned: AtomicBool::new(false),
        }
    }

    /// Record a pending name derivation populating `target`
    pub(crate) fn with_name(&self, target: Weak<DelegatingSink>, name: &str) -> Arc<Promise> {
        self.push_child(target, Derivation::Name(name.to_string()))
    }

    /// Record a pending values derivation populating `target`
    pub(crate) fn with_values(&self, target: Weak<DelegatingSink>, pairs: &[KeyValue]) -> Arc<Promise> {
        self.push_child(target, Derivation::Values(pairs.to_vec()))
    }

    fn push_child(&self, target: Weak<DelegatingSink>, derivation: Derivation) -> Arc<Promise> {
        let child = Arc::new(Self::new(target, derivation));
        let mut children = self.children.lock();
        if children.nodes.len() >= children.prune_at {
            children.nodes.retain(|node| !node.is_dead_leaf());
            children.prune_at = (children.nodes.len() * 2).max(MIN_PRUNE_AT);
        }
        children.nodes.push(Arc::clone(&child));
        child
    }

    /// Called when the paired sink is dropped before fulfillment
    pub(crate) fn abandon(&self) {
        self.abandoned.store(true, Ordering::Release);
    }

    /// No sink can observe this node and nothing hangs below it.
    ///
    /// Once abandoned, no derivation can reach this node again, so an empty
    /// child list stays empty.
    fn is_dead_leaf(&self) -> bool {
        self.abandoned.load(Ordering::Acquire) && self.children.lock().nodes.is_empty()
    }

    /// Mark this promise as being fulfilled.
    ///
    /// Returns `false` if another caller already claimed it.
    pub(crate) fn claim(&self) -> bool {
        self.claimed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    fn apply(&self, parent: &SinkRef) -> SinkRef {
        match &self.derivation {
            Derivation::Root => Arc::clone(parent),
            Derivation::Name(name) => parent.with_name(name),
            Derivation::Values(pairs) => parent.with_values(pairs),
        }
    }

    /// Replay the derivations of this subtree on `parent`, parents before
    /// children and children in the order they were derived.
    ///
    /// Each node's sink is switched over before its child list is read, and
    /// children are registered while their parent's read lock is held, so a
    /// derivation that observed a node as pending is always in the list read
    /// for it. Walks with an explicit stack; chains may be arbitrarily deep.
    pub(crate) fn fulfill(self: &Arc<Self>, parent: &SinkRef) {
        let mut stack = vec![(Arc::clone(self), Arc::clone(parent))];
        while let Some((promise, parent)) = stack.pop() {
            let sink = promise.apply(&parent);

            if let Some(target) = promise.target.upgrade() {
                target.install(Arc::clone(&sink));
            }

            let children = promise.children.lock().nodes.clone();
            stack.extend(children.into_iter().rev().map(|child| (child, Arc::clone(&sink))));
        }
    }

    #[cfg(test)]
    pub(crate) fn derivation(&self) -> &Derivation {
        &self.derivation
    }

    #[cfg(test)]
    pub(crate) fn child_count(&self) -> usize {
        self.children.lock().nodes.len()
    }

    #[cfg(test)]
    pub(crate) fn child_target(&self, index: usize) -> Option<Arc<DelegatingSink>> {
        self.children.lock().nodes.get(index)?.target.upgrade()
    }
}

impl Drop for Promise {
    // Unlinks descendants one at a time instead of letting each node's
    // drop recurse into the next.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children.get_mut().nodes);
        while let Some(child) = pending.pop() {
            if let Some(mut child) = Arc::into_inner(child) {
                pending.append(&mut child.children.get_mut().nodes);
            }
        }
    }
}
