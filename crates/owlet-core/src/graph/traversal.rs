//! Bounded typed BFS over the ontology graph.
//!
//! `find_path` answers "can I reach `target` from `start` along edges of
//! the right type?" under open-world semantics: exhausting the reachable
//! subgraph yields `DONT_KNOW`, never `NO`. The only non-reflexive `NO`
//! comes from a `MUTUALLY_EXCLUSIVE` edge pointing at the target.

use super::edge::EdgeType;
use super::store::GraphStore;
use crate::answer::{QueryMetrics, QuestionResult};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default bound on graph hops.
pub const DEFAULT_MAX_DEPTH: u32 = 64;

/// Default wall-clock bound per traversal.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Clonable cancellation handle.
///
/// Cancelling is a one-way latch: every context holding a clone of the flag
/// observes it on its next loop turn and winds down with `DONT_KNOW`.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Creates a new, un-cancelled flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// True once `cancel` has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Per-request traversal bounds.
///
/// Each query owns its context; nothing here is shared across queries.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    /// Maximum number of graph hops before giving up.
    pub max_depth: u32,
    /// Wall-clock budget per traversal.
    pub timeout: Duration,
    /// Correlation id of the originating request.
    pub request_id: String,
    cancel: Option<CancelFlag>,
}

impl ExecutionContext {
    /// Creates a context with explicit bounds.
    #[must_use]
    pub fn new(max_depth: u32, timeout: Duration, request_id: impl Into<String>) -> Self {
        Self {
            max_depth,
            timeout,
            request_id: request_id.into(),
            cancel: None,
        }
    }

    /// Attaches a cancellation flag (builder pattern).
    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// True once the attached flag, if any, has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled)
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH, DEFAULT_TIMEOUT, String::new())
    }
}

fn elapsed_ms(since: Instant) -> f64 {
    since.elapsed().as_secs_f64() * 1000.0
}

/// Searches for `target` from `start` along typed edges, breadth-first.
///
/// The rules, in order per dequeued node:
///
/// 1. `start == target` short-circuits before any traversal: `YES` for
///    `SubclassOf` (a class is its own subclass), `NO` otherwise (an
///    instance is not its own instance, an entity is not its own
///    attribute).
/// 2. Depth, timeout, and cancellation bounds cut the walk short with
///    `DONT_KNOW`.
/// 3. Any `MUTUALLY_EXCLUSIVE` edge from the current node to the target is
///    a definitive `NO`.
/// 4. Edge filter: the first dequeued node of an `InstanceOf` query expands
///    only `InstanceOf` edges; every other expansion follows `SubclassOf`
///    edges. "Is an instance" is one membership hop followed by a climb of
///    the class hierarchy.
///
/// `entities_visited` counts dequeue events. `depth_reached` is the last
/// dequeued depth when the walk was cut short, or `ctx.max_depth` when the
/// queue drained without a verdict.
#[must_use]
pub fn find_path(
    store: &GraphStore,
    start: &str,
    target: &str,
    edge_type: EdgeType,
    ctx: &ExecutionContext,
) -> (QuestionResult, QueryMetrics) {
    let started = Instant::now();

    if start == target {
        let result = if edge_type == EdgeType::SubclassOf {
            QuestionResult::Yes
        } else {
            QuestionResult::No
        };
        return (result, QueryMetrics::default());
    }

    let (Some(start_id), Some(target_id)) = (store.resolve(start), store.resolve(target)) else {
        // Callers validate entities first; an unknown endpoint here is
        // still open-world ignorance, not a refutation.
        return (QuestionResult::DontKnow, QueryMetrics::default());
    };

    let mut queue = VecDeque::from([(start_id, 0u32)]);
    let mut visited = FxHashSet::from_iter([start_id]);
    let mut entities_visited = 0u64;
    let mut first_iteration = true;
    let mut last_depth = 0u32;

    while let Some((current, depth)) = queue.pop_front() {
        entities_visited += 1;
        last_depth = depth;

        if depth > ctx.max_depth {
            tracing::trace!(request_id = %ctx.request_id, depth, "depth cap reached");
            break;
        }
        if started.elapsed() > ctx.timeout || ctx.is_cancelled() {
            tracing::trace!(request_id = %ctx.request_id, depth, "traversal cut short");
            break;
        }

        let slots = store.outgoing_slots(current);

        if slots.iter().any(|&slot| {
            let record = store.record(slot);
            record.edge_type == EdgeType::MutuallyExclusive && record.tail == target_id
        }) {
            let metrics = QueryMetrics {
                execution_time_ms: elapsed_ms(started),
                entities_visited,
                cache_hit: false,
                depth_reached: depth,
            };
            return (QuestionResult::No, metrics);
        }

        let wanted = if first_iteration && edge_type == EdgeType::InstanceOf {
            EdgeType::InstanceOf
        } else {
            EdgeType::SubclassOf
        };
        first_iteration = false;

        for &slot in slots {
            let record = store.record(slot);
            if record.edge_type != wanted {
                continue;
            }
            if record.tail == target_id {
                let metrics = QueryMetrics {
                    execution_time_ms: elapsed_ms(started),
                    entities_visited,
                    cache_hit: false,
                    depth_reached: depth,
                };
                return (QuestionResult::Yes, metrics);
            }
            if visited.insert(record.tail) {
                queue.push_back((record.tail, depth + 1));
            }
        }
    }

    let metrics = QueryMetrics {
        execution_time_ms: elapsed_ms(started),
        entities_visited,
        cache_hit: false,
        depth_reached: if queue.is_empty() {
            ctx.max_depth
        } else {
            last_depth
        },
    };
    (QuestionResult::DontKnow, metrics)
}
