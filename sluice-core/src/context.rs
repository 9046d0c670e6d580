use crate::{Capabilities, Error, QuerySplittingBehavior, Result};

/// The per-compilation decision state of one compiled query.
///
/// Built once per distinct query shape, immutable afterwards, owned by the
/// cache entry that holds the compiled plan. Every execution of that plan
/// reads the frozen flags without locking; when a capability fact changes, a
/// new context is compiled instead of revising this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilationContext {
    is_async: bool,
    splitting: QuerySplittingBehavior,
    is_buffering: bool,
    precompiled_queries: bool,
}

impl CompilationContext {
    /// Combine the classifier output with the backend capabilities.
    ///
    /// `splitting` must already be resolved: receiving `Unspecified` here is a
    /// contract violation and fails instead of silently defaulting.
    pub fn new(
        is_async: bool,
        base_is_buffering: bool,
        splitting: QuerySplittingBehavior,
        capabilities: Capabilities,
    ) -> Result<Self> {
        if !splitting.is_resolved() {
            return Err(Error::msg(
                "Cannot build a compilation context out of an unresolved splitting behavior",
            ));
        }
        Ok(Self {
            is_async,
            splitting,
            is_buffering: base_is_buffering
                || (splitting == QuerySplittingBehavior::SplitQuery
                    && !capabilities.multiple_active_result_sets()),
            precompiled_queries: capabilities.precompiled_queries(),
        })
    }

    /// Execution mode the query was compiled for.
    pub fn is_async(&self) -> bool {
        self.is_async
    }

    pub fn splitting(&self) -> QuerySplittingBehavior {
        self.splitting
    }

    /// Whether every result set must be fully drained before the next
    /// dependent statement may run.
    ///
    /// Monotonic: a base reason to buffer is never suppressed by the splitting
    /// behavior or by the backend capabilities, they can only add to it.
    pub fn is_buffering(&self) -> bool {
        self.is_buffering
    }

    pub fn supports_precompiled_query(&self) -> bool {
        self.precompiled_queries
    }
}
