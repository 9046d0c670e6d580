/// Immutable backend facts consulted by the buffering decision.
///
/// Resolved once when the connection is established and treated as read-only
/// configuration afterwards. When the facts change (for example a different
/// connection URL), a new descriptor is built and queries are recompiled
/// against it instead of mutating anything in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    multiple_active_result_sets: bool,
    precompiled_queries: bool,
}

impl Capabilities {
    pub const fn new(multiple_active_result_sets: bool, precompiled_queries: bool) -> Self {
        Self {
            multiple_active_result_sets,
            precompiled_queries,
        }
    }

    /// Whether the backend can keep more than one result set open on the same
    /// connection and iterate them interleaved.
    pub const fn multiple_active_result_sets(&self) -> bool {
        self.multiple_active_result_sets
    }

    /// Whether the backend can execute queries compiled ahead of time.
    pub const fn precompiled_queries(&self) -> bool {
        self.precompiled_queries
    }
}
