use crate::{ModelConfig, QueryPlan, QuerySplittingBehavior};

/// Output of the shape classification pass, computed before the compilation
/// context is finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// A step of the plan must be enumerated into memory no matter what the
    /// backend is capable of.
    pub base_is_buffering: bool,
    /// Always resolved, never `Unspecified`.
    pub splitting: QuerySplittingBehavior,
}

/// Classify a plan ahead of context construction.
///
/// Conservative on purpose: a plan that physically contains dependent
/// statements is reported as `SplitQuery` even against an explicit
/// `SingleQuery` request, and any client evaluated step forces buffering.
/// Under-reporting either one turns into an execution fault once the second
/// statement hits the connection; over-reporting only costs memory.
pub fn classify(
    plan: &QueryPlan,
    requested: QuerySplittingBehavior,
    model: &ModelConfig,
) -> Classification {
    let splitting = if plan.is_split() {
        QuerySplittingBehavior::SplitQuery
    } else {
        requested
            .or(model.splitting_default())
            .or(QuerySplittingBehavior::SingleQuery)
    };
    if plan.is_split() && requested == QuerySplittingBehavior::SingleQuery {
        log::warn!(
            "The plan contains {} dependent statements, classifying as {} despite the request",
            plan.statements().len() - 1,
            splitting,
        );
    }
    Classification {
        base_is_buffering: plan.requires_client_eval(),
        splitting,
    }
}
