use crate::{
    Capabilities, CompilationContext, Error, ModelConfig, QueryPlan, QuerySplittingBehavior,
    Result, classify, truncate_long,
};

/// Options the caller supplies for one compilation pass.
#[derive(Default, Debug, Clone)]
pub struct QueryOptions {
    /// Compile for asynchronous enumeration.
    pub is_async: bool,
    /// Explicit splitting choice on the query, `Unspecified` to defer to the
    /// model default.
    pub splitting: QuerySplittingBehavior,
    /// The caller intends to precompile this query ahead of time.
    pub precompile: bool,
    pub model: ModelConfig,
}

impl QueryOptions {
    /// Compact rendering of every option that can change the compiled
    /// artifact. Cache keys fold this in so two compilations of the same plan
    /// shape under different options never alias.
    pub fn fingerprint(&self) -> String {
        format!(
            "async={} splitting={} precompile={} model={}",
            self.is_async,
            self.splitting,
            self.precompile,
            self.model.splitting_default(),
        )
    }
}

/// The cached artifact: a plan plus the frozen decisions of its context.
#[derive(Debug, Clone)]
pub struct CompiledQuery {
    plan: QueryPlan,
    context: CompilationContext,
}

impl CompiledQuery {
    pub fn plan(&self) -> &QueryPlan {
        &self.plan
    }
    pub fn context(&self) -> &CompilationContext {
        &self.context
    }
}

/// Run one compilation pass: classify the plan, then freeze its context.
///
/// Refuses ahead of time when precompilation is requested against a backend
/// that cannot precompile, so the mismatch surfaces as a configuration error
/// here instead of an execution failure later.
pub fn compile(
    plan: QueryPlan,
    options: &QueryOptions,
    capabilities: Capabilities,
) -> Result<CompiledQuery> {
    if options.precompile && !capabilities.precompiled_queries() {
        return Err(Error::msg(
            "Precompilation was requested but this backend cannot precompile queries",
        ));
    }
    let classification = classify(&plan, options.splitting, &options.model);
    let context = CompilationContext::new(
        options.is_async,
        classification.base_is_buffering,
        classification.splitting,
        capabilities,
    )?;
    let key = plan.shape_key();
    log::debug!(
        "Compiled `{}` as {}, buffering: {}",
        truncate_long!(key),
        context.splitting(),
        context.is_buffering(),
    );
    Ok(CompiledQuery { plan, context })
}
