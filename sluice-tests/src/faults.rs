use crate::split_plan;
use sluice::{
    Capabilities, Connection, Driver, Executor, QueryOptions, Result, RowLabeled, compile,
    materialize,
    stream::TryStreamExt,
};

/// A stale capability descriptor claiming multiple active result sets leads
/// to an under-buffered plan; the connection must surface the violation as a
/// fatal execution error, not mask it.
pub async fn capability_mismatch<E: Executor>(executor: &mut E) {
    assert!(
        !executor
            .driver()
            .capabilities()
            .multiple_active_result_sets(),
        "This check needs a connection without multiple active result sets"
    );
    let stale = Capabilities::new(true, true);
    let compiled = compile(split_plan(), &QueryOptions::default(), stale)
        .expect("Failed to compile against the stale descriptor");
    assert!(!compiled.context().is_buffering());
    let result: Result<Vec<RowLabeled>> = materialize(executor, &compiled).try_collect().await;
    let error = result.expect_err("Under-buffered split execution should fail on this connection");
    assert!(
        error.to_string().contains("already open"),
        "Unexpected error: {:#}",
        error
    );
}

/// Requesting precompilation against a backend that cannot precompile is
/// refused at compile time as a configuration error.
pub async fn precompile_refused<E: Executor>(executor: &mut E) {
    let capabilities = executor.driver().capabilities();
    assert!(
        !capabilities.precompiled_queries(),
        "This check needs a backend that cannot precompile queries"
    );
    let options = QueryOptions {
        precompile: true,
        ..Default::default()
    };
    let error = compile(split_plan(), &options, capabilities)
        .expect_err("Precompilation should be refused ahead of time");
    assert!(
        error.to_string().contains("cannot precompile"),
        "Unexpected error: {:#}",
        error
    );
}

/// A cached artifact compiled without precompilation must not satisfy a later
/// request that asks for it; the refusal applies on hits too.
pub async fn precompile_not_bypassed_by_cache<C: Connection>(connection: C) {
    let mut connection = connection.as_cached_connection();
    let plan = split_plan();
    connection
        .compiled(&plan, &QueryOptions::default())
        .expect("Failed to compile the plain request");
    let options = QueryOptions {
        precompile: true,
        ..Default::default()
    };
    let error = connection
        .compiled(&plan, &options)
        .expect_err("The cached plain artifact must not satisfy a precompile request");
    assert!(
        error.to_string().contains("cannot precompile"),
        "Unexpected error: {:#}",
        error
    );
}
