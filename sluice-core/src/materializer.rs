use crate::{
    CompiledQuery, Executor, FromRow, Result, RowLabeled,
    stream::{Stream, StreamExt},
};
use async_stream::try_stream;

/// Stream the rows of a compiled query, honoring its frozen buffering
/// decision.
///
/// Statements always execute in plan order. The decision only moves the point
/// where each result set is released: buffered execution drains statement N
/// completely before statement N+1 claims the connection, streaming execution
/// claims every result set up front and keeps the earlier ones open while the
/// later ones start. The latter is only legal on a backend with multiple
/// active result sets, which is exactly what the compiled context accounted
/// for; a stale capability fact surfaces here as the backend's "result set
/// already open" error.
pub fn materialize<'e, E: Executor>(
    executor: &'e mut E,
    compiled: &CompiledQuery,
) -> impl Stream<Item = Result<RowLabeled>> + Send + 'e {
    let plan = compiled.plan().clone();
    let buffering = compiled.context().is_buffering();
    try_stream! {
        if buffering {
            for statement in plan.statements() {
                let mut rows = Vec::new();
                {
                    let mut stream = executor.fetch(statement);
                    while let Some(row) = stream.next().await {
                        rows.push(row?);
                    }
                }
                // The result set is released before the next statement runs
                for row in rows {
                    yield row;
                }
            }
        } else {
            let mut streams = Vec::with_capacity(plan.statements().len());
            for statement in plan.statements() {
                streams.push(executor.fetch(statement));
            }
            for mut stream in streams {
                while let Some(row) = stream.next().await {
                    yield row?;
                }
            }
        }
    }
}

/// Materialize the rows of a compiled query into entities.
pub fn materialize_as<'e, T, E>(
    executor: &'e mut E,
    compiled: &CompiledQuery,
) -> impl Stream<Item = Result<T>> + Send + 'e
where
    T: FromRow + Send,
    E: Executor,
{
    materialize(executor, compiled).map(|row| row.and_then(T::from_row))
}
