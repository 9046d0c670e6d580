use crate::split_plan;
use sluice::{
    Driver, Executor, QueryOptions, QuerySplittingBehavior, RowLabeled, Value, compile,
    materialize,
    stream::TryStreamExt,
};

fn assert_split_rows(rows: &[RowLabeled]) {
    // Root rows first, then the collection rows, in plan order
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0].get_column("name"), Some(&Value::from("Ada")));
    assert_eq!(rows[2].get_column("name"), Some(&Value::from("Clarke")));
    assert_eq!(
        rows[3].get_column("title"),
        Some(&Value::from("Analytical Engines"))
    );
    assert_eq!(rows[6].get_column("title"), Some(&Value::from("Rendezvous")));
    assert_eq!(rows[6].get_column("author_id"), Some(&Value::from(3i64)));
}

/// Split execution on a connection that cannot keep two result sets open: the
/// compiled context must demand buffering and the query must still succeed.
pub async fn split_buffered<E: Executor>(executor: &mut E) {
    let compiled = compile(
        split_plan(),
        &QueryOptions::default(),
        executor.driver().capabilities(),
    )
    .expect("Failed to compile the split plan");
    assert_eq!(
        compiled.context().splitting(),
        QuerySplittingBehavior::SplitQuery
    );
    assert!(
        compiled.context().is_buffering(),
        "A split query without multiple active result sets must buffer"
    );
    let rows: Vec<RowLabeled> = materialize(executor, &compiled)
        .try_collect()
        .await
        .expect("Failed to materialize the buffered split query");
    assert_split_rows(&rows);
}

/// Split execution on a connection with multiple active result sets: no
/// buffering, interleaved open result sets, same rows in the same order.
pub async fn split_streaming<E: Executor>(executor: &mut E) {
    let compiled = compile(
        split_plan(),
        &QueryOptions::default(),
        executor.driver().capabilities(),
    )
    .expect("Failed to compile the split plan");
    assert_eq!(
        compiled.context().splitting(),
        QuerySplittingBehavior::SplitQuery
    );
    assert!(
        !compiled.context().is_buffering(),
        "A split query with multiple active result sets must stream"
    );
    let rows: Vec<RowLabeled> = materialize(executor, &compiled)
        .try_collect()
        .await
        .expect("Failed to materialize the streamed split query");
    assert_split_rows(&rows);
}
