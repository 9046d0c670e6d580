use sluice::{
    Driver, Executor, PlanStatement, QueryOptions, QueryPlan, QuerySplittingBehavior, RowLabeled,
    Value, compile, materialize,
    stream::TryStreamExt,
};

pub async fn single<E: Executor>(executor: &mut E) {
    let plan = QueryPlan::new(PlanStatement::root("authors", &["id", "name"]));
    let compiled = compile(
        plan,
        &QueryOptions::default(),
        executor.driver().capabilities(),
    )
    .expect("Failed to compile the single statement plan");
    assert_eq!(
        compiled.context().splitting(),
        QuerySplittingBehavior::SingleQuery
    );
    assert!(
        !compiled.context().is_buffering(),
        "A single statement plan must stream"
    );
    let rows: Vec<RowLabeled> = materialize(executor, &compiled)
        .try_collect()
        .await
        .expect("Failed to materialize the single statement plan");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].get_column("name"), Some(&Value::from("Ada")));
    assert_eq!(rows[2].get_column("id"), Some(&Value::from(3i64)));
    assert_eq!(rows[1].get_column("title"), None);
}
