use crate::split_plan;
use sluice::{
    Connection, QueryOptions, RowLabeled, materialize,
    stream::TryStreamExt,
};
use std::sync::Arc;

/// The cached connection compiles a shape once per option set and republishes
/// the same artifact on every later request for that pair.
pub async fn caching<C: Connection>(connection: C) {
    let mut connection = connection.as_cached_connection();
    let plan = split_plan();
    let options = QueryOptions::default();
    let first = connection
        .compiled(&plan, &options)
        .expect("Failed to compile through the cache");
    let second = connection
        .compiled(&plan, &options)
        .expect("Failed to fetch the cached artifact");
    assert!(
        Arc::ptr_eq(&first, &second),
        "The same shape must reuse the published artifact"
    );
    assert_eq!(connection.cache.len(), 1);
    let async_options = QueryOptions {
        is_async: true,
        ..Default::default()
    };
    let third = connection
        .compiled(&plan, &async_options)
        .expect("Failed to compile under different options");
    assert!(
        !Arc::ptr_eq(&first, &third),
        "Different options must not alias to the same artifact"
    );
    assert!(third.context().is_async());
    assert_eq!(connection.cache.len(), 2);
    let rows: Vec<RowLabeled> = materialize(&mut connection, &first)
        .try_collect()
        .await
        .expect("Failed to materialize through the cached connection");
    assert!(!rows.is_empty());
}
