#[cfg(test)]
mod tests {
    use futures::TryStreamExt;
    use sluice::{
        CachedConnection, Connection, Error, FromRow, PlanStatement, QueryOptions, QueryPlan,
        QuerySplittingBehavior, Result, RowLabeled, Value, materialize, materialize_as,
    };
    use sluice_mem::MemConnection;
    use std::sync::Arc;

    #[derive(Debug, PartialEq)]
    struct Author {
        id: i64,
        name: String,
    }

    impl FromRow for Author {
        fn from_row(row: RowLabeled) -> Result<Self> {
            let id = match row.get_column("id") {
                Some(Value::Int64(Some(id))) => *id,
                _ => return Err(Error::msg("The row has no `id` column")),
            };
            let name = match row.get_column("name") {
                Some(Value::Varchar(Some(name))) => name.clone(),
                _ => return Err(Error::msg("The row has no `name` column")),
            };
            Ok(Self { id, name })
        }
    }

    async fn open_connection() -> MemConnection {
        let mut connection = MemConnection::connect("mem://".into())
            .await
            .expect("Could not open the connection");
        connection
            .load_table(
                "authors",
                &["id", "name"],
                vec![
                    vec![Value::from(1i64), Value::from("Ada")].into_boxed_slice(),
                    vec![Value::from(2i64), Value::from("Blake")].into_boxed_slice(),
                ],
            )
            .expect("Failed to load the authors table");
        connection
            .load_table(
                "books",
                &["id", "author_id", "title"],
                vec![
                    vec![Value::from(1i64), Value::from(1i64), Value::from("Notes")]
                        .into_boxed_slice(),
                    vec![Value::from(2i64), Value::from(2i64), Value::from("Songs")]
                        .into_boxed_slice(),
                ],
            )
            .expect("Failed to load the books table");
        connection
    }

    #[tokio::test]
    async fn compile_cache_and_materialize() {
        let mut connection = CachedConnection::new(open_connection().await);
        let plan = QueryPlan::new(PlanStatement::root("authors", &["id", "name"])).expanded(
            PlanStatement::collection("books", &["author_id", "title"]).filtered("author_id", 1i64),
        );
        let options = QueryOptions {
            is_async: true,
            ..Default::default()
        };

        // The default mem connection is serial, a split plan must buffer
        let compiled = connection
            .compiled(&plan, &options)
            .expect("Failed to compile the plan");
        assert_eq!(
            compiled.context().splitting(),
            QuerySplittingBehavior::SplitQuery
        );
        assert!(compiled.context().is_buffering());
        assert!(compiled.context().is_async());
        assert!(compiled.context().supports_precompiled_query());

        let rows: Vec<RowLabeled> = materialize(&mut connection, &compiled)
            .try_collect()
            .await
            .expect("Failed to materialize the query");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].get_column("title"), Some(&Value::from("Notes")));

        // The same shape with another parameter value reuses the artifact
        let reparameterized = QueryPlan::new(PlanStatement::root("authors", &["id", "name"]))
            .expanded(
                PlanStatement::collection("books", &["author_id", "title"])
                    .filtered("author_id", 2i64),
            );
        let again = connection
            .compiled(&reparameterized, &options)
            .expect("Failed to fetch the cached artifact");
        assert!(Arc::ptr_eq(&compiled, &again));
        assert_eq!(connection.cache.len(), 1);
    }

    #[tokio::test]
    async fn materialize_into_entities() {
        let mut connection = open_connection().await;
        let plan = QueryPlan::new(PlanStatement::root("authors", &["id", "name"]));
        let compiled = sluice::compile(
            plan,
            &QueryOptions::default(),
            sluice::Capabilities::new(false, true),
        )
        .expect("Failed to compile the plan");
        let authors: Vec<Author> = materialize_as(&mut connection, &compiled)
            .try_collect()
            .await
            .expect("Failed to materialize the authors");
        assert_eq!(
            authors,
            vec![
                Author {
                    id: 1,
                    name: "Ada".into()
                },
                Author {
                    id: 2,
                    name: "Blake".into()
                },
            ]
        );
    }
}
