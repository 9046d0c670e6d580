mod caching;
mod faults;
mod single;
mod split;

pub use caching::caching;
pub use faults::{capability_mismatch, precompile_not_bypassed_by_cache, precompile_refused};
pub use single::single;
pub use split::{split_buffered, split_streaming};

use log::LevelFilter;
use sluice::{Connection, PlanStatement, QueryPlan, Row, Value};
use std::env;

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}

fn row(values: Vec<Value>) -> Row {
    values.into_boxed_slice()
}

/// Fixture data for the `authors` table. The backend test loads this before
/// handing its connection to a suite.
pub fn authors_fixture() -> (&'static [&'static str], Vec<Row>) {
    (
        &["id", "name"],
        vec![
            row(vec![1i64.into(), "Ada".into()]),
            row(vec![2i64.into(), "Blake".into()]),
            row(vec![3i64.into(), "Clarke".into()]),
        ],
    )
}

/// Fixture data for the `books` table.
pub fn books_fixture() -> (&'static [&'static str], Vec<Row>) {
    (
        &["id", "author_id", "title"],
        vec![
            row(vec![1i64.into(), 1i64.into(), "Analytical Engines".into()]),
            row(vec![2i64.into(), 1i64.into(), "Notes".into()]),
            row(vec![3i64.into(), 2i64.into(), "Songs".into()]),
            row(vec![4i64.into(), 3i64.into(), "Rendezvous".into()]),
        ],
    )
}

/// A root statement plus one dependent collection statement.
pub fn split_plan() -> QueryPlan {
    QueryPlan::new(PlanStatement::root("authors", &["id", "name"]))
        .expanded(PlanStatement::collection("books", &["author_id", "title"]))
}

/// Suite for a connection without multiple active result sets. The fixture
/// tables must already be loaded.
pub async fn execute_serial_tests<C: Connection>(mut connection: C) {
    single(&mut connection).await;
    split_buffered(&mut connection).await;
    capability_mismatch(&mut connection).await;
    caching(connection).await;
}

/// Suite for a connection with multiple active result sets. The fixture
/// tables must already be loaded.
pub async fn execute_mars_tests<C: Connection>(mut connection: C) {
    single(&mut connection).await;
    split_streaming(&mut connection).await;
    caching(connection).await;
}

/// Suite for a connection whose backend cannot precompile queries.
pub async fn execute_precompile_tests<C: Connection>(mut connection: C) {
    precompile_refused(&mut connection).await;
    precompile_not_bypassed_by_cache(connection).await;
}
