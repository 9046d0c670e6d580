use crate::MemDriver;
use async_stream::try_stream;
use sluice_core::{
    Capabilities, Connection, Context, Driver, Error, Executor, PlanStatement, Result, Row,
    RowLabeled, RowNames,
    stream::{BoxStream, StreamExt},
};
use std::{
    borrow::Cow,
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};
use url::Url;

#[derive(Debug, Clone)]
struct MemTable {
    labels: RowNames,
    rows: Vec<Row>,
}

/// Claims one result set slot on the connection for as long as it is alive.
struct ResultSetGuard {
    open_results: Arc<AtomicUsize>,
}

impl ResultSetGuard {
    fn acquire(open_results: &Arc<AtomicUsize>, multiple_active: bool) -> Result<Self> {
        let previous = open_results.fetch_add(1, Ordering::SeqCst);
        if previous > 0 && !multiple_active {
            open_results.fetch_sub(1, Ordering::SeqCst);
            let error = Error::msg(
                "A result set is already open and this connection does not support multiple active result sets",
            );
            log::error!("{}", error);
            return Err(error);
        }
        Ok(Self {
            open_results: open_results.clone(),
        })
    }
}

impl Drop for ResultSetGuard {
    fn drop(&mut self) {
        self.open_results.fetch_sub(1, Ordering::SeqCst);
    }
}

/// An in-memory connection serving rows out of loaded tables.
#[derive(Debug)]
pub struct MemConnection {
    driver: MemDriver,
    /// Whether this connection actually multiplexes result sets. Normally the
    /// same fact the driver advertises; the guard checks this one, so a stale
    /// descriptor fails at execution time exactly like a real backend would.
    multiple_active: bool,
    tables: Arc<Mutex<HashMap<String, MemTable>>>,
    open_results: Arc<AtomicUsize>,
}

impl MemConnection {
    /// Load (or replace) a table. Every row must match the label count.
    pub fn load_table(
        &mut self,
        name: impl Into<String>,
        labels: &[&str],
        rows: Vec<Row>,
    ) -> Result<()> {
        let name = name.into();
        let labels: RowNames = labels.iter().map(|v| (*v).to_owned()).collect();
        if let Some(row) = rows.iter().find(|row| row.len() != labels.len()) {
            return Err(Error::msg(format!(
                "Cannot load the table `{}`: a row has {} values but there are {} labels",
                name,
                row.len(),
                labels.len(),
            )));
        }
        self.tables
            .lock()
            .map_err(|_| Error::msg("The table store is poisoned"))?
            .insert(name, MemTable { labels, rows });
        Ok(())
    }

    fn snapshot(&self, statement: &PlanStatement) -> Result<Vec<RowLabeled>> {
        let tables = self
            .tables
            .lock()
            .map_err(|_| Error::msg("The table store is poisoned"))?;
        let table = tables.get(&statement.table).ok_or_else(|| {
            Error::msg(format!("Unknown table `{}`", statement.table))
        })?;
        let indices = statement
            .columns
            .iter()
            .map(|column| {
                table
                    .labels
                    .iter()
                    .position(|v| v == column)
                    .ok_or_else(|| {
                        Error::msg(format!(
                            "Unknown column `{}` in the table `{}`",
                            column, statement.table
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        let filter = statement
            .filter
            .as_ref()
            .map(|(column, value)| {
                table
                    .labels
                    .iter()
                    .position(|v| v == column)
                    .map(|i| (i, value))
                    .ok_or_else(|| {
                        Error::msg(format!(
                            "Unknown filter column `{}` in the table `{}`",
                            column, statement.table
                        ))
                    })
            })
            .transpose()?;
        let labels: RowNames = statement.columns.iter().cloned().collect();
        Ok(table
            .rows
            .iter()
            .filter(|row| filter.is_none_or(|(i, value)| &row[i] == value))
            .map(|row| {
                RowLabeled::new(
                    labels.clone(),
                    indices.iter().map(|i| row[*i].clone()).collect(),
                )
            })
            .collect())
    }
}

impl Executor for MemConnection {
    type Driver = MemDriver;

    fn driver(&self) -> &Self::Driver {
        &self.driver
    }

    fn fetch(&mut self, statement: &PlanStatement) -> BoxStream<'static, Result<RowLabeled>> {
        // The result set slot is claimed here, not on first poll, mirroring a
        // backend that ties the set to statement execution
        let resources = ResultSetGuard::acquire(&self.open_results, self.multiple_active)
            .and_then(|guard| Ok((guard, self.snapshot(statement)?)));
        try_stream! {
            let (_guard, rows) = resources?;
            for row in rows {
                yield row;
            }
        }
        .boxed()
    }
}

impl Connection for MemConnection {
    #[allow(refining_impl_trait)]
    async fn connect(url: Cow<'static, str>) -> Result<MemConnection> {
        let prefix = format!("{}://", MemDriver::NAME);
        if !url.starts_with(&prefix) {
            return Err(Error::msg(format!(
                "Expected mem connection url to start with `{}`",
                &prefix
            )));
        }
        let url = Url::parse(&url)
            .with_context(|| format!("Error while decoding connection URL: `{}`", url))?;
        let mut multiple_active = false;
        let mut precompiled = true;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "mars" => {
                    multiple_active = value.parse().with_context(|| {
                        format!("Invalid value `{}` for the connection option `mars`", value)
                    })?
                }
                "precompiled" => {
                    precompiled = value.parse().with_context(|| {
                        format!(
                            "Invalid value `{}` for the connection option `precompiled`",
                            value
                        )
                    })?
                }
                _ => {
                    return Err(Error::msg(format!("Unknown connection option `{}`", key)));
                }
            }
        }
        Ok(Self {
            driver: MemDriver::new(Capabilities::new(multiple_active, precompiled)),
            multiple_active,
            tables: Arc::new(Mutex::new(HashMap::new())),
            open_results: Arc::new(AtomicUsize::new(0)),
        })
    }
}
