use crate::{
    CompiledQuery, Driver, Executor, PlanStatement, QueryCache, QueryOptions, QueryPlan, Result,
    RowLabeled, compile,
    stream::BoxStream,
};
use std::{borrow::Cow, future::Future, sync::Arc};

pub trait Connection: Executor {
    /// Establish a connection to the given URL.
    fn connect(url: Cow<'static, str>) -> impl Future<Output = Result<impl Connection>>;

    /// Pair this connection with a compiled query cache.
    fn as_cached_connection(self) -> CachedConnection<Self> {
        CachedConnection::new(self)
    }
}

/// A connection paired with a compiled query cache.
///
/// Compilation happens at most once per plan shape and option set; afterwards
/// every call for the same pair gets the published artifact with its frozen
/// buffering decision.
pub struct CachedConnection<C: Connection> {
    pub connection: C,
    pub cache: QueryCache,
}

impl<C: Connection> CachedConnection<C> {
    pub fn new(connection: C) -> Self {
        Self {
            connection,
            cache: QueryCache::new(),
        }
    }

    /// Fetch or build the compiled artifact for the shape of `plan` under
    /// `options`. The options are part of the cache key, a hit never hands
    /// back an artifact compiled under different ones.
    pub fn compiled(
        &mut self,
        plan: &QueryPlan,
        options: &QueryOptions,
    ) -> Result<Arc<CompiledQuery>> {
        let capabilities = self.connection.driver().capabilities();
        let key = format!("{} [{}]", plan.shape_key(), options.fingerprint());
        self.cache
            .get_or_compile(&key, || compile(plan.clone(), options, capabilities))
    }
}

impl<C: Connection> Executor for CachedConnection<C> {
    type Driver = C::Driver;

    fn driver(&self) -> &Self::Driver {
        self.connection.driver()
    }

    fn fetch(&mut self, statement: &PlanStatement) -> BoxStream<'static, Result<RowLabeled>> {
        self.connection.fetch(statement)
    }
}

impl<C: Connection> Connection for CachedConnection<C> {
    fn connect(url: Cow<'static, str>) -> impl Future<Output = Result<impl Connection>> {
        C::connect(url)
    }
}
