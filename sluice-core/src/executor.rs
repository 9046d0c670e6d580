use crate::{Driver, PlanStatement, Result, RowLabeled, stream::BoxStream};

pub trait Executor: Send + Sized {
    type Driver: Driver;

    fn driver(&self) -> &Self::Driver;

    /// Execute one plan statement and stream its rows.
    ///
    /// The returned stream owns the result set: the set is claimed on this
    /// call and released when the stream is dropped or runs to completion. It
    /// must not borrow the executor, so a backend supporting multiple active
    /// result sets can serve several statements interleaved.
    fn fetch(&mut self, statement: &PlanStatement) -> BoxStream<'static, Result<RowLabeled>>;
}
