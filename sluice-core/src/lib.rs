mod cache;
mod capability;
mod classifier;
mod compiled;
mod connection;
mod context;
mod conventions;
mod driver;
mod executor;
mod materializer;
mod plan;
mod row;
mod splitting;
mod util;
mod value;

pub use ::anyhow::Context;
pub use cache::*;
pub use capability::*;
pub use classifier::*;
pub use compiled::*;
pub use connection::*;
pub use context::*;
pub use conventions::*;
pub use driver::*;
pub use executor::*;
pub use materializer::*;
pub use plan::*;
pub use row::*;
pub use splitting::*;
pub use util::*;
pub use value::*;
pub mod stream {
    pub use ::futures::stream::*;
}

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
