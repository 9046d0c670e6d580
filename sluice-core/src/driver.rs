use crate::{Capabilities, Connection};

pub trait Driver {
    type Connection: Connection;

    const NAME: &'static str;

    /// The immutable facts of the backend this driver fronts, resolved when
    /// the connection was established.
    fn capabilities(&self) -> Capabilities;
}
