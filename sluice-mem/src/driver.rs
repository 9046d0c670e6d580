use crate::MemConnection;
use sluice_core::{Capabilities, Driver};

/// In-memory driver.
///
/// The capability facts come from the connection URL, so one process can host
/// both a connection with multiple active result sets and a strictly serial
/// one.
#[derive(Debug, Clone, Copy)]
pub struct MemDriver {
    capabilities: Capabilities,
}

impl MemDriver {
    pub const fn new(capabilities: Capabilities) -> Self {
        Self { capabilities }
    }
}

impl Driver for MemDriver {
    type Connection = MemConnection;

    const NAME: &'static str = "mem";

    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }
}
