//! Panel host glue: page session wiring between the pure core and the wire
//! boundary, plus logger initialization for embedding shells.
mod logging;
mod session;

pub use logging::{initialize, LogDestination};
pub use session::{BootstrapData, HostPost, PageSession};
