mod browse_session;
mod detail_loader;

pub use browse_session::{BrowseSession, BrowseSnapshot, LoadPhase};
pub use detail_loader::{DetailLoader, ItemDetail};
