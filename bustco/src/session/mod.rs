mod result_store;
mod tco_session;

pub use result_store::{ResultStore, StoredBreakdown};
pub use tco_session::TcoSession;
