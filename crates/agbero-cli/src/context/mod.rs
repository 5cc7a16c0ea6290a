mod app_context;
mod submitter;

pub use app_context::AppContext;
pub use submitter::LedgerSubmitter;
