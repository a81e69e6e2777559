pub mod accounting;
pub mod edit_request;
pub mod policy;
pub mod session;
pub mod snapshot;
pub mod time_log;
