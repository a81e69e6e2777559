pub mod progress;
pub mod realtime;
pub mod sessions;
pub mod splitter;
