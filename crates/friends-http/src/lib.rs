//! friends-http - HTTP-backed directory client.

mod client;
mod directory;
mod probe;

pub use directory::HttpDirectory;
pub use probe::HttpImageProbe;
