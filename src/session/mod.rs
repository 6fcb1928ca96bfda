//! Session persistence

mod file;
mod memory;
mod store;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;
pub use store::{MockSessionStore, SessionStore, TOKEN_KEY, USER_NAME_KEY};
