mod cache;
mod session;

pub use cache::CollectionCache;
pub use session::LibrarySession;
