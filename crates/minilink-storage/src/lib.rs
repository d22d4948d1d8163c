//! Storage backends for the minilink URL shortener.
//!
//! Currently provides an in-memory reference implementation of the
//! repository contract. The only hard guarantee a backend must provide
//! is the uniqueness constraint on short codes at insert time.

pub mod memory;

pub use memory::InMemoryRepository;
