// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod memory_db;
pub mod security;
pub mod time;

pub use memory_db::MemoryDb;
pub use security::{PlainPasswordHasher, SequentialTokens};
pub use time::{TestClock, fixed_now};
