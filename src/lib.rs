pub mod aggregate;
pub mod cache;
pub mod config;
pub mod exclude;
pub mod extract;
pub mod model;
pub mod storage;
pub mod store;
pub mod writer;
