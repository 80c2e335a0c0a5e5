//! JSON file storage: one pretty-printed document per store key.

pub mod connection;

pub use connection::JsonConnection;
