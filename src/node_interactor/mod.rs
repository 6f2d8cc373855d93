pub mod connection;
pub mod identity;
pub mod submission;
