pub mod call_builder;
pub mod hex;
