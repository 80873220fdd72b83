pub mod log;
pub mod messages;
pub mod push;
