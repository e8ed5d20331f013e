pub mod chat;
pub mod notify;
pub mod profile;
