pub mod chat;
pub mod insight;
pub mod suggestion;
