pub mod chat;
pub mod layouts;
