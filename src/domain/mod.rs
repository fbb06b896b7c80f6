pub mod category;
pub mod errors;
pub mod news;
pub mod session;
pub mod slug;
pub mod user;
