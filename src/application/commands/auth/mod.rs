mod login;
mod logout;
mod service;
mod session;

pub use login::LoginCommand;
pub use service::AuthCommandService;
