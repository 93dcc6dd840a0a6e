pub mod chat;
pub mod history;
pub mod landing;
pub mod settings;
pub mod shared;

pub use chat::ChatView;
pub use landing::LandingView;
