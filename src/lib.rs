pub mod api;
pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod ui;

pub use api::{HttpLikesClient, LikesApi};
pub use app::{bind, Binding};
pub use config::Config;
pub use errors::LikeError;
pub use handlers::{update_liked_cafe, ClickEvent};
pub use ui::LikeButton;
