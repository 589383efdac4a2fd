//! UI Components
//!
//! Reusable Leptos components.

mod board_card;
mod comment_form;
mod error_message;
mod follow_button;
mod guarded;
mod like_button;
mod login_form;
mod nav_bar;
mod pin_card;
mod pin_grid;
mod search_bar;
mod signup_form;

pub use board_card::BoardCard;
pub use comment_form::CommentForm;
pub use error_message::ErrorMessage;
pub use follow_button::FollowButton;
pub use guarded::Guarded;
pub use like_button::LikeButton;
pub use login_form::LoginForm;
pub use nav_bar::NavBar;
pub use pin_card::PinCard;
pub use pin_grid::PinGrid;
pub use search_bar::SearchBar;
pub use signup_form::SignupForm;
