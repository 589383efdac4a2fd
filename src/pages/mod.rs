//! Pages
//!
//! One page per route. Each page owns the collection it loads.

mod board_pins_page;
mod boards_page;
mod feed_page;
mod pin_detail_page;
mod search_results_page;

pub use board_pins_page::BoardPinsPage;
pub use boards_page::BoardsPage;
pub use feed_page::FeedPage;
pub use pin_detail_page::PinDetailPage;
pub use search_results_page::SearchResultsPage;
