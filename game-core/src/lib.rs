pub mod clock;
pub mod credentials;
pub mod daily_limit;
pub mod evaluator;
pub mod game_state;
pub mod statistics;
pub mod word_list;
pub mod game_events;

// Re-export main components
pub use clock::*;
pub use credentials::*;
pub use daily_limit::*;
pub use evaluator::*;
pub use game_state::*;
pub use statistics::*;
pub use word_list::*;
pub use game_events::*;
