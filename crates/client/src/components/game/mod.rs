//! Game view building blocks.

pub mod chat;
pub mod game_summary;
pub mod phase_banner;
pub mod player_list;
pub mod role_card;
pub mod vote_panel;

pub use chat::ChatFeed;
pub use game_summary::GameSummaryModal;
pub use phase_banner::PhaseBanner;
pub use player_list::PlayerList;
pub use role_card::RoleCard;
pub use vote_panel::VotePanel;
