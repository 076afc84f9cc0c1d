//! View components for the application.

pub mod dashboard;
pub mod game;
pub mod home;
pub mod login;
pub mod register;

pub use dashboard::{CreateRoomModal, Dashboard, JoinRoomModal};
pub use game::Game;
pub use home::Home;
pub use login::Login;
pub use register::Register;
