//! Team aggregate

pub mod model;
pub mod repository;

pub use model::{NewTeam, Team};
pub use repository::TeamRepository;
