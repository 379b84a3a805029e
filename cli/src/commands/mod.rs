pub mod account;
pub mod configure;
pub mod derive;
pub mod history;
pub mod leaderboard;
pub mod resolve;
