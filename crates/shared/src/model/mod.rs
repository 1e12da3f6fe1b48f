pub mod item;
pub mod merchant;
pub mod transaction;
pub mod user;
