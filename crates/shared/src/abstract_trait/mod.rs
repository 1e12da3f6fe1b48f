pub mod merchant;
pub mod merchant_item;
pub mod transaction;
