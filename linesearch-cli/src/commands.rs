pub mod menu;
pub mod search;
