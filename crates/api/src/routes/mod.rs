pub mod category;
pub mod health;
pub mod ui;
