pub mod health;
pub mod listings;
