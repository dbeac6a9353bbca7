pub mod brands;
pub mod checker;
pub mod domains;
pub mod events;
pub mod health;
pub mod logs;

pub use health::health_check;
