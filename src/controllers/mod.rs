pub mod health;
pub mod languages;
pub mod sentence;
pub mod speech;
pub mod translation;
