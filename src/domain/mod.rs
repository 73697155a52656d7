pub mod language;
pub mod sentence;
pub mod speech;
pub mod tips;
pub mod translation;
