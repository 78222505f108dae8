pub mod music;

pub use music::Music;
