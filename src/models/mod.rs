pub mod audio;
pub mod card;
