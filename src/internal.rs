pub mod client;
pub mod entrance;
pub mod progress;
pub mod states;
pub mod transfer;
