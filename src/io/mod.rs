pub mod cli;
pub mod configuration;
pub mod error;
pub mod export;
pub mod storage;
pub mod typewriter;
