// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod app;
pub mod config;
pub mod confetti;
pub mod error;
pub mod game;
pub mod history;
pub mod runtime;
pub mod scramble;
pub mod ui;
pub mod wordlist;
