pub mod config;
pub mod gemini;
pub mod media;

// Keep the public surface small and intentional.
pub use config::*;
pub use gemini::*;
pub use media::*;
