pub mod media;
pub mod prompts;
pub mod text;
pub mod wizard;

// Keep the public surface small and intentional.
pub use media::*;
pub use prompts::*;
pub use text::*;
pub use wizard::*;
