pub mod controller;
pub mod engine;
pub mod traits;

// Keep the public surface small and intentional.
pub use controller::*;
pub use engine::*;
pub use traits::*;
