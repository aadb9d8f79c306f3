pub mod gemini;
pub mod parse;
pub mod request;
pub mod runtime;

pub use gemini::*;
pub use parse::*;
pub use request::*;
pub use runtime::*;
