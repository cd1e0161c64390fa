mod traits;
mod gemini;

pub use traits::*;
pub use gemini::{extract_reply, GeminiClient};
