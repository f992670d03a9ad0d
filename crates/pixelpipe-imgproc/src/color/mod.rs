mod gray;
pub use gray::*;

mod sepia;
pub use sepia::*;
