mod input;
mod interpreter;

pub use self::interpreter::Interpreter;
