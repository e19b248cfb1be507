pub mod int;
mod tape;
#[cfg(test)]
mod test_buffer;
#[cfg(test)]
pub use self::test_buffer::SharedBuffer;

pub use self::tape::{Cell, Tape};
