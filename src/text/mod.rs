pub mod char;
pub mod string;

pub use self::char::{any_char, chars, is_char, not_char, not_chars};
pub use self::string::is_string;
