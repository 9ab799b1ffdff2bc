pub mod cursor;
pub mod pointer;
