pub mod board;
pub mod mv;
pub mod path;
pub mod rules;
pub mod session;
pub mod square;
