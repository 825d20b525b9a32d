pub mod arguments;
pub mod bump;
pub mod bumpers;
pub mod walk;
