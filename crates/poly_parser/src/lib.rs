//! Expression front end: text to canonical [`poly_ast::Polynomial`].

pub mod error;
pub mod parser;

pub use error::ParseError;
pub use parser::parse;
