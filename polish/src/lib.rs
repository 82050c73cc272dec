extern crate lexers;

pub use error::{ArithmeticError, Error, Expected, ParseError, Result, SyntaxError};
pub use parser::{is_valid, PrefixParser};
pub use tree::{ExprTree, Operator, Order};
pub use eval::{eval_str, evaluate, reduce};

mod error;
mod tree;
mod parser;
mod eval;
