use crate::error::{ArithmeticError, Result};
use crate::parser::PrefixParser;
use crate::tree::{ExprTree, Order};

// Post-order visitor: both operands of an operator node have already been
// rewritten into numbers by the time the node itself is visited.
pub fn reduce(node: &mut ExprTree) -> std::result::Result<(), ArithmeticError> {
    let (op, lhs, rhs) = match node {
        ExprTree::Number(_) => return Ok(()),
        ExprTree::BinOp(op, lhs, rhs) => (*op, number(lhs)?, number(rhs)?),
    };
    let result = op.apply(lhs, rhs)?;
    tracing::debug!("{} {} {} = {}", lhs, op.symbol(), rhs, result);
    *node = ExprTree::Number(result.to_string());
    Ok(())
}

fn number(node: &mut ExprTree) -> std::result::Result<i64, ArithmeticError> {
    if let Some(value) = node.value() {
        return value;
    }
    // reduce was handed a parent ahead of its children
    reduce(node)?;
    number(node)
}

/// Reduce `tree` in place and return its value. Calling it again on an
/// already reduced tree returns the same value.
pub fn evaluate(tree: &mut ExprTree) -> std::result::Result<i64, ArithmeticError> {
    tree.traverse(Order::Post, &mut reduce)?;
    number(tree)
}

/// Parse and evaluate `input`. Blank input has no value.
pub fn eval_str(input: &str) -> Result<Option<i64>> {
    match PrefixParser::parse_str(input)? {
        None => Ok(None),
        Some(mut tree) => Ok(Some(evaluate(&mut tree)?)),
    }
}
