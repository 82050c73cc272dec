use lexers::PrefixToken;
use std::fmt;

use crate::error::ArithmeticError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operator {
    Plus,
    Minus,
    Times,
    Divide,
}

impl Operator {
    pub fn from_token(token: &PrefixToken) -> Option<Operator> {
        match token {
            PrefixToken::Plus => Some(Operator::Plus),
            PrefixToken::Minus => Some(Operator::Minus),
            PrefixToken::Times => Some(Operator::Times),
            PrefixToken::Divide => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Times => '*',
            Operator::Divide => '/',
        }
    }

    /// Integer application. Division truncates toward zero.
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64, ArithmeticError> {
        let result = match self {
            Operator::Plus => lhs.checked_add(rhs),
            Operator::Minus => lhs.checked_sub(rhs),
            Operator::Times => lhs.checked_mul(rhs),
            Operator::Divide if rhs == 0 => return Err(ArithmeticError::DivisionByZero),
            Operator::Divide => lhs.checked_div(rhs),
        };
        result.ok_or(ArithmeticError::Overflow { op: self.symbol(), lhs, rhs })
    }
}

/// Order in which `traverse` and `walk` visit a node respect to its children
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Order {
    Pre,
    In,
    Post,
}

/// Binary expression tree. Numbers keep their literal text until
/// evaluation converts them, operators own exactly two subtrees.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ExprTree {
    Number(String),
    BinOp(Operator, Box<ExprTree>, Box<ExprTree>),
}

impl ExprTree {
    pub fn binop(op: Operator, lhs: ExprTree, rhs: ExprTree) -> ExprTree {
        ExprTree::BinOp(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, ExprTree::Number(_))
    }

    pub fn operator(&self) -> Option<Operator> {
        match self {
            ExprTree::BinOp(op, _, _) => Some(*op),
            ExprTree::Number(_) => None,
        }
    }

    pub fn children(&self) -> Option<(&ExprTree, &ExprTree)> {
        match self {
            ExprTree::BinOp(_, lhs, rhs) => Some((&**lhs, &**rhs)),
            ExprTree::Number(_) => None,
        }
    }

    /// Numeric value of a number node, `None` for operator nodes
    pub fn value(&self) -> Option<Result<i64, ArithmeticError>> {
        match self {
            ExprTree::Number(text) => Some(text.parse::<i64>()
                .map_err(|_| ArithmeticError::OutOfRange(text.clone()))),
            ExprTree::BinOp(..) => None,
        }
    }

    /// Apply `visitor` to every node, allowing it to rewrite nodes in place.
    /// Stops at the first error the visitor returns.
    pub fn traverse<E, F>(&mut self, order: Order, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&mut ExprTree) -> Result<(), E>,
    {
        if order == Order::Pre {
            visitor(self)?;
        }
        if let ExprTree::BinOp(_, lhs, _) = self {
            lhs.traverse(order, visitor)?;
        }
        if order == Order::In {
            visitor(self)?;
        }
        if let ExprTree::BinOp(_, _, rhs) = self {
            rhs.traverse(order, visitor)?;
        }
        if order == Order::Post {
            visitor(self)?;
        }
        Ok(())
    }

    /// Read-only counterpart of `traverse`
    pub fn walk<F>(&self, order: Order, visitor: &mut F)
    where
        F: FnMut(&ExprTree),
    {
        if order == Order::Pre {
            visitor(self);
        }
        if let ExprTree::BinOp(_, lhs, _) = self {
            lhs.walk(order, visitor);
        }
        if order == Order::In {
            visitor(self);
        }
        if let ExprTree::BinOp(_, _, rhs) = self {
            rhs.walk(order, visitor);
        }
        if order == Order::Post {
            visitor(self);
        }
    }
}

impl fmt::Display for ExprTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExprTree::Number(n) => write!(f, "{}", n),
            ExprTree::BinOp(op, lhs, rhs) => write!(f, "({} {} {})", op.symbol(), lhs, rhs),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
