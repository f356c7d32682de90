//! The guard AST and its evaluation against a measurement's columns.

use sli_core::{Measurement, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

/// A literal on the right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Str(String),
}

impl Literal {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Literal::Int(i) => Some(*i as f64),
            Literal::Float(f) => Some(*f),
            Literal::Str(_) => None,
        }
    }
}

/// A boolean expression over a step's *current* measurement
#[derive(Debug, Clone, PartialEq)]
pub enum Guard {
    /// The guard with no free variables: always matches.
    Always,
    Compare { column: String, op: CompareOp, value: Literal },
    And(Box<Guard>, Box<Guard>),
    Or(Box<Guard>, Box<Guard>),
    Not(Box<Guard>),
}

impl Guard {
    /// Evaluates the guard against a measurement. A comparison against a column
    /// that is absent on the measurement never matches, regardless of operator.
    pub fn evaluate(&self, measurement: &Measurement) -> bool {
        match self {
            Guard::Always => true,
            Guard::Not(inner) => !inner.evaluate(measurement),
            Guard::And(lhs, rhs) => lhs.evaluate(measurement) && rhs.evaluate(measurement),
            Guard::Or(lhs, rhs) => lhs.evaluate(measurement) || rhs.evaluate(measurement),
            Guard::Compare { column, op, value } => match measurement.get(column) {
                None | Some(Value::Absent) => false,
                Some(actual) => compare(actual, *op, value),
            },
        }
    }
}

fn compare(actual: &Value, op: CompareOp, literal: &Literal) -> bool {
    // String equality/inequality is supported directly; all other operators
    // and all numeric comparisons go through a numeric view of both sides.
    if let (Value::Str(s), Literal::Str(lit)) = (actual, literal) {
        return match op {
            CompareOp::Eq => s == lit,
            CompareOp::Ne => s != lit,
            _ => false,
        };
    }

    let (Some(a), Some(b)) = (actual.as_f64(), literal.as_f64()) else {
        return false;
    };
    match op {
        CompareOp::Lt => a < b,
        CompareOp::Le => a <= b,
        CompareOp::Gt => a > b,
        CompareOp::Ge => a >= b,
        CompareOp::Eq => a == b,
        CompareOp::Ne => a != b,
    }
}
