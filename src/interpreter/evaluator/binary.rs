use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::Position,
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates a binary operation of the form `Value <Operator> Value`.
    ///
    /// Equality (`==`, `/=`) is defined across all value kinds using
    /// structural equality; values of different kinds are simply unequal.
    /// Ordering comparisons and arithmetic require both operands to be of
    /// the same numeric kind, with no implicit coercion between
    /// integers and floats, and fail with `TypeMismatch` otherwise.
    ///
    /// # Parameters
    /// - `op`: The binary operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `pos`: Source position used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use quando::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, lexer::Position, value::Value},
    /// };
    ///
    /// let a = Value::Int(3);
    /// let b = Value::Int(5);
    ///
    /// let result = Context::eval_binary(BinaryOperator::Less, &a, &b, Position::default());
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       pos: Position)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };

        match op {
            Equal => Ok(Value::Bool(left == right)),
            NotEqual => Ok(Value::Bool(left != right)),
            Less | Greater | LessEqual | GreaterEqual => {
                Self::eval_ordering(op, left, right, pos)
            },
            Add | Sub | Mul | Div => Self::eval_arithmetic(op, left, right, pos),
        }
    }

    /// Evaluates an ordering comparison (`<`, `>`, `<=`, `>=`).
    ///
    /// Both operands must be integers, or both floats.
    fn eval_ordering(op: BinaryOperator,
                     left: &Value,
                     right: &Value,
                     pos: Position)
                     -> EvalResult<Value> {
        use BinaryOperator::{Greater, GreaterEqual, Less, LessEqual};

        let verdict = match (left, right) {
            (Value::Int(a), Value::Int(b)) => match op {
                Less => a < b,
                Greater => a > b,
                LessEqual => a <= b,
                GreaterEqual => a >= b,
                _ => unreachable!(),
            },
            (Value::Float(a), Value::Float(b)) => match op {
                Less => a < b,
                Greater => a > b,
                LessEqual => a <= b,
                GreaterEqual => a >= b,
                _ => unreachable!(),
            },
            _ => {
                return Err(RuntimeError::TypeMismatch { details: format!("{} {op} {}",
                                                                         left.kind_name(),
                                                                         right.kind_name()),
                                                        pos });
            },
        };

        Ok(Value::Bool(verdict))
    }

    /// Evaluates an arithmetic operation (`+`, `-`, `*`, `/`).
    ///
    /// Integer arithmetic is checked: overflow reports `Overflow` and
    /// division by zero reports `DivisionByZero`. Float division by zero
    /// also reports `DivisionByZero` rather than producing an infinity.
    fn eval_arithmetic(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       pos: Position)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        match (left, right) {
            (Value::Int(a), Value::Int(b)) => match op {
                Add => a.checked_add(*b)
                        .map(Value::Int)
                        .ok_or(RuntimeError::Overflow { pos }),
                Sub => a.checked_sub(*b)
                        .map(Value::Int)
                        .ok_or(RuntimeError::Overflow { pos }),
                Mul => a.checked_mul(*b)
                        .map(Value::Int)
                        .ok_or(RuntimeError::Overflow { pos }),
                Div => {
                    if *b == 0 {
                        Err(RuntimeError::DivisionByZero { pos })
                    } else {
                        a.checked_div(*b)
                         .map(Value::Int)
                         .ok_or(RuntimeError::Overflow { pos })
                    }
                },
                _ => unreachable!(),
            },

            (Value::Float(a), Value::Float(b)) => {
                if matches!(op, Div) && *b == 0.0 {
                    return Err(RuntimeError::DivisionByZero { pos });
                }

                Ok(Value::Float(match op {
                                    Add => a + b,
                                    Sub => a - b,
                                    Mul => a * b,
                                    Div => a / b,
                                    _ => unreachable!(),
                                }))
            },

            _ => Err(RuntimeError::TypeMismatch { details: format!("{} {op} {}",
                                                                   left.kind_name(),
                                                                   right.kind_name()),
                                                  pos }),
        }
    }
}
