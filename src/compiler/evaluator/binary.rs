use crate::{
    ast::BinaryOperator,
    compiler::evaluator::core::{EvalResult, Environment},
    error::EvalError,
};

impl Environment {
    /// Applies an arithmetic operator to two evaluated operands.
    ///
    /// Uses 32-bit signed arithmetic. Division truncates toward zero.
    /// Results that do not fit in an `i32` are reported instead of wrapping.
    ///
    /// # Example
    /// ```
    /// use letc::{ast::BinaryOperator, compiler::evaluator::Environment, error::EvalError};
    ///
    /// assert_eq!(Environment::eval_binary_op(BinaryOperator::Div, -7, 2), Ok(-3));
    /// assert_eq!(Environment::eval_binary_op(BinaryOperator::Div, 1, 0),
    ///            Err(EvalError::DivisionByZero));
    /// ```
    pub fn eval_binary_op(op: BinaryOperator, left: i32, right: i32) -> EvalResult<i32> {
        let result = match op {
            BinaryOperator::Add => left.checked_add(right),
            BinaryOperator::Sub => left.checked_sub(right),
            BinaryOperator::Mul => left.checked_mul(right),
            BinaryOperator::Div => {
                if right == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                left.checked_div(right)
            },
        };

        result.ok_or(EvalError::Overflow { left, op, right })
    }
}
