//! Binary arithmetic over the fixed operator set.

use crate::core::{CalcError, CalcResult};

/// Type-safe operator enum - compile-time guarantee of valid operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Modulo (%)
    Modulo,
}

impl Operation {
    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
        }
    }

    /// Returns the precedence level for operator ordering (higher binds first)
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide | Self::Modulo => 2,
        }
    }

    /// Maps an input character to its operator, if it is one
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '%' => Some(Self::Modulo),
            _ => None,
        }
    }

    /// Applies the operation to two operands.
    ///
    /// Division and modulo by zero are rejected before the operation runs;
    /// any non-finite result is rejected after it.
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
            Self::Modulo => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a % b
            }
        };

        if result.is_nan() {
            Err(CalcError::InvalidResult("NaN".into()))
        } else if result.is_infinite() {
            Err(CalcError::Overflow)
        } else {
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ===== Operation enum tests =====

    #[test]
    fn test_operation_symbols() {
        assert_eq!(Operation::Add.symbol(), "+");
        assert_eq!(Operation::Subtract.symbol(), "-");
        assert_eq!(Operation::Multiply.symbol(), "*");
        assert_eq!(Operation::Divide.symbol(), "/");
        assert_eq!(Operation::Modulo.symbol(), "%");
    }

    #[test]
    fn test_operation_precedence() {
        assert_eq!(Operation::Add.precedence(), 1);
        assert_eq!(Operation::Subtract.precedence(), 1);
        assert_eq!(Operation::Multiply.precedence(), 2);
        assert_eq!(Operation::Divide.precedence(), 2);
        assert_eq!(Operation::Modulo.precedence(), 2);
    }

    #[test]
    fn test_operation_from_char() {
        assert_eq!(Operation::from_char('+'), Some(Operation::Add));
        assert_eq!(Operation::from_char('-'), Some(Operation::Subtract));
        assert_eq!(Operation::from_char('*'), Some(Operation::Multiply));
        assert_eq!(Operation::from_char('/'), Some(Operation::Divide));
        assert_eq!(Operation::from_char('%'), Some(Operation::Modulo));
        assert_eq!(Operation::from_char('.'), None);
        assert_eq!(Operation::from_char('7'), None);
    }

    // ===== apply tests =====

    #[test]
    fn test_apply_add() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operation::Add.apply(-2.0, 5.0), Ok(3.0));
    }

    #[test]
    fn test_apply_subtract() {
        assert_eq!(Operation::Subtract.apply(5.0, 3.0), Ok(2.0));
        assert_eq!(Operation::Subtract.apply(3.0, 5.0), Ok(-2.0));
    }

    #[test]
    fn test_apply_multiply() {
        assert_eq!(Operation::Multiply.apply(6.0, 7.0), Ok(42.0));
        assert_eq!(Operation::Multiply.apply(5.0, -2.0), Ok(-10.0));
    }

    #[test]
    fn test_apply_divide() {
        assert_eq!(Operation::Divide.apply(12.0, 4.0), Ok(3.0));
        assert_eq!(Operation::Divide.apply(7.0, 2.0), Ok(3.5));
    }

    #[test]
    fn test_apply_divide_by_zero() {
        assert_eq!(
            Operation::Divide.apply(10.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_apply_modulo() {
        assert_eq!(Operation::Modulo.apply(7.0, 3.0), Ok(1.0));
        assert_eq!(Operation::Modulo.apply(17.0, 5.0), Ok(2.0));
    }

    #[test]
    fn test_apply_modulo_by_zero() {
        assert_eq!(
            Operation::Modulo.apply(10.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_apply_overflow_is_rejected() {
        assert_eq!(
            Operation::Multiply.apply(f64::MAX, 2.0),
            Err(CalcError::Overflow)
        );
    }

    #[test]
    fn test_apply_zero_divided_by_anything() {
        assert_eq!(Operation::Divide.apply(0.0, 5.0), Ok(0.0));
    }

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e10f64..1e10f64, b in -1e10f64..1e10f64) {
            let r1 = Operation::Add.apply(a, b);
            let r2 = Operation::Add.apply(b, a);
            match (r1, r2) {
                (Ok(v1), Ok(v2)) => prop_assert!((v1 - v2).abs() < 1e-10),
                (Err(_), Err(_)) => {}
                _ => prop_assert!(false, "commutativity violated"),
            }
        }

        #[test]
        fn prop_multiply_commutative(a in -1e5f64..1e5f64, b in -1e5f64..1e5f64) {
            let r1 = Operation::Multiply.apply(a, b);
            let r2 = Operation::Multiply.apply(b, a);
            match (r1, r2) {
                (Ok(v1), Ok(v2)) => prop_assert!((v1 - v2).abs() < 1e-10),
                (Err(_), Err(_)) => {}
                _ => prop_assert!(false, "commutativity violated"),
            }
        }

        #[test]
        fn prop_apply_never_returns_non_finite(
            a in proptest::num::f64::NORMAL,
            b in proptest::num::f64::NORMAL,
            op_idx in 0usize..5,
        ) {
            let op = [
                Operation::Add,
                Operation::Subtract,
                Operation::Multiply,
                Operation::Divide,
                Operation::Modulo,
            ][op_idx];
            if let Ok(v) = op.apply(a, b) {
                prop_assert!(v.is_finite());
            }
        }
    }
}
