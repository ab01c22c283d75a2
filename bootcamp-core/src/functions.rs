//! Plain functions, nested helpers and functions as values.
//!
//! Arithmetic is checked: every helper returns `None` on overflow.

pub fn add(a: i64, b: i64) -> Option<i64> {
    a.checked_add(b)
}

pub fn multiply(a: i64, b: i64) -> Option<i64> {
    a.checked_mul(b)
}

pub fn sum(numbers: &[i64]) -> Option<i64> {
    numbers.iter().try_fold(0i64, |total, n| total.checked_add(*n))
}

/// Double the input, then add five.
pub fn process_number(number: i64) -> Option<i64> {
    fn double(value: i64) -> Option<i64> {
        value.checked_mul(2)
    }
    fn add_five(value: i64) -> Option<i64> {
        value.checked_add(5)
    }
    double(number).and_then(add_five)
}

/// Apply a binary operation supplied by the caller.
pub fn calculate(a: i64, b: i64, operation: impl Fn(i64, i64) -> Option<i64>) -> Option<i64> {
    operation(a, b)
}

pub fn make_adder(amount: i64) -> impl Fn(i64) -> Option<i64> {
    move |number| number.checked_add(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn basic_arithmetic_functions() {
        assert_eq!(add(2, 3), Some(5));
        assert_eq!(multiply(2, 3), Some(6));
        assert_eq!(sum(&[1, 2, 3]), Some(6));
        assert_eq!(sum(&[]), Some(0));
    }

    #[test_case(i64::MAX, 1 => None; "max plus one")]
    #[test_case(i64::MIN, -1 => None; "min minus one")]
    #[test_case(i64::MAX, i64::MIN => Some(-1); "extremes cancel")]
    fn add_is_checked(a: i64, b: i64) -> Option<i64> {
        add(a, b)
    }

    #[test_case(i64::MAX, 2 => None; "max doubled")]
    #[test_case(i64::MIN, -1 => None; "min negated")]
    fn multiply_is_checked(a: i64, b: i64) -> Option<i64> {
        multiply(a, b)
    }

    #[test]
    fn sum_reports_overflow() {
        assert_eq!(sum(&[i64::MAX, 1]), None);
        assert_eq!(sum(&[i64::MAX, 1, -1]), None);
        assert_eq!(sum(&[i64::MAX, -1, 1]), Some(i64::MAX));
    }

    #[test_case(11 => Some(27))]
    #[test_case(i64::MAX => None; "double overflows")]
    #[test_case(i64::MAX / 2 => None; "add five overflows")]
    #[test_case(i64::MIN / 2 => Some(i64::MIN + 5); "lowest doubled")]
    fn nested_helpers(number: i64) -> Option<i64> {
        process_number(number)
    }

    #[test]
    fn functions_as_values() {
        let operation: fn(i64, i64) -> Option<i64> = multiply;
        assert_eq!(calculate(2, 3, operation), Some(6));
        assert_eq!(calculate(2, 3, add), Some(5));
        assert_eq!(calculate(7, 3, |a, b| a.checked_sub(b)), Some(4));
        assert_eq!(calculate(i64::MAX, 2, multiply), None);
    }

    #[test]
    fn adder_captures_amount() {
        let add_five = make_adder(5);
        assert_eq!(add_five(10), Some(15));
        assert_eq!(make_adder(-2)(2), Some(0));
        assert_eq!(add_five(i64::MAX), None);
    }
}
