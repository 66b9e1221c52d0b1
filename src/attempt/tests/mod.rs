//! Attempt 模块单元测试
//!
//! 覆盖构造、链式调用、错误捕获以及单子定律

use crate::attempt::{Attempt, Fault};
use anyhow::anyhow;
use std::cell::Cell;

#[cfg(test)]
mod construct_tests {
    use super::*;

    #[test]
    fn test_new_success() {
        let attempt = Attempt::new(|| Ok(21 * 2));
        assert_eq!(attempt, Attempt::Success(42));
        assert!(attempt.is_success());
        assert!(!attempt.is_failure());
    }

    #[test]
    fn test_new_captures_error() {
        let attempt: Attempt<i32> = Attempt::new(|| Err(anyhow!("boom")));
        assert_eq!(attempt, Attempt::Failure(Fault::new("boom")));
    }

    #[test]
    fn test_new_captures_std_error_through_question_mark() {
        let attempt = Attempt::new(|| {
            let n: i32 = "not a number".parse()?;
            Ok(n)
        });
        let fault = attempt.failure().unwrap();
        assert_eq!(fault.message(), "invalid digit found in string");
    }

    #[test]
    fn test_new_keeps_context_chain() {
        use anyhow::Context;

        let attempt: Attempt<u8> = Attempt::new(|| {
            let n: u8 = "300".parse().context("reading byte")?;
            Ok(n)
        });
        let fault = attempt.failure().unwrap();
        assert!(fault.message().starts_with("reading byte: "));
    }

    #[test]
    fn test_new_captures_panic() {
        let attempt: Attempt<i32> = Attempt::new(|| panic!("exploded"));
        assert_eq!(attempt, Attempt::Failure(Fault::new("exploded")));
    }

    #[test]
    fn test_new_captures_formatted_panic() {
        let attempt: Attempt<i32> = Attempt::new(|| panic!("bad index {}", 7));
        assert_eq!(attempt.failure().unwrap().message(), "bad index 7");
    }

    #[test]
    fn test_new_evaluates_exactly_once() {
        let calls = Cell::new(0);
        let attempt = Attempt::new(|| {
            calls.set(calls.get() + 1);
            Ok("done")
        });
        assert_eq!(calls.get(), 1);
        assert_eq!(attempt, Attempt::Success("done"));
    }

    #[test]
    fn test_of_captures_panic() {
        let values: Vec<i32> = Vec::new();
        let attempt = Attempt::of(|| values[3]);
        assert!(attempt.is_failure());
        assert!(attempt
            .failure()
            .unwrap()
            .message()
            .contains("index out of bounds"));
    }

    #[test]
    fn test_failure_of() {
        let attempt: Attempt<()> = Attempt::failure_of("nope");
        assert_eq!(attempt.failure(), Some(Fault::new("nope")));
    }
}

#[cfg(test)]
mod chain_tests {
    use super::*;

    #[test]
    fn test_success_chain_doubles() {
        let attempt = Attempt::pure(5).and_then(|x| Attempt::new(|| Ok(x * 2)));
        assert_eq!(attempt, Attempt::Success(10));
    }

    #[test]
    fn test_failure_short_circuits() {
        let called = Cell::new(false);
        let attempt = Attempt::<i32>::new(|| Err(anyhow!("boom"))).and_then(|x| {
            called.set(true);
            Attempt::pure(x + 1)
        });
        assert_eq!(attempt, Attempt::Failure(Fault::new("boom")));
        assert!(!called.get());
    }

    #[test]
    fn test_panic_in_chain_becomes_failure() {
        let attempt: Attempt<i32> = Attempt::pure(1).and_then(|_| panic!("inside chain"));
        assert_eq!(attempt, Attempt::Failure(Fault::new("inside chain")));
    }

    #[test]
    fn test_error_in_chain_becomes_failure() {
        let attempt = Attempt::pure(0).and_then(|d: i32| {
            Attempt::new(|| 10i32.checked_div(d).ok_or_else(|| anyhow!("division by zero")))
        });
        assert_eq!(attempt.failure().unwrap().message(), "division by zero");
    }

    #[test]
    fn test_map() {
        assert_eq!(Attempt::pure(3).map(|x| x + 1), Attempt::Success(4));
        let failed: Attempt<i32> = Attempt::failure_of("x");
        assert_eq!(failed.map(|x| x + 1), Attempt::Failure(Fault::new("x")));
    }

    #[test]
    fn test_map_captures_panic() {
        let attempt = Attempt::pure("abc").map(|s| s.parse::<i32>().unwrap());
        assert!(attempt.is_failure());
    }

    #[test]
    fn test_flatten() {
        let nested = Attempt::pure(Attempt::pure(1));
        assert_eq!(nested.flatten(), Attempt::Success(1));

        let inner_failure: Attempt<Attempt<i32>> = Attempt::pure(Attempt::failure_of("inner"));
        assert_eq!(inner_failure.flatten(), Attempt::Failure(Fault::new("inner")));
    }
}

#[cfg(test)]
mod recovery_tests {
    use super::*;

    #[test]
    fn test_recover_replaces_failure() {
        let attempt: Attempt<usize> = Attempt::failure_of("four");
        assert_eq!(attempt.recover(|f| f.message().len()), Attempt::Success(4));
    }

    #[test]
    fn test_recover_keeps_success() {
        assert_eq!(Attempt::pure(1).recover(|_| 2), Attempt::Success(1));
    }

    #[test]
    fn test_recover_captures_panic() {
        let attempt: Attempt<i32> = Attempt::failure_of("first");
        let recovered = attempt.recover(|_| panic!("second"));
        assert_eq!(recovered, Attempt::Failure(Fault::new("second")));
    }

    #[test]
    fn test_or_else() {
        let attempt: Attempt<i32> = Attempt::failure_of("first");
        assert_eq!(attempt.or_else(|_| Attempt::pure(9)), Attempt::Success(9));
        assert_eq!(
            Attempt::pure(1).or_else(|_| Attempt::pure(9)),
            Attempt::Success(1)
        );
    }

    #[test]
    fn test_filter() {
        assert_eq!(
            Attempt::pure(4).filter(|x| x % 2 == 0, "odd"),
            Attempt::Success(4)
        );
        assert_eq!(
            Attempt::pure(3).filter(|x| x % 2 == 0, "odd"),
            Attempt::Failure(Fault::new("odd"))
        );
    }

    #[test]
    fn test_get_or_else() {
        assert_eq!(Attempt::pure(1).get_or_else(0), 1);
        assert_eq!(Attempt::<i32>::failure_of("x").get_or_else(0), 0);
    }
}

#[cfg(test)]
mod conversion_tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let ok: Result<i32, std::fmt::Error> = Ok(1);
        assert_eq!(Attempt::from(ok), Attempt::Success(1));

        let err: Result<i32, std::fmt::Error> = Err(std::fmt::Error);
        assert!(Attempt::from(err).is_failure());
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Attempt::pure(1).into_result(), Ok(1));
        assert_eq!(
            Attempt::<i32>::failure_of("bad").into_result(),
            Err(Fault::new("bad"))
        );
    }

    #[test]
    fn test_as_ref() {
        let attempt = Attempt::pure(String::from("hi"));
        assert_eq!(attempt.as_ref().map(|s| s.len()), Attempt::Success(2));
        assert!(attempt.is_success());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Attempt::pure(10)), "Success(10)");
        assert_eq!(
            format!("{}", Attempt::<i32>::failure_of("boom")),
            "Failure(boom)"
        );
    }

    #[test]
    fn test_fault_from_unknown_panic_payload() {
        let fault = Fault::from_panic(Box::new(17u32));
        assert_eq!(fault.message(), "unknown panic payload");
    }
}

/// Monad laws checked with proptest
#[cfg(test)]
mod law_tests {
    use super::*;
    use proptest::prelude::*;

    fn halve(x: i64) -> Attempt<i64> {
        Attempt::new(move || {
            if x % 2 == 0 {
                Ok(x / 2)
            } else {
                Err(anyhow!("{} is odd", x))
            }
        })
    }

    fn checked_square(x: i64) -> Attempt<i64> {
        Attempt::new(move || x.checked_mul(x).ok_or_else(|| anyhow!("overflow")))
    }

    fn attempt_strategy() -> impl Strategy<Value = Attempt<i64>> {
        prop_oneof![
            any::<i64>().prop_map(Attempt::Success),
            "[a-z]{1,8}".prop_map(|m| Attempt::Failure(Fault::new(m))),
        ]
    }

    proptest! {
        #[test]
        fn left_identity(v in any::<i64>()) {
            prop_assert_eq!(Attempt::pure(v).and_then(halve), halve(v));
            prop_assert_eq!(Attempt::pure(v).and_then(checked_square), checked_square(v));
        }

        #[test]
        fn right_identity(r in attempt_strategy()) {
            prop_assert_eq!(r.clone().and_then(Attempt::pure), r);
        }

        #[test]
        fn associativity(r in attempt_strategy()) {
            let left = r.clone().and_then(halve).and_then(checked_square);
            let right = r.and_then(|x| halve(x).and_then(checked_square));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn failure_is_never_chained(message in "[a-z]{1,8}") {
            let failed: Attempt<i64> = Attempt::failure_of(message.clone());
            let chained = failed.and_then(|_| -> Attempt<i64> { unreachable!() });
            prop_assert_eq!(chained, Attempt::Failure(Fault::new(message)));
        }
    }
}
