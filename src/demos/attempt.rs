//! Attempt exercise: capture failures as values and chain past them

use super::Output;
use crate::attempt::{Attempt, Fault};
use anyhow::anyhow;
use std::cell::Cell;
use std::io;

fn parse_number(text: &str) -> Attempt<i64> {
    Attempt::new(|| Ok(text.trim().parse::<i64>()?))
}

fn divide(
    dividend: i64,
    divisor: i64,
) -> Attempt<i64> {
    Attempt::new(move || {
        dividend
            .checked_div(divisor)
            .ok_or_else(|| anyhow!("cannot divide {} by {}", dividend, divisor))
    })
}

pub(super) fn run(out: &mut Output<'_>) -> io::Result<()> {
    out.heading("Attempt")?;

    let doubled = Attempt::pure(5).and_then(|x| Attempt::new(move || Ok(x * 2)));
    out.show("pure(5).and_then(x => x * 2)", &doubled)?;

    out.show("parse \"42\"", parse_number("42"))?;
    out.show("parse \"forty-two\"", parse_number("forty-two"))?;

    let quotient = parse_number("84").and_then(|n| divide(n, 2));
    out.show("parse \"84\" then divide by 2", &quotient)?;
    let by_zero = parse_number("84").and_then(|n| divide(n, 0));
    out.show("parse \"84\" then divide by 0", &by_zero)?;
    out.blank()?;

    out.line("a failure is never chained:")?;
    let invoked = Cell::new(false);
    let boom = Attempt::<i64>::new(|| Err(anyhow!("boom"))).and_then(|x| {
        invoked.set(true);
        Attempt::pure(x + 1)
    });
    out.show("  new(raise boom).and_then(x => x + 1)", &boom)?;
    out.show("  function invoked", invoked.get())?;
    out.blank()?;

    out.line("recovering:")?;
    let recovered = by_zero.clone().recover(|fault: &Fault| -(fault.message().len() as i64));
    out.show("  divide by 0, recover with -len(message)", &recovered)?;
    let fallback = parse_number("oops").or_else(|_| parse_number("7"));
    out.show("  parse \"oops\" or else parse \"7\"", &fallback)?;
    let even = parse_number("9").filter(|n| n % 2 == 0, "not even");
    out.show("  parse \"9\" filtered to even numbers", &even)?;
    out.blank()?;

    out.line("monad laws on sample values:")?;
    let half = |x: i64| divide(x, 2);
    let inverse = |x: i64| divide(100, x);
    for value in [4, 0] {
        let left = Attempt::pure(value).and_then(inverse) == inverse(value);
        out.show(&format!("  left identity for {}", value), left)?;
    }
    for attempt in [Attempt::pure(8), by_zero.clone()] {
        let right = attempt.clone().and_then(Attempt::pure) == attempt;
        let assoc = attempt.clone().and_then(half).and_then(inverse)
            == attempt.clone().and_then(|x| half(x).and_then(inverse));
        out.show(&format!("  right identity for {}", attempt), right)?;
        out.show(&format!("  associativity for {}", attempt), assoc)?;
    }

    Ok(())
}
