//! Lazy exercise: call-by-need evaluation with a visible side effect

use super::Output;
use crate::lazy::Lazy;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts how often deferred computations actually run
#[derive(Default)]
struct Evaluations(Arc<AtomicUsize>);

impl Evaluations {
    fn expensive(
        &self,
        value: i64,
    ) -> Lazy<i64> {
        let counter = Arc::clone(&self.0);
        Lazy::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            value
        })
    }

    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

pub(super) fn run(out: &mut Output<'_>) -> io::Result<()> {
    out.heading("Lazy")?;

    let evaluations = Evaluations::default();
    let answer = evaluations.expensive(42);
    out.show("created, evaluated", answer.is_evaluated())?;
    out.show("evaluations after construction", evaluations.count())?;
    out.show("first force", answer.force())?;
    out.show("second force", answer.force())?;
    out.show("evaluations after two forces", evaluations.count())?;
    out.blank()?;

    out.line("by-name chaining hands over the computation, not its value:")?;
    let evaluations = Evaluations::default();
    let source = evaluations.expensive(4);
    let plus_one = source.flat_map(|x| Lazy::new(move || x.force() + 1));
    let times_ten = plus_one.flat_map(|y| Lazy::new(move || y.force() * 10));
    out.show("  evaluations before forcing", evaluations.count())?;
    out.show("  (4 + 1) * 10", times_ten.force())?;
    out.show("  evaluations after forcing the final result", evaluations.count())?;
    out.show("  source forced as a side effect", source.is_evaluated())?;

    let evaluations = Evaluations::default();
    let ignored = evaluations.expensive(1_000);
    let constant = ignored.flat_map(|_| Lazy::evaluated(0));
    out.show("  chain that never forces its input", constant.force())?;
    out.show("  evaluations", evaluations.count())?;
    out.blank()?;

    out.line("value chaining shares one cache between chains:")?;
    let evaluations = Evaluations::default();
    let base = evaluations.expensive(3);
    let squared = base.and_then(|x| Lazy::evaluated(x * x));
    let described = base.map(|x| format!("base is {}", x));
    out.show("  squared", squared.force())?;
    out.show("  described", described.force())?;
    out.show("  evaluations", evaluations.count())?;
    out.show("  base", format!("{:?}", base))?;

    Ok(())
}
