//! The playing agent: read a snapshot, think, print a line, repeat.
//!
//! Stdout belongs to the referee; all diagnostics go to stderr.

use std::io::{self, Write};

use anyhow::{Context, Result};

use locm_agent::draft::DraftPicker;
use locm_agent::engine::Side;
use locm_agent::protocol::{format_pick, format_turn, read_snapshot};
use locm_agent::search::{Planner, PlannerConfig};

fn main() -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let mut picker = DraftPicker::new();
    let mut planner = Planner::from_entropy(PlannerConfig::default());

    while let Some(snapshot) = read_snapshot(&mut input)? {
        let line = if snapshot.is_draft() {
            let pick = picker.pick(&snapshot.hand());
            format_pick(pick)
        } else {
            let turn = planner.plan(&snapshot.state, Side::Me);
            let stats = planner.stats();
            eprintln!(
                "{} rollouts in {}us ({:.0}/s), {:.1} actions each, best {}",
                stats.rollouts,
                stats.time_us,
                stats.rollouts_per_second(),
                stats.actions_per_rollout(),
                stats.best_score,
            );
            format_turn(&turn, &snapshot.state)
        };

        writeln!(output, "{line}").context("writing turn")?;
        output.flush().context("flushing turn")?;
    }

    Ok(())
}
