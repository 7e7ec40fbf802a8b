use std::io;

use anyhow::Context;
use city_trunfo::console::logging;
use city_trunfo::{CardSlot, Session, TrunfoConfig};

fn main() -> anyhow::Result<()> {
    logging::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = Session::new(stdin.lock(), stdout.lock(), TrunfoConfig::default());

    let report = session.run().context("game session ended before completion")?;
    tracing::info!(rounds = report.rounds.len(), ties = report.ties(), "game over");
    for slot in CardSlot::ALL {
        let code = &report.card(slot).code;
        tracing::info!(%slot, %code, wins = report.wins(slot), "final tally");
    }

    Ok(())
}
