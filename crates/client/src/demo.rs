//! Scripted walkthrough of every action and of save/load/reset.

use anyhow::{Context, Result};
use game_core::{ExecutionOutcome, PlayerState};
use runtime::{RuntimeConfig, Session};

pub fn run(config: RuntimeConfig) -> Result<()> {
    println!("=== DEMO START ===");

    let mut session = Session::open(config).context("failed to open session")?;
    println!("Initial player: {}", describe(&session.state().player));

    // Walk to the potion and pick it up
    report("move to (2, 2)", session.move_player(2, 2));
    report("pick up p1", session.pickup("p1"));

    // Hurt the player so the potion has something to restore
    session.set_player_health(50)?;
    report("use p1", session.use_item("p1"));
    println!("After potion: {}", describe(&session.state().player));

    report("use p1 again", session.use_item("p1"));
    report("walk off the map", session.move_player(-5, 0));
    report("open d1", session.interact("d1"));

    session.save().context("failed to save game")?;
    let save_path = session.config().save_path.clone();
    println!("Game saved to {}", save_path.display());

    session
        .load_from(&save_path)
        .with_context(|| format!("failed to load {}", save_path.display()))?;
    println!("Loaded player: {}", describe(&session.state().player));
    if let Some(door) = session.state().prop(&"d1".into()) {
        println!("Loaded door state: {}", door.state_label());
    }

    report("reset", session.reset());
    println!("After reset: {}", describe(&session.state().player));

    println!("=== DEMO END ===");
    Ok(())
}

fn report(step: &str, result: runtime::Result<ExecutionOutcome>) {
    match result {
        Ok(outcome) => println!("[ok] {step}: {:?}", outcome.result),
        Err(error) => println!("[rejected] {step}: {error} ({})", error.error_code()),
    }
}

fn describe(player: &PlayerState) -> String {
    let inventory: Vec<&str> = player.inventory.iter().map(|id| id.as_str()).collect();
    format!(
        "position {} health {} inventory {:?}",
        player.position, player.health, inventory
    )
}
