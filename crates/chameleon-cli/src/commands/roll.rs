//! One-shot turn: deal a topic, roll both dice, print the dice and exit.

use std::io::{self, Write};

use chameleon_core::GameConfig;
use serde::Serialize;

use crate::render;

/// Machine-readable result of a one-shot roll.
#[derive(Serialize)]
struct RollOutput<'a> {
    topic: &'a str,
    items: &'a [String],
    d6: u32,
    d8: u32,
}

pub fn run(config: GameConfig, json: bool) -> Result<(), String> {
    let mut game = super::new_game(config)?;

    game.reshuffle_topic()
        .map_err(|e| format!("failed to deal a new topic: {e}"))?;
    let (d6, d8) = game.roll_both_dice();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        let state = game.state();
        let output = RollOutput {
            topic: &state.current_topic,
            items: &state.current_items,
            d6,
            d8,
        };
        let text = serde_json::to_string_pretty(&output).map_err(|e| e.to_string())?;
        writeln!(out, "{text}").map_err(|e| e.to_string())?;
    } else {
        render::dice(&mut out, game.state(), Some(d6), Some(d8)).map_err(|e| e.to_string())?;
    }

    Ok(())
}
