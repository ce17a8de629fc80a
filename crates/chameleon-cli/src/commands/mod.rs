pub mod interactive;
pub mod roll;

use chameleon_core::{Catalog, ChameleonGame, GameConfig};

/// Validate the built-in catalog and start a fresh session.
fn new_game(config: GameConfig) -> Result<ChameleonGame, String> {
    Catalog::builtin()
        .validate()
        .map_err(|e| format!("invalid topic catalog: {e}"))?;
    ChameleonGame::new(config).map_err(|e| format!("failed to start session: {e}"))
}
