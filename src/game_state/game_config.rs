/// Per-game settings supplied by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Name of the player owning the light pieces. Light moves first.
    pub light_name: String,
    pub dark_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            light_name: "Light".to_string(),
            dark_name: "Dark".to_string(),
        }
    }
}
