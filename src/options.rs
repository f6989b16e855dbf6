//! Game configuration options.

extern crate alloc;

use alloc::string::String;
use alloc::string::ToString;

/// Configuration options for a Twenty-Four game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use tfrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_player_one("Dillan")
///     .with_player_two("Shan");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Display name of the first player.
    pub player_one: String,
    /// Display name of the second player.
    pub player_two: String,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            player_one: "Player One".to_string(),
            player_two: "Player Two".to_string(),
        }
    }
}

impl GameOptions {
    /// Sets the first player's display name.
    ///
    /// # Example
    ///
    /// ```
    /// use tfrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_one("Dillan");
    /// assert_eq!(options.player_one, "Dillan");
    /// ```
    #[must_use]
    pub fn with_player_one(mut self, name: impl Into<String>) -> Self {
        self.player_one = name.into();
        self
    }

    /// Sets the second player's display name.
    ///
    /// # Example
    ///
    /// ```
    /// use tfrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_two("Shan");
    /// assert_eq!(options.player_two, "Shan");
    /// ```
    #[must_use]
    pub fn with_player_two(mut self, name: impl Into<String>) -> Self {
        self.player_two = name.into();
        self
    }
}
