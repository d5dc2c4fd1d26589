//! Session configuration options.

/// How a session draws the hand that follows the first card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DrawPolicy {
    /// Draw one card at a time. Running out part way discards the cards
    /// already drawn.
    #[default]
    Destructive,
    /// Check the remaining count first and draw nothing if it is too small.
    AllOrNothing,
}

/// Session configuration.
///
/// # Example
///
/// ```
/// use deckrs::{DrawPolicy, SessionOptions};
///
/// let options = SessionOptions::default()
///     .with_hand_size(7)
///     .with_draw_policy(DrawPolicy::AllOrNothing);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Number of cards drawn as a hand after the first card.
    pub hand_size: usize,
    /// How the hand is drawn.
    pub draw_policy: DrawPolicy,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            hand_size: 5,
            draw_policy: DrawPolicy::Destructive,
        }
    }
}

impl SessionOptions {
    /// Sets the hand size.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_hand_size(3);
    /// assert_eq!(options.hand_size, 3);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the draw policy for the hand.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DrawPolicy, SessionOptions};
    ///
    /// let options = SessionOptions::default().with_draw_policy(DrawPolicy::AllOrNothing);
    /// assert_eq!(options.draw_policy, DrawPolicy::AllOrNothing);
    /// ```
    #[must_use]
    pub const fn with_draw_policy(mut self, policy: DrawPolicy) -> Self {
        self.draw_policy = policy;
        self
    }
}
