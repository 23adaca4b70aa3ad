//! [`CardStore`]: the process-wide card collection and id counter.

use std::sync::Arc;

use tokio::sync::Mutex;

use common::protocol::Card;
use common::ApiError;

/// Cards plus the next-id counter, guarded together so every
/// read-modify-write is atomic with respect to other requests.
struct Inner {
    cards: Vec<Card>,
    next_id: i64,
}

/// Shared, mutex-guarded store of live cards.
///
/// The sequence preserves insertion order: seed order first, then append
/// order for created cards. Ids are assigned from a monotonically increasing
/// counter and are never reused, even after a delete. A single
/// `tokio::sync::Mutex` is held for the duration of each operation, so no
/// two mutations can interleave.
#[derive(Clone)]
pub struct CardStore {
    inner: Arc<Mutex<Inner>>,
}

impl CardStore {
    /// Create a store pre-populated with the two seed cards, counter at 3.
    pub fn seeded() -> Self {
        let cards = vec![
            Card {
                id: 1,
                suit: "Hearts".into(),
                value: "Ace".into(),
            },
            Card {
                id: 2,
                suit: "Spades".into(),
                value: "King".into(),
            },
        ];
        Self {
            inner: Arc::new(Mutex::new(Inner { cards, next_id: 3 })),
        }
    }

    /// Snapshot of the full live sequence, in store order.
    pub async fn list(&self) -> Vec<Card> {
        self.inner.lock().await.cards.clone()
    }

    /// Append a new card, consuming the next id.
    pub async fn create(&self, suit: String, value: String) -> Card {
        let mut inner = self.inner.lock().await;
        let card = Card {
            id: inner.next_id,
            suit,
            value,
        };
        inner.next_id += 1;
        inner.cards.push(card.clone());
        card
    }

    /// Look up a live card by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no live card has that id.
    pub async fn get(&self, id: i64) -> Result<Card, ApiError> {
        let inner = self.inner.lock().await;
        inner
            .cards
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    /// Overwrite the card with `id` wholesale, keeping its id and position.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no live card has that id.
    pub async fn replace(&self, id: i64, suit: String, value: String) -> Result<Card, ApiError> {
        let mut inner = self.inner.lock().await;
        let slot = inner
            .cards
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ApiError::NotFound)?;
        *slot = Card { id, suit, value };
        Ok(slot.clone())
    }

    /// Overwrite only the fields that are present; absent fields are left
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no live card has that id.
    pub async fn patch(
        &self,
        id: i64,
        suit: Option<String>,
        value: Option<String>,
    ) -> Result<Card, ApiError> {
        let mut inner = self.inner.lock().await;
        let card = inner
            .cards
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ApiError::NotFound)?;
        if let Some(suit) = suit {
            card.suit = suit;
        }
        if let Some(value) = value {
            card.value = value;
        }
        Ok(card.clone())
    }

    /// Remove the card with `id` from the sequence and return it.
    ///
    /// The id is retired permanently; the counter is not decremented.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no live card has that id.
    pub async fn remove(&self, id: i64) -> Result<Card, ApiError> {
        let mut inner = self.inner.lock().await;
        let idx = inner
            .cards
            .iter()
            .position(|c| c.id == id)
            .ok_or(ApiError::NotFound)?;
        Ok(inner.cards.remove(idx))
    }
}

impl Default for CardStore {
    fn default() -> Self {
        Self::seeded()
    }
}
