use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct Tier {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub perks: [&'static str; 3],
}

pub const TIERS: &[Tier] = &[
    Tier {
        id: "day",
        name: "Day Pass",
        price: "€89",
        perks: ["Single-day entry", "Access to all stages", "Free water refills"],
    },
    Tier {
        id: "weekend",
        name: "Weekend Pass",
        price: "€189",
        perks: ["Three-day entry", "Campground spot", "Early entry Friday"],
    },
    Tier {
        id: "vip",
        name: "VIP Experience",
        price: "€449",
        perks: ["Elevated viewing decks", "Artist lounge", "Private showers"],
    },
];

pub const DEMO_DISCLOSURE: &str = "Demo only: no payment was taken and no ticket was issued.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PurchaseState {
    #[default]
    Idle,
    Pending,
    Confirmed,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("another purchase is still in progress")]
    Busy,
    #[error("tier {0} is already purchased")]
    AlreadyConfirmed(String),
    #[error("unknown ticket tier {0}")]
    UnknownTier(String),
}

/// Purchase progress across all tiers. At most one tier is ever non-idle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PurchaseBoard {
    active: Option<(&'static str, PurchaseState)>,
}

impl PurchaseBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, tier_id: &str) -> PurchaseState {
        match self.active {
            Some((id, state)) if id == tier_id => state,
            _ => PurchaseState::Idle,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.active, Some((_, PurchaseState::Pending)))
    }

    /// Whether the tier's call-to-action accepts a click.
    pub fn is_enabled(&self, tier_id: &str) -> bool {
        !self.is_pending() && self.state(tier_id) != PurchaseState::Confirmed
    }

    /// Moves `tier_id` to pending. A previously confirmed tier drops back to idle.
    pub fn begin(&mut self, tier_id: &str) -> Result<(), PurchaseError> {
        let tier = TIERS
            .iter()
            .find(|tier| tier.id == tier_id)
            .ok_or_else(|| PurchaseError::UnknownTier(tier_id.to_string()))?;

        if self.is_pending() {
            return Err(PurchaseError::Busy);
        }
        if self.state(tier.id) == PurchaseState::Confirmed {
            return Err(PurchaseError::AlreadyConfirmed(tier.id.to_string()));
        }

        self.active = Some((tier.id, PurchaseState::Pending));
        Ok(())
    }

    /// Completes a pending purchase. Returns false if `tier_id` was not pending.
    pub fn confirm(&mut self, tier_id: &str) -> bool {
        match self.active {
            Some((id, PurchaseState::Pending)) if id == tier_id => {
                self.active = Some((id, PurchaseState::Confirmed));
                true
            }
            _ => false,
        }
    }

    pub fn confirmed(&self) -> Option<&'static Tier> {
        match self.active {
            Some((id, PurchaseState::Confirmed)) => TIERS.iter().find(|tier| tier.id == id),
            _ => None,
        }
    }
}
