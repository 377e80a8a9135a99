use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::venue::Venue;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Morning,
    Lunch,
    Afternoon,
    Dinner,
}

impl SlotKind {
    /// Slots of a day, in the order they are filled and presented.
    pub const ALL: [SlotKind; 4] = [
        SlotKind::Morning,
        SlotKind::Lunch,
        SlotKind::Afternoon,
        SlotKind::Dinner,
    ];
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Slot {
    pub kind: SlotKind,
    pub top: Option<Venue>,
    pub alternates: Vec<Venue>,
}

impl Slot {
    pub fn empty(kind: SlotKind) -> Self {
        Self {
            kind,
            top: None,
            alternates: Vec::new(),
        }
    }

    pub fn top_id(&self) -> Option<&str> {
        self.top.as_ref().map(|venue| venue.id.as_str())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DayPlan {
    pub day: u32,
    pub slots: [Slot; 4],
}

impl DayPlan {
    pub fn slot(&self, kind: SlotKind) -> &Slot {
        match kind {
            SlotKind::Morning => &self.slots[0],
            SlotKind::Lunch => &self.slots[1],
            SlotKind::Afternoon => &self.slots[2],
            SlotKind::Dinner => &self.slots[3],
        }
    }

    pub fn morning(&self) -> &Slot {
        self.slot(SlotKind::Morning)
    }

    pub fn lunch(&self) -> &Slot {
        self.slot(SlotKind::Lunch)
    }

    pub fn afternoon(&self) -> &Slot {
        self.slot(SlotKind::Afternoon)
    }

    pub fn dinner(&self) -> &Slot {
        self.slot(SlotKind::Dinner)
    }
}

pub type Itinerary = Vec<DayPlan>;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ItineraryRequest {
    pub city: String,
    pub days: u32,
}

#[derive(Debug, Serialize, Clone)]
pub struct ItineraryResponse {
    pub city: String,
    pub days: u32,
    pub generated_at: DateTime<Utc>,
    pub itinerary: Itinerary,
}
