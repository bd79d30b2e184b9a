//! Orders

use std::fmt;

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

/// Steps of the delivery lifecycle, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderStage {
    /// Order received
    Ordered,

    /// Picked and bagged
    Packed,

    /// Left the store
    Shipped,

    /// With the courier
    #[serde(alias = "out_for_delivery")]
    OutForDelivery,

    /// Handed over
    Delivered,
}

impl OrderStage {
    /// Every stage in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Ordered,
        Self::Packed,
        Self::Shipped,
        Self::OutForDelivery,
        Self::Delivered,
    ];

    /// Zero-based position in [`OrderStage::ALL`].
    pub fn position(self) -> usize {
        match self {
            Self::Ordered => 0,
            Self::Packed => 1,
            Self::Shipped => 2,
            Self::OutForDelivery => 3,
            Self::Delivered => 4,
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Self::Ordered => "Ordered",
            Self::Packed => "Packed",
            Self::Shipped => "Shipped",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
        }
    }

    /// How `step` renders while the order sits at `self`.
    pub fn state_of(self, step: Self) -> StageState {
        match step.position().cmp(&self.position()) {
            std::cmp::Ordering::Less => StageState::Completed,
            std::cmp::Ordering::Equal => StageState::Current,
            std::cmp::Ordering::Greater => StageState::Upcoming,
        }
    }

    /// Progress bar target in percent: `(position + 1) / 5 × 100`.
    pub fn target_percent(self) -> f64 {
        let reached = u32::try_from(self.position() + 1).unwrap_or(u32::MAX);
        let stages = u32::try_from(Self::ALL.len()).unwrap_or(u32::MAX);

        f64::from(reached) / f64::from(stages) * 100.0
    }
}

impl fmt::Display for OrderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rendering of one tracker step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageState {
    /// Already passed
    Completed,

    /// Where the order is now
    Current,

    /// Not reached yet
    Upcoming,
}

/// Courier position.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinates {
    /// Latitude
    pub lat: f64,

    /// Longitude
    pub lng: f64,
}

/// The order shown in the tracker widget.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderStatus {
    /// Order id
    pub id: String,

    /// Current lifecycle stage
    pub stage: OrderStage,

    /// Free-text delivery estimate (e.g. `Today, 6:30 PM`)
    pub estimated_delivery: String,

    /// Last known courier position
    pub current_location: Option<Coordinates>,
}

/// A completed order in the shopper's history.
#[derive(Debug, Clone, PartialEq)]
pub struct PastOrder {
    /// Order id (e.g. `order-222333`)
    pub id: String,

    /// Display date
    pub date: String,

    /// Amount charged
    pub total: Money<'static, Currency>,

    /// Final stage
    pub stage: OrderStage,

    /// Product ids in the order
    pub items: Vec<String>,
}

impl OrderStatus {
    /// Number shown to the shopper.
    pub fn order_number(&self) -> &str {
        order_number(&self.id)
    }
}

impl PastOrder {
    /// Number shown to the shopper: the id with its `order-` prefix dropped.
    pub fn order_number(&self) -> &str {
        order_number(&self.id)
    }
}

fn order_number(id: &str) -> &str {
    id.split_once('-').map_or(id, |(_, number)| number)
}

/// Frames in the progress bar animation.
pub const PROGRESS_STEPS: u32 = 30;

/// Milliseconds between animation frames.
pub const PROGRESS_TICK_MS: u32 = 33;

/// Linear fill of the tracker bar from zero up to the stage target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressAnimation {
    target: f64,
    step: f64,
    value: f64,
    ticks: u32,
}

impl ProgressAnimation {
    /// Start an animation towards `stage`'s target.
    pub fn new(stage: OrderStage) -> Self {
        let target = stage.target_percent();

        Self {
            target,
            step: target / f64::from(PROGRESS_STEPS),
            value: 0.0,
            ticks: 0,
        }
    }

    /// Advance one frame. Returns `false` once the target has been reached.
    pub fn tick(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }

        self.ticks += 1;
        self.value += self.step;

        if self.ticks >= PROGRESS_STEPS || self.value >= self.target {
            self.value = self.target;
            self.ticks = PROGRESS_STEPS;
        }

        true
    }

    /// Current fill in percent.
    pub fn percent(&self) -> f64 {
        self.value
    }

    /// Target fill in percent.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Whether the bar has reached its target.
    pub fn is_finished(&self) -> bool {
        self.ticks >= PROGRESS_STEPS
    }
}
