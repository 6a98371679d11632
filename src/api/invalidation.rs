use serde::{Deserialize, Serialize};

/// Identifier of one chart owned by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartId {
    SuccessPie,
    PayloadScatter,
}

impl ChartId {
    /// Every chart, in display order.
    pub const ALL: [Self; 2] = [Self::SuccessPie, Self::PayloadScatter];

    const fn bit(self) -> u8 {
        match self {
            Self::SuccessPie => 1 << 0,
            Self::PayloadScatter => 1 << 1,
        }
    }
}

/// Bitmask of charts pending recompute, coalesced across control events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChartSet {
    bits: u8,
}

impl ChartSet {
    const ALL_BITS: u8 = ChartId::SuccessPie.bit() | ChartId::PayloadScatter.bit();

    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self {
            bits: Self::ALL_BITS,
        }
    }

    #[must_use]
    pub const fn from_chart(chart: ChartId) -> Self {
        Self { bits: chart.bit() }
    }

    #[must_use]
    pub const fn with_chart(self, chart: ChartId) -> Self {
        Self {
            bits: self.bits | chart.bit(),
        }
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    #[must_use]
    pub const fn contains(self, chart: ChartId) -> bool {
        (self.bits & chart.bit()) != 0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.is_none()
    }

    /// Contained charts in display order.
    pub fn iter(self) -> impl Iterator<Item = ChartId> {
        ChartId::ALL
            .into_iter()
            .filter(move |chart| self.contains(*chart))
    }
}

/// Control edges the binding layer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlSignal {
    SiteSelection,
    PayloadRange,
}

impl ControlSignal {
    /// Dispatch table: which charts one control edge invalidates.
    ///
    /// The site selection feeds both charts; the payload range feeds only
    /// the scatter.
    #[must_use]
    pub const fn charts(self) -> ChartSet {
        match self {
            Self::SiteSelection => ChartSet::all(),
            Self::PayloadRange => ChartSet::from_chart(ChartId::PayloadScatter),
        }
    }
}
