// Copyright 2025 the Rosterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primary stats and per-record stat values.

use core::ops::Index;

/// One of the six canonical stats every record carries.
///
/// The declaration order is the canonical order used by every stat table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PrimaryStat {
    /// Hit points.
    Hp,
    /// Physical attack.
    Attack,
    /// Physical defense.
    Defense,
    /// Special attack.
    SpecialAttack,
    /// Special defense.
    SpecialDefense,
    /// Speed.
    Speed,
}

impl PrimaryStat {
    /// Number of primary stats.
    pub const COUNT: usize = 6;

    /// All stats, in canonical order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Hp,
        Self::Attack,
        Self::Defense,
        Self::SpecialAttack,
        Self::SpecialDefense,
        Self::Speed,
    ];

    /// Returns the position of this stat in [`PrimaryStat::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the dataset column header for this stat.
    ///
    /// This is also the axis label used by chart tables, so charts read the same as the source
    /// data.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Attack => "Att",
            Self::Defense => "Def",
            Self::SpecialAttack => "Spa",
            Self::SpecialDefense => "Spd",
            Self::Speed => "Spe",
        }
    }

    /// Returns a long, human-readable name, used for axis titles.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::SpecialAttack => "Special Attack",
            Self::SpecialDefense => "Special Defense",
            Self::Speed => "Speed",
        }
    }
}

/// The six primary stat values of one record, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatValues(pub [f64; PrimaryStat::COUNT]);

impl StatValues {
    /// Returns the value for `stat`.
    #[must_use]
    pub fn get(&self, stat: PrimaryStat) -> f64 {
        self.0[stat.index()]
    }

    /// Iterates `(stat, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (PrimaryStat, f64)> + '_ {
        PrimaryStat::ALL.iter().map(|&stat| (stat, self.get(stat)))
    }

    /// Returns the sum of all six values.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl Index<PrimaryStat> for StatValues {
    type Output = f64;

    fn index(&self, stat: PrimaryStat) -> &f64 {
        &self.0[stat.index()]
    }
}
