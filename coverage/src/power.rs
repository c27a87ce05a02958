//! Conversions between logarithmic (dBm) and linear (mW) power.
//!
//! Powers from separate transmitters only add in the linear domain.

use rfgrid::C;

/// Returns `dbm` in milliwatts.
#[inline]
pub fn dbm_to_mw(dbm: C) -> C {
    C::powf(10.0, dbm / 10.0)
}

/// Returns `mw` in dBm.
///
/// Non-positive inputs have no finite dBm value; callers must check.
#[inline]
pub fn mw_to_dbm(mw: C) -> C {
    10.0 * mw.log10()
}

/// Running sum of powers given in dBm.
///
/// Terms are accumulated relative to the strongest one seen so far,
/// `max + 10 * log10(Σ 10^((p - max) / 10))`, so the linear sum stays
/// within `[1, n]` and neither overflows nor underflows for any finite
/// input.
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerSum {
    /// Strongest term (dBm) and the sum of all terms relative to it.
    acc: Option<(C, C)>,
}

impl PowerSum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `dbm` term.
    pub fn add(&mut self, dbm: C) {
        self.acc = Some(match self.acc {
            None => (dbm, 1.0),
            Some((max, sum)) if dbm > max => (dbm, sum * dbm_to_mw(max - dbm) + 1.0),
            Some((max, sum)) => (max, sum + dbm_to_mw(dbm - max)),
        });
    }

    /// Returns the total (dBm), or `None` if nothing was added.
    pub fn total_dbm(&self) -> Option<C> {
        self.acc.map(|(max, sum)| max + mw_to_dbm(sum))
    }
}

impl FromIterator<C> for PowerSum {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut total = Self::new();
        for dbm in iter {
            total.add(dbm);
        }
        total
    }
}
