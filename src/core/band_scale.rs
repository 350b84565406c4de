use std::collections::HashMap;

use tracing::warn;

use crate::error::{ChartError, ChartResult};

/// Discrete mapping from an ordered label domain onto uniform, padded bands.
///
/// Mirrors d3's band scale: `step` is the distance between band starts,
/// `bandwidth` the height of one band once inner padding is removed, and
/// outer padding plus `align` distribute the slack at both range ends.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    index: HashMap<String, usize>,
    range_start: f64,
    range_end: f64,
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
}

impl BandScale {
    /// Builds a band scale without padding.
    ///
    /// Repeated labels keep their first position, like an ordinal domain.
    pub fn new<I, S>(domain: I, range_start: f64, range_end: f64) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "band range must be finite".to_owned(),
            ));
        }

        let mut labels = Vec::new();
        let mut index = HashMap::new();
        for label in domain {
            let label = label.into();
            if index.contains_key(&label) {
                warn!(%label, "duplicate band label ignored");
                continue;
            }
            index.insert(label.clone(), labels.len());
            labels.push(label);
        }

        Ok(Self {
            domain: labels,
            index,
            range_start,
            range_end,
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
        })
    }

    /// Sets inner and outer padding to the same fraction of a step.
    pub fn with_padding(mut self, padding: f64) -> ChartResult<Self> {
        if !padding.is_finite() || !(0.0..=1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and in [0, 1]".to_owned(),
            ));
        }
        self.padding_inner = padding;
        self.padding_outer = padding;
        Ok(self)
    }

    pub fn with_align(mut self, align: f64) -> ChartResult<Self> {
        if !align.is_finite() || !(0.0..=1.0).contains(&align) {
            return Err(ChartError::InvalidData(
                "band align must be finite and in [0, 1]".to_owned(),
            ));
        }
        self.align = align;
        Ok(self)
    }

    #[must_use]
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        let n = self.domain.len() as f64;
        let span = (self.range_end - self.range_start).abs();
        span / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0)
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Start offset of the band for `label`, or `None` for unknown labels.
    #[must_use]
    pub fn position(&self, label: &str) -> Option<f64> {
        self.index_of(label).map(|i| self.position_at(i))
    }

    fn position_at(&self, i: usize) -> f64 {
        let n = self.domain.len();
        let (low, high) = if self.range_end < self.range_start {
            (self.range_end, self.range_start)
        } else {
            (self.range_start, self.range_end)
        };
        let step = self.step();
        let start =
            low + (high - low - step * (n as f64 - self.padding_inner)) * self.align;
        let slot = if self.range_end < self.range_start {
            n - 1 - i
        } else {
            i
        };
        start + step * slot as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_range_inverts_order() {
        let scale = BandScale::new(["a", "b"], 100.0, 0.0).expect("band scale");
        let a = scale.position("a").expect("a");
        let b = scale.position("b").expect("b");
        assert!(a > b);
        assert_eq!(a, 50.0);
        assert_eq!(b, 0.0);
    }
}
