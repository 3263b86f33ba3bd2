use crate::NumRange;
use anyhow::{bail, ensure};

/// A frequency histogram over a fixed number of equal-width bins. The bins
/// evenly partition [Histogram::range], which is derived from the data:
///
/// - For non-empty data, the range is `[min, max]` of the values
/// - If every value is identical, the range is widened to `[v - 0.5, v + 0.5]`
///   so that the bins have a non-zero width
/// - For empty data, the range is `[0, 1]` and every bin is empty
///
/// Every bin is half-open (`[lo, hi)`) except the last one, which also
/// includes its upper edge so that the maximum value gets counted.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    range: NumRange<f64>,
    counts: Vec<usize>,
}

/// One bin of a [Histogram]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl Histogram {
    /// Bin count used when the caller has no preference
    pub const DEFAULT_BINS: usize = 20;

    /// Compute a histogram of the given values. Returns an error if `bins` is
    /// zero, if any value is NaN or infinite (there's no sensible range to
    /// bin those into), or if the values are spread so far apart that the
    /// width of their range doesn't fit in an `f64`.
    pub fn new(values: &[f64], bins: usize) -> anyhow::Result<Self> {
        ensure!(bins > 0, "histogram must have at least one bin");
        if let Some(value) = values.iter().find(|value| !value.is_finite()) {
            bail!("cannot bin non-finite value {}", value);
        }

        let range = Self::auto_range(values);
        ensure!(
            range.span().is_finite(),
            "range {} is too wide to bin",
            range
        );

        let bin_range = NumRange::new(0.0, bins as f64);
        let mut counts = vec![0; bins];
        for &value in values {
            let position = range.value(value).map_to(bin_range).inner();
            // Only the max value maps exactly onto the upper edge, and it
            // belongs in the last bin
            let mut index = (position.floor() as usize).min(bins - 1);
            // Rounding in the position math can land a value one bin off
            // from the edges that [Self::bins] reports, so check against those
            if index > 0 && value < Self::edge(range, bins, index) {
                index -= 1;
            } else if index < bins - 1
                && value >= Self::edge(range, bins, index + 1)
            {
                index += 1;
            }
            counts[index] += 1;
        }

        Ok(Self { range, counts })
    }

    /// Lower edge of bin `index`. `index == bins` gives the upper edge of the
    /// last bin.
    fn edge(range: NumRange<f64>, bins: usize, index: usize) -> f64 {
        NumRange::new(0.0, bins as f64).map_to(&range, index as f64)
    }

    fn auto_range(values: &[f64]) -> NumRange<f64> {
        let min = values.iter().copied().reduce(f64::min);
        let max = values.iter().copied().reduce(f64::max);
        match (min, max) {
            (Some(min), Some(max)) if min < max => NumRange::new(min, max),
            (Some(min), Some(_)) => NumRange::new(min - 0.5, min + 0.5),
            _ => NumRange::new(0.0, 1.0),
        }
    }

    /// The full span covered by the bins
    pub fn range(&self) -> NumRange<f64> {
        self.range
    }

    /// Number of samples in each bin, from lowest to highest
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Total number of samples across all bins
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Is there no data in this histogram at all?
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Highest count of any single bin
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Width of every bin
    pub fn bin_width(&self) -> f64 {
        self.range.span() / self.counts.len() as f64
    }

    /// Iterate over all bins, with their edges, from lowest to highest
    pub fn bins(&self) -> impl Iterator<Item = Bin> + '_ {
        let bins = self.counts.len();
        self.counts.iter().enumerate().map(move |(i, &count)| Bin {
            start: Self::edge(self.range, bins, i),
            end: Self::edge(self.range, bins, i + 1),
            count,
        })
    }
}
