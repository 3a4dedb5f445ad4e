//! Density histograms of terminal positions.
//!
//! [`Histogram::auto`] chooses the bin width like NumPy's `bins="auto"`:
//! the smaller of the Freedman–Diaconis and Sturges widths, falling back to
//! Sturges when the interquartile range is zero.

/// Equal-width histogram with density normalisation.
///
/// `densities[i] = counts[i] / (total * bin_width)`, so the densities
/// integrate to one over the histogram range.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Histogram {
    /// Bin edges, `n_bins + 1` values in increasing order.
    pub edges: Vec<f64>,
    /// Values per bin. The last bin includes its right edge.
    pub counts: Vec<usize>,
    /// Normalised densities per bin.
    pub densities: Vec<f64>,
}

impl Histogram {
    /// Builds a histogram with an automatically chosen number of bins.
    ///
    /// Returns `None` for empty input or non-finite values.
    pub fn auto(values: &[f64]) -> Option<Self> {
        let (lo, hi) = finite_range(values)?;
        let width = auto_bin_width(values, lo, hi);
        let n_bins = if width > 0.0 {
            ((hi - lo) / width).ceil().max(1.0) as usize
        } else {
            1
        };
        Self::with_bins(values, n_bins)
    }

    /// Builds a histogram with `n_bins` equal-width bins over the data range.
    ///
    /// Constant data spans `[x - 0.5, x + 0.5]`. Returns `None` for empty
    /// input, non-finite values or `n_bins = 0`.
    pub fn with_bins(values: &[f64], n_bins: usize) -> Option<Self> {
        if n_bins == 0 {
            return None;
        }
        let (mut lo, mut hi) = finite_range(values)?;
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let bin_width = (hi - lo) / n_bins as f64;
        let edges: Vec<f64> = (0..=n_bins).map(|i| lo + i as f64 * bin_width).collect();

        let mut counts = vec![0usize; n_bins];
        for &x in values {
            let idx = (((x - lo) / bin_width).floor() as usize).min(n_bins - 1);
            counts[idx] += 1;
        }

        let norm = values.len() as f64 * bin_width;
        let densities = counts.iter().map(|&c| c as f64 / norm).collect();

        Some(Self {
            edges,
            counts,
            densities,
        })
    }

    /// Number of bins.
    #[inline]
    pub fn n_bins(&self) -> usize {
        self.counts.len()
    }

    /// Width of every bin.
    #[inline]
    pub fn bin_width(&self) -> f64 {
        self.edges[1] - self.edges[0]
    }

    /// Bin midpoints.
    pub fn centres(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect()
    }

    /// Total number of values binned.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

fn finite_range(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() || values.iter().any(|x| !x.is_finite()) {
        return None;
    }
    Some(
        values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            }),
    )
}

fn auto_bin_width(values: &[f64], lo: f64, hi: f64) -> f64 {
    let n = values.len() as f64;
    let sturges = (hi - lo) / (n.log2() + 1.0);

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let iqr = percentile(&sorted, 75.0) - percentile(&sorted, 25.0);
    let freedman_diaconis = 2.0 * iqr * n.powf(-1.0 / 3.0);

    if freedman_diaconis > 0.0 {
        freedman_diaconis.min(sturges)
    } else {
        sturges
    }
}

/// Linear-interpolation percentile of sorted data, `q` in [0, 100].
pub(crate) fn percentile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        len => {
            let rank = (q / 100.0).clamp(0.0, 1.0) * (len - 1) as f64;
            let below = rank.floor() as usize;
            let above = (below + 1).min(len - 1);
            let frac = rank - below as f64;
            sorted[below] + frac * (sorted[above] - sorted[below])
        }
    }
}
