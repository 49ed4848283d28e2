//! Rolling statistics for the smoothed line style.

/// Rolling mean with a ±1σ band, one entry per input sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmoothedSeries {
    pub mean: Vec<f64>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

impl SmoothedSeries {
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }
}

/// Centred rolling mean and population standard deviation over `window`
/// samples. The window is truncated at both ends of the series. A window of
/// 0 or 1 returns the raw samples with a zero-width band.
pub fn smooth(samples: &[f64], window: usize) -> SmoothedSeries {
    if window <= 1 {
        return SmoothedSeries {
            mean: samples.to_vec(),
            lower: samples.to_vec(),
            upper: samples.to_vec(),
        };
    }

    let before = (window - 1) / 2;
    let after = window - 1 - before;
    let mut out = SmoothedSeries {
        mean: Vec::with_capacity(samples.len()),
        lower: Vec::with_capacity(samples.len()),
        upper: Vec::with_capacity(samples.len()),
    };
    for i in 0..samples.len() {
        let lo = i.saturating_sub(before);
        let hi = (i + after + 1).min(samples.len());
        let win = &samples[lo..hi];
        let n = win.len() as f64;
        let mean = win.iter().sum::<f64>() / n;
        let var = win.iter().map(|y| (y - mean).powi(2)).sum::<f64>() / n;
        let std = var.sqrt();
        out.mean.push(mean);
        out.lower.push(mean - std);
        out.upper.push(mean + std);
    }
    out
}
