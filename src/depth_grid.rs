use std::fmt;

/// Number of depth points used by the critical depth figures.
pub const DEFAULT_DEPTH_RESOLUTION: usize = 500;

#[derive(Debug, Clone, PartialEq)]
pub enum DepthGridError {
    Empty,
    Negative { index: usize, value: f64 },
    NotAscending { index: usize },
    NonFinite { index: usize },
    MaxDepth(f64),
}

impl fmt::Display for DepthGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepthGridError::Empty => write!(f, "depth grid must contain at least one point"),
            DepthGridError::Negative { index, value } => {
                write!(f, "depth at index {} is negative ({})", index, value)
            }
            DepthGridError::NotAscending { index } => {
                write!(f, "depth grid is not ascending at index {}", index)
            }
            DepthGridError::NonFinite { index } => {
                write!(f, "depth at index {} is not a finite number", index)
            }
            DepthGridError::MaxDepth(d) => {
                write!(f, "max_depth must be finite and > 0, got {}", d)
            }
        }
    }
}

impl std::error::Error for DepthGridError {}

/// Sampling depths below the surface, in metres.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthGrid {
    depths: Vec<f64>,
}

impl DepthGrid {
    /// Builds a grid from explicit depths. Values must be finite, non-negative
    /// and in ascending order (equal neighbours are allowed).
    pub fn new(depths: Vec<f64>) -> Result<Self, DepthGridError> {
        if depths.is_empty() {
            return Err(DepthGridError::Empty);
        }

        for (index, &value) in depths.iter().enumerate() {
            if !value.is_finite() {
                return Err(DepthGridError::NonFinite { index });
            }
            if value < 0.0 {
                return Err(DepthGridError::Negative { index, value });
            }
        }

        if let Some(index) = depths.windows(2).position(|w| w[1] < w[0]) {
            return Err(DepthGridError::NotAscending { index: index + 1 });
        }

        Ok(Self { depths })
    }

    /// `resolution` evenly spaced depths from the surface to `max_depth`,
    /// both ends included. A resolution of 1 yields only the surface.
    pub fn linspace(max_depth: f64, resolution: usize) -> Result<Self, DepthGridError> {
        if resolution == 0 {
            return Err(DepthGridError::Empty);
        }
        if !max_depth.is_finite() || max_depth <= 0.0 {
            return Err(DepthGridError::MaxDepth(max_depth));
        }

        let depths = if resolution == 1 {
            vec![0.0]
        } else {
            let step = max_depth / (resolution - 1) as f64;
            (0..resolution)
                .map(|i| if i == resolution - 1 { max_depth } else { i as f64 * step })
                .collect()
        };

        Ok(Self { depths })
    }

    pub fn len(&self) -> usize {
        self.depths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    pub fn max_depth(&self) -> f64 {
        self.depths.last().copied().unwrap_or(0.0)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.depths
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.depths.iter()
    }
}

impl Default for DepthGrid {
    /// 0 to 100 m at the default resolution.
    fn default() -> Self {
        let step = 100.0 / (DEFAULT_DEPTH_RESOLUTION - 1) as f64;
        Self {
            depths: (0..DEFAULT_DEPTH_RESOLUTION).map(|i| i as f64 * step).collect(),
        }
    }
}

impl TryFrom<Vec<f64>> for DepthGrid {
    type Error = DepthGridError;

    fn try_from(depths: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(depths)
    }
}

impl fmt::Display for DepthGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DepthGrid {{ points: {}, range: 0..={} m }}",
            self.depths.len(),
            self.max_depth()
        )
    }
}
