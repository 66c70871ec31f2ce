//! Legend label de-duplication.
//!
//! Plotting the same series family in a loop gives one legend entry per
//! call. [`stop_duplicate_labels`] keeps the first entry for each label.

/// A plot object that exposes and accepts legend entries.
pub trait LegendAxes {
    type Handle;

    fn legend_entries(&self) -> Legend<Self::Handle>;
    fn set_legend(&mut self, legend: Legend<Self::Handle>);
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry<H> {
    pub handle: H,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend<H> {
    entries: Vec<LegendEntry<H>>,
}

impl<H> Legend<H> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push<S: Into<String>>(&mut self, handle: H, label: S) {
        self.entries.push(LegendEntry {
            handle,
            label: label.into(),
        });
    }

    pub fn entries(&self) -> &[LegendEntry<H>] {
        &self.entries
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keeps the first entry for each label, in original order.
    pub fn deduplicated(self) -> Self {
        let mut entries: Vec<LegendEntry<H>> = Vec::with_capacity(self.entries.len());
        for entry in self.entries {
            if !entries.iter().any(|kept| kept.label == entry.label) {
                entries.push(entry);
            }
        }
        Self { entries }
    }
}

impl<H> Default for Legend<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H, S: Into<String>> FromIterator<(H, S)> for Legend<H> {
    fn from_iter<I: IntoIterator<Item = (H, S)>>(iter: I) -> Self {
        let mut legend = Legend::new();
        for (handle, label) in iter {
            legend.push(handle, label);
        }
        legend
    }
}

/// Rewrites the legend of `axes` without repeated labels.
pub fn stop_duplicate_labels<A: LegendAxes>(axes: &mut A) {
    let legend = axes.legend_entries().deduplicated();
    axes.set_legend(legend);
}
