/// NaN-aware statistics over a set of values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub valid: usize,
    pub total: usize,
}

impl Summary {
    /// NaN values are ignored. With no valid values every statistic is NaN.
    pub fn from_values<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a f64>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut valid = 0;
        let mut total = 0;

        for &v in values {
            total += 1;
            if v.is_nan() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
            sum += v;
            valid += 1;
        }

        if valid == 0 {
            return Self {
                min: f64::NAN,
                max: f64::NAN,
                mean: f64::NAN,
                valid,
                total,
            };
        }

        Self {
            min,
            max,
            mean: sum / valid as f64,
            valid,
            total,
        }
    }
}

pub fn print_summary(label: &str, values: &[f64], unit: &str) {
    let summary = Summary::from_values(values);

    println!("{} - {} values", label, summary.total);

    if summary.total == 0 {
        return;
    }

    println!("  Min: {:.2} {}", summary.min, unit);
    println!("  Max: {:.2} {}", summary.max, unit);
    println!("  Mean: {:.2} {}", summary.mean, unit);
    println!(
        "  Valid values: {} / {} ({:.1}%)",
        summary.valid,
        summary.total,
        100.0 * summary.valid as f64 / summary.total as f64
    );
    println!(
        "  First 10 non NaN values: {:?}",
        values
            .iter()
            .filter(|v| !v.is_nan())
            .take(10)
            .collect::<Vec<&f64>>()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_skips_nan() {
        let summary = Summary::from_values(&[1.0, f64::NAN, 3.0, 5.0]);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 5.0);
        assert_eq!(summary.mean, 3.0);
        assert_eq!((summary.valid, summary.total), (3, 4));
    }

    #[test]
    fn test_summary_all_nan() {
        let summary = Summary::from_values(&[f64::NAN]);
        assert!(summary.min.is_nan() && summary.max.is_nan() && summary.mean.is_nan());
        assert_eq!(summary.valid, 0);

        let empty: [f64; 0] = [];
        assert_eq!(Summary::from_values(&empty).total, 0);
    }
}
