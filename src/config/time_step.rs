use std::fmt;
use std::str::FromStr;

/// Step between two dates of the period, given as "daily", "weekly" or
/// "monthly" in the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeStep {
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStepParseError(pub String);

impl fmt::Display for TimeStepParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "invalid time step '{}', expected one of daily, weekly, monthly",
            self.0
        )
    }
}

impl std::error::Error for TimeStepParseError {}

impl FromStr for TimeStep {
    type Err = TimeStepParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(TimeStep::Daily),
            "weekly" => Ok(TimeStep::Weekly),
            "monthly" => Ok(TimeStep::Monthly),
            _ => Err(TimeStepParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_step() {
        assert_eq!("daily".parse::<TimeStep>(), Ok(TimeStep::Daily));
        assert_eq!(" Weekly ".parse::<TimeStep>(), Ok(TimeStep::Weekly));
        assert_eq!("MONTHLY".parse::<TimeStep>(), Ok(TimeStep::Monthly));
        assert!("hourly".parse::<TimeStep>().is_err());
    }
}
