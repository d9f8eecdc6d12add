use crate::app::demo::DemoOptions;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty, validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// 可用規則數量（rule 1..=3）
const RULE_COUNT: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "flight-filter")]
#[command(about = "Filter sample flight itineraries with the built-in validity rules")]
pub struct CliConfig {
    /// Rule numbers to apply, each on its own (1 = past departure, 2 = arrival before departure, 3 = ground time)
    #[arg(long, value_delimiter = ',', default_value = "1,2,3")]
    pub rules: Vec<usize>,

    /// Sample flights are generated this many days from now
    #[arg(long, default_value = "3", allow_negative_numbers = true)]
    pub days_ahead: i64,

    #[arg(long, help = "Print the report as JSON")]
    pub json: bool,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn demo_options(&self) -> DemoOptions {
        DemoOptions {
            rule_numbers: self.rules.clone(),
            days_ahead: self.days_ahead,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty("rules", &self.rules)?;
        for &rule in &self.rules {
            validate_range("rules", rule, 1, RULE_COUNT)?;
        }
        validate_range("days_ahead", self.days_ahead, -3650, 3650)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let config = CliConfig::try_parse_from(["flight-filter"]).unwrap();

        assert_eq!(config.rules, vec![1, 2, 3]);
        assert_eq!(config.days_ahead, 3);
        assert!(!config.json);
        assert!(config.validate().is_ok());
        assert_eq!(config.demo_options(), DemoOptions::default());
    }

    #[test]
    fn test_parse_rule_list() {
        let config =
            CliConfig::try_parse_from(["flight-filter", "--rules", "3,1", "--json"]).unwrap();

        assert_eq!(config.rules, vec![3, 1]);
        assert!(config.json);
    }

    #[test]
    fn test_validate_rejects_unknown_rule() {
        let config = CliConfig::try_parse_from(["flight-filter", "--rules", "1,4"]).unwrap();
        assert!(config.validate().is_err());

        let config = CliConfig::try_parse_from(["flight-filter", "--rules", "0"]).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_days_ahead() {
        let config = CliConfig::try_parse_from(["flight-filter", "--days-ahead", "-1"]).unwrap();
        assert_eq!(config.days_ahead, -1);
        assert!(config.validate().is_ok());
    }
}
