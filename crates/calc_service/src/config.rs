//! Calculator configuration
//!
//! The rate card (GST, TDS, LTV, loan rate, jewellery charges) is read from
//! `GOLD_`-prefixed environment variables, falling back to [`Default`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, InvalidInputError, Money, Rate};
use domain_gold::TdsPolicy;
use domain_loan::MAX_LTV_PERCENT;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "GOLD";

/// Calculator configuration
///
/// Percentages are plain numbers (`3` means 3%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Currency every amount is quoted in
    pub currency: Currency,
    /// GST charged on purchases
    pub gst_percent: Decimal,
    /// TDS withheld on large sales
    pub tds_percent: Decimal,
    /// Sale value above which TDS applies
    pub tds_threshold: Decimal,
    /// Share of collateral value advanced as a loan
    pub ltv_percent: Decimal,
    /// Largest loan offered regardless of collateral
    pub max_loan_amount: Option<Decimal>,
    /// Annual loan interest rate
    pub loan_rate_percent: Decimal,
    /// Jewellery making charges on gold value
    pub making_charge_percent: Decimal,
    /// Flat jewellery shipping fee
    pub shipping_fee: Decimal,
    /// Oldest price quote accepted, in seconds
    pub max_price_age_secs: i64,
    /// Log level: trace, debug, info, warn, error
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            currency: Currency::INR,
            gst_percent: dec!(3),
            tds_percent: dec!(1),
            tds_threshold: dec!(200000),
            ltv_percent: dec!(75),
            max_loan_amount: None,
            loan_rate_percent: dec!(9.5),
            making_charge_percent: dec!(12),
            shipping_fee: dec!(0),
            max_price_age_secs: 900,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl CalculatorConfig {
    /// Loads configuration from `GOLD_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads `.env` if present, then reads the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Loads configuration from the given environment source
    pub fn from_environment(env: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    /// Checks every rate and amount on the card
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        self.gst_rate().ensure_non_negative("gst_percent")?;
        self.tds_rate().ensure_non_negative("tds_percent")?;
        self.loan_rate().ensure_non_negative("loan_rate_percent")?;
        self.making_charge()
            .ensure_non_negative("making_charge_percent")?;
        self.ltv_ratio()
            .ensure_within("ltv_percent", Decimal::ZERO, MAX_LTV_PERCENT)?;
        self.money(self.tds_threshold)
            .ensure_non_negative("tds_threshold")?;
        self.shipping_fee().ensure_non_negative("shipping_fee")?;
        if let Some(max) = self.max_loan_amount() {
            max.ensure_non_negative("max_loan_amount")?;
        }
        if self.max_price_age_secs <= 0 {
            return Err(InvalidInputError::non_positive_duration("max_price_age_secs"));
        }
        Ok(())
    }

    fn money(&self, amount: Decimal) -> Money {
        Money::new(amount, self.currency)
    }

    pub fn gst_rate(&self) -> Rate {
        Rate::from_percentage(self.gst_percent)
    }

    pub fn tds_rate(&self) -> Rate {
        Rate::from_percentage(self.tds_percent)
    }

    pub fn tds_policy(&self) -> TdsPolicy {
        TdsPolicy::new(self.tds_rate(), self.money(self.tds_threshold))
    }

    pub fn ltv_ratio(&self) -> Rate {
        Rate::from_percentage(self.ltv_percent)
    }

    pub fn max_loan_amount(&self) -> Option<Money> {
        self.max_loan_amount.map(|amount| self.money(amount))
    }

    pub fn loan_rate(&self) -> Rate {
        Rate::from_percentage(self.loan_rate_percent)
    }

    pub fn making_charge(&self) -> Rate {
        Rate::from_percentage(self.making_charge_percent)
    }

    pub fn shipping_fee(&self) -> Money {
        self.money(self.shipping_fee)
    }
}
