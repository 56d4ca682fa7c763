//! Calculator facade
//!
//! Binds the pure calculators to a rate card, a price source and a clock.
//! This is the only layer that logs; the domain crates stay silent.

use serde::{Deserialize, Serialize};

use core_kernel::{
    Clock, GoldPrice, GoldPriceSource, GoldWeight, InvalidInputError, Money, PortError,
};
use domain_gold::{
    buy_quote, jewellery_quote, sell_quote, spread, BuyOrder, BuyQuote, JewelleryItem,
    JewelleryQuote, Purity, SellQuote, Spread,
};
use domain_loan::{
    compute_eligibility, EmiBreakdown, Installment, LoanEligibility, LoanTerms, RepaymentMethod,
};
use domain_savings::{
    compute_progress, project_future_value, Goal, GoalProgress, SipPlan, SipProjection,
};

use crate::config::CalculatorConfig;
use crate::error::CalculatorError;

/// A loan offered against pledged gold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanOffer {
    pub terms: LoanTerms,
    pub eligibility: LoanEligibility,
    pub method: RepaymentMethod,
    /// None when the pledge supports no loan at all
    pub repayment: Option<EmiBreakdown>,
}

impl LoanOffer {
    /// Month-by-month schedule for the offered amount under the offer's
    /// repayment method
    ///
    /// Empty when the pledge supports no loan.
    pub fn schedule(&self) -> Result<Vec<Installment>, InvalidInputError> {
        if self.repayment.is_none() {
            return Ok(Vec::new());
        }
        self.method.schedule(
            self.eligibility.eligible_amount,
            self.terms.annual_rate,
            self.terms.tenure_months,
        )
    }
}

/// A SIP projection with its value in gold at today's price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SipOutlook {
    pub projection: SipProjection,
    pub gold_equivalent: GoldWeight,
}

/// Gold calculator bound to a rate card and its collaborators
pub struct GoldCalculator<P, C> {
    config: CalculatorConfig,
    prices: P,
    clock: C,
}

impl<P: GoldPriceSource, C: Clock> GoldCalculator<P, C> {
    /// Creates a calculator after validating the rate card
    pub fn new(config: CalculatorConfig, prices: P, clock: C) -> Result<Self, CalculatorError> {
        config.validate()?;
        Ok(Self {
            config,
            prices,
            clock,
        })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Fetches the current price and rejects stale, future-dated or
    /// foreign-currency quotes
    pub fn current_price(&self) -> Result<GoldPrice, CalculatorError> {
        let price = self.prices.current_price()?;
        let now = self.clock.now();

        if price.as_of > now {
            tracing::warn!(as_of = %price.as_of, now = %now, "Rejecting future-dated gold price");
            return Err(PortError::validation(format!(
                "price dated {} is ahead of the clock ({})",
                price.as_of, now
            ))
            .into());
        }

        let age_secs = (now - price.as_of).num_seconds();
        if age_secs > self.config.max_price_age_secs {
            tracing::warn!(as_of = %price.as_of, age_secs, "Rejecting stale gold price");
            return Err(PortError::StalePrice { as_of: price.as_of }.into());
        }

        let currency = self.config.currency;
        if price.buy_per_gram.currency() != currency || price.sell_per_gram.currency() != currency
        {
            return Err(PortError::validation(format!(
                "price quoted in {}, calculator configured for {}",
                price.buy_per_gram.currency(),
                currency
            ))
            .into());
        }

        tracing::debug!(
            buy = %price.buy_per_gram,
            sell = %price.sell_per_gram,
            as_of = %price.as_of,
            "Using gold price"
        );
        Ok(price)
    }

    /// Current buy/sell spread
    pub fn spread(&self) -> Result<Spread, CalculatorError> {
        let price = self.current_price()?;
        Ok(spread(price.buy_per_gram, price.sell_per_gram)?)
    }

    /// Quotes a purchase at the current buy price with GST
    #[tracing::instrument(skip(self), err)]
    pub fn buy_quote(&self, order: BuyOrder) -> Result<BuyQuote, CalculatorError> {
        let price = self.current_price()?;
        let quote = buy_quote(order, price.buy_per_gram, self.config.gst_rate())?;

        tracing::info!(
            grams = %quote.grams,
            net = %quote.breakdown.net_amount,
            "Buy quote prepared"
        );
        Ok(quote)
    }

    /// Quotes a sale at the current sell price with TDS
    #[tracing::instrument(skip(self), err)]
    pub fn sell_quote(&self, grams: GoldWeight) -> Result<SellQuote, CalculatorError> {
        let price = self.current_price()?;
        let quote = sell_quote(grams, price.sell_per_gram, &self.config.tds_policy())?;

        tracing::info!(
            net = %quote.breakdown.net_amount,
            tds = %quote.tds_withheld,
            "Sell quote prepared"
        );
        Ok(quote)
    }

    /// Quotes a jewellery piece using the configured making charge and shipping
    ///
    /// The buy price is taken as the 24K rate.
    #[tracing::instrument(skip(self, discounts), err)]
    pub fn jewellery_quote(
        &self,
        gross_weight: GoldWeight,
        purity: Purity,
        discounts: &[Money],
    ) -> Result<JewelleryQuote, CalculatorError> {
        let price = self.current_price()?;
        let item = JewelleryItem {
            gross_weight,
            purity,
            making_charge: self.config.making_charge(),
        };

        let quote = jewellery_quote(
            &item,
            price.buy_per_gram,
            self.config.gst_rate(),
            self.config.shipping_fee(),
            discounts,
        )?;

        if quote.breakdown.over_discounted {
            tracing::warn!(
                gross = %quote.breakdown.gross_amount,
                "Discounts exceed jewellery price, net clamped to zero"
            );
        }
        Ok(quote)
    }

    /// Offers a loan against pledged gold valued at the current sell price
    #[tracing::instrument(skip(self), err)]
    pub fn loan_offer(
        &self,
        pledged_grams: GoldWeight,
        tenure_months: u32,
        method: RepaymentMethod,
    ) -> Result<LoanOffer, CalculatorError> {
        InvalidInputError::ensure_term_months("tenure_months", tenure_months)?;

        let price = self.current_price()?;
        let terms = LoanTerms::new(
            pledged_grams,
            price.sell_per_gram,
            self.config.ltv_ratio(),
            self.config.loan_rate(),
            tenure_months,
        );
        let eligibility = compute_eligibility(&terms, self.config.max_loan_amount())?;

        let repayment = if eligibility.eligible_amount.is_positive() {
            Some(method.compute(eligibility.eligible_amount, terms.annual_rate, tenure_months)?)
        } else {
            None
        };

        tracing::info!(
            collateral = %eligibility.collateral_value,
            eligible = %eligibility.eligible_amount,
            capped = eligibility.capped,
            "Loan offer prepared"
        );

        Ok(LoanOffer {
            terms,
            eligibility,
            method,
            repayment,
        })
    }

    /// Projects a SIP and values the result in gold at today's buy price
    #[tracing::instrument(skip(self), err)]
    pub fn sip_projection(&self, plan: &SipPlan) -> Result<SipOutlook, CalculatorError> {
        let projection = project_future_value(plan)?;
        let price = self.current_price()?;

        Ok(SipOutlook {
            projection,
            gold_equivalent: projection.grams_at(price.buy_per_gram)?,
        })
    }

    /// Progress towards a goal as of the clock's current time
    #[tracing::instrument(skip(self), err)]
    pub fn goal_progress(&self, goal: &Goal) -> Result<GoalProgress, CalculatorError> {
        let price = self.current_price()?;
        let progress = compute_progress(goal, price.buy_per_gram, self.clock.now())?;

        tracing::debug!(
            percent = %progress.percent,
            days_remaining = progress.days_remaining,
            status = ?progress.status,
            "Goal progress computed"
        );
        Ok(progress)
    }
}
