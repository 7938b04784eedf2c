//! Free-tier allowance for portfolio generation.

use serde::{Deserialize, Serialize};

use crate::github::error::PortfolioError;

/// Portfolios a free account may generate.
pub const DEFAULT_FREE_GENERATIONS: u32 = 3;

/// Usage counters for the account requesting a portfolio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageProfile {
    /// Portfolios generated so far.
    pub portfolios_generated: u32,
    /// Premium accounts have no generation limit.
    pub is_premium: bool,
}

/// Outcome of a quota check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaDecision {
    /// Generation may proceed. `remaining` is `None` for premium accounts.
    Allowed {
        /// Free generations left after this one.
        remaining: Option<u32>,
    },
    /// The free allowance is spent.
    PremiumRequired,
}

/// Generation limit applied to free accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationQuota {
    free_limit: u32,
}

impl Default for GenerationQuota {
    fn default() -> Self {
        Self::new(DEFAULT_FREE_GENERATIONS)
    }
}

impl GenerationQuota {
    /// Creates a quota allowing `free_limit` generations.
    #[must_use]
    pub const fn new(free_limit: u32) -> Self {
        Self { free_limit }
    }

    /// Decides whether `usage` may generate another portfolio.
    #[must_use]
    pub const fn check(&self, usage: &UsageProfile) -> QuotaDecision {
        if usage.is_premium {
            return QuotaDecision::Allowed { remaining: None };
        }
        if usage.portfolios_generated < self.free_limit {
            return QuotaDecision::Allowed {
                remaining: Some(self.free_limit - usage.portfolios_generated - 1),
            };
        }
        QuotaDecision::PremiumRequired
    }

    /// Like [`Self::check`] but reports refusal as an error.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::QuotaExhausted` when the free allowance is
    /// spent.
    pub const fn ensure(&self, usage: &UsageProfile) -> Result<QuotaDecision, PortfolioError> {
        match self.check(usage) {
            QuotaDecision::PremiumRequired => Err(PortfolioError::QuotaExhausted {
                limit: self.free_limit,
            }),
            allowed @ QuotaDecision::Allowed { .. } => Ok(allowed),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{GenerationQuota, QuotaDecision, UsageProfile};
    use crate::github::error::PortfolioError;

    const fn free(generated: u32) -> UsageProfile {
        UsageProfile {
            portfolios_generated: generated,
            is_premium: false,
        }
    }

    #[rstest]
    #[case::fresh(0, Some(2))]
    #[case::one_used(1, Some(1))]
    #[case::last_free(2, Some(0))]
    fn free_accounts_below_limit_are_allowed(#[case] generated: u32, #[case] remaining: Option<u32>) {
        assert_eq!(
            GenerationQuota::default().check(&free(generated)),
            QuotaDecision::Allowed { remaining }
        );
    }

    #[rstest]
    #[case::at_limit(3)]
    #[case::beyond_limit(7)]
    fn free_accounts_at_limit_need_premium(#[case] generated: u32) {
        let quota = GenerationQuota::default();
        assert_eq!(quota.check(&free(generated)), QuotaDecision::PremiumRequired);
        assert_eq!(
            quota.ensure(&free(generated)),
            Err(PortfolioError::QuotaExhausted { limit: 3 })
        );
    }

    #[rstest]
    fn premium_accounts_are_unlimited() {
        let usage = UsageProfile {
            portfolios_generated: 500,
            is_premium: true,
        };
        assert_eq!(
            GenerationQuota::default().ensure(&usage),
            Ok(QuotaDecision::Allowed { remaining: None })
        );
    }

    #[rstest]
    fn zero_limit_refuses_free_accounts() {
        assert_eq!(GenerationQuota::new(0).check(&free(0)), QuotaDecision::PremiumRequired);
    }
}
