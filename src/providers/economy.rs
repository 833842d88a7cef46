//! Reference economy: GDP random walk, labor market and fiscal accounts

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::core::types::clamp_unit;
use crate::providers::Economy;

/// Share of GDP booked as corporate profit
const CORPORATE_PROFIT_SHARE: f64 = 0.15;
/// Share of GDP subject to VAT
const VAT_BASE_SHARE: f64 = 0.6;
/// Monthly pull of unemployment back towards its natural rate
const UNEMPLOYMENT_REVERSION: f64 = 0.05;
const NATURAL_UNEMPLOYMENT: f64 = 0.05;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxRates {
    pub income: f64,
    pub corporate: f64,
    pub vat: f64,
    pub social_security: f64,
}

impl Default for TaxRates {
    fn default() -> Self {
        Self {
            income: 0.2,
            corporate: 0.25,
            vat: 0.2,
            social_security: 0.15,
        }
    }
}

impl TaxRates {
    fn drift<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.income = (self.income + rng.gen_range(-0.01..=0.01)).clamp(0.0, 0.5);
        self.corporate = (self.corporate + rng.gen_range(-0.01..=0.01)).clamp(0.0, 0.5);
        self.vat = (self.vat + rng.gen_range(-0.01..=0.01)).clamp(0.0, 0.3);
        self.social_security = (self.social_security + rng.gen_range(-0.01..=0.01)).clamp(0.0, 0.3);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomicModel {
    pub gdp: f64,
    pub gdp_growth: f64,
    pub unemployment_rate: f64,
    pub labor_force: f64,
    pub taxes: TaxRates,
    pub revenue: f64,
    pub spending: f64,
    pub interest_rate: f64,
}

impl Default for EconomicModel {
    fn default() -> Self {
        let mut model = Self {
            gdp: 1_000_000_000_000.0,
            gdp_growth: 0.0,
            unemployment_rate: NATURAL_UNEMPLOYMENT,
            labor_force: 50_000_000.0,
            taxes: TaxRates::default(),
            revenue: 0.0,
            spending: 0.0,
            interest_rate: 0.01,
        };
        model.revenue = model.collect_revenue();
        model.spending = model.revenue;
        model
    }
}

impl EconomicModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employed(&self) -> f64 {
        self.labor_force * (1.0 - self.unemployment_rate)
    }

    pub fn average_wage(&self) -> f64 {
        let employed = self.employed();
        if employed > 0.0 {
            self.gdp / employed
        } else {
            0.0
        }
    }

    pub fn budget_balance(&self) -> f64 {
        self.revenue - self.spending
    }

    fn collect_revenue(&self) -> f64 {
        let payroll = self.average_wage() * self.employed();
        self.taxes.income * payroll
            + self.taxes.corporate * self.gdp * CORPORATE_PROFIT_SHARE
            + self.taxes.vat * self.gdp * VAT_BASE_SHARE
            + self.taxes.social_security * payroll
    }
}

impl Economy for EconomicModel {
    fn simulate_month(&mut self, rng: &mut dyn RngCore) {
        self.gdp_growth = rng.gen_range(-0.01..=0.02);
        self.gdp *= 1.0 + self.gdp_growth;

        let drift = rng.gen_range(-0.02..=0.02);
        let reversion = UNEMPLOYMENT_REVERSION * (NATURAL_UNEMPLOYMENT - self.unemployment_rate);
        self.unemployment_rate = clamp_unit(self.unemployment_rate + drift + reversion);

        self.taxes.drift(rng);
        self.revenue = self.collect_revenue();
        // Spending tracks revenue within a band of GDP
        self.spending = (self.revenue + rng.gen_range(-0.01..=0.03) * self.gdp).max(0.0);
        self.interest_rate = (self.interest_rate + rng.gen_range(-0.005..=0.005)).max(0.0);
    }

    fn gdp_growth(&self) -> f64 {
        self.gdp_growth
    }

    fn unemployment_rate(&self) -> f64 {
        self.unemployment_rate
    }

    fn government_revenue(&self) -> f64 {
        self.revenue
    }

    fn government_spending(&self) -> f64 {
        self.spending
    }
}
