//! Local fallback estimate for aggregate campaign insights
//!
//! The dashboard shows an aggregate derived from campaign budgets alone
//! until the insights endpoint answers (or forever, when it never does).
//! The estimate is deliberately rough; a server response replaces it
//! wholesale.

use crate::domain::{AllCampaignsInsights, Campaign};

/// Impressions assumed per budget unit.
const IMPRESSIONS_PER_BUDGET_UNIT: f64 = 100.0;
/// Clicks assumed per budget unit.
const CLICKS_PER_BUDGET_UNIT: f64 = 5.0;
/// Conversions assumed per budget unit.
const CONVERSIONS_PER_BUDGET_UNIT: f64 = 0.5;

// The rate figures are fixed placeholders, not derived from the input.
const ESTIMATED_AVERAGE_CTR: f64 = 5.0;
const ESTIMATED_AVERAGE_CPC: f64 = 2.5;
const ESTIMATED_ROI: f64 = 15.0;

/// Derive an aggregate-insights estimate from the campaign list alone.
///
/// Pure and deterministic. Callers only invoke this for a non-empty
/// list; an estimate over no campaigns is never computed or displayed.
pub fn estimate_from_campaigns(campaigns: &[Campaign]) -> AllCampaignsInsights {
    let budget_sum = |scale: f64| -> f64 { campaigns.iter().map(|c| c.budget * scale).sum() };

    AllCampaignsInsights {
        total_impressions: budget_sum(IMPRESSIONS_PER_BUDGET_UNIT),
        total_clicks: budget_sum(CLICKS_PER_BUDGET_UNIT),
        total_conversions: budget_sum(CONVERSIONS_PER_BUDGET_UNIT),
        total_spend: budget_sum(1.0),
        average_ctr: ESTIMATED_AVERAGE_CTR,
        average_cpc: ESTIMATED_AVERAGE_CPC,
        roi: ESTIMATED_ROI,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CampaignStatus;

    fn campaign(budget: f64) -> Campaign {
        Campaign {
            id: format!("c-{budget}"),
            name: "Campaign".to_string(),
            brand_id: "b1".to_string(),
            status: CampaignStatus::Active,
            budget,
            daily_budget: budget / 30.0,
            platforms: Vec::new(),
            created_at: "2024-03-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn totals_scale_with_budget_sum() {
        let campaigns = vec![campaign(100.0), campaign(250.0), campaign(50.0)];
        let estimate = estimate_from_campaigns(&campaigns);

        assert_eq!(estimate.total_spend, 400.0);
        assert_eq!(estimate.total_impressions, 100.0 * estimate.total_spend);
        assert_eq!(estimate.total_clicks, 5.0 * estimate.total_spend);
        assert_eq!(estimate.total_conversions, 0.5 * estimate.total_spend);
    }

    #[test]
    fn rate_figures_are_fixed() {
        let with_small = estimate_from_campaigns(&[campaign(1.0)]);
        let with_large = estimate_from_campaigns(&[campaign(100_000.0)]);

        for estimate in [with_small, with_large] {
            assert_eq!(estimate.average_ctr, 5.0);
            assert_eq!(estimate.average_cpc, 2.5);
            assert_eq!(estimate.roi, 15.0);
        }
    }

    #[test]
    fn zero_budgets_produce_zero_totals() {
        let estimate = estimate_from_campaigns(&[campaign(0.0), campaign(0.0)]);
        assert_eq!(estimate.total_spend, 0.0);
        assert_eq!(estimate.total_impressions, 0.0);
    }
}
