use serde::{Deserialize, Serialize};

/// Performance metrics for a single campaign.
///
/// Every metric is optional: the backend omits or nulls fields it has no
/// data for, and an all-zero record counts as no data too.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignInsights {
    #[serde(default)]
    pub campaign_id: String,
    #[serde(default)]
    pub impressions: Option<f64>,
    #[serde(default)]
    pub clicks: Option<f64>,
    #[serde(default)]
    pub conversions: Option<f64>,
    #[serde(default)]
    pub spend: Option<f64>,
    #[serde(default)]
    pub ctr: Option<f64>,
    #[serde(default)]
    pub cpc: Option<f64>,
    #[serde(default)]
    pub conversion_rate: Option<f64>,
}

impl CampaignInsights {
    /// True when at least one metric carries a non-zero value.
    ///
    /// A record where every field is missing, null or zero is treated
    /// the same as no record at all.
    pub fn has_data(&self) -> bool {
        [
            self.impressions,
            self.clicks,
            self.conversions,
            self.spend,
            self.ctr,
            self.cpc,
            self.conversion_rate,
        ]
        .into_iter()
        .flatten()
        .any(|value| value != 0.0)
    }
}

/// Aggregate metrics across all campaigns.
///
/// `total_impressions` is the shape marker: a payload without it fails
/// to decode, and the dashboard keeps whatever insights it already has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllCampaignsInsights {
    pub total_impressions: f64,
    #[serde(default)]
    pub total_clicks: f64,
    #[serde(default)]
    pub total_conversions: f64,
    #[serde(default)]
    pub total_spend: f64,
    #[serde(default)]
    pub average_ctr: f64,
    #[serde(default)]
    pub average_cpc: f64,
    #[serde(default)]
    pub roi: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_record_has_no_data() {
        let insights = CampaignInsights {
            campaign_id: "c1".to_string(),
            impressions: Some(0.0),
            clicks: Some(0.0),
            conversions: Some(0.0),
            spend: Some(0.0),
            ctr: Some(0.0),
            cpc: Some(0.0),
            conversion_rate: Some(0.0),
        };
        assert!(!insights.has_data());
    }

    #[test]
    fn single_nonzero_metric_counts_as_data() {
        let insights = CampaignInsights {
            campaign_id: "c1".to_string(),
            impressions: Some(100.0),
            ..Default::default()
        };
        assert!(insights.has_data());
    }

    #[test]
    fn null_and_missing_metrics_are_tolerated() {
        let json = r#"{"campaign_id": "c1", "impressions": null, "clicks": 5}"#;
        let insights: CampaignInsights = serde_json::from_str(json).unwrap();
        assert_eq!(insights.impressions, None);
        assert_eq!(insights.clicks, Some(5.0));
        assert!(insights.has_data());
    }

    #[test]
    fn aggregate_without_total_impressions_fails_to_decode() {
        let json = r#"{"total_clicks": 50.0, "total_spend": 1000.0}"#;
        assert!(serde_json::from_str::<AllCampaignsInsights>(json).is_err());
    }

    #[test]
    fn aggregate_missing_secondary_fields_defaults_to_zero() {
        let json = r#"{"total_impressions": 500.0}"#;
        let insights: AllCampaignsInsights = serde_json::from_str(json).unwrap();
        assert_eq!(insights.total_impressions, 500.0);
        assert_eq!(insights.roi, 0.0);
    }
}
