//! Study-cost estimation for data-center power system engineering services.
//!
//! Prices a scope of studies (load flow, short circuit, protective device
//! coordination, arc flash) from the facility load split:
//!
//! ```text
//! total load ──► buses = ceil(load × tier density × calibration)
//!                   │
//!     per study: hours = buses × base hours/bus × calibration × complexity
//!                   │
//!     grade split ──► rates (× urgency) ──► study cost
//!                   │
//!     + meetings + report preparation ──► margin ──► total
//! ```
//!
//! The bus estimate here is the coarse costing-grade figure (buses per MW by
//! facility tier), not the equipment-level count from
//! [`bus_count`](crate::bus_count); the two serve different purposes and are
//! intentionally independent.

use dcest_core::{
    CostSummary, DeliveryType, EstResult, StudyCostConfig, StudyCostResult, StudyEstimate,
    StudyType,
};

/// Base report-preparation cost before the format multiplier.
const REPORT_BASE_COST: f64 = 15_000.0;

/// Estimate hours and cost for one study scope.
///
/// Pure and deterministic. An empty study selection is a valid "nothing
/// selected" outcome: the result carries an empty breakdown, a zero study
/// cost, and still prices meetings, report, and margin per the formulas.
pub fn estimate(config: &StudyCostConfig) -> EstResult<StudyCostResult> {
    config.validate()?;

    let total_load = config.it_capacity + config.mechanical_load + config.house_load;
    let estimated_buses =
        (total_load.value() * config.tier.buses_per_mw() * config.bus_calibration).ceil() as u32;

    let rate_multiplier = match config.delivery {
        DeliveryType::Urgent => config.urgency_multiplier,
        DeliveryType::Standard => 1.0,
    };

    let tier_complexity = config.tier.complexity();
    let allocation = &config.allocation;
    let rates = &config.rates;

    let mut studies = Vec::new();
    let mut study_cost = 0.0;
    let mut total_hours = 0.0;

    // Canonical order keeps the breakdown deterministic regardless of how the
    // selection was assembled
    for study in StudyType::ALL {
        if !config.studies.contains(&study) {
            continue;
        }
        let hours = f64::from(estimated_buses)
            * study.base_hours_per_bus()
            * config.calibration.factor(study)
            * tier_complexity;

        let senior_hours = hours * allocation.senior();
        let mid_hours = hours * allocation.mid();
        let junior_hours = hours * allocation.junior();

        let senior_cost = senior_hours * rates.senior * rate_multiplier;
        let mid_cost = mid_hours * rates.mid * rate_multiplier;
        let junior_cost = junior_hours * rates.junior * rate_multiplier;
        let total_cost = senior_cost + mid_cost + junior_cost;

        study_cost += total_cost;
        total_hours += hours;

        studies.push(StudyEstimate {
            study,
            hours,
            senior_hours,
            mid_hours,
            junior_hours,
            senior_cost,
            mid_cost,
            junior_cost,
            total_cost,
        });
    }

    let meeting_cost = f64::from(config.client_meetings) * config.meeting_cost;
    let report_cost = REPORT_BASE_COST * config.report_format.multiplier();
    let subtotal = study_cost + meeting_cost + report_cost;
    let margin_amount = subtotal * config.margin_percent / 100.0;

    Ok(StudyCostResult {
        total_load,
        estimated_buses,
        studies,
        costs: CostSummary {
            study_cost,
            meeting_cost,
            report_cost,
            subtotal,
            margin_amount,
            total_cost: subtotal + margin_amount,
            total_hours,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcest_core::{LaborAllocation, Megawatts, ReportFormat, TierLevel};

    /// The reference scope: 5 + 2 + 0.5 MW at tier III, neutral calibration.
    fn tier_iii_scope() -> StudyCostConfig {
        StudyCostConfig::default()
    }

    #[test]
    fn test_reference_bus_estimate() {
        let result = estimate(&tier_iii_scope()).unwrap();
        assert!((result.total_load.value() - 7.5).abs() < 1e-9);
        // ceil(7.5 × 2.0 × 1.0) = 15
        assert_eq!(result.estimated_buses, 15);
    }

    #[test]
    fn test_reference_load_flow_hours() {
        let config = StudyCostConfig {
            studies: vec![StudyType::LoadFlow],
            ..tier_iii_scope()
        };
        let result = estimate(&config).unwrap();
        assert_eq!(result.studies.len(), 1);
        // 15 × 0.8 × 1.0 × 1.5 = 18.0
        assert!((result.studies[0].hours - 18.0).abs() < 1e-9);
        assert!((result.costs.total_hours - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_grade_split_follows_allocation() {
        let config = StudyCostConfig {
            studies: vec![StudyType::ShortCircuit],
            ..tier_iii_scope()
        };
        let result = estimate(&config).unwrap();
        let study = &result.studies[0];
        // 15 × 1.0 × 1.0 × 1.5 = 22.5 hours at 20/30/50
        assert!((study.hours - 22.5).abs() < 1e-9);
        assert!((study.senior_hours - 4.5).abs() < 1e-9);
        assert!((study.mid_hours - 6.75).abs() < 1e-9);
        assert!((study.junior_hours - 11.25).abs() < 1e-9);
        assert!(
            (study.senior_hours + study.mid_hours + study.junior_hours - study.hours).abs() < 1e-9
        );
        // Costs at the default 1200/650/350 rates
        assert!((study.senior_cost - 4.5 * 1200.0).abs() < 1e-9);
        assert!(
            (study.total_cost - (study.senior_cost + study.mid_cost + study.junior_cost)).abs()
                < 1e-9
        );
    }

    #[test]
    fn test_cost_additivity() {
        let result = estimate(&tier_iii_scope()).unwrap();
        let costs = &result.costs;
        let expected_subtotal = costs.study_cost + costs.meeting_cost + costs.report_cost;
        assert!((costs.subtotal - expected_subtotal).abs() < 1e-9);
        assert!((costs.total_cost - expected_subtotal * 1.15).abs() < 1e-6);
        assert!((costs.margin_amount - expected_subtotal * 0.15).abs() < 1e-6);

        let per_study: f64 = result.studies.iter().map(|s| s.total_cost).sum();
        assert!((costs.study_cost - per_study).abs() < 1e-9);
    }

    #[test]
    fn test_meeting_and_report_costs() {
        let result = estimate(&tier_iii_scope()).unwrap();
        // 2 meetings × 8000
        assert!((result.costs.meeting_cost - 16_000.0).abs() < 1e-9);
        // 15 000 × 1.8 for the detailed format
        assert!((result.costs.report_cost - 27_000.0).abs() < 1e-9);

        let branded = StudyCostConfig {
            report_format: ReportFormat::ClientBranded,
            ..tier_iii_scope()
        };
        let result = estimate(&branded).unwrap();
        assert!((result.costs.report_cost - 33_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_urgency_applied_only_when_urgent() {
        let standard = estimate(&tier_iii_scope()).unwrap();
        let urgent = estimate(&StudyCostConfig {
            delivery: DeliveryType::Urgent,
            ..tier_iii_scope()
        })
        .unwrap();
        // Labor scales by 1.3; hours, meetings, and report do not
        assert!((urgent.costs.study_cost - standard.costs.study_cost * 1.3).abs() < 1e-6);
        assert!((urgent.costs.total_hours - standard.costs.total_hours).abs() < 1e-9);
        assert!((urgent.costs.meeting_cost - standard.costs.meeting_cost).abs() < 1e-9);
        assert!((urgent.costs.report_cost - standard.costs.report_cost).abs() < 1e-9);
    }

    #[test]
    fn test_empty_selection_yields_zero_study_cost() {
        let config = StudyCostConfig {
            studies: Vec::new(),
            ..tier_iii_scope()
        };
        let result = estimate(&config).unwrap();
        assert!(result.studies.is_empty());
        assert_eq!(result.costs.study_cost, 0.0);
        assert_eq!(result.costs.total_hours, 0.0);
        // Meetings, report, and margin still price per the formulas
        let expected = (16_000.0 + 27_000.0) * 1.15;
        assert!((result.costs.total_cost - expected).abs() < 1e-6);
    }

    #[test]
    fn test_breakdown_order_is_canonical() {
        let config = StudyCostConfig {
            // Deliberately scrambled selection
            studies: vec![StudyType::ArcFlash, StudyType::LoadFlow, StudyType::Pdc],
            ..tier_iii_scope()
        };
        let result = estimate(&config).unwrap();
        let order: Vec<StudyType> = result.studies.iter().map(|s| s.study).collect();
        assert_eq!(
            order,
            vec![StudyType::LoadFlow, StudyType::Pdc, StudyType::ArcFlash]
        );
    }

    #[test]
    fn test_duplicate_selection_counts_once() {
        let config = StudyCostConfig {
            studies: vec![StudyType::LoadFlow, StudyType::LoadFlow],
            ..tier_iii_scope()
        };
        let result = estimate(&config).unwrap();
        assert_eq!(result.studies.len(), 1);
    }

    #[test]
    fn test_tier_scales_both_buses_and_complexity() {
        let tier_i = estimate(&StudyCostConfig {
            tier: TierLevel::I,
            studies: vec![StudyType::LoadFlow],
            ..tier_iii_scope()
        })
        .unwrap();
        // ceil(7.5 × 1.5) = 12 buses, 12 × 0.8 × 1.0 hours
        assert_eq!(tier_i.estimated_buses, 12);
        assert!((tier_i.studies[0].hours - 9.6).abs() < 1e-9);

        let tier_iv = estimate(&StudyCostConfig {
            tier: TierLevel::IV,
            studies: vec![StudyType::LoadFlow],
            ..tier_iii_scope()
        })
        .unwrap();
        // ceil(7.5 × 2.3) = ceil(17.25) = 18 buses, 18 × 0.8 × 2.0 hours
        assert_eq!(tier_iv.estimated_buses, 18);
        assert!((tier_iv.studies[0].hours - 28.8).abs() < 1e-9);
    }

    #[test]
    fn test_renormalized_allocation_conserves_hours() {
        let config = StudyCostConfig {
            // Percentages rather than fractions; normalization handles it
            allocation: LaborAllocation::normalized(25.0, 35.0, 55.0).unwrap(),
            studies: vec![StudyType::ArcFlash],
            ..tier_iii_scope()
        };
        let result = estimate(&config).unwrap();
        let study = &result.studies[0];
        assert!(
            (study.senior_hours + study.mid_hours + study.junior_hours - study.hours).abs() < 1e-9
        );
    }

    #[test]
    fn test_deterministic_for_identical_config() {
        let config = tier_iii_scope();
        let a = estimate(&config).unwrap();
        let b = estimate(&config).unwrap();
        assert_eq!(a.costs.total_cost, b.costs.total_cost);
        assert_eq!(a.estimated_buses, b.estimated_buses);
    }

    #[test]
    fn test_negative_load_rejected() {
        let config = StudyCostConfig {
            mechanical_load: Megawatts(-2.0),
            ..tier_iii_scope()
        };
        assert!(estimate(&config).is_err());
    }

    #[test]
    fn test_all_monetary_values_non_negative() {
        let result = estimate(&tier_iii_scope()).unwrap();
        let costs = &result.costs;
        for value in [
            costs.study_cost,
            costs.meeting_cost,
            costs.report_cost,
            costs.subtotal,
            costs.margin_amount,
            costs.total_cost,
            costs.total_hours,
        ] {
            assert!(value >= 0.0);
        }
        for study in &result.studies {
            assert!(study.total_cost >= 0.0);
            assert!(study.hours >= 0.0);
        }
    }
}
