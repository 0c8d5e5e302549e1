use std::path::Path;

use anyhow::Result;
use tracing::info;

use dcest_cli::cli::TemplateKind;
use dcest_cli::common::write_output;

/// Default bus-count profile. Values mirror `BusCountConfig::default()`.
const BUSES_TEMPLATE: &str = r#"# dcest bus-count profile
# Set exactly one of it_load_mw / total_facility_load_mw.
it_load_mw = 5.0
# total_facility_load_mw = 7.8

# Power usage effectiveness (total / IT), at least 1.1.
pue = 1.56
# One of: "enterprise-colo", "hyperscale", "ai-hpc"
dc_type = "enterprise-colo"
# Fraction of non-IT load attributed to mechanical plant, 0.5 to 0.9.
mechanical_fraction = 0.7
# One of: "N", "N+1", "2N"
redundancy_tier = "N+1"

# Per-unit equipment capacities (all strictly positive).
ups_lineup_mw = 1.5
transformer_mva = 3.0
lv_bus_mw = 3.0
pdu_mva = 0.3
mv_buses_base = 2

# 2 or 3 voltage levels in the distribution chain.
voltage_levels = 2
backup_generators = 2
# One of: "air", "liquid"
cooling = "air"
# One of: "temperate", "cold", "hot-humid"
climate = "temperate"

# Future-growth allowance on the final count, at least 1.0.
expansion_factor = 1.0
power_factor = 0.95
utility_incomers = 1
"#;

/// Default study-cost profile. Values mirror `StudyCostConfig::default()`.
const COST_TEMPLATE: &str = r#"# dcest study-cost profile
it_capacity_mw = 5.0
mechanical_load_mw = 2.0
house_load_mw = 0.5

# One of: "I", "II", "III", "IV"
tier = "III"
# One of: "standard", "urgent"
delivery = "standard"
# One of: "basic", "detailed", "client-branded"
report_format = "detailed"

# Any subset of: "load_flow", "short_circuit", "pdc", "arc_flash".
# An empty list is valid and yields a zero-cost study breakdown.
studies = ["load_flow", "short_circuit", "pdc", "arc_flash"]

# Global multiplier on the tier-based bus estimate.
bus_calibration = 1.0

client_meetings = 2
meeting_cost = 8000.0
# Labor premium, applied only when delivery = "urgent".
urgency_multiplier = 1.3
margin_percent = 15.0

# Per-study hour calibration from historical project data.
[calibration]
load_flow = 1.0
short_circuit = 1.0
pdc = 1.0
arc_flash = 1.0

# Labor split across grades; renormalized to sum to 1.
[allocation]
senior = 0.2
mid = 0.3
junior = 0.5

# Hourly billing rates per grade.
[rates]
senior = 1200.0
mid = 650.0
junior = 350.0
"#;

pub fn handle(kind: TemplateKind, out: Option<&Path>) -> Result<()> {
    let template = match kind {
        TemplateKind::Buses => BUSES_TEMPLATE,
        TemplateKind::Cost => COST_TEMPLATE,
    };
    write_output(template, out)?;
    if let Some(path) = out {
        info!("Wrote {:?} profile template to {}", kind, path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use dcest_cli::profile::{BusProfile, CostProfile};

    #[test]
    fn test_templates_round_trip_through_profiles() {
        let bus: BusProfile = toml::from_str(super::BUSES_TEMPLATE).unwrap();
        let config = bus.into_config().unwrap();
        assert_eq!(config, dcest_core::BusCountConfig::default());

        let cost: CostProfile = toml::from_str(super::COST_TEMPLATE).unwrap();
        let config = cost.into_config().unwrap();
        let defaults = dcest_core::StudyCostConfig::default();
        assert_eq!(config.tier, defaults.tier);
        assert_eq!(config.studies, defaults.studies);
        assert_eq!(config.rates, defaults.rates);
        assert_eq!(config.client_meetings, defaults.client_meetings);
        // Allocation round-trips through renormalization, so compare within
        // floating-point tolerance
        assert!((config.allocation.senior() - defaults.allocation.senior()).abs() < 1e-9);
        assert!((config.allocation.junior() - defaults.allocation.junior()).abs() < 1e-9);
    }
}
