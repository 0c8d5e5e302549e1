//! TOML configuration profiles for the two estimators.
//!
//! A profile is the file-facing form of an engine configuration: every field
//! optional, documented defaults filled in, and the mutually-exclusive load
//! figures of the bus-count estimator enforced here, before the typed config
//! is constructed. Unknown keys are rejected so a typo never silently falls
//! back to a default.

use anyhow::{bail, Context, Result};
use dcest_core::{
    BusCountConfig, Climate, CoolingType, DcType, DeliveryType, HourlyRates, LaborAllocation,
    LoadSpec, MegavoltAmperes, Megawatts, RedundancyTier, ReportFormat, StudyCalibration,
    StudyCostConfig, StudyType, TierLevel,
};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Raw bus-count profile as read from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BusProfile {
    pub it_load_mw: Option<f64>,
    pub total_facility_load_mw: Option<f64>,
    pub pue: Option<f64>,
    pub dc_type: Option<DcType>,
    pub mechanical_fraction: Option<f64>,
    pub redundancy_tier: Option<RedundancyTier>,
    pub ups_lineup_mw: Option<f64>,
    pub transformer_mva: Option<f64>,
    pub lv_bus_mw: Option<f64>,
    pub pdu_mva: Option<f64>,
    pub mv_buses_base: Option<u32>,
    pub voltage_levels: Option<u32>,
    pub backup_generators: Option<u32>,
    pub cooling: Option<CoolingType>,
    pub climate: Option<Climate>,
    pub expansion_factor: Option<f64>,
    pub power_factor: Option<f64>,
    pub utility_incomers: Option<u32>,
}

impl BusProfile {
    /// Read and parse a profile file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading profile {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing profile {}", path.display()))
    }

    /// Resolve defaults and build a validated engine configuration.
    pub fn into_config(self) -> Result<BusCountConfig> {
        let defaults = BusCountConfig::default();
        let load = match (self.it_load_mw, self.total_facility_load_mw) {
            (Some(_), Some(_)) => {
                bail!("set exactly one of it_load_mw and total_facility_load_mw, not both")
            }
            (None, None) => {
                bail!("one of it_load_mw or total_facility_load_mw must be set")
            }
            (Some(it), None) => LoadSpec::ItLoad(Megawatts(it)),
            (None, Some(total)) => LoadSpec::TotalFacility(Megawatts(total)),
        };
        let config = BusCountConfig {
            load,
            pue: self.pue.unwrap_or(defaults.pue),
            dc_type: self.dc_type.unwrap_or(defaults.dc_type),
            mechanical_fraction: self
                .mechanical_fraction
                .unwrap_or(defaults.mechanical_fraction),
            redundancy_tier: self.redundancy_tier.unwrap_or(defaults.redundancy_tier),
            ups_lineup_mw: self
                .ups_lineup_mw
                .map(Megawatts)
                .unwrap_or(defaults.ups_lineup_mw),
            transformer_mva: self
                .transformer_mva
                .map(MegavoltAmperes)
                .unwrap_or(defaults.transformer_mva),
            lv_bus_mw: self.lv_bus_mw.map(Megawatts).unwrap_or(defaults.lv_bus_mw),
            pdu_mva: self.pdu_mva.map(MegavoltAmperes).unwrap_or(defaults.pdu_mva),
            mv_buses_base: self.mv_buses_base.unwrap_or(defaults.mv_buses_base),
            voltage_levels: self.voltage_levels.unwrap_or(defaults.voltage_levels),
            backup_generators: self.backup_generators.unwrap_or(defaults.backup_generators),
            cooling: self.cooling.unwrap_or(defaults.cooling),
            climate: self.climate.unwrap_or(defaults.climate),
            expansion_factor: self.expansion_factor.unwrap_or(defaults.expansion_factor),
            power_factor: self.power_factor.unwrap_or(defaults.power_factor),
            utility_incomers: self.utility_incomers.unwrap_or(defaults.utility_incomers),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Raw study-cost profile as read from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CostProfile {
    pub it_capacity_mw: Option<f64>,
    pub mechanical_load_mw: Option<f64>,
    pub house_load_mw: Option<f64>,
    pub tier: Option<TierLevel>,
    pub delivery: Option<DeliveryType>,
    pub report_format: Option<ReportFormat>,
    /// Omitted: all four studies; empty list: a valid zero-cost scope
    pub studies: Option<Vec<StudyType>>,
    pub bus_calibration: Option<f64>,
    pub calibration: Option<StudyCalibration>,
    pub allocation: Option<LaborAllocation>,
    pub rates: Option<HourlyRates>,
    pub client_meetings: Option<u32>,
    pub meeting_cost: Option<f64>,
    pub urgency_multiplier: Option<f64>,
    pub margin_percent: Option<f64>,
}

impl CostProfile {
    /// Read and parse a profile file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading profile {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing profile {}", path.display()))
    }

    /// Resolve defaults and build a validated engine configuration.
    pub fn into_config(self) -> Result<StudyCostConfig> {
        let defaults = StudyCostConfig::default();
        let config = StudyCostConfig {
            it_capacity: self
                .it_capacity_mw
                .map(Megawatts)
                .unwrap_or(defaults.it_capacity),
            mechanical_load: self
                .mechanical_load_mw
                .map(Megawatts)
                .unwrap_or(defaults.mechanical_load),
            house_load: self
                .house_load_mw
                .map(Megawatts)
                .unwrap_or(defaults.house_load),
            tier: self.tier.unwrap_or(defaults.tier),
            delivery: self.delivery.unwrap_or(defaults.delivery),
            report_format: self.report_format.unwrap_or(defaults.report_format),
            studies: self.studies.unwrap_or(defaults.studies),
            bus_calibration: self.bus_calibration.unwrap_or(defaults.bus_calibration),
            calibration: self.calibration.unwrap_or(defaults.calibration),
            allocation: self.allocation.unwrap_or(defaults.allocation),
            rates: self.rates.unwrap_or(defaults.rates),
            client_meetings: self.client_meetings.unwrap_or(defaults.client_meetings),
            meeting_cost: self.meeting_cost.unwrap_or(defaults.meeting_cost),
            urgency_multiplier: self
                .urgency_multiplier
                .unwrap_or(defaults.urgency_multiplier),
            margin_percent: self.margin_percent.unwrap_or(defaults.margin_percent),
        };
        config.validate()?;
        Ok(config)
    }
}
