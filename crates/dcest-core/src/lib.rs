//! # dcest-core: Data-Center Estimation Data Model
//!
//! Provides the configuration records, result records, and enumerated
//! categories shared by the two estimators in `dcest-engine`:
//!
//! - **Bus-count estimation**: sizes the electrical distribution tiers of a
//!   data-center power system (MV switchgear, transformers, LV switchboards,
//!   UPS lineups, PDUs) from a single load figure and a PUE ratio.
//! - **Study-cost estimation**: prices the engineering studies performed on
//!   that system (load flow, short circuit, protective device coordination,
//!   arc flash) from a load split and labor parameters.
//!
//! ## Design Philosophy
//!
//! Configurations are **immutable value objects**: one record per estimation
//! call, constructed and validated up front, never mutated. The estimators
//! are pure functions over them, so there is no ambient state to read and no
//! coordination needed between concurrent calls.
//!
//! Categorical adjustments (data-center type, climate, cooling, facility
//! tier) are methods on the category enums rather than conditional chains,
//! keeping every multiplier auditable in one place.
//!
//! ## Modules
//!
//! - [`advisories`] - Non-fatal findings attached to valid results
//! - [`error`] - Unified [`EstError`] / [`EstResult`] types
//! - [`units`] - [`Megawatts`] / [`MegavoltAmperes`] newtypes

use serde::{Deserialize, Serialize};

pub mod advisories;
pub mod error;
pub mod units;

pub use advisories::{Advisories, Advisory};
pub use error::{EstError, EstResult};
pub use units::{MegavoltAmperes, Megawatts};

// =============================================================================
// Bus-count model
// =============================================================================

/// The independent load variable of a bus-count estimation.
///
/// Exactly one of the two figures drives the calculation; the other is
/// derived through the adjusted PUE. Encoding the choice as an enum makes the
/// "both set" and "neither set" states unrepresentable past the profile
/// layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadSpec {
    /// IT load is given; total facility load = adjusted PUE × IT load
    ItLoad(Megawatts),
    /// Total facility load is given; IT load = total / adjusted PUE
    TotalFacility(Megawatts),
}

impl LoadSpec {
    /// The raw figure, whichever direction it specifies
    pub fn megawatts(&self) -> Megawatts {
        match *self {
            LoadSpec::ItLoad(mw) | LoadSpec::TotalFacility(mw) => mw,
        }
    }
}

/// Data-center class, which shifts the effective PUE.
///
/// Hyperscale and AI/HPC facilities run denser and more efficient cooling
/// plants than enterprise/colocation sites, so their effective PUE is
/// adjusted downward before the load split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DcType {
    #[serde(rename = "enterprise-colo")]
    EnterpriseColo,
    #[serde(rename = "hyperscale")]
    Hyperscale,
    #[serde(rename = "ai-hpc")]
    AiHpc,
}

impl DcType {
    /// Additive adjustment applied to the user-supplied PUE
    pub fn pue_adjustment(self) -> f64 {
        match self {
            DcType::EnterpriseColo => 0.0,
            DcType::Hyperscale => -0.1,
            DcType::AiHpc => -0.2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DcType::EnterpriseColo => "Enterprise/Colo",
            DcType::Hyperscale => "Hyperscale",
            DcType::AiHpc => "AI/HPC",
        }
    }
}

/// Infrastructure redundancy configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedundancyTier {
    /// Base configuration, no redundant equipment
    #[serde(rename = "N")]
    N,
    /// One redundant transformer plus a 15% distribution uplift
    #[serde(rename = "N+1")]
    NPlusOne,
    /// Fully duplicated infrastructure (PDUs partially duplicated)
    #[serde(rename = "2N")]
    TwoN,
}

impl RedundancyTier {
    pub fn label(self) -> &'static str {
        match self {
            RedundancyTier::N => "N",
            RedundancyTier::NPlusOne => "N+1",
            RedundancyTier::TwoN => "2N",
        }
    }
}

/// Cooling technology, which scales the mechanical load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoolingType {
    Air,
    Liquid,
}

impl CoolingType {
    /// Mechanical load multiplier
    pub fn multiplier(self) -> f64 {
        match self {
            CoolingType::Air => 1.0,
            CoolingType::Liquid => 1.2,
        }
    }
}

/// Site climate, which scales the mechanical load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Climate {
    #[serde(rename = "temperate")]
    Temperate,
    #[serde(rename = "cold")]
    Cold,
    #[serde(rename = "hot-humid")]
    HotHumid,
}

impl Climate {
    /// Mechanical load multiplier
    pub fn multiplier(self) -> f64 {
        match self {
            Climate::Temperate => 1.0,
            Climate::Cold => 0.9,
            Climate::HotHumid => 1.1,
        }
    }
}

/// Immutable configuration for one bus-count estimation.
///
/// Constructed fresh per calculation; [`validate`](Self::validate) must pass
/// before the record reaches the estimator. Capacity fields are per-unit
/// equipment ratings used as ceiling-division denominators, which is why the
/// preconditions insist on strict positivity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusCountConfig {
    /// The independent load variable (IT-first or total-first)
    pub load: LoadSpec,
    /// Power usage effectiveness ratio (total / IT), before type adjustment
    pub pue: f64,
    pub dc_type: DcType,
    /// Fraction of non-IT load attributed to mechanical plant
    pub mechanical_fraction: f64,
    pub redundancy_tier: RedundancyTier,
    /// Capacity of one UPS lineup
    pub ups_lineup_mw: Megawatts,
    /// Nameplate rating of one MV/LV transformer
    pub transformer_mva: MegavoltAmperes,
    /// Capacity of one LV bus section
    pub lv_bus_mw: Megawatts,
    /// Nameplate rating of one PDU
    pub pdu_mva: MegavoltAmperes,
    /// MV switchgear sections present regardless of load
    pub mv_buses_base: u32,
    /// Distinct voltage levels in the distribution chain (2 or 3)
    pub voltage_levels: u32,
    pub backup_generators: u32,
    pub cooling: CoolingType,
    pub climate: Climate,
    /// Future-growth allowance applied to the final count
    pub expansion_factor: f64,
    pub power_factor: f64,
    pub utility_incomers: u32,
}

impl Default for BusCountConfig {
    fn default() -> Self {
        Self {
            load: LoadSpec::ItLoad(Megawatts(5.0)),
            pue: 1.56,
            dc_type: DcType::EnterpriseColo,
            mechanical_fraction: 0.7,
            redundancy_tier: RedundancyTier::NPlusOne,
            ups_lineup_mw: Megawatts(1.5),
            transformer_mva: MegavoltAmperes(3.0),
            lv_bus_mw: Megawatts(3.0),
            pdu_mva: MegavoltAmperes(0.3),
            mv_buses_base: 2,
            voltage_levels: 2,
            backup_generators: 2,
            cooling: CoolingType::Air,
            climate: Climate::Temperate,
            expansion_factor: 1.0,
            power_factor: 0.95,
            utility_incomers: 1,
        }
    }
}

impl BusCountConfig {
    /// Check the preconditions the estimator divides and scales by.
    ///
    /// A zero-valued capacity would turn a ceiling division into NaN/Inf, so
    /// violations fail fast with [`EstError::Config`] instead of producing a
    /// partial result.
    pub fn validate(&self) -> EstResult<()> {
        if self.load.megawatts().value() <= 0.0 {
            return Err(EstError::Config("load figure must be positive".into()));
        }
        if self.pue < 1.1 {
            return Err(EstError::Config(format!(
                "PUE must be at least 1.1, got {}",
                self.pue
            )));
        }
        if !(0.5..=0.9).contains(&self.mechanical_fraction) {
            return Err(EstError::Config(format!(
                "mechanical fraction must lie in [0.5, 0.9], got {}",
                self.mechanical_fraction
            )));
        }
        for (name, value) in [
            ("UPS lineup capacity", self.ups_lineup_mw.value()),
            ("transformer rating", self.transformer_mva.value()),
            ("LV bus capacity", self.lv_bus_mw.value()),
            ("PDU rating", self.pdu_mva.value()),
        ] {
            if value <= 0.0 {
                return Err(EstError::Config(format!("{name} must be positive")));
            }
        }
        if !(2..=3).contains(&self.voltage_levels) {
            return Err(EstError::Config(format!(
                "voltage levels must be 2 or 3, got {}",
                self.voltage_levels
            )));
        }
        if self.expansion_factor < 1.0 {
            return Err(EstError::Config(format!(
                "expansion factor must be at least 1.0, got {}",
                self.expansion_factor
            )));
        }
        if self.power_factor <= 0.0 || self.power_factor > 1.0 {
            return Err(EstError::Config(format!(
                "power factor must lie in (0, 1], got {}",
                self.power_factor
            )));
        }
        if self.utility_incomers < 1 {
            return Err(EstError::Config(
                "at least one utility incomer is required".into(),
            ));
        }
        Ok(())
    }
}

/// Derived load split and per-category bus counts for one estimation.
///
/// Per-category counts are the base (N) configuration; the redundancy tier's
/// expansion shows up in `redundancy_factor` and `total_buses`.
#[derive(Debug, Clone, Serialize)]
pub struct BusCountResult {
    pub total_mw: Megawatts,
    pub it_mw: Megawatts,
    pub mechanical_mw: Megawatts,
    pub house_mw: Megawatts,
    /// MV switchgear sections (base + extra incomers)
    pub mv_buses: u32,
    /// Transformers in the base (N) configuration
    pub transformers: u32,
    /// LV power control center sections serving IT load
    pub lv_it: u32,
    /// LV motor control center sections serving mechanical load
    pub lv_mechanical: u32,
    /// LV power control center sections serving house load
    pub lv_house: u32,
    pub lv_total: u32,
    pub ups_lineups: u32,
    /// UPS output switchboard sections (one per lineup)
    pub ups_output: u32,
    pub pdus: u32,
    /// Extra sections introduced by a third voltage level
    pub voltage_additions: u32,
    /// Input/output sections of generator transfer switches
    pub generator_additions: u32,
    /// Multiplier the redundancy tier applied on top of the core count
    pub redundancy_factor: f64,
    pub total_buses: u32,
    pub advisories: Advisories,
}

// =============================================================================
// Study-cost model
// =============================================================================

/// Uptime-Institute-style facility tier, driving both the bus density used
/// for costing and the per-study complexity multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TierLevel {
    #[serde(rename = "I")]
    I,
    #[serde(rename = "II")]
    II,
    #[serde(rename = "III")]
    III,
    #[serde(rename = "IV")]
    IV,
}

impl TierLevel {
    /// Study-effort multiplier for this tier
    pub fn complexity(self) -> f64 {
        match self {
            TierLevel::I => 1.0,
            TierLevel::II => 1.2,
            TierLevel::III => 1.5,
            TierLevel::IV => 2.0,
        }
    }

    /// Buses per MW of total load, the costing-grade bus density
    pub fn buses_per_mw(self) -> f64 {
        match self {
            TierLevel::I => 1.5,
            TierLevel::II => 1.7,
            TierLevel::III => 2.0,
            TierLevel::IV => 2.3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TierLevel::I => "Tier I",
            TierLevel::II => "Tier II",
            TierLevel::III => "Tier III",
            TierLevel::IV => "Tier IV",
        }
    }
}

/// Delivery schedule; urgent delivery prices labor at a premium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryType {
    Standard,
    Urgent,
}

/// Deliverable report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    #[serde(rename = "basic")]
    Basic,
    #[serde(rename = "detailed")]
    Detailed,
    #[serde(rename = "client-branded")]
    ClientBranded,
}

impl ReportFormat {
    /// Multiplier on the base report-preparation cost
    pub fn multiplier(self) -> f64 {
        match self {
            ReportFormat::Basic => 1.0,
            ReportFormat::Detailed => 1.8,
            ReportFormat::ClientBranded => 2.2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportFormat::Basic => "Basic",
            ReportFormat::Detailed => "Detailed",
            ReportFormat::ClientBranded => "Client-Branded",
        }
    }
}

/// Power system study types offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyType {
    LoadFlow,
    ShortCircuit,
    /// Protective device coordination
    Pdc,
    ArcFlash,
}

impl StudyType {
    /// Canonical ordering used for deterministic breakdown output
    pub const ALL: [StudyType; 4] = [
        StudyType::LoadFlow,
        StudyType::ShortCircuit,
        StudyType::Pdc,
        StudyType::ArcFlash,
    ];

    /// Engineering hours per bus before calibration and tier complexity
    pub fn base_hours_per_bus(self) -> f64 {
        match self {
            StudyType::LoadFlow => 0.8,
            StudyType::ShortCircuit => 1.0,
            StudyType::Pdc => 1.5,
            StudyType::ArcFlash => 1.2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StudyType::LoadFlow => "Load Flow Study",
            StudyType::ShortCircuit => "Short Circuit Study",
            StudyType::Pdc => "Protective Device Coordination",
            StudyType::ArcFlash => "Arc Flash Study",
        }
    }
}

/// Per-study calibration factors, letting historical project data tune each
/// study's hour estimate independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyCalibration {
    pub load_flow: f64,
    pub short_circuit: f64,
    pub pdc: f64,
    pub arc_flash: f64,
}

impl Default for StudyCalibration {
    fn default() -> Self {
        Self {
            load_flow: 1.0,
            short_circuit: 1.0,
            pdc: 1.0,
            arc_flash: 1.0,
        }
    }
}

impl StudyCalibration {
    pub fn factor(&self, study: StudyType) -> f64 {
        match study {
            StudyType::LoadFlow => self.load_flow,
            StudyType::ShortCircuit => self.short_circuit,
            StudyType::Pdc => self.pdc,
            StudyType::ArcFlash => self.arc_flash,
        }
    }
}

/// Raw labor shares as supplied by the caller, before normalization.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AllocationShares {
    pub senior: f64,
    pub mid: f64,
    pub junior: f64,
}

/// Labor split across the three engineering grades.
///
/// Invariant: the three fractions sum to 1.0 (±1e-9). The only way to build
/// one is [`normalized`](Self::normalized), which renormalizes once at
/// construction; deserialization funnels through the same path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AllocationShares")]
pub struct LaborAllocation {
    senior: f64,
    mid: f64,
    junior: f64,
}

impl LaborAllocation {
    /// Build an allocation from raw shares, renormalizing to unit sum.
    pub fn normalized(senior: f64, mid: f64, junior: f64) -> EstResult<Self> {
        if senior < 0.0 || mid < 0.0 || junior < 0.0 {
            return Err(EstError::Config(
                "labor allocation shares must be non-negative".into(),
            ));
        }
        let sum = senior + mid + junior;
        if sum <= 0.0 {
            return Err(EstError::Config(
                "labor allocation shares must sum to a positive value".into(),
            ));
        }
        Ok(Self {
            senior: senior / sum,
            mid: mid / sum,
            junior: junior / sum,
        })
    }

    pub fn senior(&self) -> f64 {
        self.senior
    }

    pub fn mid(&self) -> f64 {
        self.mid
    }

    pub fn junior(&self) -> f64 {
        self.junior
    }
}

impl Default for LaborAllocation {
    fn default() -> Self {
        // 20/30/50 split, already unit-sum
        Self {
            senior: 0.2,
            mid: 0.3,
            junior: 0.5,
        }
    }
}

impl TryFrom<AllocationShares> for LaborAllocation {
    type Error = EstError;

    fn try_from(shares: AllocationShares) -> EstResult<Self> {
        LaborAllocation::normalized(shares.senior, shares.mid, shares.junior)
    }
}

/// Hourly billing rates per engineering grade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HourlyRates {
    pub senior: f64,
    pub mid: f64,
    pub junior: f64,
}

impl Default for HourlyRates {
    fn default() -> Self {
        Self {
            senior: 1200.0,
            mid: 650.0,
            junior: 350.0,
        }
    }
}

/// Immutable configuration for one study-cost estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyCostConfig {
    pub it_capacity: Megawatts,
    pub mechanical_load: Megawatts,
    pub house_load: Megawatts,
    pub tier: TierLevel,
    pub delivery: DeliveryType,
    pub report_format: ReportFormat,
    /// Studies in scope; an empty selection is valid and yields a zero-cost
    /// result, not an error
    pub studies: Vec<StudyType>,
    /// Global multiplier on the costing-grade bus estimate
    pub bus_calibration: f64,
    pub calibration: StudyCalibration,
    pub allocation: LaborAllocation,
    pub rates: HourlyRates,
    pub client_meetings: u32,
    pub meeting_cost: f64,
    /// Labor premium applied only for urgent delivery
    pub urgency_multiplier: f64,
    pub margin_percent: f64,
}

impl Default for StudyCostConfig {
    fn default() -> Self {
        Self {
            it_capacity: Megawatts(5.0),
            mechanical_load: Megawatts(2.0),
            house_load: Megawatts(0.5),
            tier: TierLevel::III,
            delivery: DeliveryType::Standard,
            report_format: ReportFormat::Detailed,
            studies: StudyType::ALL.to_vec(),
            bus_calibration: 1.0,
            calibration: StudyCalibration::default(),
            allocation: LaborAllocation::default(),
            rates: HourlyRates::default(),
            client_meetings: 2,
            meeting_cost: 8000.0,
            urgency_multiplier: 1.3,
            margin_percent: 15.0,
        }
    }
}

impl StudyCostConfig {
    /// Check the preconditions of the cost formulas.
    pub fn validate(&self) -> EstResult<()> {
        for (name, value) in [
            ("IT capacity", self.it_capacity.value()),
            ("mechanical load", self.mechanical_load.value()),
            ("house load", self.house_load.value()),
        ] {
            if value < 0.0 {
                return Err(EstError::Config(format!("{name} must be non-negative")));
            }
        }
        if self.it_capacity.value() + self.mechanical_load.value() + self.house_load.value() <= 0.0
        {
            return Err(EstError::Config("total load must be positive".into()));
        }
        if self.bus_calibration <= 0.0 {
            return Err(EstError::Config(
                "bus calibration factor must be positive".into(),
            ));
        }
        for study in StudyType::ALL {
            if self.calibration.factor(study) <= 0.0 {
                return Err(EstError::Config(format!(
                    "calibration factor for {} must be positive",
                    study.label()
                )));
            }
        }
        for (name, value) in [
            ("senior rate", self.rates.senior),
            ("mid rate", self.rates.mid),
            ("junior rate", self.rates.junior),
            ("meeting cost", self.meeting_cost),
            ("margin percent", self.margin_percent),
        ] {
            if value < 0.0 {
                return Err(EstError::Config(format!("{name} must be non-negative")));
            }
        }
        if self.urgency_multiplier < 1.0 {
            return Err(EstError::Config(format!(
                "urgency multiplier must be at least 1.0, got {}",
                self.urgency_multiplier
            )));
        }
        Ok(())
    }
}

/// Hours and costs for a single selected study.
#[derive(Debug, Clone, Serialize)]
pub struct StudyEstimate {
    pub study: StudyType,
    pub hours: f64,
    pub senior_hours: f64,
    pub mid_hours: f64,
    pub junior_hours: f64,
    pub senior_cost: f64,
    pub mid_cost: f64,
    pub junior_cost: f64,
    pub total_cost: f64,
}

/// Aggregate cost roll-up across all selected studies.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CostSummary {
    pub study_cost: f64,
    pub meeting_cost: f64,
    pub report_cost: f64,
    pub subtotal: f64,
    pub margin_amount: f64,
    pub total_cost: f64,
    pub total_hours: f64,
}

/// Complete output of one study-cost estimation.
#[derive(Debug, Clone, Serialize)]
pub struct StudyCostResult {
    pub total_load: Megawatts,
    pub estimated_buses: u32,
    /// Per-study breakdown in canonical [`StudyType::ALL`] order
    pub studies: Vec<StudyEstimate>,
    pub costs: CostSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs_validate() {
        assert!(BusCountConfig::default().validate().is_ok());
        assert!(StudyCostConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = BusCountConfig {
            pdu_mva: MegavoltAmperes(0.0),
            ..BusCountConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, EstError::Config(_)));
        assert!(err.to_string().contains("PDU rating"));
    }

    #[test]
    fn test_power_factor_range() {
        let config = BusCountConfig {
            power_factor: 1.2,
            ..BusCountConfig::default()
        };
        assert!(config.validate().is_err());

        let config = BusCountConfig {
            power_factor: 1.0,
            ..BusCountConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_allocation_normalizes_to_unit_sum() {
        // 20/30/50 entered as percentages
        let alloc = LaborAllocation::normalized(20.0, 30.0, 50.0).unwrap();
        assert!((alloc.senior() + alloc.mid() + alloc.junior() - 1.0).abs() < 1e-9);
        assert!((alloc.senior() - 0.2).abs() < 1e-9);

        // Shares that do not sum to 1 are rescaled, not rejected
        let alloc = LaborAllocation::normalized(0.25, 0.25, 0.25).unwrap();
        assert!((alloc.senior() + alloc.mid() + alloc.junior() - 1.0).abs() < 1e-9);
        assert!((alloc.junior() - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_allocation_rejects_degenerate_shares() {
        assert!(LaborAllocation::normalized(0.0, 0.0, 0.0).is_err());
        assert!(LaborAllocation::normalized(-0.2, 0.6, 0.6).is_err());
    }

    #[test]
    fn test_allocation_deserialization_normalizes() {
        let alloc: LaborAllocation =
            serde_json::from_str(r#"{"senior": 2.0, "mid": 3.0, "junior": 5.0}"#).unwrap();
        assert!((alloc.mid() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_tier_lookup_tables() {
        assert_eq!(TierLevel::I.buses_per_mw(), 1.5);
        assert_eq!(TierLevel::IV.buses_per_mw(), 2.3);
        assert_eq!(TierLevel::III.complexity(), 1.5);
        assert_eq!(StudyType::Pdc.base_hours_per_bus(), 1.5);
    }

    #[test]
    fn test_enum_serde_names() {
        assert_eq!(
            serde_json::to_string(&RedundancyTier::NPlusOne).unwrap(),
            "\"N+1\""
        );
        assert_eq!(serde_json::to_string(&RedundancyTier::TwoN).unwrap(), "\"2N\"");
        assert_eq!(serde_json::to_string(&DcType::AiHpc).unwrap(), "\"ai-hpc\"");
        assert_eq!(serde_json::to_string(&TierLevel::III).unwrap(), "\"III\"");
        let tier: TierLevel = serde_json::from_str("\"IV\"").unwrap();
        assert_eq!(tier, TierLevel::IV);
    }

    #[test]
    fn test_load_spec_mutual_exclusion_by_construction() {
        let spec = LoadSpec::TotalFacility(Megawatts(7.8));
        assert_eq!(spec.megawatts(), Megawatts(7.8));
    }
}
