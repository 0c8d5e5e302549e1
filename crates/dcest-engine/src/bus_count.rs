//! Bus-count estimation for data-center power distribution systems.
//!
//! Derives the IT/mechanical/house load split from a single load figure and a
//! PUE ratio, sizes each equipment tier by ceiling-dividing load by per-unit
//! capacity, then applies the redundancy tier and expansion allowance:
//!
//! ```text
//! load figure ──► adjusted PUE ──► IT / mechanical / house MW
//!                                        │
//!     ceil(load ÷ capacity) per tier ◄───┘
//!     MV · transformers · LV · UPS · PDU (+ voltage / generator additions)
//!                                        │
//!     redundancy policy (N / N+1 / 2N) ──► expansion ──► total buses
//! ```
//!
//! The whole pass is closed-form arithmetic; the only failure mode is an
//! invalid configuration, rejected before any division happens.

use dcest_core::{
    Advisories, BusCountConfig, BusCountResult, EstResult, LoadSpec, Megawatts, RedundancyTier,
};

/// Floor on the effective PUE after the data-center-type adjustment.
const MIN_EFFECTIVE_PUE: f64 = 1.1;

/// Distribution uplift that rides on top of the extra transformer in an N+1
/// configuration.
const N_PLUS_ONE_UPLIFT: f64 = 1.15;

/// Share of the PDU population that is duplicated in a 2N design. PDUs are
/// deliberately not fully doubled: partial PDU redundancy is common practice
/// even in otherwise fully-duplicated systems.
const TWO_N_PDU_SCALE: f64 = 1.5;

/// Sections per LV bus capacity, rounded up. Loads here are guaranteed
/// non-negative and capacities strictly positive by config validation.
fn sections(load: Megawatts, capacity: Megawatts) -> u32 {
    (load / capacity).ceil() as u32
}

/// Estimate the electrical bus count for one facility configuration.
///
/// Pure and deterministic: identical configs yield identical results. Fails
/// fast with [`EstError::Config`](dcest_core::EstError) when a precondition
/// does not hold; out-of-range but computable inputs produce advisories on a
/// complete result instead.
pub fn estimate(config: &BusCountConfig) -> EstResult<BusCountResult> {
    config.validate()?;

    // Load derivation through the type-adjusted PUE
    let adjusted_pue = (config.pue + config.dc_type.pue_adjustment()).max(MIN_EFFECTIVE_PUE);
    let (total_mw, it_mw) = match config.load {
        LoadSpec::ItLoad(it) => (it * adjusted_pue, it),
        LoadSpec::TotalFacility(total) => (total, total / adjusted_pue),
    };
    let non_it_mw = total_mw - it_mw;

    // Mechanical/house split. House load backs out the environment-adjusted
    // mechanical share, preserving the established formula even where the
    // multipliers make it non-obvious.
    let env_multiplier = config.cooling.multiplier() * config.climate.multiplier();
    let mechanical_mw = config.mechanical_fraction * non_it_mw * env_multiplier;
    let house_mw = non_it_mw - mechanical_mw / env_multiplier;

    // Base (N) counts per equipment tier
    let lv_it = sections(it_mw, config.lv_bus_mw);
    let lv_mechanical = sections(mechanical_mw, config.lv_bus_mw);
    let lv_house = sections(house_mw, config.lv_bus_mw);
    let lv_total = lv_it + lv_mechanical + lv_house;

    let ups_lineups = sections(it_mw, config.ups_lineup_mw);
    let ups_output = ups_lineups;
    let pdus = (it_mw.value() / config.pdu_mva.value()).ceil() as u32;
    let transformers = sections(
        total_mw,
        config.transformer_mva.active_power(config.power_factor),
    );

    let mv_buses = config.mv_buses_base + (config.utility_incomers - 1);
    let voltage_additions = if config.voltage_levels > 2 {
        (config.voltage_levels - 2) * (transformers + 1)
    } else {
        0
    };
    let generator_additions = config.backup_generators * 2;

    let core_n =
        mv_buses + transformers + lv_total + ups_output + pdus + voltage_additions
            + generator_additions;

    // Redundancy expansion, policy by tier
    let (expanded, redundancy_factor) = match config.redundancy_tier {
        RedundancyTier::N => (f64::from(core_n), 1.0),
        RedundancyTier::NPlusOne => {
            // One extra transformer, everything else as sized for N
            (f64::from(core_n + 1) * N_PLUS_ONE_UPLIFT, N_PLUS_ONE_UPLIFT)
        }
        RedundancyTier::TwoN => {
            let duplicated = 2 * (mv_buses + transformers + lv_total + ups_output)
                + 2 * (voltage_additions + generator_additions);
            (
                f64::from(duplicated) + TWO_N_PDU_SCALE * f64::from(pdus),
                2.0,
            )
        }
    };
    let total_buses = (expanded * config.expansion_factor).ceil() as u32;

    // Advisory thresholds, each independently evaluated
    let mut advisories = Advisories::new();
    if total_buses > 500 && total_mw.value() < 20.0 {
        advisories.add(
            "sizing",
            format!(
                "{total_buses} buses is a high bus count for facility size ({total_mw}); \
                 review capacity inputs"
            ),
        );
    }
    if pdus > 500 {
        advisories.add(
            "pdu",
            format!("{pdus} PDUs exceeds 500; consider larger PDU blocks"),
        );
    }
    if it_mw / total_mw < 0.3 {
        advisories.add(
            "load-split",
            format!(
                "IT load is {:.0}% of facility total; low IT fraction, check PUE",
                100.0 * (it_mw / total_mw)
            ),
        );
    }

    Ok(BusCountResult {
        total_mw,
        it_mw,
        mechanical_mw,
        house_mw,
        mv_buses,
        transformers,
        lv_it,
        lv_mechanical,
        lv_house,
        lv_total,
        ups_lineups,
        ups_output,
        pdus,
        voltage_additions,
        generator_additions,
        redundancy_factor,
        total_buses,
        advisories,
    })
}
