use std::io::Write;
use std::path::Path;

use anyhow::Result;
use tabwriter::TabWriter;
use tracing::info;

use dcest_cli::common::{write_output, OutputFormat};
use dcest_cli::profile::BusProfile;
use dcest_core::{BusCountConfig, BusCountResult};

pub fn handle(config: Option<&Path>, format: OutputFormat, out: Option<&Path>) -> Result<()> {
    let config = match config {
        Some(path) => BusProfile::load(path)?.into_config()?,
        None => BusCountConfig::default(),
    };

    let result = dcest_engine::estimate_bus_count(&config)?;
    info!(
        "Estimated {} buses at {} redundancy (factor {:.2})",
        result.total_buses,
        config.redundancy_tier.label(),
        result.redundancy_factor
    );

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
        OutputFormat::Table => render_table(&config, &result)?,
    };
    write_output(&rendered, out)
}

fn render_table(config: &BusCountConfig, result: &BusCountResult) -> Result<String> {
    let mut buf = Vec::new();
    let mut tw = TabWriter::new(&mut buf);

    writeln!(tw, "LOAD\tMW")?;
    writeln!(tw, "Total facility\t{:.2}", result.total_mw.value())?;
    writeln!(tw, "IT\t{:.2}", result.it_mw.value())?;
    writeln!(tw, "Mechanical\t{:.2}", result.mechanical_mw.value())?;
    writeln!(tw, "House/auxiliary\t{:.2}", result.house_mw.value())?;
    writeln!(tw)?;

    writeln!(tw, "CATEGORY\tBUSES (N)")?;
    writeln!(tw, "MV switchgear\t{}", result.mv_buses)?;
    writeln!(tw, "Transformers\t{}", result.transformers)?;
    writeln!(tw, "LV switchboards (IT PCC)\t{}", result.lv_it)?;
    writeln!(tw, "LV switchboards (mech MCC)\t{}", result.lv_mechanical)?;
    writeln!(tw, "LV switchboards (house PCC)\t{}", result.lv_house)?;
    writeln!(tw, "UPS lineups\t{}", result.ups_lineups)?;
    writeln!(tw, "PDUs\t{}", result.pdus)?;
    writeln!(tw, "Voltage-level additions\t{}", result.voltage_additions)?;
    writeln!(tw, "Generator additions\t{}", result.generator_additions)?;
    writeln!(tw)?;

    writeln!(
        tw,
        "Redundancy\t{} (x{:.2})",
        config.redundancy_tier.label(),
        result.redundancy_factor
    )?;
    writeln!(tw, "Expansion factor\tx{:.2}", config.expansion_factor)?;
    writeln!(tw, "TOTAL BUSES\t{}", result.total_buses)?;
    tw.flush()?;
    drop(tw);

    let mut text = String::from_utf8(buf)?;

    if !result.advisories.is_empty() {
        text.push_str("\nAdvisories:\n");
        for advisory in &result.advisories {
            text.push_str(&format!("  {advisory}\n"));
        }
    }
    Ok(text)
}
