use std::io::Write;
use std::path::Path;

use anyhow::Result;
use tabwriter::TabWriter;
use tracing::info;

use dcest_cli::common::{write_output, OutputFormat};
use dcest_cli::profile::CostProfile;
use dcest_core::{StudyCostConfig, StudyCostResult};

pub fn handle(config: Option<&Path>, format: OutputFormat, out: Option<&Path>) -> Result<()> {
    let config = match config {
        Some(path) => CostProfile::load(path)?.into_config()?,
        None => StudyCostConfig::default(),
    };

    let result = dcest_engine::estimate_study_cost(&config)?;
    info!(
        "Estimated {:.0} for {} study(ies), {:.1} hours over {} buses",
        result.costs.total_cost,
        result.studies.len(),
        result.costs.total_hours,
        result.estimated_buses
    );

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
        OutputFormat::Table => render_table(&config, &result)?,
    };
    write_output(&rendered, out)
}

fn render_table(config: &StudyCostConfig, result: &StudyCostResult) -> Result<String> {
    let mut buf = Vec::new();
    let mut tw = TabWriter::new(&mut buf);

    writeln!(tw, "SCOPE\t")?;
    writeln!(tw, "Total load\t{:.1} MW", result.total_load.value())?;
    writeln!(
        tw,
        "Estimated buses\t{} ({}, {:.1} buses/MW, cal x{:.2})",
        result.estimated_buses,
        config.tier.label(),
        config.tier.buses_per_mw(),
        config.bus_calibration
    )?;
    writeln!(tw)?;

    if result.studies.is_empty() {
        writeln!(tw, "No studies selected.\t")?;
    } else {
        writeln!(tw, "STUDY\tHOURS\tSENIOR\tMID\tJUNIOR\tCOST")?;
        for study in &result.studies {
            writeln!(
                tw,
                "{}\t{:.1}\t{:.1}\t{:.1}\t{:.1}\t{:.0}",
                study.study.label(),
                study.hours,
                study.senior_hours,
                study.mid_hours,
                study.junior_hours,
                study.total_cost
            )?;
        }
    }
    writeln!(tw)?;

    let costs = &result.costs;
    writeln!(tw, "Study cost\t{:.0}", costs.study_cost)?;
    writeln!(
        tw,
        "Client meetings\t{:.0} ({} x {:.0})",
        costs.meeting_cost, config.client_meetings, config.meeting_cost
    )?;
    writeln!(
        tw,
        "Report preparation\t{:.0} ({})",
        costs.report_cost,
        config.report_format.label()
    )?;
    writeln!(tw, "Subtotal\t{:.0}", costs.subtotal)?;
    writeln!(
        tw,
        "Margin ({:.0}%)\t{:.0}",
        config.margin_percent, costs.margin_amount
    )?;
    writeln!(tw, "TOTAL COST\t{:.0}", costs.total_cost)?;
    writeln!(tw, "Total hours\t{:.1}", costs.total_hours)?;
    tw.flush()?;
    drop(tw);

    let text = String::from_utf8(buf)?;
    Ok(text)
}
