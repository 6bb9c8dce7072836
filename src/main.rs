// ==========================================
// Childcare Occupancy Planner - CLI entry
// ==========================================
// Usage: childcare-occupancy <facility-snapshot.json> <YYYY-MM>
// Loads one read-only facility snapshot, plans the target month and
// prints the transition plan as JSON on stdout.
// ==========================================

use anyhow::{bail, Context, Result};
use childcare_occupancy::{logging, FacilityFile, TargetMonth, TransitionPlanner};
use std::path::PathBuf;

fn main() -> Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", childcare_occupancy::APP_NAME);
    tracing::info!("version: {}", childcare_occupancy::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let (Some(path), Some(month)) = (args.next(), args.next()) else {
        bail!("usage: childcare-occupancy <facility-snapshot.json> <YYYY-MM>");
    };
    let path = PathBuf::from(path);
    let target_month: TargetMonth = month.parse()?;

    let facility = FacilityFile::load(&path)?
        .into_facility(target_month.first_day())
        .context("facility snapshot failed validation")?;

    let plan = TransitionPlanner::new()
        .optimize_occupancy(
            &facility.catalog,
            &facility.children,
            &facility.waitlist,
            target_month,
        )
        .with_context(|| format!("planning failed for {target_month}"))?;

    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
