use crate::infra::{InMemoryAssessmentRepository, InMemoryReportNotifier};
use clap::Args;
use rainwise::assessment::{
    AssessmentInput, AssessmentService, Location, ReportOutput, StructureKind,
};
use rainwise::config::AppConfig;
use rainwise::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// JSON file describing the site; flags below override its fields
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Site name shown in the report header
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Catchment roof area in square metres
    #[arg(long)]
    pub(crate) roof_area: Option<f64>,
    /// Unpaved open space available for recharge structures, square metres
    #[arg(long)]
    pub(crate) open_space: Option<f64>,
    /// Average annual rainfall in millimetres
    #[arg(long)]
    pub(crate) rainfall: Option<f64>,
    /// Depth to groundwater in metres
    #[arg(long)]
    pub(crate) gw_depth: Option<f64>,
    /// Soil permeability index (0-100)
    #[arg(long)]
    pub(crate) soil_perm: Option<f64>,
    /// Number of people in the household
    #[arg(long)]
    pub(crate) dwellers: Option<u32>,
    /// Free-text roof material, e.g. "RCC" or "metal sheet"
    #[arg(long)]
    pub(crate) roof_material: Option<String>,
    /// Print the report as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the stored report payload as JSON after the summary
    #[arg(long)]
    pub(crate) show_payload: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let json = args.json;
    let input = build_input(args)?;
    let config = AppConfig::load()?;
    let engine = rainwise::FeasibilityEngine::new(config.engine);
    let report = engine.compute(&input);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(input.name.as_deref(), &report);
    }
    Ok(())
}

pub(crate) fn build_input(args: AssessArgs) -> Result<AssessmentInput, AppError> {
    let mut input = match &args.input {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str::<AssessmentInput>(&raw)?
        }
        None => AssessmentInput::default(),
    };

    if args.name.is_some() {
        input.name = args.name;
    }
    if args.roof_area.is_some() {
        input.roof_area_m2 = args.roof_area;
    }
    if args.open_space.is_some() {
        input.open_space_m2 = args.open_space;
    }
    if args.rainfall.is_some() {
        input.avg_rainfall_mm = args.rainfall;
    }
    if args.gw_depth.is_some() {
        input.gw_depth_m = args.gw_depth;
    }
    if args.soil_perm.is_some() {
        input.soil_perm = args.soil_perm;
    }
    if args.dwellers.is_some() {
        input.dwellers = args.dwellers;
    }
    if args.roof_material.is_some() {
        input.roof_material = args.roof_material;
    }

    Ok(input)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let notifier = Arc::new(InMemoryReportNotifier::default());
    let service = AssessmentService::new(repository, notifier.clone(), config.engine);

    println!("Rainwater harvesting demo");
    for site in demo_sites() {
        match service.submit(site) {
            Ok(record) => {
                let submitted = record.summary_view();
                println!(
                    "- Received assessment {} -> status {}",
                    submitted.assessment_id, submitted.status
                );
            }
            Err(err) => println!("  Submission rejected: {}", err),
        }
    }

    let completed = match service.evaluate_pending(DEMO_BATCH_LIMIT) {
        Ok(completed) => completed,
        Err(err) => {
            println!("  Evaluation unavailable: {}", err);
            return Ok(());
        }
    };
    println!("- Evaluated {} pending assessment(s)", completed.len());

    for assessment_id in &completed {
        let record = service.get(assessment_id)?;
        let report = service.report(assessment_id)?;
        render_report(record.input.name.as_deref(), &report);

        if args.show_payload {
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("\nReport payload:\n{}", json),
                Err(err) => println!("\nReport payload unavailable: {}", err),
            }
        }
    }

    let events = notifier.events();
    if events.is_empty() {
        println!("\nReport notifications: none dispatched");
    } else {
        println!("\nReport notifications:");
        for event in events {
            println!(
                "  - {} scored {} ({}) at {}",
                event.assessment_id,
                event.feasibility_score,
                event.category.label(),
                event.generated_at
            );
        }
    }

    Ok(())
}

const DEMO_BATCH_LIMIT: usize = 10;

fn demo_sites() -> Vec<AssessmentInput> {
    vec![
        AssessmentInput {
            name: Some("Lakeview Residence".to_string()),
            location: Location {
                latitude: Some(12.9716),
                longitude: Some(77.5946),
                address: Some("14 Lake Road".to_string()),
            },
            dwellers: Some(4),
            roof_area_m2: Some(120.0),
            open_space_m2: Some(15.0),
            roof_material: Some("Concrete (RCC)".to_string()),
            roof_slope_deg: Some(5.0),
            avg_rainfall_mm: Some(1200.0),
            gw_depth_m: Some(10.0),
            soil_perm: Some(50.0),
            ..AssessmentInput::default()
        },
        AssessmentInput {
            name: Some("Hillside Apartments".to_string()),
            location: Location {
                address: Some("Block C, Ridge Street".to_string()),
                ..Location::default()
            },
            dwellers: Some(24),
            roof_area_m2: Some(180.0),
            open_space_m2: Some(2.0),
            roof_material: Some("RCC slab".to_string()),
            avg_rainfall_mm: Some(900.0),
            gw_depth_m: Some(12.0),
            soil_perm: Some(30.0),
            ..AssessmentInput::default()
        },
    ]
}

pub(crate) fn render_report(name: Option<&str>, report: &ReportOutput) {
    println!("\nFeasibility report: {}", name.unwrap_or("unnamed site"));
    println!(
        "Score {} / 100 ({}) | {} L harvestable per year at {} mm rainfall",
        report.feasibility_score,
        report.category.label(),
        report.litres_per_year,
        report.avg_rainfall_mm
    );

    let b = &report.breakdown;
    println!(
        "Breakdown: roof {} | open space {} | rainfall {} | groundwater {} | soil {}",
        b.roof, b.open_space, b.rainfall, b.groundwater, b.soil
    );

    println!("Recommended structures:");
    for rec in &report.recommended_structures {
        println!("  - {} (confidence {})", rec.kind.label(), rec.confidence);
        println!("    {}", rec.reason);
    }

    let dims = &report.recommended_dimensions;
    println!(
        "Pit: {} m diameter x {} m deep ({} m³)",
        dims.pit.diameter_m, dims.pit.depth_m, dims.pit.volume_m3
    );
    if let Some(structure) = report.on_site_structure() {
        if structure.kind == StructureKind::TrenchWithPits {
            println!(
                "Trench: {} m wide x {} m deep x {} m long",
                dims.trench.width_m, dims.trench.depth_m, dims.trench.length_m
            );
        }
    }

    let costs = &report.cost_benefit;
    println!(
        "Costs: install {:.0} | net {:.0} after subsidy {:.0} | maintenance {:.0}/yr over {} years",
        costs.installation_cost,
        costs.net_cost,
        costs.subsidy_amount,
        costs.annual_maintenance,
        costs.lifespan_years
    );
    match costs.payback_years {
        Some(years) => println!(
            "Savings {:.0}/yr | payback {} years",
            costs.annual_water_bill_savings, years
        ),
        None => println!("Savings none projected | payback not reached"),
    }

    let impact = &report.environmental_impact;
    println!(
        "Environmental impact ({}):",
        impact.sustainability_rating.label()
    );
    for bullet in &impact.description_bullets {
        println!("  - {}", bullet);
    }
}
