use clap::{Args, ValueEnum};
use moving_leads::error::AppError;
use moving_leads::leads::{export_csv, score, Lead, MockLeadFactory};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Args, Debug)]
pub(crate) struct GenerateArgs {
    /// Number of leads to generate
    #[arg(long, default_value_t = 5)]
    pub(crate) count: usize,
    /// Seed for reproducible output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Signal text; repeat the flag for each signal
    #[arg(long = "signal", required = true)]
    pub(crate) signals: Vec<String>,
}

pub(crate) fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let leads = generate_leads(&args);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_leads(&leads, args.format, &mut out)?;
    out.flush()?;
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let outcome = score(&args.signals);

    println!("Score: {}/100 ({})", outcome.score, outcome.urgency);
    for component in &outcome.components {
        println!("  +{:<3} {}", component.points, component.label);
    }
    println!("{}", outcome.urgency.guidance());
    Ok(())
}

fn generate_leads(args: &GenerateArgs) -> Vec<Lead> {
    let mut factory = match args.seed {
        Some(seed) => MockLeadFactory::seeded(seed),
        None => MockLeadFactory::from_os_rng(),
    };
    (0..args.count).map(|_| factory.generate()).collect()
}

fn write_leads<W: Write>(
    leads: &[Lead],
    format: OutputFormat,
    out: &mut W,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, leads)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => export_csv(leads, &mut *out)?,
    }
    Ok(())
}
