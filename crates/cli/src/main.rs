use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitals_core::constants::DEFAULT_DATA_FILE;
use vitals_core::PatientStore;
use vitals_types::{PatientId, PatientSelector, Visit};

mod menu;
mod render;

#[derive(Parser)]
#[command(name = "vitals")]
#[command(about = "Patient vital-sign record system")]
struct Cli {
    /// Path to the patient data file
    #[arg(long, default_value = DEFAULT_DATA_FILE)]
    file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display visits for one patient (0 for all patients)
    Show {
        /// Patient ID, or 0 for all patients
        #[arg(default_value_t = 0)]
        patient: u32,
    },
    /// Record a new visit
    Add {
        /// Patient ID
        patient: u32,
        /// Visit date (YYYY-MM-DD)
        date: String,
        /// Temperature (Celsius)
        temperature: f64,
        /// Heart rate (bpm)
        heart_rate: i32,
        /// Respiratory rate (breaths per minute)
        respiratory_rate: i32,
        /// Systolic blood pressure (mmHg)
        systolic: i32,
        /// Diastolic blood pressure (mmHg)
        diastolic: i32,
        /// Oxygen saturation (%)
        oxygen_saturation: i32,
    },
    /// Average vital signs for one patient (0 for all patients)
    Stats {
        /// Patient ID, or 0 for all patients
        #[arg(default_value_t = 0)]
        patient: u32,
    },
    /// Find visits by year and/or month
    Visits {
        /// Year to filter by (YYYY)
        #[arg(long)]
        year: Option<u16>,
        /// Month to filter by (1-12)
        #[arg(long)]
        month: Option<u8>,
    },
    /// List patients who need a follow-up visit
    FollowUp,
    /// Delete all visits of a patient
    Delete {
        /// Patient ID
        patient: u32,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let (mut store, _rejected) = PatientStore::load(&cli.file)?;

    match cli.command {
        Some(command) => run_command(&mut store, command),
        None => menu::run(&mut store)?,
    }

    Ok(())
}

fn run_command(store: &mut PatientStore, command: Commands) {
    match command {
        Commands::Show { patient } => {
            render::print_visits(store, PatientSelector::from_raw(patient));
        }
        Commands::Add {
            patient,
            date,
            temperature,
            heart_rate,
            respiratory_rate,
            systolic,
            diastolic,
            oxygen_saturation,
        } => {
            let validated = PatientId::new(patient).and_then(|id| {
                Visit::from_raw(
                    &date,
                    temperature,
                    heart_rate,
                    respiratory_rate,
                    systolic,
                    diastolic,
                    oxygen_saturation,
                )
                .map(|visit| (id, visit))
            });
            match validated {
                Ok((id, visit)) => match store.add_visit(id, visit) {
                    Ok(()) => println!("Visit recorded for patient {id}."),
                    Err(e) => eprintln!("{e}"),
                },
                Err(e) => eprintln!("{e}"),
            }
        }
        Commands::Stats { patient } => {
            let selector = PatientSelector::from_raw(patient);
            match store.vitals_summary(selector) {
                Ok(summary) => render::print_summary(selector, &summary),
                Err(e) => eprintln!("{e}"),
            }
        }
        Commands::Visits { year, month } => {
            render::print_date_matches(&store.find_visits_by_date(year, month));
        }
        Commands::FollowUp => {
            render::print_follow_up(&store.follow_up_candidates());
        }
        Commands::Delete { patient } => match PatientId::new(patient) {
            Ok(id) => match store.delete_patient(id) {
                Ok(removed) => println!("Deleted {removed} visits for patient {id}."),
                Err(e) => eprintln!("{e}"),
            },
            Err(e) => eprintln!("{e}"),
        },
    }
}
