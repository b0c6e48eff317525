//! Interactive numbered menu over the store.
//!
//! Every raw input is parsed and validated here, at the boundary; store
//! operations only ever see typed values. Invalid input prints a message and
//! returns to the menu.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use vitals_core::PatientStore;
use vitals_types::{PatientId, PatientSelector, Visit};

use crate::render;

/// Runs the menu loop until the operator quits or input ends.
pub fn run(store: &mut PatientStore) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!();
        println!("Welcome to the Health Information System");
        println!();
        println!("1. Display all patient data");
        println!("2. Display patient data by ID");
        println!("3. Add patient data");
        println!("4. Display patient statistics");
        println!("5. Find visits by year, month, or both");
        println!("6. Find patients who need follow-up");
        println!("7. Delete all visits of a particular patient");
        println!("8. Quit");
        println!();

        let Some(choice) = prompt(&mut input, "Enter your choice (1-8): ")? else {
            break;
        };
        match choice.as_str() {
            "1" => render::print_visits(store, PatientSelector::All),
            "2" => display_by_id(store, &mut input)?,
            "3" => add_visit(store, &mut input)?,
            "4" => show_stats(store, &mut input)?,
            "5" => find_visits(store, &mut input)?,
            "6" => render::print_follow_up(&store.follow_up_candidates()),
            "7" => delete_patient(store, &mut input)?,
            "8" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }

    Ok(())
}

/// Prints `label`, then reads one line. `None` means end of input.
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

/// Prompts for a number; a parse failure prints a message and yields `None`.
fn read_number<T: FromStr>(input: &mut impl BufRead, label: &str) -> io::Result<Option<T>> {
    let Some(raw) = prompt(input, label)? else {
        return Ok(None);
    };
    match raw.parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            println!("Invalid input. Please enter valid data.");
            Ok(None)
        }
    }
}

fn display_by_id(store: &PatientStore, input: &mut impl BufRead) -> io::Result<()> {
    let Some(raw) = prompt(input, "Enter patient ID: ")? else {
        return Ok(());
    };
    match raw.parse::<PatientId>() {
        Ok(patient) => render::print_visits(store, PatientSelector::One(patient)),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn add_visit(store: &mut PatientStore, input: &mut impl BufRead) -> io::Result<()> {
    let Some(raw_id) = prompt(input, "Enter patient ID: ")? else {
        return Ok(());
    };
    let patient = match raw_id.parse::<PatientId>() {
        Ok(patient) => patient,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };

    let Some(date) = prompt(input, "Enter date (YYYY-MM-DD): ")? else {
        return Ok(());
    };
    let Some(temperature) = read_number::<f64>(input, "Enter temperature (Celsius): ")? else {
        return Ok(());
    };
    let Some(heart_rate) = read_number::<i32>(input, "Enter heart rate (bpm): ")? else {
        return Ok(());
    };
    let Some(respiratory_rate) =
        read_number::<i32>(input, "Enter respiratory rate (breaths per minute): ")?
    else {
        return Ok(());
    };
    let Some(systolic) = read_number::<i32>(input, "Enter systolic blood pressure (mmHg): ")?
    else {
        return Ok(());
    };
    let Some(diastolic) = read_number::<i32>(input, "Enter diastolic blood pressure (mmHg): ")?
    else {
        return Ok(());
    };
    let Some(oxygen_saturation) = read_number::<i32>(input, "Enter oxygen saturation (%): ")?
    else {
        return Ok(());
    };

    match Visit::from_raw(
        &date,
        temperature,
        heart_rate,
        respiratory_rate,
        systolic,
        diastolic,
        oxygen_saturation,
    ) {
        Ok(visit) => match store.add_visit(patient, visit) {
            Ok(()) => println!("Visit recorded for patient {patient}."),
            Err(e) => println!("{e}"),
        },
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn show_stats(store: &PatientStore, input: &mut impl BufRead) -> io::Result<()> {
    let Some(raw) = prompt(input, "Enter patient ID (or '0' for all patients): ")? else {
        return Ok(());
    };
    let selector = match raw.parse::<u32>() {
        Ok(id) => PatientSelector::from_raw(id),
        Err(_) => {
            println!("Invalid input. Please enter valid data.");
            return Ok(());
        }
    };
    match store.vitals_summary(selector) {
        Ok(summary) => render::print_summary(selector, &summary),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn find_visits(store: &PatientStore, input: &mut impl BufRead) -> io::Result<()> {
    let Some(raw_year) = prompt(input, "Enter year (YYYY) (or 0 for all years): ")? else {
        return Ok(());
    };
    let Some(year) = parse_filter::<u16>(&raw_year) else {
        println!("Invalid input. Please enter valid data.");
        return Ok(());
    };
    let Some(raw_month) = prompt(input, "Enter month (MM) (or 0 for all months): ")? else {
        return Ok(());
    };
    let Some(month) = parse_filter::<u8>(&raw_month) else {
        println!("Invalid input. Please enter valid data.");
        return Ok(());
    };

    render::print_date_matches(&store.find_visits_by_date(year, month));
    Ok(())
}

fn delete_patient(store: &mut PatientStore, input: &mut impl BufRead) -> io::Result<()> {
    let Some(raw) = prompt(input, "Enter patient ID: ")? else {
        return Ok(());
    };
    let patient = match raw.parse::<PatientId>() {
        Ok(patient) => patient,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };
    match store.delete_patient(patient) {
        Ok(_) => println!("Data for patient {patient} has been deleted."),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

/// Parses an optional filter: `0` means "no filter on this component".
///
/// Returns `None` (the outer option) on unparseable input.
fn parse_filter<T: FromStr>(raw: &str) -> Option<Option<T>> {
    if raw == "0" {
        return Some(None);
    }
    raw.parse().ok().map(Some)
}
