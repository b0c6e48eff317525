//! Stdout rendering for listings, summaries, and query results.

use vitals_core::{PatientStore, VitalsSummary};
use vitals_types::{PatientId, PatientSelector, Visit};

/// Lists every visit for the selected patient(s) in stored order.
pub fn print_visits(store: &PatientStore, selector: PatientSelector) {
    match selector {
        PatientSelector::All => {
            if store.is_empty() {
                println!("No patient data available.");
                return;
            }
            for (patient, visits) in store.iter() {
                println!("Patient ID: {patient}");
                for visit in visits {
                    print_visit(visit);
                }
            }
        }
        PatientSelector::One(patient) => match store.visits(patient) {
            Some(visits) => {
                for visit in visits {
                    print_visit(visit);
                }
            }
            None => println!("Patient with ID {patient} not found."),
        },
    }
}

fn print_visit(visit: &Visit) {
    println!(" Visit Date: {}", visit.date);
    println!("  Temperature: {:.2} C", visit.temperature.value());
    println!("  Heart Rate: {} bpm", visit.heart_rate);
    println!("  Respiratory Rate: {} breaths/min", visit.respiratory_rate);
    println!("  Systolic Blood Pressure: {} mmHg", visit.systolic);
    println!("  Diastolic Blood Pressure: {} mmHg", visit.diastolic);
    println!("  Oxygen Saturation: {} %", visit.oxygen_saturation);
    println!();
}

/// Prints the average of each vital sign to two decimal places.
pub fn print_summary(selector: PatientSelector, summary: &VitalsSummary) {
    match selector {
        PatientSelector::All => println!("Vital signs for all patients:"),
        PatientSelector::One(patient) => println!("Vital signs for patient {patient}:"),
    }
    println!("  Average temperature: {:.2} C", summary.temperature);
    println!("  Average heart rate: {:.2} bpm", summary.heart_rate);
    println!(
        "  Average respiratory rate: {:.2} breaths/min",
        summary.respiratory_rate
    );
    println!(
        "  Average systolic blood pressure: {:.2} mmHg",
        summary.systolic
    );
    println!(
        "  Average diastolic blood pressure: {:.2} mmHg",
        summary.diastolic
    );
    println!("  Average oxygen saturation: {:.2} %", summary.oxygen_saturation);
}

/// Prints date-filtered visits in encounter order.
pub fn print_date_matches(matches: &[(PatientId, &Visit)]) {
    if matches.is_empty() {
        println!("No visits found for the specified year/month.");
        return;
    }
    for (patient, visit) in matches {
        println!("Patient ID: {patient}");
        print_visit(visit);
    }
}

/// Prints follow-up candidates, one patient id per line.
pub fn print_follow_up(patients: &[PatientId]) {
    if patients.is_empty() {
        println!("No patients found who need follow-up visits.");
        return;
    }
    println!("Patients who need follow-up visits:");
    for patient in patients {
        println!("  {patient}");
    }
}
