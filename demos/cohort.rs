//! Build a small cohort by hand, then run the statistics engine over it.
//!
//! Run with `cargo run --example cohort`.

use inflammation::{
    Doctor, Patient, Result, daily_above_threshold, daily_mean, matrix_from_rows,
    patient_normalise,
};
use log::info;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut doctor = Doctor::new("Sheila Wheels");
    let mut alice = Patient::new("Alice");
    for value in [0.0, 2.0, 5.0, 3.0] {
        alice.add_observation(value, None);
    }
    doctor.add_patient(&alice);
    // Second add is reported and ignored
    doctor.add_patient(&alice);

    if let Some(bob) = doctor.add_patient("Bob") {
        for value in [1.0, 1.0, 4.0, 0.0] {
            bob.add_observation(value, None);
        }
    }

    let rows: Vec<Vec<f64>> = doctor
        .patients()
        .iter()
        .map(|patient| patient.observations().iter().map(|o| o.value()).collect())
        .collect();
    let data = matrix_from_rows(&rows)?;

    info!("Doctor {doctor} has {} patients", doctor.patients().len());
    info!("Daily mean: {}", daily_mean(&data)?);
    info!("Normalised: {}", patient_normalise(&data)?);
    for (index, patient) in doctor.patients().iter().enumerate() {
        let days = daily_above_threshold(&data, index, 2.0)?;
        info!("{patient} was above 2.0 on {days} days");
    }

    Ok(())
}
