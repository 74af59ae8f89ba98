//! Stands in for the dashboard shell: loads the rental dataset from a
//! directory and prints one full view model as JSON.
//!
//! ```sh
//! cargo run --example render_view -- path/to/data
//! ```
//!
//! The directory must hold `df_day.csv` and `df_hour.csv`.

use bikeshare::{Bikeshare, DateRange};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = std::env::args().nth(1).unwrap_or_else(|| "data".to_string());

    let bikeshare = Bikeshare::from_dir(&data_dir)?;
    let bounds = bikeshare.date_bounds();
    eprintln!("dataset spans {} to {}", bounds.start, bounds.end);

    // A real shell would take the range from its date picker; render the
    // full span here.
    let view = bikeshare.render_view(DateRange::new(bounds.start, bounds.end))?;
    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}
