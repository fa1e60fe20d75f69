// Entry point and high-level CLI flow.
//
// - Option [1] loads the L/C share CSV (reusing the cached dataset when the
//   path has not changed), printing diagnostics.
// - Option [2] generates the three reports and a JSON summary.
// - Option [3] reloads from disk, discarding the cache.
mod error;
mod loader;
mod output;
mod regions;
mod reports;
mod types;
mod util;
mod views;

use once_cell::sync::Lazy;
use std::io::{self, Write};
use std::sync::Mutex;
use types::{CountryRecord, YEARS};

const DEFAULT_PATH: &str = "국가별 신용장방식 결제비중_2017~2021.csv";

// In-memory app state: the cleaned dataset together with the path it came
// from, so repeated loads of the same file are served from memory and a
// reload is an explicit action rather than a hidden cache policy.
static APP_STATE: Lazy<Mutex<AppState>> = Lazy::new(|| Mutex::new(AppState { data: None }));

struct AppState {
    data: Option<(String, Vec<CountryRecord>)>,
}

/// Read a single line of input after printing the common "Enter choice:" prompt.
fn read_choice() -> String {
    print!("Enter choice: ");
    let _ = io::stdout().flush();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf.trim().to_string()
}

/// Handle options [1] and [3]: load the CSV, or reuse the cached dataset
/// when the same path was already loaded and `force_reload` is false.
///
/// On failure nothing is cached; the previous dataset (if any) for a
/// different path is dropped so stale data cannot leak into reports.
fn handle_load(path: &str, force_reload: bool) {
    {
        let state = APP_STATE.lock().unwrap();
        if !force_reload {
            if let Some((cached_path, data)) = &state.data {
                if cached_path == path {
                    println!(
                        "Using cached dataset ({} countries). Choose [3] to reload from disk.\n",
                        util::format_int(data.len() as i64)
                    );
                    return;
                }
            }
        }
    }

    match loader::load(path) {
        Ok(data) => {
            let regions: std::collections::HashSet<&str> =
                data.iter().map(|r| r.region.as_str()).collect();
            println!(
                "Loaded '{}' ({} countries, {} regions, years {}–{}).\n",
                path,
                util::format_int(data.len() as i64),
                util::format_int(regions.len() as i64),
                YEARS[0],
                YEARS[YEARS.len() - 1]
            );
            let mut state = APP_STATE.lock().unwrap();
            state.data = Some((path.to_string(), data));
        }
        Err(e) => {
            eprintln!("Failed to load data: {}", e);
            eprintln!("No dataset is available; reports cannot be generated.\n");
            let mut state = APP_STATE.lock().unwrap();
            state.data = None;
        }
    }
}

/// Handle option [2]: generate all reports and the JSON summary.
///
/// Side-effectful on purpose: writes three CSV files and a JSON summary,
/// and prints markdown previews of each report to the console.
fn handle_generate_reports() {
    let data = {
        let state = APP_STATE.lock().unwrap();
        state.data.as_ref().map(|(_, d)| d.clone())
    };
    let Some(data) = data else {
        println!("Error: No data loaded. Please load the CSV file first (option 1).\n");
        return;
    };

    println!("Generating reports...\n");

    let r1 = reports::ranking_rows(&data, 2021, 10, None);
    let file1 = "report1_top10_ranking.csv";
    if let Err(e) = output::write_csv(file1, &r1) {
        eprintln!("Write error: {}", e);
    }
    println!("Report 1: Top 10 Countries by L/C Payment Share (2021)\n");
    output::preview_table(&r1, 10);
    println!("(Full table exported to {})\n", file1);

    let r2 = reports::trend_rows(&data, &reports::TREND_COUNTRIES, &YEARS);
    let file2 = "report2_country_trend.csv";
    if let Err(e) = output::write_csv(file2, &r2) {
        eprintln!("Write error: {}", e);
    }
    println!("Report 2: Yearly L/C Share Trend for Focus Countries");
    println!("({})\n", reports::TREND_COUNTRIES.join(", "));
    output::preview_table(&r2, 5);
    println!("(Full table exported to {})\n", file2);

    let r3 = reports::region_average_rows(&data, &YEARS);
    let file3 = "report3_regional_average.csv";
    if let Err(e) = output::write_csv(file3, &r3) {
        eprintln!("Write error: {}", e);
    }
    println!("Report 3: Average L/C Share by Region\n");
    output::preview_table(&r3, 5);
    println!("(Full table exported to {})\n", file3);

    let summary = views::summary(&data);
    if let Err(e) = output::write_json("summary.json", &summary) {
        eprintln!("Write error: {}", e);
    }
    println!("Summary Stats (summary.json):");
    println!(
        "{{\"top_country_2021\": \"{}\", \"top_region_2021\": \"{}\", \"avg_share_2021\": {}}}\n",
        summary.top_country_2021,
        summary.top_region_2021,
        util::format_share(summary.avg_share_2021)
    );
}

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_PATH.to_string());
    loop {
        println!("L/C Payment Share Report");
        println!("[1] Load the data file");
        println!("[2] Generate reports");
        println!("[3] Reload from disk");
        println!("[q] Quit\n");
        match read_choice().as_str() {
            "1" => handle_load(&path, false),
            "2" => {
                println!();
                handle_generate_reports();
            }
            "3" => handle_load(&path, true),
            "q" | "Q" => {
                println!("Exiting the program.");
                break;
            }
            _ => {
                println!("Invalid choice. Please enter 1, 2, 3 or q.\n");
            }
        }
    }
}
