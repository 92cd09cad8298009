use log::{debug, info, warn};

use snafu::{prelude::*, Snafu};
use streak_ranking::*;

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use serde_json::Map as JSMap;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::board::config_reader::*;

mod config_reader;
mod io_csv;
mod io_xlsx;

#[derive(Debug, Snafu)]
pub enum BoardError {
    #[snafu(display("Error opening file {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("The workbook {path} has no worksheet {worksheet:?}"))]
    MissingWorksheet { path: String, worksheet: String },
    #[snafu(display("Cannot read the cell at row {lineno}: {content}"))]
    ExcelWrongCellType { lineno: usize, content: String },
    #[snafu(display("Error opening file {path}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Error reading line {lineno} of the CSV file"))]
    CsvLineParse { source: csv::Error, lineno: usize },
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Error writing file {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Unknown value {value:?} for option {option}"))]
    UnknownOption { option: String, value: String },
    #[snafu(display("No input file: use --input or the source of the configuration file"))]
    MissingInput {},
    #[snafu(display("Could not build the leaderboard"))]
    Table { source: TableError },
    #[snafu(display("Difference detected between the computed summary and the reference {path}"))]
    ReferenceMismatch { path: String },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type BoardResult<T> = Result<T, BoardError>;

/// Everything needed for one run, once the configuration file and the flags
/// have been merged.
#[derive(Debug, Clone)]
struct RunSettings {
    title: Option<String>,
    input_path: String,
    provider: String,
    worksheet: Option<String>,
    table_options: TableOptions,
    view: ViewConfig,
    output_path: Option<String>,
}

fn scoring_mode_name(mode: ScoringMode) -> &'static str {
    match mode {
        ScoringMode::Points => "points",
        ScoringMode::Consistency => "consistency",
        ScoringMode::Streak => "streak",
    }
}

fn rank_discipline_name(discipline: RankDiscipline) -> &'static str {
    match discipline {
        RankDiscipline::Dense => "dense",
        RankDiscipline::Competition => "competition",
    }
}

fn podium_name(podium: Podium) -> &'static str {
    match podium {
        Podium::Gold => "gold",
        Podium::Silver => "silver",
        Podium::Bronze => "bronze",
    }
}

fn columns_to_json(columns: &[Column]) -> Vec<JSValue> {
    columns
        .iter()
        .map(|c| match c {
            Column::Day { index, label } => json!({"index": index, "label": label}),
            Column::Break => json!({"break": true}),
        })
        .collect()
}

fn standings_to_json(standings: &[Standing]) -> Vec<JSValue> {
    let mut l: Vec<JSValue> = Vec::new();
    for s in standings.iter() {
        let p = &s.participant;
        let mut obj: JSMap<String, JSValue> = JSMap::new();
        obj.insert("rank".to_string(), json!(s.rank));
        if let Some(podium) = s.podium() {
            obj.insert("podium".to_string(), json!(podium_name(podium)));
        }
        obj.insert("id".to_string(), json!(p.id));
        obj.insert("name".to_string(), json!(p.name));
        obj.insert("score".to_string(), json!(s.score));
        obj.insert("percent".to_string(), json!(s.percent));
        obj.insert("points".to_string(), json!(p.stats.points));
        obj.insert(
            "consistencyDays".to_string(),
            json!(p.stats.consistency_days),
        );
        obj.insert("currentStreak".to_string(), json!(p.stats.current_streak));
        obj.insert("maxStreak".to_string(), json!(p.stats.max_streak));
        let max_days: Vec<usize> = p.stats.max_streak_days.iter().cloned().collect();
        obj.insert("maxStreakDays".to_string(), json!(max_days));
        obj.insert("history".to_string(), json!(p.history));
        l.push(JSValue::Object(obj));
    }
    l
}

fn build_summary_js(settings: &RunSettings, board: &Leaderboard) -> JSValue {
    let c = OutputConfig {
        title: settings.title.clone(),
        scoring_mode: scoring_mode_name(settings.view.scoring_mode).to_string(),
        rank_discipline: rank_discipline_name(settings.view.rank_discipline).to_string(),
        soft_mode: settings.view.soft_mode,
        use_max_streak: settings.view.use_max_streak,
    };
    json!({
        "config": c,
        "dates": board.dates,
        "denominator": board.denominator,
        "columns": columns_to_json(&board.columns),
        "standings": standings_to_json(&board.standings),
    })
}

fn resolve_path(root: &Path, p: &str) -> String {
    let pb: PathBuf = root.join(p);
    pb.as_path().display().to_string()
}

/// Merges the configuration file (if any) with the flags. The flags win.
fn resolve_settings(args: &Args) -> BoardResult<RunSettings> {
    let (config, root): (BoardConfig, PathBuf) = match &args.config {
        Some(config_path) => {
            let config = read_config(config_path)?;
            let root = Path::new(config_path)
                .parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_default();
            (config, root)
        }
        None => (BoardConfig::default(), PathBuf::new()),
    };
    debug!("resolve_settings: config: {:?} root: {:?}", config, root);

    let input_path = match (&args.input, &config.source.file_path) {
        (Some(p), _) => p.clone(),
        (None, Some(p)) => resolve_path(&root, p),
        (None, None) => return MissingInputSnafu {}.fail(),
    };

    let provider = args
        .input_type
        .clone()
        .or_else(|| config.source.provider.clone())
        .unwrap_or_else(|| {
            if input_path.to_lowercase().ends_with(".xlsx") {
                "xlsx".to_string()
            } else {
                "csv".to_string()
            }
        });

    let mut source = config.source.clone();
    if let Some(marks) = &args.mark {
        source.marks = Some(marks.clone());
    }
    if let Some(align) = &args.align {
        source.alignment = Some(align.clone());
    }
    let table_options = validate_table_options(&source)?;

    let mut view_settings = config.view.clone();
    if let Some(mode) = &args.mode {
        view_settings.scoring_mode = Some(mode.clone());
    }
    if let Some(rank) = &args.rank {
        view_settings.rank_discipline = Some(rank.clone());
    }
    if args.soft {
        view_settings.soft_mode = Some(true);
    }
    if args.max_streak {
        view_settings.use_max_streak = Some(true);
    }
    let view = validate_view(&view_settings)?;

    let output_path = match (&args.out, &config.output_settings.output_path) {
        (Some(p), _) => Some(p.clone()),
        (None, Some(p)) => Some(resolve_path(&root, p)),
        (None, None) => None,
    };

    Ok(RunSettings {
        title: config.output_settings.title.clone(),
        input_path,
        provider,
        worksheet: args
            .worksheet
            .clone()
            .or_else(|| config.source.worksheet_name.clone()),
        table_options,
        view,
        output_path,
    })
}

fn read_grid(settings: &RunSettings) -> BoardResult<Vec<Vec<String>>> {
    info!(
        "Attempting to read {} file {:?}",
        settings.provider, settings.input_path
    );
    match settings.provider.as_str() {
        "csv" => io_csv::read_csv_grid(&settings.input_path),
        "xlsx" => io_xlsx::read_excel_grid(&settings.input_path, &settings.worksheet),
        x => UnknownOptionSnafu {
            option: "provider",
            value: x,
        }
        .fail(),
    }
}

fn write_summary(settings: &RunSettings, pretty_js: &str) -> BoardResult<()> {
    match settings.output_path.as_deref() {
        None | Some("stdout") => {
            println!("{}", pretty_js);
        }
        Some("") => {
            debug!("write_summary: empty output path, not writing the summary");
        }
        Some(path) => {
            info!("Writing the summary to {:?}", path);
            fs::write(path, pretty_js).context(WritingOutputSnafu { path })?;
        }
    }
    Ok(())
}

pub fn run_board(args: &Args) -> BoardResult<()> {
    let settings = resolve_settings(args)?;
    info!("settings: {:?}", settings);

    let grid = read_grid(&settings)?;
    debug!("run_board: read {} rows", grid.len());

    let mut session = Session::new();
    session
        .load(&grid, &settings.table_options)
        .context(TableSnafu {})?;
    let board = match session.leaderboard(&settings.view) {
        Some(b) => b,
        None => {
            whatever!("No dataset loaded")
        }
    };

    // Assemble the final json
    let result_js = build_summary_js(&settings, &board);
    let pretty_js_stats = serde_json::to_string_pretty(&result_js).context(ParsingJsonSnafu {})?;
    write_summary(&settings, &pretty_js_stats)?;

    // The reference summary, if provided for comparison
    if let Some(summary_p) = &args.reference {
        let summary_ref = read_summary(summary_p)?;
        let pretty_js_summary_ref =
            serde_json::to_string_pretty(&summary_ref).context(ParsingJsonSnafu {})?;
        if pretty_js_summary_ref != pretty_js_stats {
            warn!("Found differences with the reference string");
            print_diff(
                pretty_js_summary_ref.as_str(),
                pretty_js_stats.as_ref(),
                "\n",
            );
            return ReferenceMismatchSnafu { path: summary_p }.fail();
        }
        info!("The summary matches the reference {:?}", summary_p);
    }

    Ok(())
}

#[cfg(test)]
fn run_board_test(test_name: &str) -> BoardResult<()> {
    let test_dir = format!("{}/tests/data", env!("CARGO_MANIFEST_DIR"));
    info!("Running test {}", test_name);
    let args = Args {
        config: Some(format!(
            "{}/{}/{}_config.json",
            test_dir, test_name, test_name
        )),
        reference: Some(format!(
            "{}/{}/{}_expected_summary.json",
            test_dir, test_name, test_name
        )),
        out: Some("".to_string()),
        ..Args::default()
    };
    run_board(&args)
}

#[cfg(test)]
pub fn test_wrapper(test_name: &str) {
    let _ = env_logger::builder().is_test(true).try_init();
    if let Err(e) = run_board_test(test_name) {
        warn!("Error occured {:?}", e);
        panic!("An error occured in {}: {}", test_name, e);
    }
}
