use crate::board::*;

use serde::{Deserialize, Serialize};

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputSettings {
    pub title: Option<String>,
    #[serde(rename = "outputPath")]
    pub output_path: Option<String>,
}

/// The configuration as written in the summary.
#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct OutputConfig {
    pub title: Option<String>,
    #[serde(rename = "scoringMode")]
    pub scoring_mode: String,
    #[serde(rename = "rankDiscipline")]
    pub rank_discipline: String,
    #[serde(rename = "softMode")]
    pub soft_mode: bool,
    #[serde(rename = "useMaxStreak")]
    pub use_max_streak: bool,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize, Default)]
pub struct SourceSettings {
    pub provider: Option<String>,
    #[serde(rename = "filePath")]
    pub file_path: Option<String>,
    #[serde(rename = "worksheetName")]
    pub worksheet_name: Option<String>,
    pub marks: Option<Vec<String>>,
    pub alignment: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize, Default)]
pub struct ViewSettings {
    #[serde(rename = "scoringMode")]
    pub scoring_mode: Option<String>,
    #[serde(rename = "rankDiscipline")]
    pub rank_discipline: Option<String>,
    #[serde(rename = "softMode")]
    pub soft_mode: Option<bool>,
    #[serde(rename = "useMaxStreak")]
    pub use_max_streak: Option<bool>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize, Default)]
pub struct BoardConfig {
    #[serde(rename = "outputSettings", default)]
    pub output_settings: OutputSettings,
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub view: ViewSettings,
}

pub fn read_config(path: &str) -> BoardResult<BoardConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let config: BoardConfig = serde_json::from_str(&contents).context(ParsingJsonSnafu {})?;
    info!("config: {:?}", config);
    Ok(config)
}

pub fn read_summary(path: &str) -> BoardResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    debug!("read_summary: {} standings", js["standings"].as_array().map_or(0, |a| a.len()));
    Ok(js)
}

pub fn validate_view(settings: &ViewSettings) -> BoardResult<ViewConfig> {
    let default = ViewConfig::DEFAULT_VIEW;
    let res = ViewConfig {
        scoring_mode: match settings.scoring_mode.as_deref() {
            None => default.scoring_mode,
            Some("points") => ScoringMode::Points,
            Some("consistency") => ScoringMode::Consistency,
            Some("streak") => ScoringMode::Streak,
            Some(x) => {
                return UnknownOptionSnafu {
                    option: "scoringMode",
                    value: x,
                }
                .fail();
            }
        },
        rank_discipline: match settings.rank_discipline.as_deref() {
            None => default.rank_discipline,
            Some("dense") => RankDiscipline::Dense,
            Some("competition") => RankDiscipline::Competition,
            Some(x) => {
                return UnknownOptionSnafu {
                    option: "rankDiscipline",
                    value: x,
                }
                .fail();
            }
        },
        soft_mode: settings.soft_mode.unwrap_or(default.soft_mode),
        use_max_streak: settings.use_max_streak.unwrap_or(default.use_max_streak),
    };
    if res.soft_mode && res.scoring_mode == ScoringMode::Points {
        warn!("validate_view: the soft mode has no effect when ranking on points");
    }
    if res.use_max_streak && res.scoring_mode != ScoringMode::Streak {
        warn!("validate_view: useMaxStreak only applies to the streak mode");
    }
    Ok(res)
}

pub fn validate_table_options(source: &SourceSettings) -> BoardResult<TableOptions> {
    let default = TableOptions::default();
    let alignment = match source.alignment.as_deref() {
        None => default.alignment,
        Some("positional") => HeaderAlignment::Positional,
        Some("byColumn") => HeaderAlignment::ByColumn,
        Some(x) => {
            return UnknownOptionSnafu {
                option: "alignment",
                value: x,
            }
            .fail();
        }
    };
    let marks = match &source.marks {
        Some(m) if !m.is_empty() => m.clone(),
        _ => default.marks,
    };
    Ok(TableOptions { marks, alignment })
}
