use clap::Parser;

/// This is a leaderboard program for attendance-style spreadsheets.
#[derive(Parser, Debug, Clone, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON file describing the input, the view and the output.
    /// See the manual for the format. The flags below override its values.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,
    /// (file path) A reference file containing a leaderboard summary in JSON format. If provided, streakboard will
    /// check that the computed summary matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the summary of the leaderboard will be written in JSON format to
    /// the given location. Setting this option overrides the path that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path or empty) The spreadsheet to read. Setting this option overrides the file of the --config option.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (csv or xlsx, default from the file extension) The type of the input.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// When using an Excel file, the name of the worksheet to use (the first one by default).
    #[clap(long, value_parser)]
    pub worksheet: Option<String>,

    /// (points, consistency or streak, default points) What the participants are ranked on.
    #[clap(short, long, value_parser)]
    pub mode: Option<String>,

    /// (dense or competition, default competition) How tied participants are ranked.
    #[clap(long, value_parser)]
    pub rank: Option<String>,

    /// Do not count the days on which nobody was active (consistency and streak modes).
    #[clap(long, takes_value = false)]
    pub soft: bool,

    /// Rank on the longest streak instead of the current one (streak mode).
    #[clap(long, takes_value = false)]
    pub max_streak: bool,

    /// (list of marks or not specified) The completion marks to count in the cells.
    #[clap(long, value_parser)]
    pub mark: Option<Vec<String>>,

    /// (positional or byColumn, default positional) How the dates are matched with the columns.
    #[clap(long, value_parser)]
    pub align: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
