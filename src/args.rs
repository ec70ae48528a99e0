use clap::Parser;

/// Checks that the municipality names of a vote table line up with the
/// official names of a geographic boundary dataset, and suggests corrections
/// for the ones that do not.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The vote table in CSV format. It must carry the 'Inspetoria',
    /// 'Cidade' and 'Votos' columns.
    #[clap(short, long, value_parser)]
    pub votes: String,

    /// (file path) The boundary dataset in GeoJSON format. Every feature must
    /// carry a 'name' property with the official municipality name.
    #[clap(short, long, value_parser)]
    pub geojson: String,

    /// (single ASCII character, default ';') The column delimiter of the vote table.
    #[clap(short, long, value_parser, default_value = ";")]
    pub delimiter: char,

    /// (number in [0,1], default 0.75) The minimum fuzzy similarity for a
    /// suggestion to be reported.
    #[clap(short, long, value_parser, default_value_t = 0.75)]
    pub threshold: f64,

    /// (file path or 'stdout') If specified, the diagnostic will be written in CSV
    /// format to the given location, with the municipio_csv and sugestao_geojson columns.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference file containing the expected diagnostic in CSV format.
    /// If provided, munidiag will check that the produced diagnostic matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (region name or empty) If specified, the vote summary is restricted to this inspetoria.
    #[clap(long, value_parser)]
    pub inspetoria: Option<String>,

    /// (municipality name or empty) If specified, the vote summary is restricted to
    /// this municipality.
    #[clap(long, value_parser)]
    pub cidade: Option<String>,

    /// (default 15) The number of municipalities listed in the vote ranking.
    #[clap(long, value_parser, default_value_t = 15)]
    pub top: usize,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
