use clap::Parser;

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "t-plot",
    version,
    about = "Annotate lines from stdin with proportional bar charts"
)]
pub struct Cli {
    /// Column number for plot, 1-based (0 = auto-detect)
    #[arg(short = 'k', long, value_name = "N", default_value_t = 0)]
    pub column: usize,

    /// Chart style: bar-simple | bar-horizontal-1px | bar-vertical-1px
    #[arg(short, long, value_name = "STYLE", default_value = "bar-simple")]
    pub style: String,

    /// Bar chart character, only the first one is used (bar-simple)
    #[arg(short = 'c', long = "char", value_name = "CHAR", default_value = "■")]
    pub fill: String,

    /// Width of chart (0 = rest of the terminal width)
    #[arg(short, long, value_name = "N", default_value_t = 0)]
    pub width: usize,

    /// List chart styles and exit
    #[arg(long)]
    pub styles: bool,

    /// Emit diagnostics on stderr
    #[arg(long)]
    pub debug: bool,
}
