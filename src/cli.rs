/// Parses one arithmetic expression and prints its syntax tree in flattened
/// form: one node per line, prefixed with the index of its parent node.
#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    /// Expression to parse; when absent, the first line of stdin is used
    pub expr: Option<String>,
}
