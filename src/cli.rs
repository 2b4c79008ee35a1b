use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "vsixread")]
#[command(version)]
#[command(about = "Read and validate extension metadata from VSIX packages", long_about = None)]
#[command(after_help = "Examples:\n  \
  vsixread extension.vsix            show the extension's metadata summary\n  \
  vsixread --json extension.vsix     dump the validated manifest as JSON\n  \
  vsixread -x extension.vsix         show the XML packaging manifest details")]
pub struct Cli {
    /// VSIX package file path
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Dump the validated manifest as JSON
    #[arg(long)]
    pub json: bool,

    /// Show XML packaging manifest details
    #[arg(short = 'x', long = "xml")]
    pub xml: bool,

    /// Quiet mode: only the extension id and version
    #[arg(short = 'q')]
    pub quiet: bool,
}
