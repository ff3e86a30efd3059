use clap::Parser;

#[derive(Parser)]
#[command(name = "bigcalc")]
#[command(about = "Arbitrary-precision integer calculator", long_about = None)]
pub struct Cli {
    /// Script of commands to execute instead of reading stdin
    pub file: Option<String>,
}
