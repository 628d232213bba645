// src/ui/cli.rs

use clap::Parser;

// ~~~ CLI Arguments ~~~
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "scaffold",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = env!("CARGO_PKG_DESCRIPTION")
)]
pub struct Cli {
    /// Name of the project directory to create in the current directory
    #[arg(allow_hyphen_values = true)]
    pub project_name: Option<String>,

    /// Anything after the project name is accepted and ignored
    #[arg(
        hide = true,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub ignored: Vec<String>,
}
