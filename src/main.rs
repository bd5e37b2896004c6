use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use fngenerate::observability::init_logging;
use fngenerate::{generate, GenerateOptions, RawOptions};

#[derive(Parser)]
#[command(name = "fngenerate", version)]
#[command(about = "Render a function route table from a manifest and a template", long_about = None)]
struct Cli {
    /// Customer import path, passed through to the template
    #[arg(short = 'i', long = "import-path", value_name = "STRING")]
    import_path: Option<String>,

    /// Manifest file in TOML (functions under metadata.heroku.functions)
    #[arg(short = 'g', long = "gopkg", value_name = "PATH")]
    gopkg: Option<PathBuf>,

    /// Manifest file in YAML (functions under build.functions)
    #[arg(short = 'y', long = "yaml", value_name = "PATH")]
    yaml: Option<PathBuf>,

    /// Template file path
    #[arg(short = 't', long = "template", value_name = "PATH")]
    template: Option<PathBuf>,

    /// Log debug detail to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for RawOptions {
    fn from(cli: Cli) -> Self {
        Self {
            import_path: cli.import_path,
            gopkg: cli.gopkg,
            yaml: cli.yaml,
            template: cli.template,
        }
    }
}

fn main() -> ExitCode {
    if std::env::args_os().len() <= 1 {
        eprintln!("{}", Cli::command().render_help());
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = GenerateOptions::try_from(RawOptions::from(cli))
        .and_then(|options| generate(&options, &mut io::stdout().lock()));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Generation failed");
            ExitCode::FAILURE
        }
    }
}
