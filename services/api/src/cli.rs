use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use placements::error::AppError;
use placements::portal::{is_eligible, parse_cgpa};

#[derive(Parser, Debug)]
#[command(
    name = "Placement Cell Portal",
    about = "Run the college placement portal and its companion tools from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Check a CGPA value against a posting's floor
    Eligibility(EligibilityArgs),
    /// Walk through a placement drive end to end on an in-memory database
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct EligibilityArgs {
    /// CGPA as recorded on the roster; blank or non-numeric text fails the check
    #[arg(long)]
    pub(crate) cgpa: String,
    /// The posting's minimum CGPA requirement
    #[arg(long)]
    pub(crate) minimum_cgpa: String,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Eligibility(args) => run_eligibility(args),
        Command::Demo(args) => run_demo(args).await,
    }
}

fn run_eligibility(args: EligibilityArgs) -> Result<(), AppError> {
    let cgpa = parse_cgpa(&args.cgpa);
    let minimum = parse_cgpa(&args.minimum_cgpa);

    if cgpa.is_none() {
        println!("note: {:?} is not a numeric CGPA, treating it as missing", args.cgpa);
    }
    if minimum.is_none() {
        println!(
            "note: {:?} is not a numeric floor, treating it as missing",
            args.minimum_cgpa
        );
    }

    if is_eligible(cgpa, minimum) {
        println!("eligible");
    } else {
        println!("not eligible");
    }
    Ok(())
}
