// Command line front end for Aadhaar card text extraction

use aadhaar_reader::{
    processing::FileTextSource,
    validation::RecordValidator,
    AadhaarError, AadhaarReader, ExtractedRecord,
};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "aadhaar-reader", version, about = "Extract identity fields from Aadhaar card OCR text")]
struct Cli {
    /// Log every strategy decision
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract a draft record from the OCR text of both card faces
    Extract {
        /// Text recognised from the front of the card
        #[arg(long)]
        front: PathBuf,
        /// Text recognised from the back of the card
        #[arg(long)]
        back: PathBuf,
        #[arg(long)]
        pretty: bool,
    },
    /// Check a confirmed record (JSON) before it is stored
    Validate { record: PathBuf },
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn extract(front: PathBuf, back: PathBuf, pretty: bool) -> Result<(), AadhaarError> {
    let source = FileTextSource::new(front, back);
    let record = AadhaarReader::new().read(&source)?;
    let json = if pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    println!("{}", json);
    Ok(())
}

fn print_report(record: &ExtractedRecord) -> bool {
    let result = RecordValidator::validate(record);

    println!("AADHAAR RECORD:");
    println!("  Name: {}", record.name.as_deref().unwrap_or("-"));
    println!("  Guardian: {}", record.guardian_name.as_deref().unwrap_or("-"));
    println!("  Date of Birth: {}", record.dob.as_deref().unwrap_or("-"));
    println!(
        "  Gender: {}",
        record.gender.map(|g| g.to_string()).unwrap_or_else(|| "-".to_string())
    );
    println!("  Number: {}", record.id_number.as_deref().unwrap_or("-"));
    println!("  Address: {}", record.address.as_deref().unwrap_or("-"));

    if !result.issues.is_empty() {
        println!("\nISSUES FOUND:");
        for issue in &result.issues {
            println!("  - [{}] {}", issue.field, issue.message);
        }
    }

    println!("\nRecord is {}", if result.is_valid { "VALID" } else { "INVALID" });
    result.is_valid
}

fn validate(path: PathBuf) -> Result<bool, AadhaarError> {
    let contents = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AadhaarError::MissingInput(path.display().to_string()),
        _ => AadhaarError::IoError(e),
    })?;
    let record: ExtractedRecord = serde_json::from_str(&contents)?;
    Ok(print_report(&record))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match cli.command {
        Command::Extract { front, back, pretty } => extract(front, back, pretty).map(|_| true),
        Command::Validate { record } => validate(record),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
