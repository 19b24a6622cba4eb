mod generator;
mod identity;
mod logging;
mod models;
mod reference;
mod util;
mod validation;

use clap::{Parser, Subcommand};
use chrono::Datelike;
use generator::{generate_cards, GeneratorConfig, MAX_CARD_LENGTH, MIN_CARD_LENGTH};
use models::CardRecord;
use rand::Rng;
use std::path::{Path, PathBuf};
use std::time::Instant;
use validation::{check_file, check_number, verify_records, CheckOutcome, CheckResult};

#[derive(Parser)]
#[command(name = "cardgen-demo")]
#[command(about = "Synthetic card data generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Generate(GenerateArgs),
    Check(CheckArgs),
    Bin(BinArgs),
    Vbv(VbvArgs),
    Identity(IdentityArgs),
}

#[derive(Parser)]
struct GenerateArgs {
    #[arg(long)]
    bin: String,
    #[arg(long, default_value_t = 15)]
    count: usize,
    #[arg(long)]
    length: Option<usize>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = 5)]
    years_ahead: i32,
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Parser)]
struct CheckArgs {
    number: Option<String>,
    #[arg(long)]
    input: Option<PathBuf>,
}

#[derive(Parser)]
struct BinArgs {
    bin: String,
}

#[derive(Parser)]
struct VbvArgs {
    bin: String,
}

#[derive(Parser)]
struct IdentityArgs {
    #[arg(long, default_value = "US")]
    country: String,
    #[arg(long, default_value_t = 1)]
    count: usize,
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    logging::init_logging("cardgen-demo")?;
    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Check(args) => run_check(args),
        Command::Bin(args) => run_bin(args),
        Command::Vbv(args) => run_vbv(args),
        Command::Identity(args) => run_identity(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), String> {
    let prefix = args.bin.trim();
    if prefix.len() < 6 {
        return Err("BIN must be at least 6 digits".to_string());
    }
    if let Some(length) = args.length {
        if !(MIN_CARD_LENGTH..=MAX_CARD_LENGTH).contains(&length) {
            return Err(format!(
                "length must be between {} and {}",
                MIN_CARD_LENGTH, MAX_CARD_LENGTH
            ));
        }
    }

    let (expiry_min_year, expiry_max_year) = resolve_expiry_window(args.years_ahead)?;
    let seed = args.seed.unwrap_or_else(random_seed);
    let config = GeneratorConfig {
        count: args.count,
        target_length: args.length,
        expiry_min_year,
        expiry_max_year,
    };

    log::info!(
        "Generator options: bin={}, count={}, length={}, expiry window {}..={}",
        prefix,
        config.count,
        config
            .target_length
            .map_or_else(|| "auto".to_string(), |len| len.to_string()),
        expiry_min_year,
        expiry_max_year
    );
    log::info!("Generating {} records (seed {})", config.count, seed);

    let gen_start = Instant::now();
    let records = generate_cards(&config, prefix, seed)?;
    let gen_elapsed = gen_start.elapsed();

    for record in &records {
        println!("{}", record.render_line());
    }
    if let Some(output) = &args.output {
        write_csv(output, &records)?;
        emit_info_line(&format!("CSV output: {}", output.display()));
    }

    let summary = verify_records(&records);
    if summary.valid != summary.total {
        return Err(format!(
            "self-check failed: {} of {} records are not Luhn-valid",
            summary.total - summary.valid,
            summary.total
        ));
    }
    emit_info_line(&format!(
        "Self-check: {} / {} records Luhn-valid",
        summary.valid, summary.total
    ));
    emit_info_line(&format!("Generation time: {} ms", gen_elapsed.as_millis()));
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<(), String> {
    match (args.number, args.input) {
        (Some(number), None) => {
            let result = check_number(&number);
            println!("{}", render_check(&result));
            Ok(())
        }
        (None, Some(path)) => {
            let check_start = Instant::now();
            let (results, summary) = check_file(&path)?;
            for result in &results {
                println!("{}", render_check(result));
            }
            emit_info_line(&format!(
                "Check: total={} valid={} invalid={} malformed={}",
                summary.total, summary.valid, summary.invalid, summary.malformed
            ));
            emit_info_line(&format!(
                "Check time: {} ms",
                check_start.elapsed().as_millis()
            ));
            Ok(())
        }
        (Some(_), Some(_)) => Err("pass either a number or --input, not both".to_string()),
        (None, None) => Err("pass a number or --input <file>".to_string()),
    }
}

fn render_check(result: &CheckResult) -> String {
    let verdict = match result.outcome {
        CheckOutcome::Valid => "VALID",
        CheckOutcome::InvalidChecksum => "INVALID",
        CheckOutcome::Malformed => "MALFORMED",
    };
    match result.scheme {
        Some(scheme) => format!("{} => {} ({})", result.number, verdict, scheme),
        None => format!("{} => {}", result.number, verdict),
    }
}

fn run_bin(args: BinArgs) -> Result<(), String> {
    let bin = args.bin.trim();
    if let Some(record) = reference::lookup_bin(bin) {
        println!("Valid BIN: Yes");
        println!("Scheme: {}", record.scheme);
        println!("Type: {}", record.card_type);
        println!("Brand: {}", record.brand);
        println!("Bank: {}", record.bank);
        println!("Country: {}", record.country);
        return Ok(());
    }

    let digits_only = bin.len() >= 6 && bin.chars().all(|ch| ch.is_ascii_digit());
    if digits_only {
        if let Some(rule) = reference::scheme_for_number(bin) {
            println!("Valid BIN: Yes");
            println!("Scheme: {}", rule.name);
            println!("Type: N/A");
            println!("Brand: N/A");
            println!("Bank: N/A");
            println!("Country: N/A");
            return Ok(());
        }
    }
    Err(format!("invalid BIN or not found: {}", bin))
}

fn run_vbv(args: VbvArgs) -> Result<(), String> {
    let bin = args.bin.trim();
    match reference::vbv_status(bin) {
        Some(status) => {
            println!("{} is {}", bin, status);
            Ok(())
        }
        None => Err(format!("invalid BIN: {}", bin)),
    }
}

fn run_identity(args: IdentityArgs) -> Result<(), String> {
    let seed = args.seed.unwrap_or_else(random_seed);
    log::info!(
        "Generating {} identities for {} (seed {})",
        args.count,
        args.country,
        seed
    );
    let records = identity::generate_identities(&args.country, args.count, seed)?;
    for record in &records {
        println!("{}", record.render_line());
    }
    Ok(())
}

fn resolve_expiry_window(years_ahead: i32) -> Result<(i32, i32), String> {
    if years_ahead < 0 {
        return Err("years-ahead must not be negative".to_string());
    }
    let year = chrono::Utc::now().year();
    Ok((year, year + years_ahead))
}

fn random_seed() -> u64 {
    let mut rng = rand::rngs::OsRng;
    rng.gen()
}

fn write_csv(output: &Path, records: &[CardRecord]) -> Result<(), String> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|err| err.to_string())?;
        }
    }
    let mut writer = csv::Writer::from_path(output).map_err(|err| err.to_string())?;
    for record in records {
        writer.serialize(record).map_err(|err| err.to_string())?;
    }
    writer.flush().map_err(|err| err.to_string())
}

fn emit_info_line(message: &str) {
    if log::log_enabled!(log::Level::Info) {
        log::info!("{}", message);
    } else {
        eprintln!("{message}");
    }
}
