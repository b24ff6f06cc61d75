//! CLI tool for checking card-entry form input.
//!
//! # Usage
//!
//! ```bash
//! # Validate a whole form
//! cardinput validate --number "4532 0151 1283 0366" --name "Ana Gomez" \
//!     --month 12 --year 2030 --code 123
//!
//! # Same, with identification required and amex refused
//! cardinput validate --number 378282246310005 --month 12 --year 2030 --code 1234 \
//!     --name "Ana Gomez" --identification --exclude amex --output json
//!
//! # Classify a (partial) number
//! cardinput brand 4532
//!
//! # Format a card number for display
//! cardinput format 4532015112830366
//!
//! # Generate test card numbers
//! cardinput generate --brand visa --count 5
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use card_input::{
    classify_brand, format, generate, passes_luhn, strip_formatting, validate, validate_at,
    CardBrand, CardData, FormConfig, ValidationResult, MAX_CARD_DIGITS, MIN_CARD_DIGITS,
};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "cardinput")]
#[command(author, version, about = "Card-entry form validation tool")]
struct Cli {
    /// Log validation events to stderr (repeat for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every field of a card form
    Validate {
        /// Card number (spaces allowed)
        #[arg(long, default_value = "")]
        number: String,

        /// Cardholder name
        #[arg(long, default_value = "")]
        name: String,

        /// Expiration month (1-12)
        #[arg(long, default_value = "")]
        month: String,

        /// Expiration year (4 digits)
        #[arg(long, default_value = "")]
        year: String,

        /// Security code
        #[arg(long, default_value = "")]
        code: String,

        /// Identification document type
        #[arg(long)]
        id_type: Option<String>,

        /// Identification document number
        #[arg(long)]
        id_number: Option<String>,

        #[command(flatten)]
        form: FormArgs,

        /// Anchor the year window here instead of the system clock
        #[arg(long)]
        current_year: Option<i32>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Classify the brand of a (partial) card number
    Brand {
        /// Card number or prefix
        card_number: String,
    },

    /// Format a card number in groups of 4
    Format {
        /// Card number to format
        card_number: String,

        /// Separator to use
        #[arg(short, long, default_value = " ")]
        separator: String,
    },

    /// Check the Luhn checksum of a card number (length reported separately)
    Luhn {
        /// Card number to check
        card_number: String,
    },

    /// Generate test card numbers (for testing only)
    Generate {
        /// Card brand to generate
        #[arg(short, long, default_value = "visa")]
        brand: BrandArg,

        /// Number of cards to generate
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Output formatted (with spaces)
        #[arg(short, long)]
        formatted: bool,
    },
}

/// Flags that build a [`FormConfig`].
#[derive(clap::Args)]
struct FormArgs {
    /// Load the form configuration from a JSON file (flags below override it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Hide the security code field
    #[arg(long)]
    no_security_code: bool,

    /// Hide the cardholder name field
    #[arg(long)]
    no_cardholder_name: bool,

    /// Show the identification fields
    #[arg(long)]
    identification: bool,

    /// Accept only these brands
    #[arg(long, value_delimiter = ',')]
    allow: Vec<BrandArg>,

    /// Refuse these brands
    #[arg(long, value_delimiter = ',')]
    exclude: Vec<BrandArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum BrandArg {
    Visa,
    Mastercard,
    Amex,
    Discover,
    Diners,
    Jcb,
}

impl From<BrandArg> for CardBrand {
    fn from(arg: BrandArg) -> Self {
        match arg {
            BrandArg::Visa => CardBrand::Visa,
            BrandArg::Mastercard => CardBrand::Mastercard,
            BrandArg::Amex => CardBrand::Amex,
            BrandArg::Discover => CardBrand::Discover,
            BrandArg::Diners => CardBrand::Diners,
            BrandArg::Jcb => CardBrand::Jcb,
        }
    }
}

impl FormArgs {
    fn into_config(self) -> Result<FormConfig, String> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
                serde_json::from_str(&text)
                    .map_err(|e| format!("invalid config {}: {}", path.display(), e))?
            }
            None => FormConfig::default(),
        };

        if self.no_security_code {
            config = config.security_code(false);
        }
        if self.no_cardholder_name {
            config = config.cardholder_name(false);
        }
        if self.identification {
            config = config.identification(true);
        }
        if !self.allow.is_empty() {
            config = config.allow_brands(self.allow.into_iter().map(CardBrand::from));
        }
        if !self.exclude.is_empty() {
            config = config.exclude_brands(self.exclude.into_iter().map(CardBrand::from));
        }

        Ok(config)
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "card_input=debug",
        _ => "card_input=trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Validate {
            number,
            name,
            month,
            year,
            code,
            id_type,
            id_number,
            form,
            current_year,
            output,
        } => {
            let config = match form.into_config() {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::from(2);
                }
            };

            let mut data = CardData::new()
                .with_card_number(number)
                .with_cardholder_name(name)
                .with_expiration(month, year)
                .with_security_code(code);
            data.identification_type = id_type;
            data.identification_number = id_number;

            let result = match current_year {
                Some(year) => validate_at(&data, &config, year),
                None => validate(&data, &config),
            };
            cmd_validate(&data, &result, output)
        }
        Commands::Brand { card_number } => cmd_brand(&card_number),
        Commands::Format {
            card_number,
            separator,
        } => {
            println!("{}", format::format_with_separator(&card_number, &separator));
            ExitCode::SUCCESS
        }
        Commands::Luhn { card_number } => cmd_luhn(&card_number),
        Commands::Generate {
            brand,
            count,
            formatted,
        } => {
            cmd_generate(brand.into(), count, formatted);
            ExitCode::SUCCESS
        }
    }
}

fn cmd_validate(data: &CardData, result: &ValidationResult, output: OutputFormat) -> ExitCode {
    match output {
        OutputFormat::Text => {
            println!("Valid: {}", if result.is_valid() { "yes" } else { "no" });
            if !data.card_number.trim().is_empty() {
                println!("Brand: {}", classify_brand(&data.card_number).name());
            }
            for (field, error) in result.iter() {
                println!("{}: {}", field.label(), error);
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(2);
            }
        },
    }

    if result.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_brand(card_number: &str) -> ExitCode {
    let brand = classify_brand(card_number);
    println!("Brand: {}", brand.name());
    println!("Id: {}", brand.id());
    ExitCode::SUCCESS
}

fn cmd_luhn(card_number: &str) -> ExitCode {
    let length = strip_formatting(card_number).chars().count();
    if (MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&length) {
        println!("Length: {} (ok)", length);
    } else {
        println!(
            "Length: {} (card numbers have {} to {} digits)",
            length, MIN_CARD_DIGITS, MAX_CARD_DIGITS
        );
    }

    if passes_luhn(card_number) {
        println!("Luhn check: PASS");
        ExitCode::SUCCESS
    } else {
        println!("Luhn check: FAIL");
        ExitCode::FAILURE
    }
}

fn cmd_generate(brand: CardBrand, count: usize, formatted: bool) {
    for _ in 0..count {
        let card = generate::generate_card(brand);
        if formatted {
            println!("{}", format::format_card_number(&card));
        } else {
            println!("{}", card);
        }
    }
}
