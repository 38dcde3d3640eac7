use clap::{Parser, Subcommand};
use dtmfgeo_core::{CoordinateInput, Decoder, DtmfSymbol, Encoder, DEFAULT_CHECKSUM_LENGTH};
use log::{debug, LevelFilter};
use serde::Serialize;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "dtmfgeo")]
#[command(about = "Encode geographic coordinates as DTMF keypad sequences")]
struct Cli {
    /// Enable debug logging (otherwise controlled by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a latitude/longitude pair into a keypad payload
    Encode {
        /// Latitude in degrees, -90 to 90
        #[arg(long, allow_hyphen_values = true)]
        lat: String,

        /// Longitude in degrees, -180 to 180
        #[arg(long, allow_hyphen_values = true)]
        lon: String,

        /// Send the values exactly as written instead of at fixed precision
        #[arg(long)]
        text: bool,

        /// Checksum symbols appended to the payload (must match decoder)
        #[arg(short, long, default_value_t = DEFAULT_CHECKSUM_LENGTH)]
        checksum_length: usize,
    },

    /// Decode a keypad payload back into a latitude/longitude pair
    Decode {
        /// Received keypad sequence
        #[arg(value_name = "PAYLOAD")]
        payload: String,

        /// Checksum symbols at the end of the payload (must match encoder)
        #[arg(short, long, default_value_t = DEFAULT_CHECKSUM_LENGTH)]
        checksum_length: usize,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List keypad symbols with their checksum value and tone pair
    Symbols,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{name} {value:?} is not a number (use --text for decimal strings)")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Serialize)]
struct DecodedOutput {
    latitude: f64,
    longitude: f64,
    latitude_text: String,
    longitude_text: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    match cli.command {
        Commands::Encode {
            lat,
            lon,
            text,
            checksum_length,
        } => encode_command(lat, lon, text, checksum_length)?,
        Commands::Decode {
            payload,
            checksum_length,
            json,
        } => decode_command(&payload, checksum_length, json)?,
        Commands::Symbols => symbols_command(),
    }

    Ok(())
}

fn parse_number(name: &'static str, value: &str) -> Result<f64, CliError> {
    value.trim().parse().map_err(|_| CliError::InvalidNumber {
        name,
        value: value.to_string(),
    })
}

fn encode_command(
    lat: String,
    lon: String,
    text: bool,
    checksum_length: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = if text {
        CoordinateInput::Text {
            latitude: lat,
            longitude: lon,
        }
    } else {
        CoordinateInput::Numeric {
            latitude: parse_number("latitude", &lat)?,
            longitude: parse_number("longitude", &lon)?,
        }
    };
    debug!("Encoding {:?} with checksum length {}", input, checksum_length);

    let encoder = Encoder::new(checksum_length)?;
    let payload = encoder.encode(input)?;
    println!("{}", payload);
    Ok(())
}

fn decode_command(
    payload: &str,
    checksum_length: usize,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let decoder = Decoder::new(checksum_length)?;
    let text = decoder.decode_text(payload.trim())?;
    let coordinate = text.to_coordinate()?;

    if json {
        let output = DecodedOutput {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            latitude_text: text.latitude,
            longitude_text: text.longitude,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{} {}", text.latitude, text.longitude);
    }
    Ok(())
}

fn symbols_command() {
    println!("symbol  value  low Hz  high Hz");
    for symbol in DtmfSymbol::all() {
        let (low, high) = symbol.tone_pair();
        println!(
            "{:>6}  {:>5}  {:>6}  {:>7}",
            symbol.as_char(),
            symbol.value(),
            low,
            high
        );
    }
}
