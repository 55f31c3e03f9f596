use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use serde::Serialize;
use uuid::Uuid;

use reality_link_gen::generator::{
    build_vless_link, full_client_config, single_outbound, DEFAULT_SOCKS_PORT,
};
use reality_link_gen::identity;
use reality_link_gen::models::{
    ConnectionParams, Fingerprint, ServerParams, DEFAULT_FLOW, DEFAULT_PORT, DEFAULT_SERVER_NAME,
    DEFAULT_SHORT_ID, DEFAULT_TAG,
};
use reality_link_gen::output;
use reality_link_gen::parser::validate_link;
use reality_link_gen::LinkGenError;

/// Generator for vless:// links and client configs for Xray REALITY
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to reality-client-params.json exported by the server
    input: Option<PathBuf>,

    /// Server IP or domain
    #[arg(long, value_name = "HOST")]
    host: Option<String>,

    /// Server port (default 443)
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,

    /// User UUID (if not taken from the file)
    #[arg(long, value_name = "UUID")]
    uuid: Option<String>,

    /// ShortId (4-16 hex characters)
    #[arg(long, value_name = "HEX")]
    short_id: Option<String>,

    /// x25519 public key of the server
    #[arg(long, value_name = "KEY")]
    public_key: Option<String>,

    /// SNI (serverName) to mimic
    #[arg(long, value_name = "SNI")]
    server_name: Option<String>,

    /// TLS fingerprint (default chrome)
    #[arg(long, value_enum, value_name = "FP")]
    fingerprint: Option<Fingerprint>,

    /// Connection label shown in the client
    #[arg(long, default_value = DEFAULT_TAG)]
    tag: String,

    /// User name for deterministic UUID v5 derivation
    #[arg(long)]
    name: Option<String>,

    /// Print only the vless link
    #[arg(long, help_heading = "Output")]
    link: bool,

    /// Export the outbound as JSON (v2rayN/NG)
    #[arg(long, help_heading = "Output")]
    json: bool,

    /// Export a full client configuration as JSON
    #[arg(long, help_heading = "Output")]
    full_config: bool,

    /// Local SOCKS port for --full-config
    #[arg(long, value_name = "PORT", default_value_t = DEFAULT_SOCKS_PORT, help_heading = "Output")]
    socks_port: u16,

    /// Show a QR code in the terminal
    #[arg(long, help_heading = "Output")]
    qr: bool,

    /// Human-readable text with the parameters
    #[arg(long, help_heading = "Output")]
    text: bool,

    /// Validate the generated link and exit
    #[arg(long, help_heading = "Output")]
    validate: bool,
}

/// Resolves every connection field through the flag > file > default chain.
fn resolve_params(args: &Args) -> Result<ConnectionParams, LinkGenError> {
    let doc = match &args.input {
        Some(path) if path.is_file() => {
            let doc = ServerParams::load(path)?;
            doc.ensure_complete()?;
            info!("loaded server parameters from {}", path.display());
            Some(doc)
        }
        Some(path) => {
            warn!("input file {} not found, using flags only", path.display());
            None
        }
        None => None,
    };

    let host = args
        .host
        .clone()
        .or_else(|| doc.as_ref().map(|d| d.server_host.clone()))
        .unwrap_or_default();
    let port = args
        .port
        .or_else(|| doc.as_ref().and_then(|d| d.server_port))
        .unwrap_or(DEFAULT_PORT);
    let public_key = args
        .public_key
        .clone()
        .or_else(|| doc.as_ref().map(|d| d.public_key.clone()))
        .unwrap_or_default();
    // Manual mode falls back to a well-known SNI; with a file the document
    // value is authoritative even when empty
    let server_name = args
        .server_name
        .clone()
        .or_else(|| doc.as_ref().map(|d| d.server_name.clone()))
        .unwrap_or_else(|| DEFAULT_SERVER_NAME.to_string());
    let fingerprint = match args.fingerprint {
        Some(fp) => fp,
        None => match doc.as_ref().and_then(|d| d.fingerprint.as_deref()) {
            Some(s) => s.parse()?,
            None => Fingerprint::default(),
        },
    };
    let short_id = args
        .short_id
        .clone()
        .or_else(|| doc.as_ref().and_then(|d| d.first_short_id().map(str::to_string)))
        .unwrap_or_else(|| DEFAULT_SHORT_ID.to_string());

    if host.is_empty() {
        return Err(LinkGenError::MissingField("host"));
    }
    if public_key.is_empty() {
        return Err(LinkGenError::MissingField("publicKey"));
    }

    let uuid = match args
        .uuid
        .clone()
        .or_else(|| doc.as_ref().and_then(|d| d.first_user_id().map(str::to_string)))
    {
        Some(s) => Uuid::parse_str(&s).map_err(|_| LinkGenError::InvalidUuid(s))?,
        None => match &args.name {
            Some(name) => identity::uuid_from_name(name),
            None => identity::random_uuid(),
        },
    };

    Ok(ConnectionParams {
        uuid,
        host,
        port,
        public_key,
        short_id,
        server_name,
        fingerprint,
        flow: DEFAULT_FLOW.to_string(),
        tag: args.tag.clone(),
    })
}

fn print_pretty_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("Error: failed to serialize config: {}", e);
            process::exit(1);
        }
    }
}

fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let args = Args::parse();

    let params = match resolve_params(&args) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("Error: {}", e);
            if matches!(e, LinkGenError::MissingField(_)) {
                eprintln!(
                    "Set --host, --public-key and --uuid, or pass a reality-client-params.json file."
                );
            }
            process::exit(1);
        }
    };

    let link = build_vless_link(&params);

    if args.validate {
        match validate_link(&link) {
            Ok(()) => {
                println!("Validation: OK");
                process::exit(0);
            }
            Err(e) => {
                println!("Validation failed: {}", e);
                process::exit(1);
            }
        }
    }

    if args.link {
        println!("{}", link);
    }
    if args.json {
        print_pretty_json(&single_outbound(&params));
    }
    if args.full_config {
        print_pretty_json(&full_client_config(&params, args.socks_port));
    }
    if args.qr {
        output::print_qr(&link);
    }
    if args.text {
        print!("{}", output::human_readable(&link, &params));
    }

    let any_output = args.link || args.json || args.full_config || args.qr || args.text;
    if !any_output {
        // Default behavior: the link plus a short hint
        println!("{}", link);
        eprintln!("\nOptions: --json, --full-config, --qr, --text, --validate");
    }
}
