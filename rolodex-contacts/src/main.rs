use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use librolodex::media::directory::DirectoryPicker;
use librolodex::providers::file::FileContactsProvider;
use librolodex::providers::LoadOutcome;
use librolodex::service::RolodexService;
use librolodex::{logging, Config, ContactField, ContactRecord, RolodexError, RosterStore};

#[derive(Parser, Debug)]
#[command(name = "rolodex-contacts")]
#[command(version, about = "Load, edit and print the contact roster")]
#[command(long_about = r#"Load the contact roster through the permission + fetch pipeline,
apply edits, and print the result.

EXAMPLES:
    # Print contacts from the configured source
    rolodex-contacts

    # Read a specific file
    rolodex-contacts --source ~/contacts.json

    # Add contacts (NAME,PHONE; the last comma separates the phone number)
    rolodex-contacts --add "Amy,555-0100" --add "Ben,555-0200"

    # Change a field of an existing contact
    rolodex-contacts --set "1:phone=555-9999"
    rolodex-contacts --set "2:name=Benjamin"

    # Answer the permission prompt with "no"
    rolodex-contacts --deny

    # JSON output for scripting
    rolodex-contacts --format json | jq '.[] | .phoneNumber'

    # Export to CSV
    rolodex-contacts --format csv > contacts.csv

OUTPUT FORMATS:
    text  - One contact per line: id | name | phone (default)
    json  - JSON array
    jsonl - JSON lines, one object per line
    csv   - CSV with headers

EXIT CODES:
    0 - Success (including an empty roster)
    1 - Error (unreadable config, malformed contacts file, etc.)
    2 - Contacts permission not granted
    3 - Malformed --add or --set argument
"#)]
struct Args {
    /// Contacts file to read instead of the configured source
    #[arg(long, value_name = "FILE")]
    source: Option<PathBuf>,

    /// Refuse the contacts permission prompt
    #[arg(long)]
    deny: bool,

    /// Add a contact after loading (repeatable)
    #[arg(long, value_name = "NAME,PHONE")]
    add: Vec<String>,

    /// Set a field of an existing contact (repeatable; FIELD is name or phone)
    #[arg(long, value_name = "ID:FIELD=VALUE")]
    set: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    #[arg(value_parser = ["text", "json", "jsonl", "csv"])]
    format: String,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// One `--set` edit
#[derive(Debug, PartialEq)]
struct FieldEdit {
    id: String,
    field: ContactField,
    value: String,
}

/// Parse `NAME,PHONE`
fn parse_add(arg: &str) -> librolodex::Result<(String, String)> {
    let (name, phone) = arg.rsplit_once(',').ok_or_else(|| {
        RolodexError::InvalidInput(format!("--add expects NAME,PHONE, got '{}'", arg))
    })?;
    Ok((name.trim().to_string(), phone.trim().to_string()))
}

/// Parse `ID:FIELD=VALUE`
fn parse_set(arg: &str) -> librolodex::Result<FieldEdit> {
    let malformed =
        || RolodexError::InvalidInput(format!("--set expects ID:FIELD=VALUE, got '{}'", arg));

    let (id, rest) = arg.split_once(':').ok_or_else(malformed)?;
    let (field, value) = rest.split_once('=').ok_or_else(malformed)?;
    if id.is_empty() {
        return Err(malformed());
    }
    let field = field.parse::<ContactField>().map_err(RolodexError::InvalidInput)?;

    Ok(FieldEdit {
        id: id.to_string(),
        field,
        value: value.to_string(),
    })
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn print_roster(records: &[ContactRecord], format: &str) -> Result<()> {
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(records)?);
        }
        "jsonl" => {
            for record in records {
                println!("{}", serde_json::to_string(record)?);
            }
        }
        "csv" => {
            println!("id,name,phoneNumber");
            for record in records {
                println!(
                    "{},{},{}",
                    csv_field(&record.id),
                    csv_field(&record.name),
                    csv_field(&record.phone_number)
                );
            }
        }
        _ => {
            // An empty roster prints nothing
            for record in records {
                println!("{} | {} | {}", record.id, record.name, record.phone_number);
            }
        }
    }
    Ok(())
}

fn apply_edits(roster: &mut RosterStore, adds: Vec<(String, String)>, sets: Vec<FieldEdit>) {
    for (name, phone) in adds {
        roster.add(name, phone);
    }
    for edit in sets {
        if !roster.update_field(&edit.id, edit.field, edit.value) {
            tracing::warn!(id = %edit.id, "No contact with this id, edit skipped");
        }
    }
}

async fn run(args: Args) -> Result<()> {
    // Malformed edits are rejected before anything is loaded
    let adds = args
        .add
        .iter()
        .map(|arg| parse_add(arg))
        .collect::<librolodex::Result<Vec<_>>>()?;
    let sets = args
        .set
        .iter()
        .map(|arg| parse_set(arg))
        .collect::<librolodex::Result<Vec<_>>>()?;

    let mut config = Config::load_or_default().context("Failed to load configuration")?;
    if let Some(source) = args.source {
        config.contacts.source = source.to_string_lossy().to_string();
    }
    let allow_access = config.contacts.allow_access && !args.deny;

    let provider = Arc::new(FileContactsProvider::new(config.contacts_source(), allow_access));
    let picker = Arc::new(DirectoryPicker::from_config(&config));
    let service = RolodexService::with_collaborators(config, provider, picker);

    let (mut roster, outcome) = service.contacts().load_roster().await?;

    if outcome == LoadOutcome::PermissionDenied {
        eprintln!("Contacts permission not granted");
        std::process::exit(2);
    }

    apply_edits(&mut roster, adds, sets);
    print_roster(roster.records(), &args.format)
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let mut logging = logging::config_from_env(args.verbose);
    if std::env::var("ROLODEX_LOG_LEVEL").is_err() {
        logging.level = "warn".to_string();
    }
    logging.init();

    tracing::debug!("rolodex-contacts started with args: {:?}", args);

    if let Err(e) = run(args).await {
        eprintln!("Error: {:#}", e);
        let code = e
            .downcast_ref::<RolodexError>()
            .map(RolodexError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
