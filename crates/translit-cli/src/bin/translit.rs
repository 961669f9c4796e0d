use clap::{Parser, Subcommand};

use translit_cli::commands::{chat_ops, config_ops, convert_ops, load_engine};

#[derive(Parser)]
#[command(name = "translit", about = "Russian Cyrillic to Latin transliteration")]
struct Cli {
    /// Extra scheme definitions (TOML) merged on top of the builtin schemes
    #[arg(long, global = true)]
    schemes: Option<String>,
    /// Settings file (TOML); embedded defaults otherwise
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text (reads stdin when TEXT is omitted)
    Convert {
        /// Scheme code or display name (default from settings)
        #[arg(short, long)]
        scheme: Option<String>,
        text: Option<String>,
    },
    /// List available schemes sorted by display name
    List {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the builtin scheme definitions
    SchemesExport,
    /// Validate a scheme definition file
    SchemesValidate { file: String },
    /// Print the default settings
    SettingsExport,
    /// Validate a settings file
    SettingsValidate { file: String },
    /// Chat with the responder over stdin, one message per line
    Chat {
        /// User the messages come from
        #[arg(long, default_value = "local")]
        user: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let load = || load_engine(cli.schemes.as_deref(), cli.settings.as_deref());

    match &cli.command {
        Command::Convert { scheme, text } => {
            convert_ops::convert_cmd(&load(), scheme.as_deref(), text.as_deref())
        }
        Command::List { json } => convert_ops::list_cmd(&load(), *json),
        Command::SchemesExport => config_ops::schemes_export(),
        Command::SchemesValidate { file } => config_ops::schemes_validate(file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(file),
        Command::Chat { user } => chat_ops::chat_cmd(&load(), user),
    }
}
