use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};
use vault_copy::clipboard::SystemClipboard;
use vault_copy::commands::{CommandId, MENU_COMMANDS};
use vault_copy::copy::{ContentCopier, CopyOutcome};
use vault_copy::errors::CopyError;
use vault_copy::logger::initialize_logger;
use vault_copy::notice::LogNotifier;
use vault_copy::settings::{JsonFileStore, SettingsEditor};
use vault_copy::template::Token;
use vault_copy::vault::FsVault;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    #[arg(long, global = true, env = "VAULT_COPY_VAULT", default_value = ".")]
    vault: PathBuf,
    #[arg(long = "settings", global = true, env = "VAULT_COPY_SETTINGS", help = "Settings file (defaults to the plugin data file inside the vault)")]
    settings_file: Option<PathBuf>,
    #[command(subcommand)]
    cmd: SubCommands,
}

#[derive(Subcommand, Debug, Clone)]
enum SubCommands {
    /// Copy every file covered by the given paths or glob patterns
    CopyContents(CopyArgs),
    /// Copy a single file, or every file inside a single folder
    CopyContent(SingleArgs),
    /// Show or change the output template and ignored extensions
    Settings(SettingsArgs),
    /// List the available copy commands
    Commands,
}

#[derive(Parser, Debug, Clone)]
struct CopyArgs {
    #[arg(required = true)]
    paths: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
struct SingleArgs {
    path: String,
}

#[derive(Parser, Debug, Clone)]
struct SettingsArgs {
    #[command(subcommand)]
    action: Option<SettingsAction>,
}

#[derive(Subcommand, Debug, Clone)]
enum SettingsAction {
    Show,
    SetTemplate { template: String },
    SetIgnored { extensions: String },
    #[command(about = "Append a token: content, path, folder, fileName or fileExt")]
    InsertToken { token: String },
    InsertNewline,
    ResetStandard,
    ResetRaw,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli_args = CliArgs::parse();
    initialize_logger();

    match run(cli_args).await {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli_args: CliArgs) -> Result<ExitCode, CopyError> {
    if let SubCommands::Commands = cli_args.cmd {
        for command in MENU_COMMANDS.iter() {
            println!("{:<14} {:<14} [{}]", command.id, command.title, command.icon);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let vault = FsVault::new(&cli_args.vault)?;
    let store = match cli_args.settings_file {
        Some(path) => JsonFileStore::new(path),
        None => JsonFileStore::for_vault(vault.root()),
    };
    debug!("Using settings file {}", store.path().display());
    let mut editor = SettingsEditor::load(store).await?;

    let (id, patterns) = match cli_args.cmd {
        SubCommands::CopyContents(args) => (CommandId::CopyContents, args.paths),
        SubCommands::CopyContent(args) => (CommandId::CopyContent, vec![args.path]),
        SubCommands::Settings(args) => {
            apply_settings_action(&mut editor, args.action.unwrap_or(SettingsAction::Show))
                .await?;
            return Ok(ExitCode::SUCCESS);
        }
        SubCommands::Commands => return Ok(ExitCode::SUCCESS),
    };

    let selection = vault.select(&patterns)?;
    let copier = ContentCopier::new(editor.into_settings(), vault, SystemClipboard, LogNotifier);

    match copier.run_command(id, &selection).await {
        CopyOutcome::Copied { .. } => Ok(ExitCode::SUCCESS),
        CopyOutcome::NoValidFiles | CopyOutcome::Failed => Ok(ExitCode::FAILURE),
    }
}

async fn apply_settings_action(
    editor: &mut SettingsEditor<JsonFileStore>,
    action: SettingsAction,
) -> Result<(), CopyError> {
    match action {
        SettingsAction::Show => {}
        SettingsAction::SetTemplate { template } => editor.set_template(template).await?,
        SettingsAction::SetIgnored { extensions } => {
            editor.set_ignored_extensions(extensions).await?
        }
        SettingsAction::InsertToken { token } => {
            let token: Token = token.parse()?;
            editor.insert_token(token).await?
        }
        SettingsAction::InsertNewline => editor.insert_newline().await?,
        SettingsAction::ResetStandard => editor.reset_standard().await?,
        SettingsAction::ResetRaw => editor.reset_raw().await?,
    }

    println!("{}", editor.settings());
    Ok(())
}
