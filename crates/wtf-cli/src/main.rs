//! CLI interface for wtf - exit messages and email display names.

use std::env;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context as _, Result, anyhow};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use env_logger::fmt::WriteStyle;
use log::{LevelFilter, debug};
use wtf_core::paths::write_default_config;
use wtf_core::{AppConfig, AppPaths, Emphasis, SupportStatus, exit_message, names_from_emails};

const APP_NAME: &str = "wtf";

/// Repository URL used for the generated schema `$id`.
const REPO_URL: &str = "https://github.com/wtfutil/wtf-rs";

fn main() -> anyhow::Result<()> {
    try_main()
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    let ctx = RuntimeContext::new(cli.common.clone())?;
    ctx.init_logging()?;
    debug!("resolved paths: {}", ctx.paths);

    match cli.command {
        Command::ExitMessage(cmd) => {
            handle_exit_message(&ctx, cmd);
            Ok(())
        }
        Command::Names { emails } => handle_names(&ctx, emails),
        Command::Init(cmd) => handle_init(&ctx, cmd),
        Command::Config { command } => handle_config(&ctx, command),
        Command::Completions { shell } => {
            handle_completions(shell);
            Ok(())
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wtf",
    author,
    version,
    about = "Exit messages and email display names for wtf",
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    common: CommonOpts,
    #[command(subcommand)]
    command: Command,
}

/// Common CLI options shared across all subcommands.
#[derive(Debug, Clone, Args)]
pub struct CommonOpts {
    /// Override the config file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
    /// Reduce output to only errors.
    #[arg(short, long, action = clap::ArgAction::SetTrue, global = true)]
    pub quiet: bool,
    /// Increase logging verbosity (stackable).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,
    /// Enable trace logging.
    #[arg(long, global = true)]
    pub trace: bool,
    /// Output machine-readable JSON.
    #[arg(long, global = true)]
    pub json: bool,
    /// Disable ANSI colors in output.
    #[arg(long = "no-color", global = true, conflicts_with = "color")]
    pub no_color: bool,
    /// Control color output.
    #[arg(long, value_enum, default_value_t = ColorOption::Auto, global = true)]
    pub color: ColorOption,
    /// Do not change anything on disk.
    #[arg(long = "dry-run", global = true)]
    pub dry_run: bool,
    /// Assume "yes" for interactive prompts.
    #[arg(short = 'y', long = "yes", global = true)]
    pub assume_yes: bool,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorOption {
    /// Detect terminal capabilities automatically.
    Auto,
    /// Always emit ANSI color codes.
    Always,
    /// Never emit ANSI color codes.
    Never,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the message shown when wtf exits.
    ExitMessage(ExitMessageCommand),
    /// Derive display names from email addresses.
    Names {
        /// Email addresses. Read from stdin, one per line, when omitted.
        emails: Vec<String>,
    },
    /// Create the default configuration file.
    Init(InitCommand),
    /// Inspect and manage configuration.
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, Args)]
struct ExitMessageCommand {
    /// Treat the user as a code contributor.
    #[arg(long)]
    contributor: bool,
    /// Treat the user as a sponsor.
    #[arg(long)]
    sponsor: bool,
    /// Suppress the message regardless of configuration.
    #[arg(long)]
    hide: bool,
}

impl ExitMessageCommand {
    const fn support(self, configured: SupportStatus) -> SupportStatus {
        configured.merge(SupportStatus::new(self.contributor, self.sponsor))
    }
}

#[derive(Debug, Clone, Copy, Args)]
struct InitCommand {
    /// Recreate configuration even if it already exists.
    #[arg(long = "force")]
    force: bool,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum ConfigCommand {
    /// Output the effective configuration.
    Show,
    /// Print the resolved config file path.
    Path,
    /// Print the JSON schema.
    Schema,
    /// Regenerate the default configuration file.
    Reset,
}

// ─── Runtime ─────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct RuntimeContext {
    common: CommonOpts,
    paths: AppPaths,
    config: AppConfig,
    config_existed: bool,
}

impl RuntimeContext {
    fn new(common: CommonOpts) -> Result<Self> {
        let paths = AppPaths::discover(common.config.as_deref())?;
        let config_existed = paths.config_file.exists();
        let config = AppConfig::load(&paths, common.dry_run)
            .with_context(|| format!("loading config from {}", paths.config_file.display()))?;
        Ok(Self {
            common,
            paths,
            config,
            config_existed,
        })
    }

    fn init_logging(&self) -> Result<()> {
        if self.common.quiet {
            log::set_max_level(LevelFilter::Off);
            return Ok(());
        }
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
        builder.filter_level(self.effective_log_level());

        let write_style = if self.color_enabled(io::stderr().is_terminal()) {
            if self.force_color() {
                WriteStyle::Always
            } else {
                WriteStyle::Auto
            }
        } else {
            WriteStyle::Never
        };
        builder.write_style(write_style);

        builder.try_init().or_else(|err| {
            if self.common.verbose > 0 {
                eprintln!("logger already initialized: {err}");
            }
            Ok(())
        })
    }

    fn effective_log_level(&self) -> LevelFilter {
        if self.common.trace {
            LevelFilter::Trace
        } else if self.common.debug {
            LevelFilter::Debug
        } else {
            match self.common.verbose {
                0 => self.config.logging.level.into(),
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        }
    }

    fn force_color(&self) -> bool {
        matches!(self.common.color, ColorOption::Always) || env::var_os("FORCE_COLOR").is_some()
    }

    fn color_enabled(&self, is_terminal: bool) -> bool {
        let disabled = self.common.no_color
            || matches!(self.common.color, ColorOption::Never)
            || env::var_os("NO_COLOR").is_some();
        !disabled && (self.force_color() || is_terminal)
    }

    fn emphasis(&self) -> Emphasis {
        Emphasis::for_color(self.color_enabled(io::stdout().is_terminal()))
    }
}

// ─── Handlers ────────────────────────────────────────────────────────

fn handle_exit_message(ctx: &RuntimeContext, cmd: ExitMessageCommand) {
    let display = ctx.config.exit_message.display && !cmd.hide;
    let status = cmd.support(ctx.config.support);
    let message = exit_message(display, status, &ctx.emphasis());
    if !message.is_empty() {
        print!("{message}");
    }
}

fn handle_names(ctx: &RuntimeContext, emails: Vec<String>) -> Result<()> {
    let emails = if emails.is_empty() && !io::stdin().is_terminal() {
        read_emails(io::stdin().lock())?
    } else {
        emails
    };
    debug!("deriving names for {} addresses", emails.len());

    let names = names_from_emails(&emails);
    if ctx.common.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&names).context("serializing names to JSON")?
        );
    } else {
        for name in names {
            println!("{name}");
        }
    }
    Ok(())
}

fn read_emails(reader: impl BufRead) -> Result<Vec<String>> {
    let mut emails = Vec::new();
    for line in reader.lines() {
        let line = line.context("reading email addresses from stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            emails.push(trimmed.to_string());
        }
    }
    Ok(emails)
}

fn handle_init(ctx: &RuntimeContext, cmd: InitCommand) -> Result<()> {
    if ctx.config_existed && !(cmd.force || ctx.common.assume_yes) {
        return Err(anyhow!(
            "config already exists at {} (use --force to overwrite)",
            ctx.paths.config_file.display()
        ));
    }
    // Loading the context writes defaults for a missing file.
    if !ctx.config_existed && !ctx.common.dry_run {
        println!("created {}", ctx.paths.config_file.display());
        return Ok(());
    }
    if ctx.common.dry_run {
        log::info!(
            "dry-run: would write default config to {}",
            ctx.paths.config_file.display()
        );
        return Ok(());
    }
    Ok(write_default_config(&ctx.paths.config_file)?)
}

fn handle_config(ctx: &RuntimeContext, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            if ctx.common.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&ctx.config)
                        .context("serializing config to JSON")?
                );
            } else {
                println!("{:#?}", ctx.config);
            }
            Ok(())
        }
        ConfigCommand::Path => {
            println!("{}", ctx.paths.config_file.display());
            Ok(())
        }
        ConfigCommand::Schema => {
            println!("{}", wtf_core::generate_schema(APP_NAME, REPO_URL)?);
            Ok(())
        }
        ConfigCommand::Reset => {
            if ctx.common.dry_run {
                log::info!(
                    "dry-run: would reset config at {}",
                    ctx.paths.config_file.display()
                );
                return Ok(());
            }
            Ok(write_default_config(&ctx.paths.config_file)?)
        }
    }
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, APP_NAME, &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(args: &[&str]) -> RuntimeContext {
        let cli = Cli::try_parse_from(args).expect("parse args");
        RuntimeContext {
            common: cli.common,
            paths: AppPaths {
                config_file: PathBuf::from("/tmp/wtf/config.toml"),
            },
            config: AppConfig::default(),
            config_existed: true,
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_exit_message_flags() {
        let cli = Cli::try_parse_from(["wtf", "exit-message", "--sponsor"]).expect("parse");
        let Command::ExitMessage(cmd) = cli.command else {
            panic!("expected exit-message command");
        };
        assert_eq!(
            cmd.support(SupportStatus::default()),
            SupportStatus::new(false, true)
        );
        assert_eq!(
            cmd.support(SupportStatus::new(true, false)),
            SupportStatus::new(true, true)
        );
    }

    #[test]
    fn test_names_arguments() {
        let cli = Cli::try_parse_from(["wtf", "names", "a.b@example.com", "c@example.com"])
            .expect("parse");
        let Command::Names { emails } = cli.command else {
            panic!("expected names command");
        };
        assert_eq!(names_from_emails(&emails), vec!["A B", "C"]);
    }

    #[test]
    fn test_read_emails_skips_blank_lines() {
        let input = "test_user@example.com\n\n  other_user@example.com  \n";
        let emails = read_emails(input.as_bytes()).expect("read emails");
        assert_eq!(emails, vec!["test_user@example.com", "other_user@example.com"]);
    }

    #[test]
    fn test_effective_log_level() {
        assert_eq!(context(&["wtf", "names"]).effective_log_level(), LevelFilter::Warn);
        assert_eq!(
            context(&["wtf", "-vv", "names"]).effective_log_level(),
            LevelFilter::Debug
        );
        assert_eq!(
            context(&["wtf", "--trace", "names"]).effective_log_level(),
            LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_level_used_without_flags() {
        let mut ctx = context(&["wtf", "names"]);
        ctx.config.logging.level = wtf_core::LogLevel::Info;
        assert_eq!(ctx.effective_log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_color_disabled_by_flags() {
        assert!(!context(&["wtf", "--no-color", "names"]).color_enabled(true));
        assert!(!context(&["wtf", "--color", "never", "names"]).color_enabled(true));
    }
}
