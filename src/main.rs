use anyhow::Result;
use clap::Parser;
use eclipse_to_intellij::cli::{Cli, Commands, OutputFormat, SettingsAction};
use eclipse_to_intellij::config::{resolve_report_path, resolve_settings_path};
use eclipse_to_intellij::discover::discover_application_libraries;
use eclipse_to_intellij::form::{Defaults, Form};
use eclipse_to_intellij::generate::{GenerateSummary, generate};
use eclipse_to_intellij::report::ReportLog;
use eclipse_to_intellij::settings::SettingsStore;
use serde::Serialize;

fn main() -> Result<()> {
    let cli = parse_cli();
    init_logging(cli.verbose);

    let store = SettingsStore::new(resolve_settings_path(&cli)?);

    match cli.command.clone() {
        Commands::Generate(args) => {
            let defaults = Defaults::detect();
            let mut form = Form::load(&store.load()?, &defaults);
            form.apply(args.overrides());

            let report = ReportLog::new(resolve_report_path(&cli)?);
            let summary = generate(form, &defaults, &store, &report)?;
            print_summary(&summary, args.format)?;
        }
        Commands::Settings { action } => match action {
            SettingsAction::Show => {
                let form = Form::load(&store.load()?, &Defaults::detect());
                println!("{}", serde_json::to_string_pretty(&form)?);
            }
            SettingsAction::Delete => {
                let deleted = store.delete()?;
                let output = DeleteResult {
                    settings_file: store.path().to_string_lossy().to_string(),
                    deleted,
                    form: Form::defaults(&Defaults::detect()),
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        },
        Commands::Discover => {
            println!("{}", discover_application_libraries()?.display());
        }
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct DeleteResult {
    settings_file: String,
    deleted: bool,
    form: Form,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_target(false)
        .init();
}

fn parse_cli() -> Cli {
    let args: Vec<String> = std::env::args().collect();
    Cli::parse_from(rewrite_args_for_implicit_generate(args))
}

fn rewrite_args_for_implicit_generate(mut args: Vec<String>) -> Vec<String> {
    let subcommands = ["generate", "settings", "discover", "help"];

    let mut idx = 1usize;
    while idx < args.len() {
        let a = args[idx].as_str();
        if a == "--settings" || a == "--report" {
            if idx + 1 >= args.len() {
                return args;
            }
            idx += 2;
            continue;
        }

        if a.starts_with("--settings=") || a.starts_with("--report=") || a == "--verbose" {
            idx += 1;
            continue;
        }

        if matches!(a, "-h" | "--help" | "-V" | "--version") {
            return args;
        }

        break;
    }

    if idx >= args.len() {
        args.push("generate".to_string());
    } else if !subcommands.contains(&args[idx].as_str()) {
        args.insert(idx, "generate".to_string());
    }

    args
}

fn print_summary(summary: &GenerateSummary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(summary)?),
        OutputFormat::Text => {
            let mut out = String::new();
            out.push_str("Global Libraries generated successfully\n");
            out.push_str(&format!("output_file: {}\n", summary.output_file));
            out.push_str(&format!("libraries: {}\n", summary.libraries));
            out.push_str(&format!("missing_jars: {}\n", summary.missing_jars.len()));
            for jar in &summary.missing_jars {
                out.push_str(&format!("- {jar}\n"));
            }
            out.push_str(&format!("report_file: {}\n", summary.report_file));
            print!("{out}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn rewrite_inserts_generate_after_global_options() {
        let rewritten = rewrite_args_for_implicit_generate(args(&[
            "eclipse-to-intellij",
            "--settings",
            "/tmp/settings.json",
            "--verbose",
            "--root",
            "/work",
        ]));
        assert_eq!(rewritten[1], "--settings");
        assert_eq!(rewritten[2], "/tmp/settings.json");
        assert_eq!(rewritten[3], "--verbose");
        assert_eq!(rewritten[4], "generate");
        assert_eq!(rewritten[5], "--root");
    }

    #[test]
    fn rewrite_appends_generate_when_no_command_given() {
        let rewritten = rewrite_args_for_implicit_generate(args(&["eclipse-to-intellij", "--report=/tmp/r.log"]));
        assert_eq!(rewritten, args(&["eclipse-to-intellij", "--report=/tmp/r.log", "generate"]));
    }

    #[test]
    fn rewrite_leaves_explicit_subcommands_and_help_alone() {
        let explicit = args(&["eclipse-to-intellij", "settings", "delete"]);
        assert_eq!(rewrite_args_for_implicit_generate(explicit.clone()), explicit);

        let help = args(&["eclipse-to-intellij", "--help"]);
        assert_eq!(rewrite_args_for_implicit_generate(help.clone()), help);
    }

    #[test]
    fn rewrite_leaves_dangling_option_for_clap_to_reject() {
        let dangling = args(&["eclipse-to-intellij", "--verbose", "--settings"]);
        assert_eq!(rewrite_args_for_implicit_generate(dangling.clone()), dangling);

        let err = Cli::try_parse_from(rewrite_args_for_implicit_generate(dangling)).unwrap_err();
        assert_ne!(err.kind(), clap::error::ErrorKind::MissingSubcommand);
        assert!(err.to_string().contains("--settings"));
    }

    #[test]
    fn rewrite_then_parse_accepts_globals_after_implicit_generate() {
        let cli = Cli::parse_from(rewrite_args_for_implicit_generate(args(&[
            "eclipse-to-intellij",
            "--root",
            "/work",
            "--report",
            "/tmp/r.log",
        ])));
        assert_eq!(cli.report, Some(std::path::PathBuf::from("/tmp/r.log")));
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn rewritten_args_parse_into_generate() {
        let cli = Cli::parse_from(rewrite_args_for_implicit_generate(args(&[
            "eclipse-to-intellij",
            "-e",
            "LIBS",
            "-f",
            "text",
        ])));
        match cli.command {
            Commands::Generate(g) => {
                assert_eq!(g.environment_variable.as_deref(), Some("LIBS"));
                assert!(matches!(g.format, OutputFormat::Text));
            }
            other => panic!("expected generate, got {other:?}"),
        }
    }
}
