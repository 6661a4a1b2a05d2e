//! appkit CLI - Scaffold AppKit apps and list their published versions

mod output;

use anyhow::Result;
use appkit_core::{
    init_project, HttpArchiveFetcher, ToolConfig, VersionsClient, DEFAULT_TEMPLATE,
};
use clap::{Parser, Subcommand};
use colored::Colorize;
use output::ConsoleReporter;
use std::path::PathBuf;

/// Environment variable overriding the bundled template directory
pub const BUNDLED_DIR_ENV: &str = "APPKIT_BUNDLED_DIR";

#[derive(Parser, Debug)]
#[command(name = "appkit")]
#[command(about = "CLI for scaffolding and managing AppKit apps")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a new app in a directory, leaving existing files alone
    Init(InitArgs),
    /// List all the published versions of the current app
    Versions,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Directory to initialize the app in
    #[arg(default_value = ".")]
    pub location: PathBuf,

    /// Starter app template to use
    #[arg(
        short,
        long,
        default_value = DEFAULT_TEMPLATE,
        value_parser = ["minimal", "middleware", "write", "resource", "search", "httpbin"],
    )]
    pub template: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = ToolConfig::new(bundled_template_dir())?;

    match args.command {
        Command::Init(init_args) => run_init(&config, init_args).await,
        Command::Versions => run_versions(&config).await,
    }
}

async fn run_init(config: &ToolConfig, args: InitArgs) -> Result<()> {
    println!("Welcome to the AppKit platform!");
    println!();
    println!("Let's initialize your app!");
    println!();

    let fetcher = HttpArchiveFetcher::from_config(config);
    let dir = init_project(
        config,
        Some(&args.template),
        &args.location,
        &fetcher,
        &ConsoleReporter,
    )
    .await?;

    println!();
    println!(
        "{} Your app is ready in {}. Edit `index.js` and run `appkit push` to publish it!",
        "Finished!".green().bold(),
        dir.display()
    );

    Ok(())
}

async fn run_versions(config: &ToolConfig) -> Result<()> {
    let client = VersionsClient::from_config(config);
    let data = client.list().await?;

    println!("All versions of your app \"{}\" listed below.", data.app.title);
    println!();

    let rows: Vec<Vec<String>> = data
        .versions
        .iter()
        .map(|v| {
            vec![
                v.version.clone(),
                v.platform_version.clone(),
                v.user_count.to_string(),
                v.deployment.clone(),
                v.deprecation_date.clone().unwrap_or_else(|| "null".to_string()),
                v.date.clone(),
            ]
        })
        .collect();

    print!(
        "{}",
        output::render_table(
            &[
                "Version",
                "Platform",
                "Users",
                "Deployment",
                "Deprecation Date",
                "Timestamp",
            ],
            &rows,
        )
    );

    if data.versions.is_empty() {
        println!();
        println!("Try publishing a version with the `appkit push` command.");
    }

    Ok(())
}

/// Locate the bundled default template
///
/// Looks next to the installed binary first so packaged releases work, and
/// falls back to the repo-relative path used during development.
fn bundled_template_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(BUNDLED_DIR_ENV) {
        return PathBuf::from(dir);
    }

    let exe_relative = std::env::current_exe().ok().and_then(|exe| {
        let dir = exe.parent()?.join("templates").join(DEFAULT_TEMPLATE);
        dir.is_dir().then_some(dir)
    });

    exe_relative
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../templates/minimal"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use appkit_core::EXAMPLE_TEMPLATES;
    use clap::CommandFactory;

    #[test]
    fn test_cli_grammar() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_init_defaults() {
        let args = Args::parse_from(["appkit", "init"]);
        let Command::Init(init) = args.command else {
            panic!("expected init");
        };
        assert_eq!(init.location, PathBuf::from("."));
        assert_eq!(init.template, "minimal");
    }

    #[test]
    fn test_init_rejects_unknown_template() {
        let result = Args::try_parse_from(["appkit", "init", "--template", "helloworld"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_example_templates_are_all_accepted() {
        for name in EXAMPLE_TEMPLATES {
            let args = Args::parse_from(["appkit", "init", "my-app", "--template", name]);
            let Command::Init(init) = args.command else {
                panic!("expected init");
            };
            assert_eq!(init.template, *name);
        }
    }
}
