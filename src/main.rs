use clap::Parser;
use tgi_launcher::adapters::preset::PresetDialog;
use tgi_launcher::adapters::terminal::TerminalDialog;
use tgi_launcher::adapters::zenity::ZenityDialog;
use tgi_launcher::config::LogFormat;
use tgi_launcher::core::catalog::build_catalog;
use tgi_launcher::domain::ports::{Dialog, ScriptLocator};
use tgi_launcher::utils::logger;
use tgi_launcher::{
    CliConfig, Frontend, Launcher, LauncherConfig, LauncherError, LocalScriptDir, ProcessRunner,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = CliConfig::parse();

    // 初始化日誌
    match args.log_format {
        LogFormat::Compact => logger::init_cli_logger(args.verbose),
        LogFormat::Json => logger::init_json_logger(args.verbose),
    }

    tracing::info!("Starting tgi-launcher");

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    tracing::debug!(?config, "configuration resolved");

    let locator = LocalScriptDir::new(config.script_dir.clone());

    if args.list {
        match list_scripts(&locator, &config) {
            Ok(()) => std::process::exit(0),
            Err(e) => exit_with(&e),
        }
    }

    let frontend: Box<dyn Dialog> = match config.frontend {
        Frontend::Terminal => Box::new(TerminalDialog::new()),
        Frontend::Zenity => Box::new(ZenityDialog::new()),
    };
    let dialog = PresetDialog::new(args.size, args.card.clone(), frontend);
    let runner = ProcessRunner::new(config.interpreter.clone());
    let exit_policy = config.exit_policy;

    let launcher = Launcher::new(config, dialog, locator, runner);

    // 錯誤已經由 Launcher 透過對話框通知使用者
    let code = if args.dry_run {
        match launcher.prepare() {
            Ok(plan) => match serde_json::to_string_pretty(&plan) {
                Ok(json) => {
                    println!("{}", json);
                    0
                }
                Err(e) => {
                    tracing::error!("failed to serialize plan: {}", e);
                    1
                }
            },
            Err(e) => e.exit_code(),
        }
    } else {
        match launcher.run().await {
            Ok(dispatch) => dispatch.status.exit_code(exit_policy),
            Err(e) => e.exit_code(),
        }
    };

    std::process::exit(code);
}

fn list_scripts(locator: &LocalScriptDir, config: &LauncherConfig) -> tgi_launcher::Result<()> {
    let names = locator.list()?;
    let entries = build_catalog(&names, config.max_card);

    if entries.is_empty() {
        println!("No scripts found in {}", locator.root().display());
        return Ok(());
    }

    for entry in entries {
        println!(
            "{:<14} {:<8} {:>4}{}",
            entry.filename,
            config.labels.label(entry.size),
            entry.card,
            if entry.in_range { "" } else { "  (out of range)" }
        );
    }
    Ok(())
}

fn exit_with(e: &LauncherError) -> ! {
    tracing::debug!(category = ?e.category(), "{}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
