// SPDX-License-Identifier: MPL-2.0
use jobmatch_alerts::config;
use jobmatch_alerts::i18n::fluent::I18n;
use jobmatch_alerts::logging;
use jobmatch_alerts::notifications::{Notifier, Preset, Severity};
use jobmatch_alerts::paths;
use jobmatch_alerts::surface::Document;
use std::process::ExitCode;
use std::time::Duration;

const HELP: &str = "\
Render an alert, let it expire, and print the page before and after.

USAGE:
  jobmatch-alerts [OPTIONS] <MESSAGE>...
  jobmatch-alerts [OPTIONS] --preset <NAME>

OPTIONS:
  --severity <info|success|warning|error>   Alert severity [default: info]
  --duration-ms <N>                         Lifetime in ms, 0 keeps it [default: from config]
  --preset <connection-error|upload-error|copy-success|copy-error>
  --lang <LOCALE>                           UI language (e.g. en-US, fr)
  --config-dir <DIR>                        Directory holding settings.toml
  -h, --help                                Print this help
";

struct Flags {
    lang: Option<String>,
    config_dir: Option<String>,
    severity: Severity,
    duration_ms: Option<u64>,
    preset: Option<Preset>,
    message: String,
}

fn parse_preset(name: &str) -> Result<Preset, String> {
    Preset::ALL
        .into_iter()
        .find(|preset| {
            preset
                .message_key()
                .strip_prefix("notification-")
                .is_some_and(|short| short == name)
        })
        .ok_or_else(|| format!("unknown preset `{name}`"))
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let severity = args
        .opt_value_from_fn("--severity", |s| Ok::<_, String>(Severity::from_name(s)))?
        .unwrap_or_default();
    let duration_ms = args.opt_value_from_str("--duration-ms")?;
    let preset = args.opt_value_from_fn("--preset", parse_preset)?;
    let message = args
        .finish()
        .into_iter()
        .filter_map(|s| s.into_string().ok())
        .collect::<Vec<_>>()
        .join(" ");

    Ok(Some(Flags {
        lang,
        config_dir,
        severity,
        duration_ms,
        preset,
        message,
    }))
}

fn main() -> ExitCode {
    logging::init_logging();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };
    if flags.preset.is_none() && flags.message.is_empty() {
        eprintln!("error: a message or --preset is required\n\n{HELP}");
        return ExitCode::from(2);
    }

    paths::init_cli_override(flags.config_dir);
    let (config, warning) = config::load();
    let i18n = I18n::new(flags.lang, &config);
    let notifier = Notifier::document(&config, &i18n.close_label());

    if let Some(key) = warning {
        notifier.show_with(i18n.tr(&key), Severity::Warning);
    }
    let handle = match flags.preset {
        Some(preset) => notifier.notify_preset(preset, &i18n),
        None => {
            let duration = flags
                .duration_ms
                .map_or_else(|| config.alerts.default_duration(), Duration::from_millis);
            notifier.notify(flags.message, flags.severity, duration)
        }
    };

    println!("{}", notifier.with_surface(Document::to_html));

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!(error = %err, "failed to start runtime");
            return ExitCode::FAILURE;
        }
    };
    runtime.block_on(notifier.run_until_idle());

    tracing::info!(id = %handle.id(), still_visible = handle.is_visible(), "timers settled");
    println!("{}", notifier.with_surface(Document::to_html));
    ExitCode::SUCCESS
}
