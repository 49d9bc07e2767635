// Trustable CLI - score lookups, local estimates and widget markup

mod exit_codes;

use std::future::Future;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use trustable_client::ScoreResolver;
use trustable_config::{resolve_api_key, Settings};
use trustable_core::{classify, estimate, Brand, SignalBundle};
use trustable_widget::{embed_snippet, Document, Element, Outcome, Variant, Widget, MARKER_CLASS};

use exit_codes::{
    score_exit_code, EXIT_CONFIG_INVALID, EXIT_ERROR, EXIT_IO, EXIT_SUCCESS, EXIT_USAGE,
};

#[derive(Parser)]
#[command(name = "trustable")]
#[command(about = "Trustable AI-visibility score widget tools")]
#[command(version)]
struct Cli {
    /// Settings file (default: <config dir>/trustable/settings.json)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log debug diagnostics to stderr (RUST_LOG overrides)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the rating tier for a score
    Classify {
        /// Score between 0 and 100
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        score: u8,
    },

    /// Estimate a score locally from web-presence signals
    #[command(after_help = "\
Examples:
  trustable estimate --platforms 3 --wikidata --content-age 9
  trustable estimate --signals signals.json --json")]
    Estimate {
        /// Number of platforms listing the brand
        #[arg(long, default_value_t = 0)]
        platforms: u32,

        /// Brand has a Wikidata entry
        #[arg(long)]
        wikidata: bool,

        /// Brand has a Google Business profile
        #[arg(long)]
        google_business: bool,

        /// Site carries schema.org markup
        #[arg(long)]
        schema: bool,

        /// Months since the last major content update
        #[arg(long, default_value_t = 0)]
        content_age: u32,

        /// Site has comparison content
        #[arg(long)]
        comparison: bool,

        /// Read signals from a JSON file (camelCase keys) instead of flags
        #[arg(long, value_name = "FILE", conflicts_with_all = ["platforms", "wikidata", "google_business", "schema", "content_age", "comparison"])]
        signals: Option<PathBuf>,

        /// Print {"score", "rating"} as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a brand's score and print the record as JSON
    #[command(after_help = "\
Without an API key the default score is shown. Remote failures also fall
back to the default unless --strict is given.

Examples:
  trustable score Acme
  TRUSTABLE_API_KEY=sk_live_x trustable score 'Acme & Co' --strict")]
    Score {
        brand: Brand,

        /// API key (default: TRUSTABLE_API_KEY)
        #[arg(long)]
        api_key: Option<String>,

        /// Fail with an exit code instead of falling back to the default score
        #[arg(long)]
        strict: bool,
    },

    /// Print the widget markup for a brand
    Render {
        brand: Brand,

        #[arg(long, value_enum, default_value_t = VariantArg::Full)]
        variant: VariantArg,

        /// API key (default: TRUSTABLE_API_KEY)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Write a standalone HTML page with one widget per brand
    #[command(after_help = "\
Examples:
  trustable preview Acme Globex -o preview.html
  trustable preview Acme --variant badge")]
    Preview {
        #[arg(required = true, num_args = 1..)]
        brands: Vec<String>,

        #[arg(long, value_enum, default_value_t = VariantArg::Full)]
        variant: VariantArg,

        /// API key (default: TRUSTABLE_API_KEY)
        #[arg(long)]
        api_key: Option<String>,

        /// Output file (omit for stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Print the embed snippet for a site
    Embed {
        brand: Brand,

        #[arg(long, value_enum, default_value_t = VariantArg::Full)]
        variant: VariantArg,

        /// Include this API key in the snippet
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Settings file helpers
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the settings file path
    Path,
    /// Print effective settings (file + environment) as JSON
    Show,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    Full,
    Badge,
}

impl From<VariantArg> for Variant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Full => Variant::Full,
            VariantArg::Badge => Variant::Badge,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Classify { score } => cmd_classify(score),
        Commands::Estimate {
            platforms,
            wikidata,
            google_business,
            schema,
            content_age,
            comparison,
            signals,
            json,
        } => {
            let bundle = SignalBundle {
                platform_count: platforms,
                has_wikidata: wikidata,
                has_google_business: google_business,
                has_schema_markup: schema,
                content_age,
                has_comparison_content: comparison,
            };
            cmd_estimate(bundle, signals, json)
        }
        Commands::Score { brand, api_key, strict } => {
            load_settings(cli.config).and_then(|s| cmd_score(&s, brand, api_key, strict))
        }
        Commands::Render { brand, variant, api_key } => {
            load_settings(cli.config).and_then(|s| cmd_render(&s, brand, variant.into(), api_key))
        }
        Commands::Preview { brands, variant, api_key, output } => load_settings(cli.config)
            .and_then(|s| cmd_preview(&s, brands, variant.into(), api_key, output)),
        Commands::Embed { brand, variant, api_key } => {
            load_settings(cli.config).and_then(|s| cmd_embed(&s, brand, variant.into(), api_key))
        }
        Commands::Config { command } => match command {
            ConfigCommands::Path => cmd_config_path(cli.config),
            ConfigCommands::Show => load_settings(cli.config).and_then(|s| cmd_config_show(&s)),
        },
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_IO, message: msg.into(), hint: None }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self { code: EXIT_CONFIG_INVALID, message: msg.into(), hint: None }
    }

    pub fn other(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }

    /// Create error from a score lookup error with proper exit code.
    pub fn score(err: trustable_client::ScoreError) -> Self {
        let code = score_exit_code(&err);
        let hint = match &err {
            trustable_client::ScoreError::MissingCredential => {
                Some("pass --api-key or set TRUSTABLE_API_KEY".to_string())
            }
            trustable_client::ScoreError::Network(_) => {
                Some("check api.base in settings or TRUSTABLE_API_BASE".to_string())
            }
            _ => None,
        };
        Self { code, message: err.to_string(), hint }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

fn load_settings(path: Option<PathBuf>) -> Result<Settings, CliError> {
    let settings = match path {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::args(format!("settings file not found: {}", path.display())));
            }
            let mut settings = Settings::load_from(&path);
            settings.apply_env();
            settings
        }
        None => Settings::load(),
    };
    settings.validate().map_err(|e| {
        CliError::config(e.to_string()).with_hint(format!("edit {}", Settings::config_path_display()))
    })?;
    log::debug!("api base {}, site {}", settings.api_base, settings.site_url);
    Ok(settings)
}

/// Run a future to completion on a single-threaded runtime.
fn block_on<F: Future>(future: F) -> Result<F::Output, CliError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::other(format!("failed to start runtime: {}", e)))?;
    Ok(runtime.block_on(future))
}

fn print_line(text: &str) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", text).map_err(|e| CliError::io(e.to_string()))
}

fn widget(settings: &Settings) -> Result<Widget, CliError> {
    Widget::from_settings(settings).map_err(CliError::score)
}

// ============================================================================
// classify / estimate
// ============================================================================

fn cmd_classify(score: u8) -> Result<(), CliError> {
    print_line(classify(score).label())
}

fn cmd_estimate(flags: SignalBundle, file: Option<PathBuf>, json: bool) -> Result<(), CliError> {
    let signals = match file {
        Some(path) => {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| CliError::args(format!("{}: {}", path.display(), e)))?;
            serde_json::from_str(&contents)
                .map_err(|e| CliError::args(format!("{}: invalid signals JSON: {}", path.display(), e)))?
        }
        None => flags,
    };

    let score = estimate(&signals);
    if json {
        let out = serde_json::json!({ "score": score, "rating": classify(score) });
        print_line(&out.to_string())
    } else {
        print_line(&format!("{} ({})", score, classify(score)))
    }
}

// ============================================================================
// score / render / preview / embed
// ============================================================================

fn cmd_score(settings: &Settings, brand: Brand, api_key: Option<String>, strict: bool) -> Result<(), CliError> {
    let resolver = ScoreResolver::for_api(settings.api_base.clone()).map_err(CliError::score)?;
    let credential = resolve_api_key(api_key.as_deref());

    let record = if strict {
        block_on(resolver.resolve_strict(&brand, credential.as_deref()))?.map_err(CliError::score)?
    } else {
        block_on(resolver.resolve(&brand, credential.as_deref()))?
    };

    let json = serde_json::to_string_pretty(&record).map_err(|e| CliError::other(e.to_string()))?;
    print_line(&json)
}

fn cmd_render(settings: &Settings, brand: Brand, variant: Variant, api_key: Option<String>) -> Result<(), CliError> {
    let widget = widget(settings)?;
    let credential = resolve_api_key(api_key.as_deref());

    let record = block_on(widget.resolver().resolve(&brand, credential.as_deref()))?;
    print_line(&widget.renderer().render_html(&record, variant))
}

fn cmd_preview(
    settings: &Settings,
    brands: Vec<String>,
    variant: Variant,
    api_key: Option<String>,
    output: Option<PathBuf>,
) -> Result<(), CliError> {
    let widget = widget(settings)?;
    let credential = resolve_api_key(api_key.as_deref());

    let mut doc = Document::with_title("Trustable Score preview");
    for brand in &brands {
        let mut el = Element::new("div")
            .with_attribute("class", MARKER_CLASS)
            .with_attribute("data-brand", brand.as_str());
        if variant == Variant::Badge {
            el = el.with_attribute("data-variant", variant.as_str());
        }
        if let Some(key) = &credential {
            el = el.with_attribute("data-api-key", key.as_str());
        }
        doc.append(el);
    }

    let outcomes = block_on(widget.init_all(&mut doc))?;
    let missing = outcomes.iter().filter(|o| **o == Outcome::MissingBrand).count();
    if missing > 0 {
        log::warn!("{} marker(s) rendered a configuration error", missing);
    }

    let html = doc.to_html();
    match output {
        Some(path) => {
            std::fs::write(&path, html)
                .map_err(|e| CliError::io(format!("{}: {}", path.display(), e)))?;
            log::info!("wrote {}", path.display());
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(html.as_bytes()).map_err(|e| CliError::io(e.to_string()))
        }
    }
}

fn cmd_embed(settings: &Settings, brand: Brand, variant: Variant, api_key: Option<String>) -> Result<(), CliError> {
    let snippet = embed_snippet(&brand, variant, api_key.as_deref(), &settings.script_url);
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(snippet.as_bytes()).map_err(|e| CliError::io(e.to_string()))
}

// ============================================================================
// config
// ============================================================================

fn cmd_config_path(path: Option<PathBuf>) -> Result<(), CliError> {
    let path = path.unwrap_or_else(Settings::config_path);
    print_line(&path.to_string_lossy())
}

fn cmd_config_show(settings: &Settings) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(settings).map_err(|e| CliError::other(e.to_string()))?;
    print_line(&json)
}
