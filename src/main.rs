mod cli;

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use model_capabilities::auth::{
    HttpSignInCodeIssuer, SystemBrowser, open_authenticated_url, open_unauthenticated_url,
};
use model_capabilities::config::{ConfigBuilder, LayeredConfig, Settings};
use model_capabilities::models::load_custom_models;
use model_capabilities::{
    CapabilityIndex, CatalogError, ModelCapability, ModelProvider, SharedRegistry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = build_config(cli.config.as_deref());

    match cli.command {
        Commands::List { provider, json } => {
            let index = load_registry(&config).await?;
            list_models(&index, provider.as_deref(), json)
        }
        Commands::Show {
            provider,
            model_id,
            json,
        } => {
            let index = load_registry(&config).await?;
            let provider = ModelProvider::from(provider.as_str());
            let Some(model) = index.get(&provider, &model_id) else {
                eprintln!("Unknown model: {provider}/{model_id}");
                eprintln!("\nRun `model-caps list --provider {provider}` to see available models.");
                std::process::exit(1);
            };
            show_model(model, json)
        }
        Commands::SignIn { path } => {
            let settings = Settings::load(&config).await?;
            let mut issuer = HttpSignInCodeIssuer::new(settings.api_host.clone());
            if let Some(token) = settings.api_token.clone() {
                issuer = issuer.auth_token(token);
            }

            let result = open_authenticated_url(
                &issuer,
                &SystemBrowser,
                &mut io::stdout(),
                &settings.api_host,
                "Opening the web app in your browser...",
                &path,
            )
            .await;

            if let Err(e) = result {
                tracing::debug!(category = ?e.category(), "sign-in failed");
                eprintln!("Could not create a sign-in link: {e}");
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Open { path } => {
            let settings = Settings::load(&config).await?;
            open_unauthenticated_url(
                &SystemBrowser,
                &mut io::stdout(),
                &settings.api_host,
                "Opening the web app in your browser...",
                &path,
            )?;
            Ok(())
        }
    }
}

fn build_config(file: Option<&Path>) -> LayeredConfig {
    let builder = ConfigBuilder::new().env();
    match file {
        Some(path) => builder.file(path),
        None => builder,
    }
    .build()
}

/// Builds the built-in index and merges custom models if configured.
///
/// An invalid catalog is an authoring defect: it is logged and the process exits.
async fn load_registry(config: &LayeredConfig) -> anyhow::Result<Arc<CapabilityIndex>> {
    let registry = SharedRegistry::builtin().unwrap_or_else(|e| abort_invalid_catalog(&e));

    if let Some(path) = Settings::custom_models_path(config).await? {
        let records = load_custom_models(&path).await?;
        if let Err(e) = registry.register_custom(records) {
            abort_invalid_catalog(&e);
        }
    }

    Ok(registry.snapshot())
}

fn abort_invalid_catalog(error: &CatalogError) -> ! {
    tracing::error!("invalid model catalog: {error}");
    eprintln!("{error}");
    std::process::exit(1);
}

fn list_models(
    index: &CapabilityIndex,
    provider: Option<&str>,
    as_json: bool,
) -> anyhow::Result<()> {
    let filter = provider.map(ModelProvider::from);
    let models: Vec<&ModelCapability> = match &filter {
        Some(provider) => index.for_provider(provider).collect(),
        None => index.iter().collect(),
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&models)?);
        return Ok(());
    }

    if models.is_empty() {
        eprintln!("No models registered for provider {:?}", provider.unwrap_or_default());
        return Ok(());
    }

    let mut out = io::stdout().lock();
    for model in models {
        writeln!(
            out,
            "{:48} {:>8} {:>8}  {}",
            model.key().to_string(),
            model.max_tokens,
            model.effective_input_limit(),
            model.description
        )?;
    }
    Ok(())
}

fn show_model(model: &ModelCapability, as_json: bool) -> anyhow::Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(model)?);
        return Ok(());
    }

    let features = model
        .features
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = io::stdout().lock();
    writeln!(out, "{}", model.key())?;
    writeln!(out, "  description:            {}", model.description)?;
    writeln!(out, "  model name:             {}", model.model_name)?;
    writeln!(out, "  max tokens:             {}", model.max_tokens)?;
    writeln!(out, "  max output tokens:      {}", model.max_output_tokens)?;
    writeln!(out, "  reserved output tokens: {}", model.reserved_output_tokens)?;
    writeln!(out, "  effective input limit:  {}", model.effective_input_limit())?;
    writeln!(out, "  default convo tokens:   {}", model.default_max_convo_tokens)?;
    writeln!(out, "  output format:          {}", model.preferred_output_format)?;
    writeln!(out, "  api key env var:        {}", model.api_key_env_var)?;
    writeln!(out, "  base url:               {}", model.base_url)?;
    writeln!(
        out,
        "  features:               {}",
        if features.is_empty() { "-" } else { &features }
    )?;
    writeln!(
        out,
        "  reasoning effort:       {}",
        model.reasoning_effort.map(|e| e.as_str()).unwrap_or("-")
    )?;
    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
