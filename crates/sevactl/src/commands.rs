//! Command implementations for sevactl.

use anyhow::{Context, Result};
use seva_common::{sample_summaries, SevaConfig, SevaError, TrackingCode, TrackingLookup};
use tracing::debug;

use crate::display::{render_footer, render_samples, render_view, SEPARATOR};
use crate::errors::{EXIT_LOOKUP_FAILED, EXIT_NOT_FOUND, EXIT_SUCCESS, EXIT_USAGE};

/// Options for `sevactl track`
#[derive(Debug, Clone, Default)]
pub struct TrackOptions {
    pub json: bool,
    pub endpoint: Option<String>,
    pub no_fallback: bool,
    pub color: bool,
}

/// Apply command-line overrides on top of the loaded config.
pub fn effective_config(mut config: SevaConfig, options: &TrackOptions) -> SevaConfig {
    if let Some(endpoint) = &options.endpoint {
        config.lookup.endpoint = endpoint.clone();
    }
    if options.no_fallback {
        config.lookup.fallback_samples = false;
    }
    config
}

/// Look up one code and print the result. Returns the process exit code.
pub async fn track(input: &str, options: TrackOptions) -> Result<i32> {
    let code = match TrackingCode::parse(input) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e.notice());
            return Ok(EXIT_USAGE);
        }
    };

    let config = effective_config(SevaConfig::load(), &options);
    debug!("Using lookup endpoint {}", config.lookup.endpoint);

    let lookup =
        TrackingLookup::from_settings(&config.lookup).context("Failed to set up lookup")?;

    match lookup.track(&code).await {
        Ok(view) => {
            if options.json {
                let json = serde_json::to_string_pretty(&view)
                    .context("Failed to serialize tracking view")?;
                println!("{}", json);
            } else {
                print!("{}", render_view(&view, &code, options.color));
                println!("{}", SEPARATOR);
                print!("{}", render_footer(options.color));
            }
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", e.notice());
            debug!("Lookup for {} failed: {}", code, e);
            Ok(exit_code_for(&e))
        }
    }
}

/// List the demonstration codes.
pub fn samples() -> Result<i32> {
    print!("{}", render_samples(&sample_summaries()));
    Ok(EXIT_SUCCESS)
}

pub fn exit_code_for(error: &SevaError) -> i32 {
    match error {
        SevaError::EmptyTrackingCode => EXIT_USAGE,
        SevaError::NotFound(_) => EXIT_NOT_FOUND,
        _ => EXIT_LOOKUP_FAILED,
    }
}
