use std::io::Write;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use backlog_igdb::{CredentialSource, Credentials};

use crate::CliError;
use crate::cli_types::CredentialArgs;

fn mask_value(s: &str) -> String {
    let prefix: String = s.chars().take(2).collect();
    if s.chars().count() <= 2 {
        "****".to_string()
    } else {
        format!("{}****", prefix)
    }
}

/// Show current credentials and their sources.
pub(crate) fn run_credentials_show() -> Result<(), CliError> {
    let path = backlog_igdb::config_path();
    let sources = backlog_igdb::credential_sources();

    log::info!(
        "{}",
        "IGDB Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    match &path {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    crate::log_blank();

    // Credentials::load() fails when either field is missing, so read per field.
    let creds = Credentials::load().ok();
    let value = |source: &CredentialSource, loaded: Option<&str>, is_secret: bool| {
        match source {
            CredentialSource::Missing => None,
            CredentialSource::EnvVar(var) => std::env::var(var).ok(),
            CredentialSource::ConfigFile => loaded.map(str::to_string),
        }
        .map(|v| if is_secret { mask_value(&v) } else { v })
    };

    let fields = [
        (
            "client_id",
            &sources.client_id,
            value(
                &sources.client_id,
                creds.as_ref().map(|c| c.client_id.as_str()),
                false,
            ),
        ),
        (
            "client_secret",
            &sources.client_secret,
            value(
                &sources.client_secret,
                creds.as_ref().map(|c| c.client_secret.as_str()),
                true,
            ),
        ),
    ];

    for (name, source, value) in fields {
        let source_str = format!("({})", source);
        let shown = match &value {
            Some(v) => v.to_string(),
            None => "not set".if_supports_color(Stdout, |t| t.yellow()).to_string(),
        };
        log::info!(
            "  {} {} {}",
            format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
            shown,
            source_str.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    Ok(())
}

/// Interactively set up credentials.
pub(crate) fn run_credentials_setup() -> Result<(), CliError> {
    println!(
        "{}",
        "IGDB Credential Setup".if_supports_color(Stdout, |t| t.bold()),
    );
    println!();
    println!(
        "  {}",
        "Register an application at https://dev.twitch.tv/console/apps to get these."
            .if_supports_color(Stdout, |t| t.dimmed()),
    );

    let existing = Credentials::load().ok();

    let read_line = |prompt: &str, default: Option<&str>| -> Result<String, CliError> {
        loop {
            match default {
                Some(def) => print!("  {} [{}]: ", prompt, def),
                None => print!("  {}: ", prompt),
            }
            std::io::stdout().flush()?;

            let mut input = String::new();
            if std::io::stdin().read_line(&mut input)? == 0 {
                return Err(CliError::config("No input; credentials not saved"));
            }
            let trimmed = input.trim();

            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
            if let Some(def) = default {
                return Ok(def.to_string());
            }
            println!(
                "    {}",
                "This field is required.".if_supports_color(Stdout, |t| t.yellow()),
            );
        }
    };

    let client_id = read_line("client_id", existing.as_ref().map(|c| c.client_id.as_str()))?;
    let masked = existing.as_ref().map(|c| mask_value(&c.client_secret));
    let secret_input = read_line("client_secret", masked.as_deref())?;
    // Keeping the masked default means keeping the stored secret.
    let client_secret = match (&existing, &masked) {
        (Some(c), Some(m)) if secret_input == *m => c.client_secret.clone(),
        _ => secret_input,
    };

    let creds = Credentials {
        client_id,
        client_secret,
    };

    let path = backlog_igdb::save_to_file(&creds)
        .map_err(|e| CliError::config(format!("Failed to save credentials: {}", e)))?;

    println!();
    log::info!(
        "{} Credentials saved to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );

    Ok(())
}

/// Test credentials by requesting an access token.
pub(crate) fn run_credentials_test(args: &CredentialArgs, quiet: bool) -> Result<(), CliError> {
    log::info!("Testing credentials against the Twitch token endpoint...");

    let rt = super::runtime()?;
    rt.block_on(async {
        let client = super::connect_igdb(args, quiet).await?;
        log::info!(
            "{} Credentials are valid!",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        );
        if let Some(secs) = client.token_expires_in().await {
            log::info!("  Token expires in: {}h {}m", secs / 3600, (secs % 3600) / 60);
        }
        Ok(())
    })
}

/// Print the credentials file path.
pub(crate) fn run_credentials_path() -> Result<(), CliError> {
    match backlog_igdb::config_path() {
        Some(path) => log::info!("{}", path.display()),
        None => {
            return Err(CliError::config("Could not determine config directory"));
        }
    }

    Ok(())
}
