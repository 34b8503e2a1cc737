use anyhow::Context;
use ragkb_config::KbConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, the layered config, then apply `--server` / `--token`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<KbConfig> {
    load_dotenv()?;

    let mut config = KbConfig::load()?;
    apply_overrides(&mut config, flags);
    config
        .server
        .validate()
        .context("invalid [server] configuration")?;
    Ok(config)
}

fn apply_overrides(config: &mut KbConfig, flags: &GlobalFlags) {
    if let Some(server) = &flags.server {
        config.server.base_url.clone_from(server);
    }
    if let Some(token) = &flags.token {
        config.server.token.clone_from(token);
    }
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
