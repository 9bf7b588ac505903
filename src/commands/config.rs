use anyhow::Result;
use gcal_link_core::GcalConfig;
use owo_colors::OwoColorize;

pub fn run(config: &GcalConfig) -> Result<()> {
    let path = GcalConfig::config_path()?;

    println!("{}", path.display().to_string().bold());
    println!("  source:       {}", config.source);
    println!("  style:        {}", config.style);
    println!("  open_browser: {}", config.open_browser);

    Ok(())
}
