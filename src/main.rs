use clap::Parser;
use goita::utils::{logger, validation::Validate};
use goita::{build_url, CliConfig, Crawler, HttpFetcher, Presenter};

async fn run(config: &CliConfig) -> goita::Result<()> {
    config.validate()?;

    let query = config.query();
    let url = build_url(&config.endpoint, &query)?;
    tracing::debug!("Ranking query: {:?}", query);

    let crawler = Crawler::new(HttpFetcher::new()?);
    let result = crawler.crawl(url.as_str(), query.number).await?;

    let color = config.color.enabled();
    if color {
        colored::control::set_override(true);
    }
    let presenter = Presenter::new(color);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if config.json {
        presenter.show_json(&result, &mut out)?;
    } else {
        presenter.show(&result, url.as_str(), &mut out)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config).await {
        tracing::debug!("goita failed: {:?}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}
