use crate::config::Config;
use crate::services::QuoteClient;
use anyhow::Result;

pub fn handle(config: &Config) -> Result<()> {
    println!("Fetching a quote...");

    let client = QuoteClient::new(&config.quote.url, config.quote.timeout_secs)?;
    match client.fetch_random() {
        Ok(text) => {
            println!("“{}”", text);
            Ok(())
        }
        Err(e) => {
            eprintln!("Couldn't load a quote. Run the command again to retry.");
            Err(e)
        }
    }
}
