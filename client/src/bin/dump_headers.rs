//! Diagnostic helper: hits `get_pixels` a few times and dumps every response
//! header, which is the quickest way to inspect the service's rate-limit
//! state for a token.
#![allow(clippy::print_stdout)]

use std::error::Error;

use client::config_loader;

const ATTEMPTS: u32 = 5;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    let config = config_loader::load_config()?;
    let url = format!("{}/get_pixels", config.api.base_url.trim_end_matches('/'));
    let http = reqwest::Client::new();

    for attempt in 1..=ATTEMPTS {
        let response = http
            .get(&url)
            .bearer_auth(config.api.token())
            .send()
            .await?;

        println!("--- attempt {attempt}: {}", response.status());
        for (name, value) in response.headers() {
            println!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
        }
    }

    Ok(())
}
