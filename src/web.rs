use reqwest::{Client, Response};

use crate::static_data;

pub async fn web_request(client: &Client, url: &str) -> Result<Response, reqwest::Error> {
    client
        .get(url)
        .header("User-Agent", static_data::USER_AGENT)
        .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
}
