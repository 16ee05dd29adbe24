use std::{error::Error, time::Instant};

use clap::Parser;
use reqwest::{Client, StatusCode};

mod cmd_line_parser;
mod config;
mod episode_parser;
mod html_parser;
mod link_matcher;
mod log_color;
mod static_data;
mod utils_data;
mod web;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let mut new_args = cmd_line_parser::Args::parse();
    let config = config::Config::load();

    header!("{}", static_data::HEADER);

    if new_args.url.is_empty() {
        let reply = utils_data::ask_keyword("Enter the listing page url:")?;
        new_args.url = reply.as_string().unwrap().trim().to_string();
    }
    if new_args.quality.is_empty() {
        new_args.quality = config.quality.clone();
    }
    if new_args.quality.is_empty() {
        let reply = utils_data::ask_keyword("Enter the desired quality (e.g. 540p, 720p, 1080p):")?;
        new_args.quality = reply.as_string().unwrap().trim().to_string();
    }
    if new_args.episodes.is_empty() {
        let reply = utils_data::ask_keyword(
            "Enter episode selection (\"all\", \"1\", \"1-10\", \"1,2,3,7-10\", etc.):",
        )?;
        new_args.episodes = reply.as_string().unwrap().trim().to_string();
    }
    if new_args.output.is_empty() {
        new_args.output = config.save_path.clone();
    }

    info!("{new_args}");

    let selection = episode_parser::parse_episode_selection(&new_args.episodes);
    if new_args.debug {
        debug!("compiled selection: {:?}", selection);
    }

    let global_time = Instant::now();

    let client = Client::builder().build()?;
    let resp = web::web_request(&client, &new_args.url).await?;
    match resp.status() {
        StatusCode::OK => {}
        code => {
            error!("Error fetching url: {code}");
            return Ok(());
        }
    }

    let body = resp.text().await?;
    let entries = match html_parser::extract_links(&body) {
        Some(entries) => entries,
        None => {
            error!("Could not find the expected table body with id=\"tbody\"");
            return Ok(());
        }
    };
    if new_args.debug {
        debug!("{} rows in the file table", entries.len());
    }

    let matched =
        link_matcher::match_links(&entries, &new_args.quality, &selection, &config.base_origin);
    if matched.is_empty() {
        warn!("No matching links found for the specified quality/episode selection");
    } else {
        utils_data::write_links(&new_args.output, &matched)?;
        info!(
            "Successfully wrote {} link(s) to {}",
            matched.len(),
            new_args.output
        );
    }

    info!("Global time: {}", utils_data::time_to_human_time(global_time));
    Ok(())
}
