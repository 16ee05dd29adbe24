use std::fmt::{Display, Formatter};
use clap::ArgAction;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author = "CatAnnaDev", version, about, long_about = None)]
pub struct Args {
    #[arg(
    short = 'u',
    long,
    default_value = "",
    help = "buzzheavier listing page url, asked interactively when missing"
    )]
    pub url: String,

    #[arg(
    short = 'q',
    long,
    default_value = "",
    help = "quality text the link name must contain e.g. 540p, 720p, 1080p"
    )]
    pub quality: String,

    #[arg(
    short = 'e',
    long,
    default_value = "",
    help = "episode selection: \"all\", \"1\", \"1-10\", \"1,2,3,7-10\""
    )]
    pub episodes: String,

    #[arg(
    short = 'o',
    long,
    default_value = "",
    help = "text file to save the links, one url per line e.g. links.txt"
    )]
    pub output: String,

    #[arg(
    short = 'v',
    long,
    default_value_t = false,
    help = "add more log during process [default: false]",
    action = ArgAction::SetTrue
    )]
    pub debug: bool,
}

impl Display for Args {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f,"Config:\n\
                  Url:\t\t{}\n\
                  Quality:\t{}\n\
                  Episodes:\t{}\n\
                  Output:\t{}\n\
                  Debug:\t{}",
                  self.url,
                  self.quality,
                  self.episodes,
                  self.output,
                  self.debug,
        )
    }
}
