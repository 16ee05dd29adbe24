// domain used to resolve root-relative hrefs found in the file table
pub const BASE_ORIGIN: &str = "https://buzzheavier.com";

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub const CONFIG_FILE: &str = "buzz_config.json";

pub const HEADER: &str = r#"
  ____                        _ _
 | __ ) _   _ ________       | | |
 |  _ \| | | |_  /_  /____ __| | |
 | |_) | |_| |/ / / /_____/ _` | |
 |____/ \__,_/___/___|    \__,_|_|
                   by CatAnnaDev ᓚᘏᗢ
"#;
