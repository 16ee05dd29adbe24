use std::{error::Error, fs::File, io::Write, time::Instant};

use requestty::{Answer, Question};

pub fn ask_keyword(question: &str) -> Result<Answer, Box<dyn Error>> {
    let question = Question::input("anonymous").message(question).build();
    Ok(requestty::prompt_one(question)?)
}

pub fn write_links(path: &str, links: &[String]) -> Result<(), Box<dyn Error>> {
    let mut out = File::create(path)?;
    for link in links {
        writeln!(out, "{link}")?;
    }
    Ok(())
}

pub fn time_to_human_time(time: Instant) -> String {
    let seconds = time.elapsed().as_secs() % 60;
    let minutes = (time.elapsed().as_secs() / 60) % 60;
    let hours = (time.elapsed().as_secs() / 60) / 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
