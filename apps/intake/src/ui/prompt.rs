//! Line-oriented input over any reader/writer pair.

use std::io::{self, BufRead, Write};

use shared::domain::Appliance;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Returns `None` once input is exhausted.
    pub fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn choose_appliance(&mut self) -> io::Result<Option<Appliance>> {
        self.say("Appliance:")?;
        for (idx, appliance) in Appliance::ALL.iter().enumerate() {
            writeln!(self.output, "  {}. {}", idx + 1, appliance)?;
        }

        loop {
            let Some(answer) = self.ask("Choose appliance")? else {
                return Ok(None);
            };
            if let Some(appliance) = parse_appliance_choice(&answer) {
                return Ok(Some(appliance));
            }
            self.say("Please pick one of the listed appliances.")?;
        }
    }

    pub fn confirm(&mut self, label: &str) -> io::Result<Option<bool>> {
        loop {
            let Some(answer) = self.ask(&format!("{label} [y/n]"))? else {
                return Ok(None);
            };
            match answer.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => self.say("Please answer y or n.")?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

fn parse_appliance_choice(answer: &str) -> Option<Appliance> {
    let answer = answer.trim();
    if let Ok(n) = answer.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|idx| Appliance::ALL.get(idx).copied());
    }
    answer.parse().ok()
}
