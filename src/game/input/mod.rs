use anyhow::{anyhow, Context, Error, Result};
use std::str::FromStr;

use crate::game::quiz::definition::Label;

#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input {
    Select(Label),
    Click { x: f32, y: f32 },
    Restart,
    Quit,
}

impl FromStr for Input {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim().to_lowercase();
        let mut words = line.split_whitespace();
        let command = words.next().context("Empty command")?;
        let input = match command {
            "r" | "restart" => Input::Restart,
            "q" | "quit" => Input::Quit,
            "click" => {
                let x = words.next().context("Missing click x coordinate")?;
                let y = words.next().context("Missing click y coordinate")?;
                Input::Click {
                    x: x.parse::<f32>().with_context(|| format!("Invalid x coordinate: {}", x))?,
                    y: y.parse::<f32>().with_context(|| format!("Invalid y coordinate: {}", y))?,
                }
            }
            other => match other.parse::<Label>() {
                Ok(label) => Input::Select(label),
                Err(()) => return Err(anyhow!("Unknown command: {}", other)),
            },
        };
        if let Some(extra) = words.next() {
            return Err(anyhow!("Unexpected argument: {}", extra));
        }
        Ok(input)
    }
}
