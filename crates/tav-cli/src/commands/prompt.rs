use std::fmt::Display;
use std::io::{BufRead, Write};

/// Line-oriented prompts over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    pub(super) output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: &str) -> Result<(), String> {
        writeln!(self.output, "{text}").map_err(|e| e.to_string())
    }

    /// Print `label` and read one trimmed line. Fails on end of input.
    pub fn line(&mut self, label: &str) -> Result<String, String> {
        write!(self.output, "{label}").map_err(|e| e.to_string())?;
        self.output.flush().map_err(|e| e.to_string())?;

        let mut buf = String::new();
        match self.input.read_line(&mut buf) {
            Ok(0) => Err("input ended before all answers were given".into()),
            Ok(_) => Ok(buf.trim().to_string()),
            Err(e) => Err(e.to_string()),
        }
    }

    pub fn number(&mut self, label: &str) -> Result<i32, String> {
        loop {
            match self.line(label)?.parse::<i32>() {
                Ok(n) => return Ok(n),
                Err(_) => self.say("Please enter a number")?,
            }
        }
    }

    pub fn yes_no(&mut self, question: &str, default: bool) -> Result<bool, String> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        let answer = self.line(&format!("{question} {hint}: "))?.to_lowercase();
        Ok(match answer.as_str() {
            "" => default,
            a => a.starts_with('y'),
        })
    }

    pub fn list<T: Display>(&mut self, options: &[T]) -> Result<(), String> {
        for (i, option) in options.iter().enumerate() {
            self.say(&format!("  [{}] {option}", i + 1))?;
        }
        Ok(())
    }

    /// Numbered menu; loops until a valid index is entered.
    pub fn choice<T: Copy + Display>(&mut self, title: &str, options: &[T]) -> Result<T, String> {
        if options.is_empty() {
            return Err(format!("nothing to choose for \"{title}\""));
        }
        self.say("")?;
        self.say(title)?;
        self.list(options)?;
        loop {
            let raw = self.line("Enter number: ")?;
            match raw.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(options[n - 1]),
                Ok(_) => self.say("Invalid choice, try again")?,
                Err(_) => self.say("Please enter a number")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn choice_retries_until_valid() {
        let mut p = prompter("abc\n9\n2\n");
        assert_eq!(p.choice("Pick:", &["a", "b", "c"]).unwrap(), "b");
        let out = String::from_utf8(p.output).unwrap();
        assert!(out.contains("Please enter a number"));
        assert!(out.contains("Invalid choice, try again"));
        assert!(out.contains("  [3] c"));
    }

    #[test]
    fn yes_no_defaults() {
        assert!(prompter("\n").yes_no("Save?", true).unwrap());
        assert!(!prompter("\n").yes_no("Save?", false).unwrap());
        assert!(!prompter("nope\n").yes_no("Save?", true).unwrap());
        assert!(prompter("Yes\n").yes_no("Save?", false).unwrap());
    }

    #[test]
    fn number_retries_until_numeric() {
        let mut p = prompter("ten\n10\n");
        assert_eq!(p.number("STR: ").unwrap(), 10);
        assert!(String::from_utf8(p.output).unwrap().contains("Please enter a number"));
    }

    #[test]
    fn eof_is_an_error() {
        assert!(prompter("").line("Name: ").is_err());
    }
}
