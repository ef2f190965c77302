//! Bounded Input Prompts
//!
//! Each field is prompted with its default; an empty entry takes the
//! default, and an entry that fails to parse or falls outside the field's
//! bound is asked again. This is the terminal analogue of the bounded form
//! widgets the tool presents.

use feature_row::RawInput;
use input_validator::{ValidationError, Validator};
use std::io::{self, BufRead, Write};

/// Prompts for raw house attributes over arbitrary reader/writer pairs.
pub struct Prompter<'a, R, W> {
    input: R,
    output: W,
    validator: &'a Validator,
}

impl<'a, R: BufRead, W: Write> Prompter<'a, R, W> {
    /// Create a prompter bound to the given streams.
    pub fn new(input: R, output: W, validator: &'a Validator) -> Self {
        Self {
            input,
            output,
            validator,
        }
    }

    /// Ask for every field and return the validated input.
    pub fn collect_input(&mut self) -> io::Result<RawInput> {
        let defaults = RawInput::default();
        let validator = self.validator;

        let bed = self.ask_u32("Bedrooms (1-8)", defaults.bed, |v| {
            validator.validate_bed(v)
        })?;
        let bath = self.ask_u32("Bathrooms (1-5)", defaults.bath, |v| {
            validator.validate_bath(v)
        })?;
        let sqft = self.ask_u32("House size in sqft (300-6000)", defaults.sqft, |v| {
            validator.validate_sqft(v)
        })?;
        let acre_lot = self.ask_f64("Lot size in acres (0.0-5.0)", defaults.acre_lot, |v| {
            validator.validate_acre_lot(v)
        })?;
        let zip_code = self.ask_zip("ZIP code (CA)", &defaults.zip_code)?;

        Ok(RawInput {
            bed,
            bath,
            sqft,
            acre_lot,
            zip_code,
        })
    }

    /// Yes/no question; empty entry means no.
    pub fn confirm(&mut self, label: &str) -> io::Result<bool> {
        write!(self.output, "{label} [y/N]: ")?;
        self.output.flush()?;
        let entry = self.read_entry()?;
        Ok(matches!(entry.to_ascii_lowercase().as_str(), "y" | "yes"))
    }

    fn ask_u32(
        &mut self,
        label: &str,
        default: u32,
        check: impl Fn(u32) -> Result<(), ValidationError>,
    ) -> io::Result<u32> {
        loop {
            let entry = self.ask(label, &default.to_string())?;
            if entry.is_empty() {
                return Ok(default);
            }
            match entry.parse::<u32>() {
                Ok(value) => match check(value) {
                    Ok(()) => return Ok(value),
                    Err(err) => writeln!(self.output, "{err}")?,
                },
                Err(_) => writeln!(self.output, "enter a whole number")?,
            }
        }
    }

    fn ask_f64(
        &mut self,
        label: &str,
        default: f64,
        check: impl Fn(f64) -> Result<(), ValidationError>,
    ) -> io::Result<f64> {
        loop {
            let entry = self.ask(label, &format!("{default:.2}"))?;
            if entry.is_empty() {
                return Ok(default);
            }
            match entry.parse::<f64>() {
                Ok(value) => match check(value) {
                    Ok(()) => return Ok(value),
                    Err(err) => writeln!(self.output, "{err}")?,
                },
                Err(_) => writeln!(self.output, "enter a number")?,
            }
        }
    }

    fn ask_zip(&mut self, label: &str, default: &str) -> io::Result<String> {
        loop {
            let entry = self.ask(label, default)?;
            if entry.is_empty() {
                return Ok(default.to_string());
            }
            match self.validator.validate_zip(&entry) {
                Ok(()) => return Ok(entry),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn ask(&mut self, label: &str, default: &str) -> io::Result<String> {
        write!(self.output, "{label} [{default}]: ")?;
        self.output.flush()?;
        self.read_entry()
    }

    fn read_entry(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            // EOF takes the default instead of spinning on re-asks
            return Ok(String::new());
        }
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(script: &str) -> (RawInput, String) {
        let validator = Validator::default();
        let mut out = Vec::new();
        let input = Prompter::new(Cursor::new(script), &mut out, &validator)
            .collect_input()
            .unwrap();
        (input, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_empty_entries_take_defaults() {
        let (input, _) = collect("\n\n\n\n\n");
        assert_eq!(input, RawInput::default());
    }

    #[test]
    fn test_entries_override_defaults() {
        let (input, _) = collect("4\n3\n2000\n0.5\n90210\n");
        assert_eq!(
            input,
            RawInput {
                bed: 4,
                bath: 3,
                sqft: 2000,
                acre_lot: 0.5,
                zip_code: "90210".to_string(),
            }
        );
    }

    #[test]
    fn test_out_of_range_entry_is_asked_again() {
        let (input, transcript) = collect("12\n4\n\n\n\n\n");
        assert_eq!(input.bed, 4);
        assert!(transcript.contains("out of range"));
    }

    #[test]
    fn test_unparseable_entry_is_asked_again() {
        let (input, transcript) = collect("three\n\n\n\n\n\n");
        assert_eq!(input.bed, 3);
        assert!(transcript.contains("whole number"));
    }

    #[test]
    fn test_malformed_zip_is_asked_again() {
        let (input, transcript) = collect("\n\n\n\nabc\n94582\n");
        assert_eq!(input.zip_code, "94582");
        assert!(transcript.contains("five-digit"));
    }

    #[test]
    fn test_eof_falls_back_to_defaults() {
        let (input, _) = collect("5\n");
        assert_eq!(input.bed, 5);
        assert_eq!(input.sqft, 1450);
    }

    #[test]
    fn test_confirm() {
        let validator = Validator::default();
        for (script, expected) in [("y\n", true), ("yes\n", true), ("\n", false), ("n\n", false)]
        {
            let mut out = Vec::new();
            let answer = Prompter::new(Cursor::new(script), &mut out, &validator)
                .confirm("Predict another price?")
                .unwrap();
            assert_eq!(answer, expected, "script {script:?}");
        }
    }
}
