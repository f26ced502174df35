use regex::Regex;

/// parses and writes the duration text found inside a segment's parentheses:
/// `<m><minute>`, `<h><hour>` or `<h><hour> <m><minute>`.
#[derive(Clone, Debug)]
pub struct DurationText {
    pattern: Regex,
    minute_suffix: String,
    hour_suffix: String,
    write_hours: bool,
}

impl DurationText {
    pub fn new(
        minute_suffix: &str,
        hour_suffix: &str,
        write_hours: bool,
    ) -> Result<DurationText, String> {
        if minute_suffix.trim().is_empty() || hour_suffix.trim().is_empty() {
            return Err(String::from("duration suffixes cannot be empty"));
        }
        let pattern_str = format!(
            r"^(?P<sign>-)?\s*(?:(?P<hours>\d+)\s*{})?\s*(?:(?P<minutes>\d+(?:\.\d+)?)\s*{})?$",
            regex::escape(hour_suffix.trim()),
            regex::escape(minute_suffix.trim())
        );
        let pattern = Regex::new(&pattern_str)
            .map_err(|e| format!("internal error building duration regex: {e}"))?;
        Ok(DurationText {
            pattern,
            minute_suffix: minute_suffix.trim().to_string(),
            hour_suffix: hour_suffix.trim().to_string(),
            write_hours,
        })
    }

    /// reads a duration in minutes. returns None when the text does not have the
    /// expected shape. a leading sign is only accepted on a single-component duration
    /// and is kept so callers can reject non-positive values.
    pub fn parse(&self, text: &str) -> Option<f64> {
        let captures = self.pattern.captures(text.trim())?;
        let negative = captures.name("sign").is_some();
        let hours = captures.name("hours");
        let minutes = captures.name("minutes");
        match (hours, minutes) {
            (None, None) => return None,
            (Some(_), Some(_)) if negative => return None,
            _ => {}
        }
        let h = match hours {
            Some(m) => m.as_str().parse::<f64>().ok()?,
            None => 0.0,
        };
        let m = match minutes {
            Some(m) => m.as_str().parse::<f64>().ok()?,
            None => 0.0,
        };
        let total = h * 60.0 + m;
        if negative {
            Some(-total)
        } else {
            Some(total)
        }
    }

    pub fn format(&self, minutes: f64) -> String {
        if self.write_hours && minutes >= 60.0 {
            let hours = (minutes / 60.0).floor();
            let remainder = minutes - hours * 60.0;
            if remainder > 0.0 {
                format!(
                    "{hours}{} {remainder}{}",
                    self.hour_suffix, self.minute_suffix
                )
            } else {
                format!("{hours}{}", self.hour_suffix)
            }
        } else {
            format!("{minutes}{}", self.minute_suffix)
        }
    }
}
