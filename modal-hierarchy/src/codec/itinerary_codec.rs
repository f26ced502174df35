use super::{duration_text::DurationText, CodecConfig};
use crate::model::{ModeLabel, Phase, PhasedRoute, Route, RouteError, Segment};
use itertools::Itertools;
use regex::Regex;

/// compiled reader/writer for itinerary text built from a [`CodecConfig`].
///
/// parsing is strict: any segment that does not have the shape `mode(duration)`
/// fails the whole itinerary with [`RouteError::MalformedSegment`].
#[derive(Clone, Debug)]
pub struct ItineraryCodec {
    delimiter_pattern: Regex,
    segment_pattern: Regex,
    duration_text: DurationText,
    write_delimiter: String,
    empty_phase_marker: String,
}

impl ItineraryCodec {
    const SEGMENT_REGEX: &'static str = r"^(?P<mode>[^()]+)\((?P<duration>[^()]*)\)$";

    pub fn new(config: &CodecConfig) -> Result<ItineraryCodec, String> {
        let write_delimiter = config
            .delimiters
            .first()
            .map(|d| d.trim().to_string())
            .ok_or_else(|| String::from("at least one segment delimiter is required"))?;
        if config.delimiters.iter().any(|d| d.trim().is_empty()) {
            return Err(String::from("segment delimiters cannot be empty"));
        }
        let alternatives = config
            .delimiters
            .iter()
            .map(|d| regex::escape(d.trim()))
            .join("|");
        let delimiter_pattern = Regex::new(&alternatives)
            .map_err(|e| format!("internal error building delimiter regex: {e}"))?;
        let segment_pattern = Regex::new(Self::SEGMENT_REGEX)
            .map_err(|e| format!("internal error building segment regex: {e}"))?;
        let duration_text = DurationText::new(
            &config.minute_suffix,
            &config.hour_suffix,
            config.write_hours,
        )?;
        Ok(ItineraryCodec {
            delimiter_pattern,
            segment_pattern,
            duration_text,
            write_delimiter,
            empty_phase_marker: config.empty_phase_marker.clone(),
        })
    }

    /// parses one itinerary into a [`Route`].
    pub fn parse_route(&self, text: &str) -> Result<Route, RouteError> {
        Route::new(self.parse_segments(text)?)
    }

    /// parses the segments of an itinerary, failing with [`RouteError::EmptyRoute`]
    /// when the text is blank.
    pub fn parse_segments(&self, text: &str) -> Result<Vec<Segment>, RouteError> {
        if text.trim().is_empty() {
            return Err(RouteError::EmptyRoute);
        }
        let mut segments = vec![];
        let mut start = 0;
        let mut pieces = vec![];
        for delimiter in self.delimiter_pattern.find_iter(text) {
            pieces.push((start, &text[start..delimiter.start()]));
            start = delimiter.end();
        }
        pieces.push((start, &text[start..]));

        for (index, (piece_offset, piece)) in pieces.into_iter().enumerate() {
            let leading = piece.len() - piece.trim_start().len();
            let offset = piece_offset + leading;
            segments.push(self.parse_segment(piece.trim(), index, offset)?);
        }
        Ok(segments)
    }

    /// parses phase text as written by [`ItineraryCodec::format_phase`]. the empty
    /// phase marker yields a phase with no segments.
    pub fn parse_phase(&self, text: &str, phase: Phase) -> Result<PhasedRoute, RouteError> {
        if text.trim() == self.empty_phase_marker {
            Ok(PhasedRoute::new(phase, vec![]))
        } else {
            Ok(PhasedRoute::new(phase, self.parse_segments(text)?))
        }
    }

    fn parse_segment(
        &self,
        text: &str,
        index: usize,
        offset: usize,
    ) -> Result<Segment, RouteError> {
        let malformed = || RouteError::MalformedSegment {
            text: text.to_string(),
            index,
            offset,
        };
        let captures = self.segment_pattern.captures(text).ok_or_else(malformed)?;
        let mode_str = captures.name("mode").map(|m| m.as_str()).unwrap_or_default();
        let duration_str = captures
            .name("duration")
            .map(|m| m.as_str())
            .unwrap_or_default();
        let mode = ModeLabel::try_from(mode_str).map_err(|_| malformed())?;
        let duration = self.duration_text.parse(duration_str).ok_or_else(malformed)?;
        Segment::new(mode, duration)
    }

    /// writes segments as `mode(N분) -> mode(N분)`.
    pub fn format_segments(&self, segments: &[Segment]) -> String {
        let separator = format!(" {} ", self.write_delimiter);
        segments
            .iter()
            .map(|s| format!("{}({})", s.mode(), self.duration_text.format(s.duration())))
            .join(&separator)
    }

    pub fn format_route(&self, route: &Route) -> String {
        self.format_segments(route.segments())
    }

    /// writes a phase, using the empty phase marker when it has no segments.
    pub fn format_phase(&self, phased: &PhasedRoute) -> String {
        if phased.segments.is_empty() {
            self.empty_phase_marker.clone()
        } else {
            self.format_segments(&phased.segments)
        }
    }
}
