use super::{read_config_file, ColumnNames};
use crate::PipelineError;
use modal_hierarchy::{
    codec::{CodecConfig, ItineraryCodec},
    driver::ProcessingConfig,
    model::ModeLabel,
};
use serde::{Deserialize, Serialize};

/// defines behaviors for a pipeline run. every field has a default so a
/// configuration file only needs to list what it changes.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct PipelineConfiguration {
    pub codec: CodecConfig,
    pub walking_mode: ModeLabel,
    pub tolerance: f64,
    pub parallelism: usize,
    pub columns: ColumnNames,
}

impl Default for PipelineConfiguration {
    fn default() -> Self {
        Self {
            codec: CodecConfig::default(),
            walking_mode: ModeLabel::walking(),
            tolerance: ProcessingConfig::DEFAULT_TOLERANCE,
            parallelism: 1,
            columns: ColumnNames::default(),
        }
    }
}

impl PipelineConfiguration {
    /// compiles the codec and collects the per-row settings.
    pub fn processing_config(&self) -> Result<ProcessingConfig, PipelineError> {
        let codec = ItineraryCodec::new(&self.codec).map_err(PipelineError::ConfigurationError)?;
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(PipelineError::ConfigurationError(format!(
                "tolerance must be a non-negative number, found {}",
                self.tolerance
            )));
        }
        Ok(ProcessingConfig::new(
            codec,
            self.walking_mode.clone(),
            self.tolerance,
        ))
    }
}

impl TryFrom<&String> for PipelineConfiguration {
    type Error = PipelineError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        read_config_file(f)
    }
}

#[cfg(test)]
mod test {
    use super::PipelineConfiguration;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let conf: PipelineConfiguration = toml::from_str(
            r#"
            walking_mode = "도보"
            parallelism = 4

            [codec]
            minute_suffix = "min"

            [columns]
            route_column = "route"
            "#,
        )
        .expect("test invariant failed");
        assert_eq!(conf.walking_mode.as_str(), "도보");
        assert_eq!(conf.parallelism, 4);
        assert_eq!(conf.codec.minute_suffix, "min");
        assert_eq!(conf.codec.hour_suffix, "시간");
        assert_eq!(conf.columns.route_column, "route");
        assert_eq!(conf.columns.ascending_column, "Ascending");
        assert!(conf.processing_config().is_ok());
    }

    #[test]
    fn test_json_file() {
        let path = std::env::temp_dir().join(format!(
            "modal-hierarchy-conf-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"tolerance": 0.001, "codec": {"write_hours": true}}"#)
            .expect("test invariant failed");
        let filename = path.to_string_lossy().to_string();
        let conf = PipelineConfiguration::try_from(&filename).expect("test invariant failed");
        assert_eq!(conf.tolerance, 0.001);
        assert!(conf.codec.write_hours);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_toml_file() {
        let path = std::env::temp_dir().join(format!(
            "modal-hierarchy-conf-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "parallelism = 3\n[columns]\nascending_column = \"Up\"\n")
            .expect("test invariant failed");
        let filename = path.to_string_lossy().to_string();
        let conf = PipelineConfiguration::try_from(&filename).expect("test invariant failed");
        assert_eq!(conf.parallelism, 3);
        assert_eq!(conf.columns.ascending_column, "Up");
        let _ = std::fs::remove_file(&path);

        let missing = String::from("/nonexistent/modal-hierarchy.toml");
        assert!(PipelineConfiguration::try_from(&missing).is_err());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let bad_mode: Result<PipelineConfiguration, _> =
            serde_json::from_str(r#"{"walking_mode": ""}"#);
        assert!(bad_mode.is_err());

        let conf = PipelineConfiguration {
            tolerance: -1.0,
            ..Default::default()
        };
        assert!(conf.processing_config().is_err());

        let unsupported = String::from("pipeline.yaml");
        assert!(PipelineConfiguration::try_from(&unsupported).is_err());
    }
}
