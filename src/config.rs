use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::arch::{Operation, OperationSubset, StandardVocabulary, Vocabulary};

/// Which program the generator should build.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ProgramRequest {
    Text(String),
    Digit(i32),
}

/**
 * Settings for one generation run, read from a YAML file.
 *
 * ```yaml
 * program:
 *   kind: text
 *   value: Hello, world
 * output: ./target/hello.s
 * log_level: info
 * operations: [MOV, ADD, SUB, STRB, SVC, B]
 * ```
 *
 * Every field is optional; command line flags take precedence.
 */
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub program: Option<ProgramRequest>,
    pub output: Option<PathBuf>,
    pub log_level: Option<String>,
    pub operations: Option<Vec<Operation>>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl GeneratorConfig {
    /// Loads a config from the given reader.
    pub fn read<R: std::io::Read>(reader: R) -> Result<GeneratorConfig, ConfigError> {
        let config: GeneratorConfig = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<GeneratorConfig, ConfigError> {
        let config: GeneratorConfig = serde_yaml::from_str(text)?;
        Ok(config)
    }

    /// Writes the config to the given writer.
    pub fn write<W: std::io::Write>(&self, writer: W) -> Result<(), ConfigError> {
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// The vocabulary the emitter should use, the standard one when the
    /// config does not restrict it.
    pub fn vocabulary(&self) -> Box<dyn Vocabulary> {
        match &self.operations {
            None => Box::new(StandardVocabulary),
            Some(ops) => Box::new(OperationSubset::new(ops.iter().copied())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let config = GeneratorConfig::parse("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert!(config.vocabulary().has_operation(Operation::Bl));
    }

    #[test]
    fn test_text_program() {
        let config = GeneratorConfig::parse(
            "program:\n  kind: text\n  value: Hello\noutput: out.s\nlog_level: debug\n",
        )
        .unwrap();
        assert_eq!(config.program, Some(ProgramRequest::Text("Hello".into())));
        assert_eq!(config.output, Some(PathBuf::from("out.s")));
        assert_eq!(config.log_level, Some("debug".into()));
    }

    #[test]
    fn test_digit_program() {
        let config = GeneratorConfig::parse("program: {kind: digit, value: 4}").unwrap();
        assert_eq!(config.program, Some(ProgramRequest::Digit(4)));
    }

    #[test]
    fn test_restricted_operations() {
        let config = GeneratorConfig::parse("operations: [MOV, B, SVC]").unwrap();
        let vocab = config.vocabulary();
        assert!(vocab.has_operation(Operation::Mov));
        assert!(vocab.has_operation(Operation::Svc));
        assert!(!vocab.has_operation(Operation::Bl));
    }

    #[test]
    fn test_unknown_operation_is_rejected() {
        assert!(GeneratorConfig::parse("operations: [FOO]").is_err());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(GeneratorConfig::parse("colour: blue").is_err());
    }

    #[test]
    fn test_write_then_read() {
        let config = GeneratorConfig {
            program: Some(ProgramRequest::Digit(3)),
            output: None,
            log_level: Some("info".into()),
            operations: Some(vec![Operation::Mov, Operation::Svc]),
        };
        let mut buf = vec![];
        config.write(&mut buf).unwrap();
        let read = GeneratorConfig::read(buf.as_slice()).unwrap();
        assert_eq!(read, config);
    }
}
