//! Command implementations.

pub mod inspect;
pub mod scan;

use std::path::PathBuf;

use anyhow::{ensure, Context};
use spinescan_engine::ner::LexiconRecognizer;
use spinescan_engine::ocr::{find_models_dir, OcrsDetector};
use spinescan_engine::segment::{EntitySegmenter, FieldSegmenter, PatternSegmenter};
use spinescan_engine::{BatchRunner, LineConfig};
use tracing::{debug, warn};

use crate::cli::{EngineArgs, Strategy};

/// Expand a leading `~` in a user-supplied path.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Collaborators built once per process and lent to the batch runner.
pub struct Pipeline {
    detector: OcrsDetector,
    segmenter: Box<dyn FieldSegmenter>,
    config: LineConfig,
}

impl Pipeline {
    /// Validate options, then load the OCR models and the segmenter.
    pub fn from_args(args: &EngineArgs) -> anyhow::Result<Self> {
        let config = line_config(args)?;
        let segmenter = build_segmenter(args)?;

        let models_dir = args.models_dir.as_deref().map(expand_path);
        let models_dir = find_models_dir(models_dir.as_deref())?;
        let detector = OcrsDetector::new(&models_dir).context("Failed to initialize OCR")?;

        Ok(Self {
            detector,
            segmenter,
            config,
        })
    }

    pub fn runner(&self) -> BatchRunner<'_> {
        BatchRunner::new(&self.detector, self.segmenter.as_ref(), self.config)
    }
}

fn line_config(args: &EngineArgs) -> anyhow::Result<LineConfig> {
    ensure!(
        args.line_gap > 0.0 && args.line_gap < 1.0,
        "--line-gap must be between 0 and 1, got {}",
        args.line_gap
    );
    ensure!(
        (0.0..=1.0).contains(&args.min_confidence),
        "--min-confidence must be between 0 and 1, got {}",
        args.min_confidence
    );

    Ok(LineConfig {
        gap_ratio: args.line_gap,
        min_confidence: args.min_confidence,
    })
}

fn build_segmenter(args: &EngineArgs) -> anyhow::Result<Box<dyn FieldSegmenter>> {
    match args.strategy {
        Strategy::Pattern => {
            if args.lexicon.is_some() {
                warn!("--lexicon is ignored by the pattern strategy");
            }
            Ok(Box::new(PatternSegmenter))
        }
        Strategy::Entity => {
            let recognizer = match &args.lexicon {
                Some(path) => LexiconRecognizer::from_path(&expand_path(path))?,
                None => {
                    warn!("No lexicon given; entity strategy will use line positions only");
                    LexiconRecognizer::default()
                }
            };
            debug!("Entity lexicon has {} entries", recognizer.len());
            Ok(Box::new(EntitySegmenter::new(recognizer)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spinescan_types::RowLayout;

    fn engine_args(strategy: Strategy) -> EngineArgs {
        EngineArgs {
            strategy,
            lexicon: None,
            models_dir: None,
            line_gap: 0.03,
            min_confidence: 0.0,
        }
    }

    #[test]
    fn test_expand_path_keeps_plain_paths() {
        assert_eq!(expand_path("photos/shelf"), PathBuf::from("photos/shelf"));
    }

    #[test]
    fn test_line_config_validation() {
        let mut args = engine_args(Strategy::Pattern);
        assert_eq!(line_config(&args).unwrap().gap_ratio, 0.03);

        args.line_gap = 0.0;
        assert!(line_config(&args).is_err());

        args.line_gap = 0.05;
        args.min_confidence = 1.5;
        assert!(line_config(&args).is_err());
    }

    #[test]
    fn test_strategy_selects_layout() {
        let pattern = build_segmenter(&engine_args(Strategy::Pattern)).unwrap();
        assert_eq!(pattern.layout(), RowLayout::PerLine);

        let entity = build_segmenter(&engine_args(Strategy::Entity)).unwrap();
        assert_eq!(entity.layout(), RowLayout::PerImage);
    }

    #[test]
    fn test_missing_lexicon_is_an_error() {
        let mut args = engine_args(Strategy::Entity);
        args.lexicon = Some("/definitely/not/here.json".to_string());
        assert!(build_segmenter(&args).is_err());
    }
}
