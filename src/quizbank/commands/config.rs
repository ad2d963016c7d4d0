use crate::commands::{CmdMessage, CmdResult};
use crate::config::QuizConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetDataFile(String),
    SetDefaultTrack(String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = QuizConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {}
        ConfigAction::SetDataFile(value) => {
            config.data_file = PathBuf::from(value);
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "data-file set to {}",
                config.data_file.display()
            )));
        }
        ConfigAction::SetDefaultTrack(value) => {
            config.default_track = value;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "default-track set to {}",
                config.default_track
            )));
        }
    }

    Ok(result.with_config(config))
}
