use super::QuestionStore;
use crate::error::Result;
use crate::model::{Question, QuestionTable};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store over a single CSV file.
///
/// Every field is written quote-enclosed regardless of content or type, so
/// embedded delimiters are never ambiguous and the file stays compatible
/// with `QUOTE_ALL` readers.
pub struct CsvFileStore {
    path: PathBuf,
    cache: Option<QuestionTable>,
}

impl CsvFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path, cache: None }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<QuestionTable> {
        if !self.path.exists() {
            debug!("no question file at {}, starting empty", self.path.display());
            return Ok(QuestionTable::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;

        let mut rows = Vec::new();
        for result in reader.deserialize() {
            let question: Question = result?;
            rows.push(question);
        }
        debug!("loaded {} questions from {}", rows.len(), self.path.display());
        Ok(QuestionTable::from_rows(rows))
    }
}

impl QuestionStore for CsvFileStore {
    fn load(&mut self) -> Result<QuestionTable> {
        if let Some(table) = &self.cache {
            debug!("serving memoized table ({} rows)", table.len());
            return Ok(table.clone());
        }
        let table = self.read_table()?;
        self.cache = Some(table.clone());
        Ok(table)
    }

    fn save(&mut self, table: &QuestionTable) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        // Write to a sibling temp file, then rename over the target, so
        // readers never observe a partial rewrite.
        let tmp = self.path.with_extension("csv.tmp");
        {
            let mut writer = csv::WriterBuilder::new()
                .quote_style(csv::QuoteStyle::Always)
                .from_path(&tmp)?;
            if table.is_empty() {
                writer.write_record(Question::HEADERS)?;
            }
            for record in table.records() {
                writer.serialize(&record.question)?;
            }
            writer.flush()?;
        }
        fs::rename(&tmp, &self.path)?;
        debug!("saved {} questions to {}", table.len(), self.path.display());

        self.cache = None;
        Ok(())
    }
}
