//! Dictionary and config files on disk.

use anyhow::{anyhow, bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use vocab_core::{
    convert, find_duplicates, parse, parse_lenient, Config, Delimiter, Direction, Duplicate,
    Overwrite, Vocabulary, VocabularyEntry,
};

pub const CONFIG_FILE_NAME: &str = "vocab_trainer.cfg";

/// Directories searched for [`CONFIG_FILE_NAME`] when no path is given: the
/// working directory, then the user config directory.
pub fn config_search_dirs() -> Vec<PathBuf> {
    let mut search = vec![PathBuf::new()];
    if let Some(dir) = dirs::config_dir() {
        search.push(dir.join("vocab-trainer"));
    }
    search
}

/// Find the config file: the explicit path, else the first search directory
/// holding [`CONFIG_FILE_NAME`].
pub fn locate_config(explicit: Option<&Path>) -> Result<PathBuf> {
    locate_config_in(explicit, &config_search_dirs())
}

pub fn locate_config_in(explicit: Option<&Path>, search_dirs: &[PathBuf]) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let candidates: Vec<PathBuf> = search_dirs
        .iter()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .collect();

    candidates
        .iter()
        .find(|path| path.is_file())
        .cloned()
        .ok_or_else(|| {
            let tried = candidates
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            anyhow!("config file not found (tried {tried})")
        })
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = Config::parse(&content)
        .with_context(|| format!("invalid config file {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?config, "config loaded");
    Ok(config)
}

/// Regular files directly inside `dir`, sorted by name.
pub fn list_dictionaries(dir: &Path) -> Result<Vec<String>> {
    let mut names: Vec<String> = dir
        .read_dir()
        .with_context(|| format!("failed to open vocabulary directory {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();

    names.sort();
    Ok(names)
}

/// Load one dictionary file. Any malformed line is an error.
///
/// A term repeated within the file keeps its last translation and is logged.
pub fn load_dictionary(path: &Path, delimiter: Delimiter) -> Result<Vocabulary> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read dictionary {}", path.display()))?;
    let entries = parse(&content, delimiter)
        .with_context(|| format!("malformed dictionary {}", path.display()))?;

    let mut vocabulary = Vocabulary::new();
    let overwrites = vocabulary.insert_all(entries.into_iter().map(VocabularyEntry::from));
    for overwrite in overwrites {
        warn_overwrite(&overwrite, path);
    }
    Ok(vocabulary)
}

fn warn_overwrite(overwrite: &Overwrite, source: &Path) {
    tracing::warn!(
        term = %overwrite.term,
        previous = %overwrite.previous,
        current = %overwrite.current,
        dictionary = %source.display(),
        "term redefined, keeping the later translation"
    );
}

/// Load and merge the named dictionaries from the vocabulary directory.
///
/// A term present in several dictionaries keeps the translation from the last one.
pub fn load_vocabulary<S: AsRef<str>>(config: &Config, names: &[S]) -> Result<Vocabulary> {
    let mut vocabulary = Vocabulary::new();

    for name in names.iter().map(|name| name.as_ref()) {
        let path = config.vocabulary_dir.join(name);
        let dictionary = load_dictionary(&path, config.dictionary_delimiter)?;
        tracing::info!(path = %path.display(), entries = dictionary.len(), "dictionary loaded");

        for overwrite in vocabulary.merge(dictionary) {
            warn_overwrite(&overwrite, &path);
        }
    }

    if vocabulary.is_empty() {
        let names: Vec<&str> = names.iter().map(|name| name.as_ref()).collect();
        bail!("no words found in {}", names.join(", "));
    }

    Ok(vocabulary)
}

/// Scan every dictionary in `dir` for terms defined more than once.
///
/// Files that cannot be read are skipped; malformed lines are ignored.
pub fn scan_duplicates(dir: &Path, delimiter: Delimiter) -> Result<Vec<Duplicate>> {
    let sources: Vec<(String, _)> = list_dictionaries(dir)?
        .into_iter()
        .filter_map(|name| match fs::read_to_string(dir.join(&name)) {
            Ok(content) => {
                let entries = parse_lenient(&content, delimiter);
                Some((name, entries))
            }
            Err(err) => {
                tracing::warn!(dictionary = %name, error = %err, "skipping unreadable dictionary");
                None
            }
        })
        .collect();

    Ok(find_duplicates(sources))
}

/// `input` with its extension replaced by `.out`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("out")
}

/// Convert a dictionary file, returning the path written.
pub fn convert_file(
    input: &Path,
    output: Option<&Path>,
    direction: Direction,
    delimiter: Delimiter,
) -> Result<PathBuf> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let converted = convert(&content, direction, delimiter)
        .with_context(|| format!("cannot convert {}", input.display()))?;

    let output = output.map_or_else(|| default_output_path(input), Path::to_path_buf);
    fs::write(&output, converted)
        .with_context(|| format!("failed to write {}", output.display()))?;
    tracing::info!(input = %input.display(), output = %output.display(), "dictionary converted");
    Ok(output)
}
