//! Directory-backed character storage.

use std::fs::{self, File};
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use atomic_write_file::AtomicWriteFile;
use tav_core::{Character, CharacterId};

use crate::error::{StoreError, StoreResult};

/// Environment variable that overrides the default store directory.
pub const STORE_ENV: &str = "TAV_STORE";

/// Where characters are kept when no directory is given.
///
/// `$TAV_STORE` if set, else `<data dir>/tav/characters`, else
/// `./tav-characters`.
pub fn default_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(STORE_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::data_dir()
        .map(|p| p.join("tav").join("characters"))
        .unwrap_or_else(|| PathBuf::from("tav-characters"))
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// A directory of `<uuid>.json` character records.
#[derive(Debug, Clone)]
pub struct CharacterStore {
    dir: PathBuf,
}

impl CharacterStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(io_err(&dir))?;
        tracing::debug!(dir = %dir.display(), "store opened");
        Ok(Self { dir })
    }

    /// The directory holding the records.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: CharacterId) -> PathBuf {
        self.dir.join(format!("{}.json", id.full()))
    }

    /// Insert or replace a character.
    pub fn save(&self, character: &Character) -> StoreResult<()> {
        let path = self.path_for(character.id);
        let mut file = AtomicWriteFile::open(&path).map_err(io_err(&path))?;
        serde_json::to_writer_pretty(&mut file, character).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
        file.commit().map_err(io_err(&path))?;
        tracing::info!(id = %character.id, name = %character.name, "character saved");
        Ok(())
    }

    /// Load a character by ID. `Ok(None)` if there is no such record.
    pub fn load(&self, id: CharacterId) -> StoreResult<Option<Character>> {
        let path = self.path_for(id);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_err(&path)(e)),
        };
        read_record(&path, file).map(Some)
    }

    /// Every readable character, sorted by name (case-insensitive).
    ///
    /// Files that fail to parse are skipped with a warning.
    pub fn list(&self) -> StoreResult<Vec<Character>> {
        let mut characters = Vec::new();
        for path in self.record_paths()? {
            let loaded = File::open(&path)
                .map_err(io_err(&path))
                .and_then(|file| read_record(&path, file));
            match loaded {
                Ok(character) => characters.push(character),
                Err(e) => tracing::warn!(error = %e, "skipping unreadable record"),
            }
        }
        characters.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(characters)
    }

    /// Delete a character. Returns `false` if there was nothing to delete.
    pub fn delete(&self, id: CharacterId) -> StoreResult<bool> {
        let path = self.path_for(id);
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!(%id, "character deleted");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_err(&path)(e)),
        }
    }

    /// Find the single stored ID that starts with `prefix`.
    ///
    /// Accepts a full UUID or any leading part of one, such as the
    /// eight-character short form shown in listings.
    pub fn resolve(&self, prefix: &str) -> StoreResult<CharacterId> {
        let needle = prefix.trim().to_lowercase();
        if needle.is_empty() {
            return Err(StoreError::NotFound(prefix.to_string()));
        }

        let matches: Vec<CharacterId> = self
            .record_paths()?
            .iter()
            .filter_map(|p| p.file_stem()?.to_str()?.parse::<CharacterId>().ok())
            .filter(|id| id.full().starts_with(&needle))
            .collect();

        match matches.as_slice() {
            [id] => Ok(*id),
            [] => Err(StoreError::NotFound(prefix.to_string())),
            many => Err(StoreError::Ambiguous {
                prefix: prefix.to_string(),
                count: many.len(),
            }),
        }
    }

    /// Resolve a prefix and load the matching character.
    pub fn find(&self, prefix: &str) -> StoreResult<Character> {
        let id = self.resolve(prefix)?;
        self.load(id)?
            .ok_or_else(|| StoreError::NotFound(prefix.to_string()))
    }

    fn record_paths(&self) -> StoreResult<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.dir).map_err(io_err(&self.dir))?;
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();
        Ok(paths)
    }
}

fn read_record(path: &Path, file: File) -> StoreResult<Character> {
    serde_json::from_reader(BufReader::new(file)).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tav_core::AbilityScores;
    use tempfile::TempDir;

    fn character(name: &str) -> Character {
        Character::new(
            name,
            "Custom",
            "Dwarf",
            "Cleric",
            "Life Domain",
            "Acolyte",
            AbilityScores::uniform(12),
        )
        .with_skills(["Insight", "Medicine", "Religion", "History"])
    }

    fn store() -> (TempDir, CharacterStore) {
        let dir = TempDir::new().unwrap();
        let store = CharacterStore::open(dir.path().join("chars")).unwrap();
        (dir, store)
    }

    #[test]
    fn open_creates_directory() {
        let (dir, store) = store();
        assert!(dir.path().join("chars").is_dir());
        assert_eq!(store.dir(), dir.path().join("chars"));
    }

    #[test]
    fn save_and_load() {
        let (_dir, store) = store();
        let c = character("Bram");
        store.save(&c).unwrap();
        assert_eq!(store.load(c.id).unwrap(), Some(c));
    }

    #[test]
    fn load_missing_is_none() {
        let (_dir, store) = store();
        assert_eq!(store.load(CharacterId::new()).unwrap(), None);
    }

    #[test]
    fn save_replaces_existing() {
        let (_dir, store) = store();
        let mut c = character("Bram");
        store.save(&c).unwrap();
        c.name = "Bram the Bold".to_string();
        store.save(&c).unwrap();
        let all = store.list().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Bram the Bold");
    }

    #[test]
    fn list_sorted_by_name_ignoring_case() {
        let (_dir, store) = store();
        for name in ["zed", "Alma", "bram"] {
            store.save(&character(name)).unwrap();
        }
        let names: Vec<String> = store.list().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Alma", "bram", "zed"]);
    }

    #[test]
    fn list_skips_corrupt_files() {
        let (_dir, store) = store();
        store.save(&character("Good")).unwrap();
        fs::write(store.dir().join("broken.json"), "{ not json").unwrap();
        fs::write(store.dir().join("notes.txt"), "ignored").unwrap();
        let all = store.list().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Good");
    }

    #[test]
    fn delete_reports_presence() {
        let (_dir, store) = store();
        let c = character("Bram");
        store.save(&c).unwrap();
        assert!(store.delete(c.id).unwrap());
        assert!(!store.delete(c.id).unwrap());
        assert_eq!(store.load(c.id).unwrap(), None);
    }

    #[test]
    fn resolve_by_prefix() {
        let (_dir, store) = store();
        let c = character("Bram");
        store.save(&c).unwrap();
        assert_eq!(store.resolve(&c.id.to_string()).unwrap(), c.id);
        assert_eq!(store.resolve(&c.id.full().to_uppercase()).unwrap(), c.id);
        assert_eq!(store.find(&c.id.to_string()).unwrap().name, "Bram");
    }

    #[test]
    fn resolve_not_found_and_empty() {
        let (_dir, store) = store();
        store.save(&character("Bram")).unwrap();
        assert!(matches!(store.resolve("zzzz"), Err(StoreError::NotFound(_))));
        assert!(matches!(store.resolve("  "), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn resolve_ambiguous_prefix() {
        let (_dir, store) = store();
        let a = character("A");
        let mut b = character("B");
        // Force a shared leading digit.
        let mut bytes = *b.id.0.as_bytes();
        bytes[0] = a.id.0.as_bytes()[0];
        b.id = CharacterId(uuid::Uuid::from_bytes(bytes));
        store.save(&a).unwrap();
        store.save(&b).unwrap();

        let shared = &a.id.full()[..2];
        assert!(matches!(
            store.resolve(shared),
            Err(StoreError::Ambiguous { count: 2, .. })
        ));
    }

    #[test]
    fn default_dir_is_not_empty() {
        assert!(!default_dir().as_os_str().is_empty());
    }
}
