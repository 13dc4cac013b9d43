//! Test fixtures: an in-memory workspace host, picker/sink doubles, and
//! an on-disk data directory builder.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use text_size::TextRange;
use texicon::{
    DataStore, DocumentView, EditSink, IntelFlags, SelectionPicker, WorkspaceHost,
};

/// In-memory workspace host.
#[derive(Default)]
pub struct MockHost {
    pub files: HashMap<PathBuf, String>,
    pub flags: IntelFlags,
    pub current: Option<DocumentView>,
    pub relevant: Vec<PathBuf>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, text: &str) -> Self {
        self.files.insert(PathBuf::from(path), text.to_string());
        self
    }

    pub fn with_flags(mut self, flags: IntelFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_relevant(mut self, paths: &[&str]) -> Self {
        self.relevant = paths.iter().map(PathBuf::from).collect();
        self
    }

    pub fn set_current(&mut self, path: &str, text: &str) {
        self.current = Some(DocumentView {
            path: PathBuf::from(path),
            text: text.to_string(),
        });
    }
}

impl WorkspaceHost for MockHost {
    fn read_file(&self, path: &Path) -> Option<String> {
        self.files.get(path).cloned()
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn flags(&self) -> IntelFlags {
        self.flags
    }

    fn current_document(&self) -> Option<DocumentView> {
        self.current.clone()
    }

    fn relevant_files(&self) -> Vec<PathBuf> {
        self.relevant.clone()
    }
}

/// Picker that always answers with a fixed choice (`None` = dismissal).
pub struct FixedPicker(pub Option<usize>);

impl SelectionPicker for FixedPicker {
    fn pick(&self, _items: &[String]) -> Option<usize> {
        self.0
    }
}

/// Picker that chooses the first item containing a substring.
pub struct PickContaining(pub &'static str);

impl SelectionPicker for PickContaining {
    fn pick(&self, items: &[String]) -> Option<usize> {
        items.iter().position(|item| item.contains(self.0))
    }
}

/// Edit sink that records applied edits.
#[derive(Default)]
pub struct CollectSink(pub Vec<(TextRange, String)>);

impl EditSink for CollectSink {
    fn apply_edits(&mut self, edits: Vec<(TextRange, String)>) {
        self.0.extend(edits);
    }
}

/// On-disk data directory with the default tables pre-seeded.
pub struct DataDir {
    dir: tempfile::TempDir,
}

impl DataDir {
    /// Minimal defaults: `cite`, `textbf`, `par`, `begin`, and the
    /// `itemize`/`center` environments.
    pub fn new() -> Self {
        let fixture = Self {
            dir: tempfile::tempdir().unwrap(),
        };
        fixture.write(
            "commands.json",
            r#"{
                "cite": {"snippet": "\\\\cite{${1}}", "post_action": "retrigger"},
                "textbf": {"snippet": "\\\\textbf{${1}}"},
                "par": {},
                "begin": {"snippet": "\\\\begin{${1}}", "post_action": "retrigger"}
            }"#,
        );
        fixture.write("environments.json", r#"["itemize", "center"]"#);
        fixture
    }

    pub fn write(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn with_symbols(self, content: &str) -> Self {
        self.write("unimathsymbols.json", content);
        self
    }

    pub fn with_package(self, name: &str, content: &str) -> Self {
        self.write(&format!("packages/{name}_cmd.json"), content);
        self
    }

    pub fn remove(&self, name: &str) {
        fs::remove_file(self.dir.path().join(name)).unwrap();
    }

    pub fn store(&self) -> DataStore {
        DataStore::new(self.dir.path())
    }
}
