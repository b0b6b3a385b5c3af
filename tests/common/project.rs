//! Temporary Unity-style project trees.

use std::fs;
use std::path::Path;

use anyhow::Result;
use tempfile::TempDir;

use quicktemplates::discovery::{create_config_asset, LoadedConfig, DEFAULT_SEARCH_PATH};
use quicktemplates::host::FsAssetStore;

/// A project directory with an asset store rooted at it.
pub struct TestProject {
    dir: TempDir,
    pub store: FsAssetStore,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        let dir = TempDir::new()?;
        let store = FsAssetStore::new(dir.path());
        Ok(Self { dir, store })
    }

    /// A project seeded with C#, JSON and shader templates plus two decoys.
    pub fn with_templates() -> Result<Self> {
        let project = Self::new()?;
        project.write(
            "Assets/Templates/Template_Behaviour.cs.txt",
            "public class #SCRIPTNAME# : MonoBehaviour {}\n",
        )?;
        project.write("Assets/Templates/Template_Settings.json.txt", "{ }\n")?;
        project.write("Assets/Shaders/template_Unlit.shader.txt", "Shader \"Unlit\" {}\n")?;
        project.write("Assets/Templates/Notes.txt", "decoy\n")?;
        project.write("Assets/Templates/MyTemplate_Wrong.cs.txt", "decoy\n")?;
        Ok(project)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, relative: &str, content: &str) -> Result<()> {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    pub fn read(&self, relative: &str) -> Result<String> {
        Ok(fs::read_to_string(self.dir.path().join(relative))?)
    }

    /// Create the default configuration asset under `Assets/QuickTemplates`.
    pub fn init(&self) -> Result<LoadedConfig> {
        Ok(create_config_asset(&self.store, "Assets/QuickTemplates")?)
    }

    pub fn scope() -> Vec<String> {
        vec![DEFAULT_SEARCH_PATH.to_string()]
    }
}
