use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod coverage;
mod extract;
mod init;
mod intl;
mod template;

const BIN_NAME: &str = "flowlate";

/// Generated internationalization.dart used across the CLI tests.
pub const INTL_FIXTURE: &str = r"
class FFLocalizations {
  static List<String> languages() => ['en', 'sg', 'fr'];
}

final kTranslationsMap = <Map<String, Map<String, String>>>[
  // HomePage
  {
    'greeting': {
      'en': 'Hello',
      'fr': 'Bonjour',
      'sg': 'Bara ala',
    },
    'start': {
      'en': 'Start now',
      'fr': 'Commencer',
      'sg': '',
    },
  },
  // Settings
  {
    'settings': {
      'en': 'Settings',
      'fr': 'Réglages',
      'sg': '',
    },
  },
].reduce((a, b) => a..addAll(b));
";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with an intl file and one ARB bundle.
    pub fn with_fixture_project() -> Result<Self> {
        let test = Self::new()?;
        test.write_file("lib/flutter_flow/internationalization.dart", INTL_FIXTURE)?;
        test.write_file(
            "lib/l10n/app_en.arb",
            r#"{"@@locale": "en", "farewell": "Goodbye", "@farewell": {}}"#,
        )?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

/// Runs a prepared command and captures output, panicking on spawn failure.
pub fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("failed to run flowlate binary")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
