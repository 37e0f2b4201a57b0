use crate::core::{OutputSink, PayloadSource};
use crate::utils::error::Result;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// 沒有給路徑或給 `-` 時讀 stdin
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(p) if p != Path::new("-") => InputSource::File(p.to_path_buf()),
            _ => InputSource::Stdin,
        }
    }
}

impl PayloadSource for InputSource {
    fn read_payload(&self) -> Result<String> {
        match self {
            InputSource::File(path) => Ok(fs::read_to_string(path)?),
            InputSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }

    fn describe(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "stdin".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(p) if p != Path::new("-") => OutputTarget::File(p.to_path_buf()),
            _ => OutputTarget::Stdout,
        }
    }
}

impl OutputSink for OutputTarget {
    fn write_output(&self, rendered: &str) -> Result<()> {
        match self {
            OutputTarget::File(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)?;
                    }
                }
                fs::write(path, format!("{}\n", rendered))?;
            }
            OutputTarget::Stdout => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", rendered)?;
                stdout.flush()?;
            }
        }
        Ok(())
    }

    fn describe(&self) -> String {
        match self {
            OutputTarget::File(path) => path.display().to_string(),
            OutputTarget::Stdout => "stdout".to_string(),
        }
    }
}
