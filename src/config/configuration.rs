use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{FullCutError, Result};

/// 配置文件环境变量
pub const CONFIG_ENV: &str = "FULL_CUT_CONFIG";

const DEFAULT_CONFIG_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/full_cut.yml");

pub trait Configuration {
    // 主词典路径
    fn get_main_dictionary(&self) -> PathBuf;
    // 扩展词典路径
    fn get_ext_dictionaries(&self) -> Vec<PathBuf>;
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DefaultConfig {
    main_dictionary: PathBuf,
    #[serde(default)]
    ext_dictionaries: Vec<PathBuf>,
    // 相对路径的解析基准，即配置文件所在目录
    #[serde(skip)]
    base_dir: PathBuf,
}

impl DefaultConfig {
    /// 读取 `FULL_CUT_CONFIG` 指定的配置，未设置时使用 crate 根目录下的 full_cut.yml
    pub fn load() -> Result<Self> {
        let path = env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::from_path(path)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| FullCutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let cfg = Self::from_yaml_str(&content, base_dir)?;
        log::debug!("load config from {}: {:?}", path.display(), cfg);
        Ok(cfg)
    }

    pub fn from_yaml_str(content: &str, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let mut cfg: DefaultConfig = serde_yaml::from_str(content)?;
        cfg.base_dir = base_dir.into();
        Ok(cfg)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

impl Configuration for DefaultConfig {
    fn get_main_dictionary(&self) -> PathBuf {
        self.resolve(&self.main_dictionary)
    }

    fn get_ext_dictionaries(&self) -> Vec<PathBuf> {
        self.ext_dictionaries
            .iter()
            .map(|p| self.resolve(p))
            .collect()
    }
}
