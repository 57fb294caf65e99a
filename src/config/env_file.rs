//! `.env` 文件加载模块
//!
//! 读取 `KEY=VALUE` 格式的文本文件，并与进程环境变量合并为一个不可变快照。
//! 进程中已存在的变量优先，文件中的值只用来补充缺省项。

use crate::error::ConfigError;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

/// 默认的环境文件路径
pub const DEFAULT_ENV_FILE: &str = ".env";

/// 注释行前缀
const COMMENT_PREFIX: char = '#';

/// 键值分隔符
const SEPARATOR: char = '=';

/// 解析后的环境文件，按文件中的顺序保存键值对。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    entries: Vec<(String, String)>,
}

impl EnvFile {
    /// 读取并解析环境文件。
    ///
    /// 路径不存在或不是普通文件时返回空的 `EnvFile`，不视为错误。
    ///
    /// # Errors
    ///
    /// 文件存在但无法读取时返回 `ConfigError::EnvFile`。
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Ok(Self::default());
        }

        match std::fs::read_to_string(path) {
            Ok(text) => Ok(Self::parse(&text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::EnvFile {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// 解析环境文件文本。
    ///
    /// 空行、`#` 开头的注释行和不含 `=` 的行都会被跳过。
    /// 只按第一个 `=` 切分，因此值中的 `=` 会被保留。
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_PREFIX))
            .filter_map(|line| line.split_once(SEPARATOR))
            .map(|(key, value)| (key.trim(), unquote(value.trim())))
            .filter(|(key, _)| !key.is_empty())
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        Self { entries }
    }

    /// 按文件顺序遍历键值对。
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 去掉值两端的引号：先去双引号，再去单引号。
fn unquote(value: &str) -> &str {
    value.trim_matches('"').trim_matches('\'')
}

/// 进程环境与环境文件合并后的不可变快照。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// 读取环境文件并与当前进程的环境变量合并。
    ///
    /// # 参数
    ///
    /// * `path` - 环境文件路径，不存在时只使用进程环境变量。
    ///
    /// # Errors
    ///
    /// 环境文件存在但无法读取时返回错误。
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = EnvFile::read(path)?;
        tracing::debug!(path = %path.display(), entries = file.len(), "已读取环境文件");

        let process = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)));

        Ok(Self::merge(process, &file))
    }

    /// 合并外部变量与环境文件。
    ///
    /// 外部变量总是优先；文件中重复的键以第一次出现为准。
    pub fn merge<I, K, V>(external: I, file: &EnvFile) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut vars: HashMap<String, String> = external
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        for (key, value) in file.entries() {
            vars.entry(key.to_string()).or_insert_with(|| value.to_string());
        }

        Self { vars }
    }

    /// 直接由键值对构造快照。
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::merge(pairs, &EnvFile::default())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_skips_comments_blank_and_separatorless_lines() {
        let file = EnvFile::parse("# comment\n\n   \nNOT_AN_ASSIGNMENT\n  # indented comment\nA=1\n");
        let entries: Vec<_> = file.entries().collect();
        assert_eq!(entries, vec![("A", "1")]);
    }

    #[test]
    fn test_parse_trims_and_unquotes_values() {
        let file = EnvFile::parse(
            "  KEY_ONE =  \"quoted value\"  \nKEY_TWO='single'\nKEY_THREE=plain\n",
        );
        let entries: Vec<_> = file.entries().collect();
        assert_eq!(
            entries,
            vec![
                ("KEY_ONE", "quoted value"),
                ("KEY_TWO", "single"),
                ("KEY_THREE", "plain"),
            ]
        );
    }

    #[test]
    fn test_parse_splits_on_first_separator_only() {
        let file = EnvFile::parse("URL=https://example.com/?a=b&c=d\n");
        let entries: Vec<_> = file.entries().collect();
        assert_eq!(entries, vec![("URL", "https://example.com/?a=b&c=d")]);
    }

    #[test]
    fn test_parse_drops_empty_keys() {
        let file = EnvFile::parse("=orphan\n  = also orphan\n");
        assert!(file.is_empty());
    }

    #[test]
    fn test_unquote_strips_double_then_single_quotes() {
        assert_eq!(unquote("\"'nested'\""), "nested");
        assert_eq!(unquote("\"\""), "");
        // 不成对的引号同样会被去掉
        assert_eq!(unquote("\"half"), "half");
    }

    #[test]
    fn test_merge_keeps_external_values() {
        let file = EnvFile::parse("CITYLING_COS_REGION=ap-shanghai\nOTHER=from-file\n");
        let env = Environment::merge([("CITYLING_COS_REGION", "ap-guangzhou")], &file);

        assert_eq!(env.get("CITYLING_COS_REGION"), Some("ap-guangzhou"));
        assert_eq!(env.get("OTHER"), Some("from-file"));
    }

    #[test]
    fn test_merge_first_duplicate_wins() {
        let file = EnvFile::parse("DUP=first\nDUP=second\n");
        let env = Environment::merge(Vec::<(String, String)>::new(), &file);
        assert_eq!(env.get("DUP"), Some("first"));
    }

    #[test]
    fn test_ignored_lines_never_introduce_values() {
        let file = EnvFile::parse("#HIDDEN=1\nNOEQUALS\n");
        let env = Environment::merge([("NOEQUALS", "kept")], &file);

        assert_eq!(env.get("HIDDEN"), None);
        assert_eq!(env.get("#HIDDEN"), None);
        assert_eq!(env.get("NOEQUALS"), Some("kept"));
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = EnvFile::read(&dir.path().join(".env")).unwrap();
        assert!(file.is_empty());
    }

    #[test]
    fn test_read_directory_is_treated_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let env_dir = dir.path().join(".env");
        std::fs::create_dir(&env_dir).unwrap();

        let file = EnvFile::read(&env_dir).unwrap();
        assert!(file.is_empty());
    }

    #[test]
    fn test_load_with_directory_uses_process_environment() {
        let dir = tempfile::tempdir().unwrap();
        let env = Environment::load(dir.path()).unwrap();
        assert_eq!(env.get("PATH"), std::env::var("PATH").ok().as_deref());
    }

    #[cfg(unix)]
    #[test]
    fn test_read_unreadable_file_is_an_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "A=1\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();

        // root 不受文件权限限制
        if std::fs::read_to_string(&path).is_ok() {
            return;
        }
        assert!(matches!(EnvFile::read(&path), Err(ConfigError::EnvFile { .. })));
    }

    #[test]
    fn test_load_does_not_touch_process_environment() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "COS_UPLOAD_TEST_ONLY_IN_FILE=from-file").unwrap();

        let env = Environment::load(file.path()).unwrap();

        assert_eq!(env.get("COS_UPLOAD_TEST_ONLY_IN_FILE"), Some("from-file"));
        assert!(std::env::var("COS_UPLOAD_TEST_ONLY_IN_FILE").is_err());
    }

    #[test]
    fn test_load_prefers_process_environment() {
        // PATH 在测试进程中总是存在
        let existing = std::env::var("PATH").unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "PATH=/from/env/file").unwrap();

        let env = Environment::load(file.path()).unwrap();

        assert_eq!(env.get("PATH"), Some(existing.as_str()));
        assert_eq!(std::env::var("PATH").unwrap(), existing);
    }
}
