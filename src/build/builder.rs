//! The build step.
//!
//! Reads every regular file in the source directory, substitutes
//! placeholders, and writes the result under the same name in the output
//! directory. The first I/O failure aborts the build; files already
//! written stay in place.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SiteStampError};

use super::context::BuildContext;
use super::env_config::EnvConfig;
use super::placeholder::{find_placeholders, Placeholder, Substitutions};

/// Directories a build reads from and writes to.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildPaths {
    /// Flat directory of source text files.
    pub source_dir: PathBuf,
    /// Directory holding `<env>.json` config files.
    pub config_dir: PathBuf,
    /// Directory receiving stamped files; created if absent.
    pub output_dir: PathBuf,
}

/// A single stamped output file.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltFile {
    /// Path of the written file.
    pub path: PathBuf,
    /// Number of placeholder occurrences replaced.
    pub replaced: usize,
}

/// Outcome of a successful build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Output directory the files were written to.
    pub output_dir: PathBuf,
    /// Files written, in name order.
    pub files: Vec<BuiltFile>,
    /// Context the build was stamped with.
    pub context: BuildContext,
    /// Config that was spliced in.
    pub config: EnvConfig,
}

impl BuildReport {
    /// Total placeholder occurrences replaced across all files.
    pub fn total_replaced(&self) -> usize {
        self.files.iter().map(|f| f.replaced).sum()
    }
}

/// A placeholder left behind in an output file.
#[derive(Debug, Clone, PartialEq)]
pub struct Leftover {
    /// File containing the token.
    pub path: PathBuf,
    /// The token found.
    pub placeholder: Placeholder,
}

/// Stamp every source file into the output directory.
///
/// # Errors
///
/// - [`SiteStampError::SourceDirNotFound`] if the source directory is missing
/// - [`SiteStampError::SourceRead`] if a source file cannot be read as UTF-8
/// - [`SiteStampError::OutputWrite`] if the output cannot be written
/// - [`SiteStampError::ConfigRead`] if the config exists but cannot be read
pub fn build(paths: &BuildPaths, context: &BuildContext) -> Result<BuildReport> {
    let sources = list_source_files(&paths.source_dir)?;
    let config = EnvConfig::load(&paths.config_dir, &context.env)?;
    let substitutions = Substitutions::new(context, &config.text);

    fs::create_dir_all(&paths.output_dir).map_err(|source| SiteStampError::OutputWrite {
        path: paths.output_dir.clone(),
        source,
    })?;

    let mut files = Vec::with_capacity(sources.len());
    for source_path in sources {
        let content =
            fs::read_to_string(&source_path).map_err(|source| SiteStampError::SourceRead {
                path: source_path.clone(),
                source,
            })?;

        let (stamped, replaced) = substitutions.apply(&content);

        // list_source_files only yields entries with a file name
        let Some(file_name) = source_path.file_name() else {
            continue;
        };
        let out_path = paths.output_dir.join(file_name);
        fs::write(&out_path, stamped).map_err(|source| SiteStampError::OutputWrite {
            path: out_path.clone(),
            source,
        })?;

        tracing::debug!("Stamped {} ({} replaced)", out_path.display(), replaced);
        files.push(BuiltFile {
            path: out_path,
            replaced,
        });
    }

    Ok(BuildReport {
        output_dir: paths.output_dir.clone(),
        files,
        context: context.clone(),
        config,
    })
}

/// Scan an output directory for placeholders that survived a build.
pub fn verify_output(output_dir: &Path) -> Result<Vec<Leftover>> {
    let mut leftovers = Vec::new();
    for path in list_source_files(output_dir)? {
        let content = fs::read_to_string(&path).map_err(|source| SiteStampError::SourceRead {
            path: path.clone(),
            source,
        })?;
        for placeholder in find_placeholders(&content) {
            leftovers.push(Leftover {
                path: path.clone(),
                placeholder,
            });
        }
    }
    Ok(leftovers)
}

/// Regular files directly inside `dir`, sorted by name.
fn list_source_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(SiteStampError::SourceDirNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            tracing::debug!("Skipping subdirectory {}", path.display());
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn context(env: &str) -> BuildContext {
        BuildContext {
            git_ref: "test-ref".to_string(),
            sha: "abc1234".to_string(),
            build_time: Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap(),
            env: env.to_string(),
        }
    }

    fn setup_site(files: &[(&str, &str)], configs: &[(&str, &str)]) -> (TempDir, BuildPaths) {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let config = temp.path().join("config");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&config).unwrap();
        for (name, content) in files {
            fs::write(src.join(name), content).unwrap();
        }
        for (name, content) in configs {
            fs::write(config.join(name), content).unwrap();
        }
        let paths = BuildPaths {
            source_dir: src,
            config_dir: config,
            output_dir: temp.path().join("dist"),
        };
        (temp, paths)
    }

    #[test]
    fn build_writes_each_file_with_same_name() {
        let (_temp, paths) = setup_site(
            &[
                ("index.html", "<span id=\"ref\">__APP_REF__</span>"),
                ("main.js", "const config = __APP_CONFIG__;"),
            ],
            &[("dev.json", r#"{"apiUrl":"https://dev.api"}"#)],
        );

        let report = build(&paths, &context("dev")).unwrap();

        assert_eq!(report.files.len(), 2);
        let html = fs::read_to_string(paths.output_dir.join("index.html")).unwrap();
        assert_eq!(html, "<span id=\"ref\">test-ref</span>");
        let js = fs::read_to_string(paths.output_dir.join("main.js")).unwrap();
        assert_eq!(js, r#"const config = {"apiUrl":"https://dev.api"};"#);
    }

    #[test]
    fn build_files_are_reported_in_name_order() {
        let (_temp, paths) = setup_site(&[("z.js", ""), ("a.html", ""), ("m.css", "")], &[]);

        let report = build(&paths, &context("dev")).unwrap();

        let names: Vec<_> = report
            .files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.html", "m.css", "z.js"]);
    }

    #[test]
    fn build_leaves_no_placeholders() {
        let all_tokens = "__APP_REF__ __APP_SHA__ __BUILD_TIME__ __APP_ENV__ __APP_CONFIG__";
        let (_temp, paths) = setup_site(
            &[("index.html", all_tokens), ("main.js", all_tokens)],
            &[],
        );

        build(&paths, &context("dev")).unwrap();

        assert!(verify_output(&paths.output_dir).unwrap().is_empty());
    }

    #[test]
    fn build_counts_replacements() {
        let (_temp, paths) = setup_site(&[("index.html", "__APP_SHA__ __APP_SHA__")], &[]);

        let report = build(&paths, &context("dev")).unwrap();

        assert_eq!(report.files[0].replaced, 2);
        assert_eq!(report.total_replaced(), 2);
    }

    #[test]
    fn build_uses_sandbox_config_for_sandbox_env() {
        let (_temp, paths) = setup_site(
            &[("main.js", "__APP_CONFIG__")],
            &[
                ("sandbox.json", r#"{"sandbox":true}"#),
                ("sandbox-pr-123.json", r#"{"wrong":true}"#),
            ],
        );

        let report = build(&paths, &context("sandbox-pr-123")).unwrap();

        assert_eq!(report.config.name, "sandbox");
        let js = fs::read_to_string(paths.output_dir.join("main.js")).unwrap();
        assert_eq!(js, r#"{"sandbox":true}"#);
    }

    #[test]
    fn build_missing_config_substitutes_empty_object() {
        let (_temp, paths) = setup_site(&[("main.js", "const c = __APP_CONFIG__;")], &[]);

        let report = build(&paths, &context("prod")).unwrap();

        assert!(report.config.fallback);
        let js = fs::read_to_string(paths.output_dir.join("main.js")).unwrap();
        assert_eq!(js, "const c = {};");
    }

    #[test]
    fn build_missing_source_dir_is_fatal() {
        let temp = TempDir::new().unwrap();
        let paths = BuildPaths {
            source_dir: temp.path().join("missing"),
            config_dir: temp.path().join("config"),
            output_dir: temp.path().join("dist"),
        };

        let result = build(&paths, &context("dev"));

        assert!(matches!(
            result,
            Err(SiteStampError::SourceDirNotFound { .. })
        ));
        assert!(!paths.output_dir.exists());
    }

    #[test]
    fn build_non_utf8_source_is_fatal() {
        let (_temp, paths) = setup_site(&[], &[]);
        fs::write(paths.source_dir.join("logo.bin"), [0xff, 0xfe, 0x00]).unwrap();

        let result = build(&paths, &context("dev"));

        assert!(matches!(result, Err(SiteStampError::SourceRead { .. })));
    }

    #[test]
    fn build_skips_subdirectories() {
        let (_temp, paths) = setup_site(&[("index.html", "__APP_ENV__")], &[]);
        fs::create_dir(paths.source_dir.join("assets")).unwrap();
        fs::write(paths.source_dir.join("assets/app.js"), "__APP_ENV__").unwrap();

        let report = build(&paths, &context("dev")).unwrap();

        assert_eq!(report.files.len(), 1);
        assert!(!paths.output_dir.join("assets").exists());
    }

    #[test]
    fn build_creates_nested_output_dir() {
        let (temp, mut paths) = setup_site(&[("index.html", "x")], &[]);
        paths.output_dir = temp.path().join("out/nested/dist");

        build(&paths, &context("dev")).unwrap();

        assert!(paths.output_dir.join("index.html").exists());
    }

    #[test]
    fn build_overwrites_previous_output() {
        let (_temp, paths) = setup_site(&[("index.html", "__APP_REF__")], &[]);
        fs::create_dir_all(&paths.output_dir).unwrap();
        fs::write(paths.output_dir.join("index.html"), "stale").unwrap();

        build(&paths, &context("dev")).unwrap();

        let html = fs::read_to_string(paths.output_dir.join("index.html")).unwrap();
        assert_eq!(html, "test-ref");
    }

    #[test]
    fn verify_output_reports_leftovers() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("index.html"), "__APP_SHA__ ok").unwrap();
        fs::write(temp.path().join("main.js"), "clean").unwrap();

        let leftovers = verify_output(temp.path()).unwrap();

        assert_eq!(leftovers.len(), 1);
        assert_eq!(leftovers[0].placeholder, Placeholder::Sha);
        assert!(leftovers[0].path.ends_with("index.html"));
    }
}
