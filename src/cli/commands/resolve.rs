//! Flag, env var and project config resolution shared by commands.

use std::path::{Path, PathBuf};

use crate::build::BuildContext;
use crate::cli::args::ContextArgs;

/// Resolve the build context: flags, then `APP_*` vars, then defaults.
pub fn resolve_context(args: &ContextArgs) -> BuildContext {
    apply_overrides(BuildContext::from_env(), args)
}

/// Apply non-empty flag values on top of `context`.
pub fn apply_overrides(mut context: BuildContext, args: &ContextArgs) -> BuildContext {
    if let Some(git_ref) = non_empty(&args.git_ref) {
        context = context.with_ref(git_ref);
    }
    if let Some(sha) = non_empty(&args.sha) {
        context = context.with_sha(sha);
    }
    if let Some(env) = non_empty(&args.env) {
        context = context.with_env(env);
    }
    context
}

/// A directory flag relative to the project root, or the configured default.
pub fn resolve_dir(project_root: &Path, flag: Option<&Path>, configured: PathBuf) -> PathBuf {
    match flag {
        Some(path) => project_root.join(path),
        None => configured,
    }
}

/// Explicit values win over configured ones when non-empty.
pub fn pick_list(explicit: &[String], configured: &[String]) -> Vec<String> {
    if explicit.is_empty() {
        configured.to_vec()
    } else {
        explicit.to_vec()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
