use std::path::Path;

use anyhow::{Result, anyhow};

use super::digest::path_digest;
use crate::config::ScriptsConfig;
use crate::models::StagedFile;
use crate::project::Book;

/// Generated name for a staged copy of `source`: `<digest>-<basename>`.
pub fn staged_file_name(source: &Path) -> Result<String> {
    let basename = source
        .file_name()
        .ok_or_else(|| anyhow!("{} has no file name to stage", source.display()))?;
    Ok(format!("{}-{}", path_digest(source), basename.to_string_lossy()))
}

/// Resolve and name every configured script, in configuration order.
pub fn plan_staged_files<B: Book + ?Sized>(
    book: &B,
    config: &ScriptsConfig,
) -> Result<Vec<StagedFile>> {
    let mut plan = Vec::with_capacity(config.files.len());
    for file in &config.files {
        let source = book.resolve(file);
        let file_name = staged_file_name(&source)?;
        plan.push(StagedFile { source, file_name });
    }
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::BookContext;
    use serde_json::json;
    use std::path::PathBuf;

    #[test]
    fn appends_basename_to_digest() {
        let name = staged_file_name(Path::new("/book/scripts/a.js")).unwrap();
        let (digest, basename) = name.split_once('-').unwrap();
        assert_eq!(digest.len(), 32);
        assert_eq!(basename, "a.js");
    }

    #[test]
    fn same_basename_in_different_directories_differs() {
        let first = staged_file_name(Path::new("/book/v2/main.js")).unwrap();
        let second = staged_file_name(Path::new("/book/v3/main.js")).unwrap();
        assert_ne!(first, second);
        assert!(first.ends_with("-main.js"));
        assert!(second.ends_with("-main.js"));
    }

    #[test]
    fn rejects_paths_without_file_name() {
        assert!(staged_file_name(Path::new("/")).is_err());
    }

    #[test]
    fn plans_in_configuration_order() -> Result<()> {
        let book = BookContext::new("/book", json!({}));
        let config = ScriptsConfig {
            files: vec!["./b.js".into(), "lib/a.js".into(), "./b.js".into()],
        };

        let plan = plan_staged_files(&book, &config)?;
        let sources: Vec<PathBuf> = plan.iter().map(|file| file.source.clone()).collect();
        assert_eq!(sources, vec![
            PathBuf::from("/book/b.js"),
            PathBuf::from("/book/lib/a.js"),
            PathBuf::from("/book/b.js"),
        ]);
        assert_eq!(plan[0].file_name, plan[2].file_name);
        Ok(())
    }
}
