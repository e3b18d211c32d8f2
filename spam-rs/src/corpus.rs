//! Training corpus loading

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

use crate::bayes::Model;
use crate::error::{Result, SpamError};
use crate::message;

/// Read the payload of every mail file in a directory.
///
/// Files are visited in file name order and symlinks are followed.
/// Files that cannot be parsed as a message are skipped; read errors,
/// including dangling symlinks, fail the whole load.
pub async fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
    let dir = dir.as_ref();
    let mut paths: Vec<PathBuf> = Vec::new();

    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if fs::metadata(&path).await?.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut payloads = Vec::with_capacity(paths.len());
    for path in &paths {
        match message::read_file(path).await {
            Ok(payload) => payloads.push(payload),
            Err(SpamError::Parse(msg)) => warn!("Skipping {}", msg),
            Err(e) => return Err(e),
        }
    }

    info!("Loaded {} messages from {}", payloads.len(), dir.display());
    Ok(payloads)
}

/// Train a model on spam and ham directories
pub async fn train_from_dirs<S, H>(
    model: &mut Model,
    spam_dirs: &[S],
    ham_dirs: &[H],
) -> Result<()>
where
    S: AsRef<Path>,
    H: AsRef<Path>,
{
    for dir in spam_dirs {
        for payload in load_dir(dir).await? {
            model.train_spam(&payload);
        }
    }

    for dir in ham_dirs {
        for payload in load_dir(dir).await? {
            model.train_ham(&payload);
        }
    }

    let (n_spam, n_ham) = model.training_counts();
    info!("Trained on {} spam and {} ham messages", n_spam, n_ham);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_dir_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.eml"), "Subject: b\n\nsecond\n").unwrap();
        std::fs::write(dir.path().join("a.eml"), "Subject: a\n\nfirst\n").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let payloads = load_dir(dir.path()).await.unwrap();
        assert_eq!(payloads.len(), 2);
        assert!(payloads[0].contains("first"));
        assert!(payloads[1].contains("second"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_load_dir_follows_symlinks() {
        let store = tempfile::tempdir().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let target = store.path().join("stored.eml");
        std::fs::write(&target, "Subject: linked\n\nlinked body\n").unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("link.eml")).unwrap();
        std::os::unix::fs::symlink(store.path(), dir.path().join("linked-dir")).unwrap();

        let payloads = load_dir(dir.path()).await.unwrap();
        assert_eq!(payloads.len(), 1);
        assert!(payloads[0].contains("linked body"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_load_dir_read_error_is_returned() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.eml"), "Subject: a\n\nfirst\n").unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.eml"), dir.path().join("b.eml")).unwrap();

        let result = load_dir(dir.path()).await;
        assert!(matches!(result, Err(SpamError::Io(_))));
    }

    #[tokio::test]
    async fn test_load_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_dir(dir.path().join("nope")).await;
        assert!(matches!(result, Err(SpamError::Io(_))));
    }

    #[tokio::test]
    async fn test_train_from_dirs() {
        let spam = tempfile::tempdir().unwrap();
        let ham = tempfile::tempdir().unwrap();
        for i in 0..5 {
            std::fs::write(
                spam.path().join(format!("{}.eml", i)),
                "Subject: deal\n\nfree money now\n",
            )
            .unwrap();
        }
        std::fs::write(ham.path().join("0.eml"), "Subject: notes\n\nmeeting notes\n").unwrap();

        let mut model = Model::new();
        train_from_dirs(&mut model, &[spam.path()], &[ham.path()])
            .await
            .unwrap();

        assert_eq!(model.training_counts(), (5, 1));
        assert!(model.classify_word("money").unwrap() > 0.5);
    }
}
