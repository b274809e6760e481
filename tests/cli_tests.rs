mod common;

#[cfg(test)]
mod cli_tests {
    use std::{
        fs,
        io::Write,
        process::{Command, Output, Stdio},
    };

    use tempfile::TempDir;

    use crate::common::{decode, write_logo};

    fn easyqr(dir: &TempDir, args: &[&str], stdin: &str) -> Output {
        let mut child = Command::new(env!("CARGO_BIN_EXE_easyqr"))
            .args(args)
            .current_dir(dir.path())
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to start easyqr");
        child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();
        child.wait_with_output().unwrap()
    }

    #[test]
    fn test_interactive() {
        let dir = TempDir::new().unwrap();

        let out = easyqr(&dir, &[], "hello\ntest\n\n");
        assert!(out.status.success());

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(decode(&dir.path().join("test.png")).1, "hello");

        let stdout = String::from_utf8_lossy(&out.stdout);
        assert!(stdout.contains("Enter the link (or text) for the QR code: "));
        assert!(stdout.contains("QR code saved: test.png"));
    }

    #[test]
    fn test_batch() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("links.csv"),
            "Platform,URL,Logos\nGitHub,https://github.com,\nDocs,https://docs.rs,\n",
        )
        .unwrap();

        let out = easyqr(&dir, &["--batch", "links.csv"], "");
        assert!(out.status.success());

        let stdout = String::from_utf8_lossy(&out.stdout);
        let github = stdout.find("output/GitHub.png").unwrap();
        let docs = stdout.find("output/Docs.png").unwrap();
        assert!(github < docs);
        assert_eq!(decode(&dir.path().join("output/GitHub.png")).1, "https://github.com");
        assert_eq!(decode(&dir.path().join("output/Docs.png")).1, "https://docs.rs");
    }

    #[test]
    fn test_batch_without_path() {
        let dir = TempDir::new().unwrap();

        let out = easyqr(&dir, &["--batch"], "");
        assert!(!out.status.success());
        assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_batch_file_not_found() {
        let dir = TempDir::new().unwrap();

        let out = easyqr(&dir, &["--batch", "missing.csv"], "");
        assert_eq!(out.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&out.stderr).contains("CSV file not found: missing.csv"));
    }

    #[test]
    fn test_batch_missing_columns() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("links.csv"), "Platform,Logos\nGitHub,\n").unwrap();

        let out = easyqr(&dir, &["--batch", "links.csv"], "");
        assert_eq!(out.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&out.stderr).contains("CSV missing columns: URL"));
        assert!(!dir.path().join("output").exists());
    }

    #[test]
    fn test_batch_row_failure_sets_status() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("links.csv"),
            "Platform,URL,Logos\nEmpty,,\nGitHub,https://github.com,\n",
        )
        .unwrap();

        let out = easyqr(&dir, &["--batch", "links.csv"], "");
        assert_eq!(out.status.code(), Some(1));
        assert!(dir.path().join("output/GitHub.png").is_file());
        assert!(String::from_utf8_lossy(&out.stderr).contains("1 rows failed"));
    }

    #[test]
    fn test_batch_reports_logo_outcomes() {
        let dir = TempDir::new().unwrap();
        write_logo(&dir.path().join("good.png"), [0, 120, 255, 255]);
        fs::write(dir.path().join("broken.png"), b"not an image").unwrap();
        fs::write(
            dir.path().join("links.csv"),
            "Platform,URL,Logos\n\
             Good,https://good.example,good.png\n\
             Broken,https://broken.example,broken.png\n",
        )
        .unwrap();

        let out = easyqr(&dir, &["--batch", "links.csv"], "");
        assert_eq!(out.status.code(), Some(0));

        let stdout = String::from_utf8_lossy(&out.stdout);
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(stdout.contains("✅ Logo added to output/Good.png"));
        assert!(!stdout.contains("Logo added to output/Broken.png"));
        assert!(stderr.contains("⚠️ Could not add logo to output/Broken.png: "));
        assert_eq!(stderr.matches("Could not add logo").count(), 1);
        assert!(stdout.contains("✅ QR code saved: output/Good.png"));
        assert!(stdout.contains("✅ QR code saved: output/Broken.png"));

        assert!(dir.path().join("output/Good.png").is_file());
        assert_eq!(decode(&dir.path().join("output/Broken.png")).1, "https://broken.example");
    }

    #[test]
    fn test_verbose_logo_failure_reported_once() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("broken.png"), b"not an image").unwrap();
        let csv = "Platform,URL,Logos\nBroken,https://b.example,broken.png\n";
        fs::write(dir.path().join("links.csv"), csv).unwrap();

        let out = easyqr(&dir, &["-v", "--batch", "links.csv"], "");
        assert!(out.status.success());
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert_eq!(stderr.matches("Could not add logo to output/Broken.png").count(), 1);
    }
}
