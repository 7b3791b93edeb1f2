//! Integration tests for cloudctl

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};
    use tempfile::TempDir;

    /// Binary with an isolated config file and no inherited overrides
    fn cloudctl(dir: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("cloudctl");
        cmd.env("CLOUDCTL_CONFIG", dir.path().join("config.toml"))
            .env_remove("CLOUDCTL_SERVER")
            .env_remove("CLOUDCTL_TOKEN")
            .env_remove("CLOUDCTL_USER")
            .env("CI", "true");
        cmd
    }

    /// Answer one request per entry of `responses`, in order, and hand back
    /// each request line plus body
    fn serve(responses: Vec<(&'static str, &'static str)>) -> (String, JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let mut received = Vec::new();
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().unwrap();
                let mut reader = BufReader::new(stream.try_clone().unwrap());

                let mut request_line = String::new();
                reader.read_line(&mut request_line).unwrap();
                let mut content_length = 0usize;
                loop {
                    let mut line = String::new();
                    reader.read_line(&mut line).unwrap();
                    if line == "\r\n" || line.is_empty() {
                        break;
                    }
                    if let Some(v) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                        content_length = v.trim().parse().unwrap();
                    }
                }
                let mut payload = vec![0; content_length];
                reader.read_exact(&mut payload).unwrap();
                received.push(format!(
                    "{}{}",
                    request_line,
                    String::from_utf8(payload).unwrap()
                ));

                write!(
                    stream,
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                )
                .unwrap();
                stream.flush().unwrap();
            }
            received
        });
        (format!("http://{}", addr), handle)
    }

    fn serve_once(status: &'static str, body: &'static str) -> String {
        serve(vec![(status, body)]).0
    }

    const INSTALLS: &str = r#"[
        {"ID":"abc","Name":"alpha","OwnerID":"u1","State":"stable","DNSRecords":[{"DomainName":"alpha.cloud.example.com"}],"Version":"9.5.0","DeletionLocked":true,"ScheduledDeletionTime":0},
        {"ID":"def","Name":"beta","OwnerID":"u1","State":"creation-requested","DNSRecords":null,"Tag":"latest","DeletionLocked":false,"ScheduledDeletionTime":0}
    ]"#;

    #[test]
    fn help_displays() {
        let dir = TempDir::new().unwrap();
        cloudctl(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("cloud server installations"));
    }

    #[test]
    fn version_displays() {
        let dir = TempDir::new().unwrap();
        cloudctl(&dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("cloudctl"));
    }

    #[test]
    fn config_path() {
        let dir = TempDir::new().unwrap();
        cloudctl(&dir)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show_defaults() {
        let dir = TempDir::new().unwrap();
        cloudctl(&dir)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[server]"))
            .stdout(predicate::str::contains("com.mattermost.cloud"));
    }

    #[test]
    fn config_set_then_show() {
        let dir = TempDir::new().unwrap();
        cloudctl(&dir)
            .args(["config", "set", "server.url", "https://chat.example.com"])
            .assert()
            .success();

        cloudctl(&dir)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("https://chat.example.com"));
    }

    #[test]
    fn config_set_unknown_key() {
        let dir = TempDir::new().unwrap();
        cloudctl(&dir)
            .args(["config", "set", "vm.name", "x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("server.url"));
    }

    #[test]
    fn list_without_server() {
        let dir = TempDir::new().unwrap();
        cloudctl(&dir)
            .arg("list")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Missing configuration value"))
            .stderr(predicate::str::contains("Hint:"));
    }

    #[test]
    fn list_without_user() {
        let dir = TempDir::new().unwrap();
        cloudctl(&dir)
            .args(["list", "--server", "http://127.0.0.1:9"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("server.user_id"));
    }

    #[test]
    fn list_plain_from_server() {
        let dir = TempDir::new().unwrap();
        let url = serve_once("200 OK", INSTALLS);
        cloudctl(&dir)
            .args(["list", "--format", "plain", "--server", &url, "--user", "u1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("alpha"))
            .stdout(predicate::str::contains("beta"));
    }

    #[test]
    fn list_count_not_found_is_zero() {
        let dir = TempDir::new().unwrap();
        let url = serve_once("404 Not Found", r#"{"message":"not found"}"#);
        cloudctl(&dir)
            .args(["list", "--count", "--server", &url, "--user", "u1"])
            .assert()
            .success()
            .stdout(predicate::str::diff("0\n"));
    }

    #[test]
    fn list_server_error() {
        let dir = TempDir::new().unwrap();
        let url = serve_once("500 Internal Server Error", r#"{"message":"database down"}"#);
        cloudctl(&dir)
            .args(["list", "--server", &url, "--user", "u1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("database down"));
    }

    #[test]
    fn completions_bash() {
        let dir = TempDir::new().unwrap();
        cloudctl(&dir)
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("cloudctl"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn restart_survives_unwritable_state_dir() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let (url, server) = serve(vec![("200 OK", INSTALLS), ("200 OK", "")]);
        cloudctl(&dir)
            .env("XDG_STATE_HOME", &blocker)
            .args(["restart", "alpha", "--server", &url, "--user", "u1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Installation alpha restarting now."));

        let requests = server.join().unwrap();
        assert_eq!(requests.len(), 2);
        assert!(requests[1].starts_with("POST /plugins/com.mattermost.cloud/api/v1/restart "));
        assert!(requests[1].contains(r#""installation_name":"alpha""#));
    }
}
