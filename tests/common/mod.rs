#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread::JoinHandle;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub dir: PathBuf,
    pub config: PathBuf,
    pub raw_out: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let dir = tmp.path().to_path_buf();
        Self {
            config: dir.join("rrastats.json"),
            raw_out: dir.join("eis_auto_out.json"),
            dir,
            _tmp: tmp,
        }
    }

    pub fn write_config(&self, host: &str) {
        self.write_config_with(host, "");
    }

    pub fn write_config_with(&self, host: &str, extra: &str) {
        fs::write(
            &self.config,
            format!(
                "{{\n  # local fake EIS\n  host: \"{}\"\n  apikey: \"test-key\"\n{}}}\n",
                host, extra
            ),
        )
        .expect("write config");
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rrastats");
        cmd.current_dir(&self.dir)
            .env_remove("RUST_LOG")
            .env_remove("HTTP_PROXY")
            .env_remove("http_proxy")
            .env_remove("ALL_PROXY")
            .env_remove("all_proxy");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .arg("--config")
            .arg(&self.config)
            .arg("--raw-out")
            .arg(&self.raw_out)
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

/// One-shot HTTP responder standing in for EIS. The handle yields the raw request.
pub struct FakeEis {
    pub host: String,
    handle: JoinHandle<String>,
}

impl FakeEis {
    pub fn serve(status_line: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake eis");
        let host = format!("http://{}", listener.local_addr().expect("local addr"));
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept request");
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).expect("read request");
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream
                .write_all(response.as_bytes())
                .expect("write response");
            String::from_utf8_lossy(&request).to_string()
        });
        Self { host, handle }
    }

    pub fn request(self) -> String {
        self.handle.join().expect("fake eis thread")
    }
}

pub fn risks_body(risks: Value) -> String {
    serde_json::json!({ "risks": risks }).to_string()
}
