use std::path::Path;
use std::process::{Command, Output};

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Sample directory served by [`mount_friends`].
pub fn sample_friends() -> Value {
    json!([
        { "id": 1, "name": "Marcus", "photo": "https://img.test/1.jpg", "description": "Runs the Tuesday hike" },
        { "id": 5, "name": "Dev", "photo": "https://img.test/5.jpg", "description": "Brews coffee, hates mornings" },
        { "id": 9, "name": "Priya", "photo": "https://img.test/9.jpg", "description": "Knows every trail in the valley" }
    ])
}

/// Serve `GET /friends` and `GET /friends/{id}` from the sample directory.
pub async fn mount_friends(server: &MockServer) {
    let friends = sample_friends();

    Mock::given(method("GET"))
        .and(path("/friends"))
        .respond_with(ResponseTemplate::new(200).set_body_json(friends.clone()))
        .mount(server)
        .await;

    for friend in friends.as_array().into_iter().flatten() {
        Mock::given(method("GET"))
            .and(path(format!("/friends/{}", friend["id"])))
            .respond_with(ResponseTemplate::new(200).set_body_json(friend.clone()))
            .mount(server)
            .await;
    }
}

/// Run the CLI against `api_url` with an isolated HOME, off the async runtime.
pub async fn run_cli(args: &[&str], home: &Path, api_url: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_friends"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join("config"));
    cmd.env("FRIENDS_API_URL", api_url);
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");

    tokio::task::spawn_blocking(move || cmd.output().expect("Failed to execute CLI"))
        .await
        .expect("CLI task panicked")
}

/// Run the CLI and expect success.
pub async fn run_cli_success(args: &[&str], home: &Path, api_url: &str) -> String {
    let output = run_cli(args, home, api_url).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}
