use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let hash = command_stdout("git", &["rev-parse", "--short", "HEAD"])
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".to_string());
    let status = match command_stdout("git", &["status", "--porcelain"]) {
        Some(changes) if changes.is_empty() => "clean",
        Some(_) => "dirty",
        None => "unknown",
    };
    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let rustc = command_stdout("rustc", &["--version"]).unwrap_or_else(|| "unknown".to_string());

    emit("HASH", &hash);
    emit("STATUS", status);
    emit("TIMESTAMP", &timestamp);
    emit("TARGET", &env_or_unknown("TARGET"));
    emit("PROFILE", &env_or_unknown("PROFILE"));
    emit("RUSTC", &rustc);
}

fn emit(key: &str, value: &str) {
    println!("cargo:rustc-env=DONATION_CORE_BUILD_{key}={value}");
}

fn env_or_unknown(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| "unknown".to_string())
}

fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|text| text.trim().to_string())
}
