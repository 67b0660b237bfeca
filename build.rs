use std::env;
use std::process::Command;
use time::OffsetDateTime;

fn main() {
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
    println!("cargo:rerun-if-env-changed=CARGO_PKG_VERSION");

    let build_year = env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|raw| raw.parse::<i64>().ok())
        .and_then(|epoch| OffsetDateTime::from_unix_timestamp(epoch).ok())
        .map(|dt| dt.year())
        .unwrap_or_else(|| OffsetDateTime::now_utc().year());
    println!("cargo:rustc-env=APP_BUILD_YEAR={build_year}");

    let package_version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());

    // Release builds trust the manifest; dev builds are tagged unless HEAD is the release tag
    let display_version = if env::var("PROFILE").as_deref() == Ok("release") {
        package_version
    } else {
        println!("cargo:rerun-if-changed=.git/HEAD");
        let on_release_tag = Command::new("git")
            .args(["describe", "--tags", "--exact-match"])
            .output()
            .ok()
            .filter(|output| output.status.success())
            .and_then(|output| String::from_utf8(output.stdout).ok())
            .is_some_and(|tag| tag.trim() == format!("v{package_version}"));
        if on_release_tag {
            package_version
        } else {
            format!("{package_version}-dev")
        }
    };
    println!("cargo:rustc-env=APP_VERSION_DISPLAY={display_version}");
}
