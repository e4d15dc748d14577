fn main() {
    // RFC 3339 build stamp; the footer derives its copyright year from it so
    // the server render and the hydrated page can never disagree.
    println!(
        "cargo:rustc-env=BUILD_TIME={}",
        chrono::Utc::now().to_rfc3339()
    );
    println!("cargo:rerun-if-changed=build.rs");
}
